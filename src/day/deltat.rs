// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ΔT = TT − UT1 models for the rational/reform day engines.

use crate::common::math::{self, Rat};

#[derive(Debug, Clone)]
pub enum DeltaT {
    /// A fixed offset in seconds, independent of date.
    Constant(Rat),
    /// `seconds = a*u^2 + b*u + c`, `u = (year - y0)/100`, matching the
    /// low-order polynomial shape long-term ΔT approximations use
    /// (e.g. Morrison & Stephenson/Espenak-Meeus style fits).
    Quadratic { a: Rat, b: Rat, c: Rat, y0: Rat },
}

impl DeltaT {
    /// `t_tt` is Days-since-J2000.0 TT; returns ΔT in seconds.
    pub fn seconds(&self, t_tt: &Rat) -> Rat {
        match self {
            DeltaT::Constant(s) => s.clone(),
            DeltaT::Quadratic { a, b, c, y0 } => {
                let year = math::ratio(2000, 1) + t_tt / math::int(36525) * math::int(100);
                let u = (&year - y0) / math::int(100);
                a * &u * &u + b * &u + c
            }
        }
    }

    /// ΔT expressed in days, for direct subtraction from a
    /// Days-since-J2000.0 TT coordinate to get UT1.
    pub fn days(&self, t_tt: &Rat) -> Rat {
        self.seconds(t_tt) / math::int(86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_deltat_is_date_independent() {
        let d = DeltaT::Constant(math::int(69));
        assert_eq!(d.seconds(&math::int(0)), math::int(69));
        assert_eq!(d.seconds(&math::int(10000)), math::int(69));
    }

    #[test]
    fn quadratic_deltat_is_zero_at_y0_when_c_is_zero() {
        let d = DeltaT::Quadratic {
            a: math::int(32),
            b: math::int(0),
            c: math::int(0),
            y0: math::int(2000),
        };
        // t_tt=0 corresponds to year 2000 exactly.
        assert_eq!(d.seconds(&math::int(0)), math::int(0));
    }
}
