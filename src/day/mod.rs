// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DayEngine: continuous tithi-coordinate kinematics.
//!
//! `x` is the absolute tithi coordinate: `x = 30*n + d` where `n` is a
//! lunation index and `d in 1..=30` is the tithi number within it.
//! Every engine maps `x` to a continuous time coordinate expressed in
//! Days-since-J2000.0 (TT for the rational lane; already civil-aligned
//! for the traditional lane).

pub mod deltat;
pub mod rational;
pub mod sunrise;
pub mod traditional;

pub use deltat::DeltaT;
pub use rational::{RationalDayEngine, RationalDayParams};
pub use sunrise::{Location, Sunrise};
pub use traditional::{TraditionalDayEngine, TraditionalDayParams};

use crate::common::math::Rat;

pub trait DayEngine {
    fn epoch_k(&self) -> i64;
    fn mean_date(&self, x: &Rat) -> Rat;
    fn true_date(&self, x: &Rat) -> Rat;
    fn local_civil_date(&self, x: &Rat) -> Rat;
    fn mean_sun(&self, x: &Rat) -> Rat;
    fn true_sun(&self, x: &Rat) -> Rat;
    /// Inverse lookup: the tithi coordinate `x` whose half-open
    /// interval `[true_date(x-1), true_date(x))` contains `t2000`.
    fn get_x_from_t2000(&self, t2000: &Rat) -> i64;
}

/// Splits a continuous tithi coordinate `x` into `(n, d)`.
pub fn to_nd(x: &Rat) -> (Rat, Rat) {
    use crate::common::math;
    let n = math::floor_div(x, &math::int(30));
    let n_rat = crate::common::math::Rat::from_integer(n);
    let d = x - &n_rat * math::int(30);
    (n_rat, d)
}

#[derive(Clone)]
pub enum DayEngineKind {
    Traditional(TraditionalDayEngine),
    Rational(RationalDayEngine),
}

impl DayEngine for DayEngineKind {
    fn epoch_k(&self) -> i64 {
        match self {
            DayEngineKind::Traditional(e) => e.epoch_k(),
            DayEngineKind::Rational(e) => e.epoch_k(),
        }
    }
    fn mean_date(&self, x: &Rat) -> Rat {
        match self {
            DayEngineKind::Traditional(e) => e.mean_date(x),
            DayEngineKind::Rational(e) => e.mean_date(x),
        }
    }
    fn true_date(&self, x: &Rat) -> Rat {
        match self {
            DayEngineKind::Traditional(e) => e.true_date(x),
            DayEngineKind::Rational(e) => e.true_date(x),
        }
    }
    fn local_civil_date(&self, x: &Rat) -> Rat {
        match self {
            DayEngineKind::Traditional(e) => e.local_civil_date(x),
            DayEngineKind::Rational(e) => e.local_civil_date(x),
        }
    }
    fn mean_sun(&self, x: &Rat) -> Rat {
        match self {
            DayEngineKind::Traditional(e) => e.mean_sun(x),
            DayEngineKind::Rational(e) => e.mean_sun(x),
        }
    }
    fn true_sun(&self, x: &Rat) -> Rat {
        match self {
            DayEngineKind::Traditional(e) => e.true_sun(x),
            DayEngineKind::Rational(e) => e.true_sun(x),
        }
    }
    fn get_x_from_t2000(&self, t2000: &Rat) -> i64 {
        match self {
            DayEngineKind::Traditional(e) => e.get_x_from_t2000(t2000),
            DayEngineKind::Rational(e) => e.get_x_from_t2000(t2000),
        }
    }
}
