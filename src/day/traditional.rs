// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The traditional, table-based affine day engine: civil-aligned from
//! construction, no Picard iteration needed.

use std::rc::Rc;

use crate::common::{self, math::Rat};
use crate::day::{to_nd, DayEngine};
use crate::series::{AffineTabSeriesDn, PhaseDn, TabTermDn};
use crate::table::OddPeriodicTable;

#[derive(Clone)]
pub struct TraditionalDayParams {
    pub epoch_k: i64,
    pub m0: Rat,
    pub m1: Rat,
    pub m2: Rat,
    pub s0: Rat,
    pub s1: Rat,
    pub s2: Rat,
    pub a0: Rat,
    pub a1: Rat,
    pub a2: Rat,
    pub moon_tab_quarter: Vec<i64>,
    pub sun_tab_quarter: Vec<i64>,
    /// Independent solar-anomaly phase constants; default to
    /// `(s0 - 1/4, s1, s2)` when `None`.
    pub r0: Option<Rat>,
    pub r1: Option<Rat>,
    pub r2: Option<Rat>,
}

#[derive(Clone)]
pub struct TraditionalDayEngine {
    epoch_k: i64,
    m0: Rat,
    m1: Rat,
    m2: Rat,
    s0: Rat,
    s1: Rat,
    s2: Rat,
    series: AffineTabSeriesDn,
    sun_series: AffineTabSeriesDn,
}

impl TraditionalDayEngine {
    pub fn new(p: TraditionalDayParams) -> crate::common::CalendarResult<Self> {
        let moon_table = Rc::new(OddPeriodicTable::new(
            (p.moon_tab_quarter.len() as u32 - 1) * 4,
            p.moon_tab_quarter.clone(),
        )?);
        let sun_table = Rc::new(OddPeriodicTable::new(
            (p.sun_tab_quarter.len() as u32 - 1) * 4,
            p.sun_tab_quarter.clone(),
        )?);

        let r0 = p.r0.clone().unwrap_or_else(|| &p.s0 - common::math::ratio(1, 4));
        let r1 = p.r1.clone().unwrap_or_else(|| p.s1.clone());
        let r2 = p.r2.clone().unwrap_or_else(|| p.s2.clone());

        let phase_moon = PhaseDn { c0: p.a0.clone(), cn: p.a1.clone(), cd: p.a2.clone() };
        let phase_sun_anomaly = PhaseDn { c0: r0, cn: r1, cd: r2 };

        let series = AffineTabSeriesDn {
            base_c0: p.m0.clone(),
            base_cn: p.m1.clone(),
            base_cd: p.m2.clone(),
            terms: vec![
                TabTermDn {
                    amp: common::math::ratio(1, 60),
                    phase: phase_moon.clone(),
                    table: moon_table.clone(),
                },
                TabTermDn {
                    amp: common::math::ratio(-1, 60),
                    phase: phase_sun_anomaly.clone(),
                    table: sun_table.clone(),
                },
            ],
        };

        let sun_series = AffineTabSeriesDn {
            base_c0: p.s0.clone(),
            base_cn: p.s1.clone(),
            base_cd: p.s2.clone(),
            terms: vec![TabTermDn {
                amp: common::math::ratio(1, 720),
                phase: phase_sun_anomaly,
                table: sun_table,
            }],
        };

        Ok(TraditionalDayEngine {
            epoch_k: p.epoch_k,
            m0: p.m0,
            m1: p.m1,
            m2: p.m2,
            s0: p.s0,
            s1: p.s1,
            s2: p.s2,
            series,
            sun_series,
        })
    }
}

impl DayEngine for TraditionalDayEngine {
    fn epoch_k(&self) -> i64 {
        self.epoch_k
    }

    fn mean_date(&self, x: &Rat) -> Rat {
        let (n, d) = to_nd(x);
        let jd_abs = &self.m0 + &self.m1 * &n + &self.m2 * &d;
        jd_abs - common::j2000_jd()
    }

    fn true_date(&self, x: &Rat) -> Rat {
        let (n, d) = to_nd(x);
        self.series.eval(&n, &d) - common::j2000_jd()
    }

    fn local_civil_date(&self, x: &Rat) -> Rat {
        self.true_date(x)
    }

    fn mean_sun(&self, x: &Rat) -> Rat {
        let (n, d) = to_nd(x);
        common::math::frac_turn(&(&self.s0 + &self.s1 * &n + &self.s2 * &d))
    }

    fn true_sun(&self, x: &Rat) -> Rat {
        let (n, d) = to_nd(x);
        common::math::frac_turn(&self.sun_series.eval(&n, &d))
    }

    fn get_x_from_t2000(&self, t2000: &Rat) -> i64 {
        let m0_t2000 = &self.m0 - common::j2000_jd();
        let mut x_est = common::math::floor_to_i64(&((t2000 - &m0_t2000) / &self.m2));

        while self.true_date(&common::math::int(x_est - 1)) > *t2000 {
            x_est -= 1;
        }
        while self.true_date(&common::math::int(x_est)) <= *t2000 {
            x_est += 1;
        }
        x_est
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_engine() -> TraditionalDayEngine {
        TraditionalDayEngine::new(TraditionalDayParams {
            epoch_k: 0,
            m0: common::j2000_jd(),
            m1: common::math::int(29),
            m2: common::math::int(1),
            s0: common::math::int(0),
            s1: common::math::ratio(1, 12),
            s2: common::math::ratio(1, 360),
            a0: common::math::int(0),
            a1: common::math::ratio(1, 12),
            a2: common::math::ratio(1, 360),
            moon_tab_quarter: vec![0, 2, 4, 5, 6, 7, 7, 7],
            sun_tab_quarter: vec![0, 1, 2, 2],
            r0: None,
            r1: None,
            r2: None,
        })
        .unwrap()
    }

    #[test]
    fn local_civil_date_equals_true_date() {
        let e = toy_engine();
        let x = common::math::int(45);
        assert_eq!(e.local_civil_date(&x), e.true_date(&x));
    }

    #[test]
    fn true_date_is_monotone_increasing() {
        let e = toy_engine();
        for x in -5..5 {
            let a = e.true_date(&common::math::int(x));
            let b = e.true_date(&common::math::int(x + 1));
            assert!(b > a);
        }
    }

    #[test]
    fn get_x_from_t2000_inverts_true_date() {
        let e = toy_engine();
        for x in -3..3i64 {
            let t = e.true_date(&common::math::int(x));
            assert_eq!(e.get_x_from_t2000(&t), x);
        }
    }

    #[test]
    fn r_defaults_to_s_minus_quarter_turn() {
        let e = toy_engine();
        // r0 defaults to s0 - 1/4 = -1/4; spot check via mean_sun vs
        // true_sun structural sanity (both finite, well-defined).
        let x = common::math::int(10);
        let _ = e.mean_sun(&x);
        let _ = e.true_sun(&x);
    }
}
