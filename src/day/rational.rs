// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The reform/rational day engine: true-elongation kinematics inverted
//! by a fixed-iteration Picard solve, with ΔT and a sunrise model for
//! civil-day alignment.

use std::rc::Rc;

use crate::common::{self, math::Rat};
use crate::day::deltat::DeltaT;
use crate::day::sunrise::{Location, Sunrise};
use crate::day::DayEngine;
use crate::series::AffineTabSeries;

#[derive(Clone)]
pub struct RationalDayParams {
    pub epoch_k: i64,
    /// True-elongation series: `E(t) = A + B*t + Σ lunar terms`, solved
    /// for `t` given `x/30` turns of elongation.
    pub elongation_series: AffineTabSeries,
    /// True solar-longitude series, in turns.
    pub sun_series: AffineTabSeries,
    pub iterations: u32,
    pub delta_t: DeltaT,
    pub sunrise: Sunrise,
    pub location: Location,
}

#[derive(Clone)]
pub struct RationalDayEngine {
    params: Rc<RationalDayParams>,
}

impl RationalDayEngine {
    pub fn new(params: RationalDayParams) -> Self {
        RationalDayEngine { params: Rc::new(params) }
    }

    fn solve_t_tt(&self, x: &Rat) -> Rat {
        let target = x / common::math::int(30);
        let t0 = (&target - &self.params.elongation_series.base_a) / &self.params.elongation_series.base_b;
        self.params.elongation_series.picard_solve(&target, &t0, self.params.iterations)
    }

    /// True ecliptic longitude of the sun at tithi coordinate `x`, *not*
    /// reduced mod one turn. Unlike `true_sun` (which wraps into
    /// `[0, 1)` for display), this accumulates across solar years, so
    /// differencing it at two `x` values recovers how many full turns
    /// the sun swept between them — the astronomical month engine needs
    /// that count to track which solar year a lunation falls in.
    pub fn true_sun_cumulative(&self, x: &Rat) -> Rat {
        let t_tt = self.solve_t_tt(x);
        self.params.sun_series.eval(&t_tt)
    }
}

impl DayEngine for RationalDayEngine {
    fn epoch_k(&self) -> i64 {
        self.params.epoch_k
    }

    fn mean_date(&self, x: &Rat) -> Rat {
        let target = x / common::math::int(30);
        (&target - &self.params.elongation_series.base_a) / &self.params.elongation_series.base_b
    }

    /// True physical TT coordinate (Days-since-J2000.0), *not* shifted
    /// to local civil time — used directly by the orchestrator's
    /// civil-month boundary probes.
    fn true_date(&self, x: &Rat) -> Rat {
        self.solve_t_tt(x)
    }

    fn local_civil_date(&self, x: &Rat) -> Rat {
        let t_tt = self.solve_t_tt(x);
        let t_utc = &t_tt - self.params.delta_t.days(&t_tt);

        // Seed the civil day so the boundary lands near local dawn.
        let seed = &t_utc + &self.params.location.lon_turn + common::math::ratio(1, 4);
        let j_civil = common::math::floor_div(&seed, &common::math::int(1));
        let j_civil_rat = Rat::from_integer(j_civil);

        // Approximate dawn UTC for j_civil, shifted back to TT to
        // sample the sun's true longitude there.
        let approx_dawn_utc = &j_civil_rat + common::math::ratio(1, 4) - &self.params.location.lon_turn;
        let approx_dawn_tt = &approx_dawn_utc + self.params.delta_t.days(&approx_dawn_utc);
        let sun_longitude = common::math::frac_turn(&self.params.sun_series.eval(&approx_dawn_tt));

        let dawn_utc_exact = self.params.sunrise.dawn_turn(&self.params.location, &sun_longitude);

        &j_civil_rat + (&t_utc - &dawn_utc_exact)
    }

    fn mean_sun(&self, x: &Rat) -> Rat {
        let t_tt = self.mean_date(x);
        common::math::frac_turn(&self.params.sun_series.base(&t_tt))
    }

    fn true_sun(&self, x: &Rat) -> Rat {
        let t_tt = self.solve_t_tt(x);
        common::math::frac_turn(&self.params.sun_series.eval(&t_tt))
    }

    fn get_x_from_t2000(&self, t2000: &Rat) -> i64 {
        // Seed from the mean linear rate: mean elongation turns at
        // t2000 is A + B*t2000, and x = 30 * elongation_turns.
        let a = &self.params.elongation_series.base_a;
        let b = &self.params.elongation_series.base_b;
        let target_elong = a + b * t2000;
        let mut x_est = common::math::floor_to_i64(&(target_elong * common::math::int(30)));

        // Walk the physical boundaries, matching the traditional
        // engine's seed-and-walk inverse search.
        while self.true_date(&common::math::int(x_est - 1)) > *t2000 {
            x_est -= 1;
        }
        while self.true_date(&common::math::int(x_est)) <= *t2000 {
            x_est += 1;
        }
        x_est
    }
}
