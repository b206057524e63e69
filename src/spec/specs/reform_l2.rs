// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reform level 2: adds a spherical sunrise model (latitude-dependent
//! dawn) on top of level 1's continuous elongation kinematics.

use std::rc::Rc;

use crate::calendar::CalendarEngine;
use crate::common::math;
use crate::day::deltat::DeltaT;
use crate::day::sunrise::Sunrise;
use crate::day::{DayEngineKind, RationalDayEngine, RationalDayParams};
use crate::month::{ArithmeticMonthEngine, MonthEngineKind, MonthParams};
use crate::spec::specs::common::{elongation_series, lhasa, sun_longitude_series, trig_table_360};
use crate::spec::{EngineFamily, EngineId};

pub fn build() -> CalendarEngine {
    let month = MonthEngineKind::Arithmetic(
        ArithmeticMonthEngine::new(MonthParams {
            epoch_k: 0,
            y0: 1987,
            m0: 1,
            p: 1336,
            q: 1377,
            beta_star: 18,
            tau: 2,
        })
        .unwrap(),
    );

    let table = trig_table_360();
    let elongation = elongation_series(math::ratio(100, 2953), table.clone(), math::ratio(1, 275));
    let sun = sun_longitude_series(math::ratio(1, 36525) * math::int(100), table.clone(), math::ratio(1, 1063));

    let day = DayEngineKind::Rational(RationalDayEngine::new(RationalDayParams {
        epoch_k: 0,
        elongation_series: elongation,
        sun_series: sun,
        iterations: 6,
        delta_t: DeltaT::Constant(math::int(0)),
        sunrise: Sunrise::Spherical {
            h0: math::ratio(-1, 720),
            eps: math::ratio(6, 25),
            table: Rc::clone(&table),
        },
        location: lhasa(),
    }));

    CalendarEngine::new(
        EngineId { family: EngineFamily::Reform, name: "reform-l2", version: "1.0" },
        month,
        day,
        crate::spec::leap_labeling_for("reform-l2"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_panicking() {
        let _ = build();
    }
}
