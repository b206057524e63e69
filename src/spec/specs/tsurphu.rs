// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Tsurphu (Karma Kagyu) tradition: a slightly different
//! intercalation trigger offset from Phugpa, same underlying `P/Q`
//! mean-motion ratio.

use crate::calendar::CalendarEngine;
use crate::common::math;
use crate::day::{DayEngineKind, TraditionalDayEngine, TraditionalDayParams};
use crate::month::{ArithmeticMonthEngine, MonthEngineKind, MonthParams};
use crate::spec::specs::common::{moon_quarter, sun_quarter};
use crate::spec::{EngineFamily, EngineId};

pub fn build() -> CalendarEngine {
    let month = MonthEngineKind::Arithmetic(
        ArithmeticMonthEngine::new(MonthParams {
            epoch_k: -2,
            y0: 1987,
            m0: 1,
            p: 1336,
            q: 1377,
            beta_star: 18,
            tau: 9,
        })
        .unwrap(),
    );

    let day = DayEngineKind::Traditional(
        TraditionalDayEngine::new(TraditionalDayParams {
            epoch_k: 0,
            m0: math::int(2_451_926),
            m1: math::ratio(1062, 1),
            m2: math::ratio(1062, 36),
            s0: math::ratio(1, 20),
            s1: math::ratio(65, 804),
            s2: math::ratio(65, 804 * 30),
            a0: math::ratio(3, 40),
            a1: math::ratio(253, 804),
            a2: math::ratio(253, 804 * 30),
            moon_tab_quarter: moon_quarter(),
            sun_tab_quarter: sun_quarter(),
            r0: None,
            r1: None,
            r2: None,
        })
        .unwrap(),
    );

    CalendarEngine::new(
        EngineId { family: EngineFamily::Traditional, name: "tsurphu", version: "1.0" },
        month,
        day,
        crate::spec::leap_labeling_for("tsurphu"),
    )
}
