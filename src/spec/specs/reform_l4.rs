// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reform level 4: the astronomical month engine, whose intercalation
//! follows true solar-term transits read directly off this spec's own
//! day engine's true solar longitude, rather than a fixed `P/Q` ratio.

use std::rc::Rc;

use crate::calendar::CalendarEngine;
use crate::common::{self, math};
use crate::day::deltat::DeltaT;
use crate::day::sunrise::Sunrise;
use crate::day::{DayEngineKind, RationalDayEngine, RationalDayParams};
use crate::month::{AstronomicalMonthEngine, MonthEngineKind};
use crate::spec::specs::common::{elongation_series, lhasa, sun_longitude_series, trig_table_360};
use crate::spec::{EngineFamily, EngineId};

pub fn build() -> CalendarEngine {
    let table = trig_table_360();
    let elongation = elongation_series(math::ratio(100, 2953), table.clone(), math::ratio(1, 275));
    let sun = sun_longitude_series(math::ratio(1, 36525) * math::int(100), table.clone(), math::ratio(1, 1063));

    let day_engine = Rc::new(RationalDayEngine::new(RationalDayParams {
        epoch_k: 0,
        elongation_series: elongation,
        sun_series: sun,
        iterations: 6,
        delta_t: DeltaT::Quadratic {
            a: math::ratio(32, 1),
            b: math::int(0),
            c: math::ratio(63, 1),
            y0: math::int(2000),
        },
        sunrise: Sunrise::Spherical {
            h0: math::ratio(-1, 720),
            eps: math::ratio(6, 25),
            table,
        },
        location: lhasa(),
    }));

    let longitude_lookup = Rc::clone(&day_engine);
    let true_sun_longitude = Rc::new(move |n: i64| -> math::Rat {
        let x = common::math::int(30 * n);
        longitude_lookup.true_sun_cumulative(&x)
    });

    let month = MonthEngineKind::Astronomical(AstronomicalMonthEngine {
        epoch_k: 0,
        y0: 1987,
        m0: 1,
        sgang_base: day_engine.true_sun_cumulative(&common::math::int(30 * (-12))),
        true_sun_longitude,
        first_lunation_of_y0: -12,
    });

    let day = DayEngineKind::Rational((*day_engine).clone());

    CalendarEngine::new(
        EngineId { family: EngineFamily::Reform, name: "reform-l4", version: "1.0" },
        month,
        day,
        crate::spec::leap_labeling_for("reform-l4"),
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
