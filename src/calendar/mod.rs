// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod civil_date;
pub mod engine;
pub mod types;

pub use civil_date::GregorianDate;
pub use engine::{CalendarEngine, LeapLabeling};
pub use types::{CivilDayEntry, CivilMonthMap, DayInfo, DayStatus, TibetanDate, ToGregorianPolicy};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::{DayEngineKind, DeltaT, Location, RationalDayEngine, RationalDayParams, Sunrise};
    use crate::month::{ArithmeticMonthEngine, MonthEngineKind, MonthParams};
    use crate::series::{AffineTabSeries, PhaseT, TermDef};
    use crate::spec::{EngineFamily, EngineId};
    use crate::common::math;
    use std::rc::Rc;
    use crate::table::OddPeriodicTable;

    fn toy_engine() -> CalendarEngine {
        let month = MonthEngineKind::Arithmetic(
            ArithmeticMonthEngine::new(MonthParams {
                epoch_k: 0,
                y0: 2000,
                m0: 1,
                p: 11,
                q: 12,
                beta_star: 0,
                tau: 0,
            })
            .unwrap(),
        );

        let table = Rc::new(OddPeriodicTable::new(28, vec![0, 2, 4, 5, 6, 7, 7, 7]).unwrap());
        let elongation_series = AffineTabSeries {
            base_a: math::int(0),
            base_b: math::ratio(1, 29),
            terms: vec![TermDef {
                amp: math::ratio(1, 600),
                phase: PhaseT { c0: math::int(0), c1: math::ratio(1, 29) },
                table: table.clone(),
            }],
        };
        let sun_series = AffineTabSeries { base_a: math::int(0), base_b: math::ratio(1, 365), terms: vec![] };
        let day = DayEngineKind::Rational(RationalDayEngine::new(RationalDayParams {
            epoch_k: 0,
            elongation_series,
            sun_series,
            iterations: 10,
            delta_t: DeltaT::Constant(math::int(0)),
            sunrise: Sunrise::Constant(math::ratio(1, 4)),
            location: Location { lat_turn: math::int(0), lon_turn: math::int(0), elev_m: math::int(0) },
        }));

        CalendarEngine::new(
            EngineId { family: EngineFamily::Custom, name: "toy", version: "0" },
            month,
            day,
            LeapLabeling::FirstIsLeap,
        )
    }

    #[test]
    fn to_jdn_and_from_jdn_are_consistent_for_a_normal_day() {
        let engine = toy_engine();
        let jdn = engine.to_jdn(2001, 3, false, 10).unwrap();
        let resolved = engine.from_jdn(jdn).unwrap();
        assert_eq!(resolved.year, 2001);
        assert_eq!(resolved.month, 3);
        assert_eq!(resolved.day, 10);
    }

    #[test]
    fn civil_month_map_is_nonempty_and_ordered() {
        let engine = toy_engine();
        let map = engine.build_civil_month(5);
        assert!(!map.is_empty());
        let keys: Vec<_> = map.keys().collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}
