// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared table/series scaffolding reused (with per-calendar constants)
//! across the nine shipped specs. The numeric parameters themselves
//! are internally-consistent, original values for this crate, not a
//! reproduction of any particular historical almanac's tables.

use std::rc::Rc;

use crate::common::math::{self, Rat};
use crate::day::sunrise::Location;
use crate::series::{AffineTabSeries, PhaseT, TermDef};
use crate::table::OddPeriodicTable;

/// N=28 quarter-wave lunar-anomaly samples (moon's equation of
/// center), peak value scaled so `amp=1/60` gives a correction of a
/// few tithi-hundredths at the peak.
pub fn moon_quarter() -> Vec<i64> {
    vec![0, 10, 19, 27, 33, 37, 39, 40]
}

/// N=12 quarter-wave solar-anomaly samples.
pub fn sun_quarter() -> Vec<i64> {
    vec![0, 4, 7, 8]
}

pub fn moon_table_28() -> Rc<OddPeriodicTable> {
    Rc::new(OddPeriodicTable::new(28, moon_quarter()).unwrap())
}

pub fn sun_table_12() -> Rc<OddPeriodicTable> {
    Rc::new(OddPeriodicTable::new(12, sun_quarter()).unwrap())
}

/// A finer N=360 quarter-wave sine table for the rational lane's
/// declination/hour-angle trigonometry.
pub fn trig_table_360() -> Rc<OddPeriodicTable> {
    let quarter: Vec<i64> = (0..=90)
        .map(|i| {
            let rad = (i as f64).to_radians();
            (1_000_000.0 * rad.sin()).round() as i64
        })
        .collect();
    Rc::new(OddPeriodicTable::new(360, quarter).unwrap())
}

pub fn elongation_series(base_b: Rat, table: Rc<OddPeriodicTable>, anomaly_rate: Rat) -> AffineTabSeries {
    AffineTabSeries {
        base_a: math::int(0),
        base_b,
        terms: vec![TermDef {
            amp: math::ratio(1, 60),
            phase: PhaseT { c0: math::int(0), c1: anomaly_rate },
            table,
        }],
    }
}

pub fn sun_longitude_series(base_b: Rat, table: Rc<OddPeriodicTable>, anomaly_rate: Rat) -> AffineTabSeries {
    AffineTabSeries {
        base_a: math::int(0),
        base_b,
        terms: vec![TermDef {
            amp: math::ratio(1, 720),
            phase: PhaseT { c0: math::int(0), c1: anomaly_rate },
            table,
        }],
    }
}

pub fn lhasa() -> Location {
    // Lhasa, Tibet: approximately 29.65N, 91.1E.
    Location {
        lat_turn: math::ratio(2965, 36000),
        lon_turn: math::ratio(911, 3600),
        elev_m: math::int(3650),
    }
}

pub fn thimphu() -> Location {
    // Thimphu, Bhutan: approximately 27.47N, 89.64E.
    Location {
        lat_turn: math::ratio(2747, 36000),
        lon_turn: math::ratio(8964, 36000),
        elev_m: math::int(2334),
    }
}
