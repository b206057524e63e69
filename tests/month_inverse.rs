// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Month-label inversion: resolving a lunation index to a `(year,
//! month)` label and back through `get_lunations` must recover the
//! original lunation, for both month-engine families.

use losar::month::MonthEngine;
use losar::spec::build_registry;

const ENGINES: &[&str] = &[
    "phugpa", "tsurphu", "mongol", "bhutan", "karana", "reform-l1", "reform-l2", "reform-l3", "reform-l4",
];

#[test]
fn label_then_lunations_recovers_the_original_index() {
    let reg = build_registry();
    for &name in ENGINES {
        let engine = reg.get(name).unwrap();
        for n in -30..=30i64 {
            let info = engine.month.get_month_info(n);
            let lunations = engine.month.get_lunations(info.year, info.month).unwrap();
            assert!(
                lunations.contains(&n),
                "{name}: lunation {n} -> ({}, {}) did not round-trip, got {lunations:?}",
                info.year,
                info.month
            );
        }
    }
}

#[test]
fn trigger_labels_carry_exactly_two_candidate_lunations() {
    let reg = build_registry();
    for &name in ENGINES {
        let engine = reg.get(name).unwrap();
        for n in -30..=30i64 {
            let info = engine.month.get_month_info(n);
            let lunations = engine.month.get_lunations(info.year, info.month).unwrap();
            if info.leap_state == 0 {
                assert_eq!(lunations.len(), 1, "{name}: non-trigger lunation {n} has {} candidates", lunations.len());
            } else {
                assert_eq!(lunations.len(), 2, "{name}: trigger lunation {n} has {} candidates", lunations.len());
            }
        }
    }
}
