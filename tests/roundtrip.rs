// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Round-trip invariants: `from_jdn` followed by `to_jdn` on the
//! resolved label must recover the original Julian Day Number, for
//! every shipped engine, over a wide civil-date sweep.

use proptest::prelude::ProptestConfig;
use proptest::proptest;

use losar::spec::build_registry;

// JDN(1600-01-01) .. JDN(2400-12-31), both exact multiples of the
// 146097-day Gregorian 400-year cycle away from J2000 (2451545).
const JDN_LOW: i64 = 2_305_448;
const JDN_HIGH: i64 = 2_598_007;

fn roundtrips(name: &str, jdn: i64) {
    let reg = build_registry();
    let engine = reg.get(name).unwrap();
    let resolved = engine.from_jdn(jdn).unwrap();
    let back = engine.to_jdn(resolved.year, resolved.month, resolved.is_leap, resolved.day).unwrap();
    assert_eq!(back, jdn, "{name}: from_jdn/to_jdn mismatch for jdn={jdn}");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn phugpa(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("phugpa", jdn);
    }

    #[test]
    fn tsurphu(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("tsurphu", jdn);
    }

    #[test]
    fn mongol(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("mongol", jdn);
    }

    #[test]
    fn bhutan(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("bhutan", jdn);
    }

    #[test]
    fn karana(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("karana", jdn);
    }

    #[test]
    fn reform_l1(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("reform-l1", jdn);
    }

    #[test]
    fn reform_l2(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("reform-l2", jdn);
    }

    #[test]
    fn reform_l3(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("reform-l3", jdn);
    }

    #[test]
    fn reform_l4(jdn in JDN_LOW..JDN_HIGH) {
        roundtrips("reform-l4", jdn);
    }
}
