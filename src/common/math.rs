// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exact-rational arithmetic helpers.
//!
//! A generic `f64`/integer-abstracted numeric trait can't soundly
//! extend to `BigRational` (no lossless `Bounded`/`AsPrimitive<f64>`
//! without reintroducing the precision loss the rational lane exists to
//! avoid), so this module provides the handful of free functions this
//! crate actually needs, written directly against
//! `num_rational`/`num_bigint`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

pub type Rat = BigRational;

pub fn int(n: i64) -> Rat {
    Rat::from_integer(BigInt::from(n))
}

pub fn ratio(num: i64, den: i64) -> Rat {
    Rat::new(BigInt::from(num), BigInt::from(den))
}

/// Floor division, well-defined for a negative divisor too (unlike
/// `BigInt`'s truncating division).
pub fn floor_div(a: &Rat, b: &Rat) -> BigInt {
    (a / b).floor().to_integer()
}

/// `a mod b`, always returned in `[0, b)` for positive `b` (Euclidean
/// remainder).
pub fn modulus(a: &Rat, b: &Rat) -> Rat {
    let q = floor_div(a, b);
    a - Rat::from_integer(q) * b
}

/// Reduce `x` (a phase in turns) into `[0, 1)`.
pub fn frac_turn(x: &Rat) -> Rat {
    modulus(x, &int(1))
}

/// Wrap `a` into the half-open interval `[lo, hi)`.
pub fn interval_modulus(a: &Rat, lo: &Rat, hi: &Rat) -> Rat {
    lo + modulus(&(a - lo), &(hi - lo))
}

pub fn sign(x: &Rat) -> i32 {
    if x.is_zero() {
        0
    } else if x.is_negative() {
        -1
    } else {
        1
    }
}

/// `floor(x)` as a plain `i64`, for code that has already bounded `x`
/// to a sane civil range (JDNs, lunation indices).
pub fn floor_to_i64(x: &Rat) -> i64 {
    x.floor().to_integer().try_into().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_is_nonnegative_for_negative_dividend() {
        let a = ratio(-5, 2); // -2.5
        let b = int(1);
        let m = modulus(&a, &b);
        assert!(m >= Rat::from_integer(BigInt::from(0)));
        assert!(m < int(1));
    }

    #[test]
    fn floor_div_matches_floor_semantics() {
        assert_eq!(floor_div(&ratio(-1, 2), &int(1)), BigInt::from(-1));
        assert_eq!(floor_div(&ratio(1, 2), &int(1)), BigInt::from(0));
    }

    #[test]
    fn frac_turn_wraps_negative_phase() {
        let x = ratio(-1, 4);
        let f = frac_turn(&x);
        assert_eq!(f, ratio(3, 4));
    }
}
