// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Affine-plus-periodic-correction series and their fixed-iteration
//! Picard inversion.
//!
//! Two flavors are needed:
//!
//! - [`AffineTabSeries`] / [`PhaseT`] / [`TermDef`]: single-variable
//!   series `x(t) = A + B·t + Σ amp_i·Tab_i(phase_i(t))`, used by the
//!   rational/reform day engines where `t` is a continuous TT
//!   coordinate.
//! - [`AffineTabSeriesDn`] / [`PhaseDn`] / [`TabTermDn`]: two-variable
//!   series `x(n, d) = c0 + c1·n + c2·d + Σ amp_i·Tab_i(phase_i(n, d))`,
//!   used by the traditional engines where the lunation index `n` and
//!   the in-month coordinate `d` are tracked separately.

use std::rc::Rc;

use crate::common::math::{self, Rat};
use crate::table::OddPeriodicTable;

/// A phase `c0 + c1*t`, evaluated then reduced into turns.
#[derive(Debug, Clone)]
pub struct PhaseT {
    pub c0: Rat,
    pub c1: Rat,
}

impl PhaseT {
    pub fn eval_turn(&self, t: &Rat) -> Rat {
        math::frac_turn(&(&self.c0 + &self.c1 * t))
    }
}

#[derive(Clone)]
pub struct TermDef {
    pub amp: Rat,
    pub phase: PhaseT,
    pub table: Rc<OddPeriodicTable>,
}

impl TermDef {
    fn eval(&self, t: &Rat) -> Rat {
        let turn = self.phase.eval_turn(t);
        &self.amp * self.table.eval_normalized_turn(&turn)
    }
}

/// `x(t) = A + B*t + Σ amp_i * Tab_i(phase_i(t))`.
#[derive(Clone)]
pub struct AffineTabSeries {
    pub base_a: Rat,
    pub base_b: Rat,
    pub terms: Vec<TermDef>,
}

impl AffineTabSeries {
    pub fn base(&self, t: &Rat) -> Rat {
        &self.base_a + &self.base_b * t
    }

    pub fn eval(&self, t: &Rat) -> Rat {
        let mut v = self.base(t);
        for term in &self.terms {
            v = v + term.eval(t);
        }
        v
    }

    /// Fixed-iteration-count Picard solve for `t` such that
    /// `eval(t) ≈ target`, starting from `t0`. The iteration count is
    /// fixed, not tolerance-driven: the result must be bit-identical
    /// across runs for the same inputs.
    pub fn picard_solve(&self, target: &Rat, t0: &Rat, iterations: u32) -> Rat {
        let mut t = t0.clone();
        for _ in 0..iterations {
            let mut corr = math::int(0);
            for term in &self.terms {
                corr = corr + term.eval(&t);
            }
            t = (target - &self.base_a - corr) / &self.base_b;
        }
        t
    }
}

/// A phase in the two-variable traditional lane, `c0 + cn*n + cd*d`.
#[derive(Debug, Clone)]
pub struct PhaseDn {
    pub c0: Rat,
    pub cn: Rat,
    pub cd: Rat,
}

impl PhaseDn {
    pub fn eval_turn(&self, n: &Rat, d: &Rat) -> Rat {
        math::frac_turn(&(&self.c0 + &self.cn * n + &self.cd * d))
    }
}

#[derive(Clone)]
pub struct TabTermDn {
    pub amp: Rat,
    pub phase: PhaseDn,
    pub table: Rc<OddPeriodicTable>,
}

impl TabTermDn {
    fn eval(&self, n: &Rat, d: &Rat) -> Rat {
        let turn = self.phase.eval_turn(n, d);
        &self.amp * self.table.eval_normalized_turn(&turn)
    }
}

/// `x(n, d) = c0 + c1*n + c2*d + Σ amp_i * Tab_i(phase_i(n, d))`.
#[derive(Clone)]
pub struct AffineTabSeriesDn {
    pub base_c0: Rat,
    pub base_cn: Rat,
    pub base_cd: Rat,
    pub terms: Vec<TabTermDn>,
}

impl AffineTabSeriesDn {
    pub fn base(&self, n: &Rat, d: &Rat) -> Rat {
        &self.base_c0 + &self.base_cn * n + &self.base_cd * d
    }

    pub fn eval(&self, n: &Rat, d: &Rat) -> Rat {
        let mut v = self.base(n, d);
        for term in &self.terms {
            v = v + term.eval(n, d);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_table() -> Rc<OddPeriodicTable> {
        Rc::new(OddPeriodicTable::new(28, vec![0, 2, 4, 5, 6, 7, 7, 7]).unwrap())
    }

    /// A table that returns the same value everywhere, so a term built
    /// from it contributes a phase-independent constant correction.
    fn constant_table() -> Rc<OddPeriodicTable> {
        Rc::new(OddPeriodicTable::new(28, vec![7; 8]).unwrap())
    }

    #[test]
    fn base_only_series_is_pure_affine() {
        let series = AffineTabSeries {
            base_a: math::int(10),
            base_b: math::int(30),
            terms: vec![],
        };
        assert_eq!(series.eval(&math::int(2)), math::int(70));
    }

    #[test]
    fn picard_solve_recovers_t_for_affine_only_series() {
        let series = AffineTabSeries {
            base_a: math::int(10),
            base_b: math::int(30),
            terms: vec![],
        };
        let target = math::int(100);
        let t = series.picard_solve(&target, &math::int(0), 3);
        assert_eq!(t, math::ratio(90, 30));
    }

    #[test]
    fn picard_solve_is_stable_once_the_correction_term_stops_moving() {
        // A phase-independent correction term turns the Picard update
        // into a single-step affine solve, so iteration counts beyond
        // the first must agree exactly.
        let table = constant_table();
        let series = AffineTabSeries {
            base_a: math::int(0),
            base_b: math::int(30),
            terms: vec![TermDef {
                amp: math::ratio(1, 60),
                phase: PhaseT { c0: math::int(0), c1: math::ratio(1, 30) },
                table: table.clone(),
            }],
        };
        let target = math::int(300);
        let t0 = target.clone() / &series.base_b;
        let t1 = series.picard_solve(&target, &t0, 6);
        let t2 = series.picard_solve(&target, &t0, 7);
        assert_eq!(t1, t2);
        assert_eq!(t1, (&target - math::ratio(1, 60)) / math::int(30));
    }
}
