// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MonthEngine: discrete lunation-index arithmetic.
//!
//! A month engine maps between a chronological lunation index `n` (an
//! absolute count of lunar months since some fixed epoch) and a human
//! `(year, month, leap)` label. Two families are shipped: the
//! arithmetic engine (a fixed mean-motion ratio `P/Q` between solar and
//! lunar months drives a periodic intercalation schedule) and the
//! astronomical engine (intercalation follows true solar-term
//! transits instead of a fixed ratio).

use crate::common::error::{CalendarError, CalendarResult};
use crate::common::math::{self, Rat};

/// `(year, month, leap_state)` triple returned by lunation → label
/// resolution. `leap_state == 0` means the label is unambiguous;
/// `1`/`2` mean this lunation is the first/second of a trigger pair
/// and the orchestrator must resolve `is_leap` via `leap_labeling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    pub year: i32,
    pub month: u8,
    pub leap_state: u8,
    pub linear_month: i64,
}

/// Extra detail surfaced by `explain`/debug tooling; not used by the
/// core round-trip path.
#[derive(Debug, Clone)]
pub struct MonthDebugInfo {
    pub m_star: i64,
    pub intercalation_index: i64,
    pub intercalation_index_internal: i64,
    pub is_trigger_label: bool,
    pub n_plus: i64,
}

pub trait MonthEngine {
    /// Absolute lunation-index epoch offset, used by the orchestrator
    /// to align with a `DayEngine`'s own `epoch_k`.
    fn epoch_k(&self) -> i64;

    /// Chronologically ordered candidate lunations for `(year, month)`:
    /// one element normally, two when `month` is a trigger label.
    fn get_lunations(&self, year: i32, month: u8) -> CalendarResult<Vec<i64>>;

    fn first_lunation(&self, year: i32) -> CalendarResult<i64> {
        Ok(self.get_lunations(year, 1)?[0])
    }

    fn get_month_info(&self, n: i64) -> MonthInfo;

    fn debug_label(&self, year: i32, month: u8) -> CalendarResult<MonthDebugInfo>;

    /// Almanac-style intercalation index (shifted above a traditional
    /// cutoff, optionally wrapped back into `0..P`), meaningful only for
    /// a fixed-ratio engine. Engines with no such index report
    /// `EngineLacksCapability`.
    fn intercalation_index_traditional(&self, _year: i32, _month: u8, _wrap: bool) -> CalendarResult<i64> {
        Err(CalendarError::EngineLacksCapability {
            engine: "astronomical".to_string(),
            capability: "intercalation_index_traditional".to_string(),
        })
    }
}

/// `P/Q` mean-motion ratio parameters for the arithmetic family.
#[derive(Debug, Clone)]
pub struct MonthParams {
    pub epoch_k: i64,
    pub y0: i32,
    pub m0: u8,
    pub p: i64,
    pub q: i64,
    pub beta_star: i64,
    pub tau: i64,
}

impl MonthParams {
    pub fn validate(&self) -> CalendarResult<()> {
        if self.p <= 0 || self.q <= 0 || self.p >= self.q {
            return Err(CalendarError::OutOfBounds);
        }
        if !(1..=12).contains(&self.m0) {
            return Err(CalendarError::InvalidMonth);
        }
        if !(0..self.p).contains(&self.tau) {
            return Err(CalendarError::OutOfBounds);
        }
        Ok(())
    }

    fn ell(&self) -> i64 {
        self.q - self.p
    }

    fn gamma_shift(&self) -> i64 {
        (self.p - self.tau).rem_euclid(self.p)
    }

    fn beta_int(&self) -> i64 {
        self.beta_star + self.gamma_shift()
    }

    fn trigger_set(&self) -> Vec<i64> {
        (0..self.ell()).map(|k| (self.tau + k).rem_euclid(self.p)).collect()
    }
}

fn amod12(x: i64) -> u8 {
    (((x - 1).rem_euclid(12)) + 1) as u8
}

/// The fixed mean-motion-ratio month engine (all non-L4 calendars).
#[derive(Debug, Clone)]
pub struct ArithmeticMonthEngine {
    pub params: MonthParams,
}

impl ArithmeticMonthEngine {
    pub fn new(params: MonthParams) -> CalendarResult<Self> {
        params.validate()?;
        Ok(ArithmeticMonthEngine { params })
    }

    fn mstar(&self, year: i32, month: u8) -> i64 {
        12 * (year as i64 - self.params.y0 as i64) + (month as i64 - self.params.m0 as i64)
    }

    fn intercalation_index(&self, year: i32, month: u8) -> i64 {
        let m_star = self.mstar(year, month);
        (self.params.ell() * m_star + self.params.beta_star).rem_euclid(self.params.p)
    }

    fn intercalation_index_internal(&self, year: i32, month: u8) -> i64 {
        let m_star = self.mstar(year, month);
        (self.params.ell() * m_star + self.params.beta_int()).rem_euclid(self.params.p)
    }

    /// Almanac-style intercalation index: shifted by `+ell` above a
    /// cutoff, optionally wrapped back into `0..P`.
    pub fn intercalation_index_traditional(&self, year: i32, month: u8, wrap: bool) -> i64 {
        let i = self.intercalation_index(year, month);
        let cutoff = self.params.tau + self.params.ell() - 1;
        let i_trad = if i > cutoff { i + self.params.ell() } else { i };
        if wrap {
            i_trad.rem_euclid(self.params.p)
        } else {
            i_trad
        }
    }

    fn is_trigger_label(&self, year: i32, month: u8) -> bool {
        self.intercalation_index_internal(year, month) < self.params.ell()
    }

    fn n_plus(&self, year: i32, month: u8) -> i64 {
        let m_star = self.mstar(year, month);
        floor_div_i64(self.params.q * m_star + self.params.beta_int(), self.params.p)
    }

    fn mstar_from_lunation(&self, n: i64) -> i64 {
        floor_div_i64(self.params.p * n - self.params.beta_int() - 1, self.params.q) + 1
    }

    fn cumul_month_from_lunation(&self, n: i64) -> i64 {
        self.mstar_from_lunation(n) + self.params.m0 as i64
    }
}

/// Floor division for plain `i64`, matching Python's `//` semantics
/// (rounds toward negative infinity, not zero).
fn floor_div_i64(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if (r != 0) && ((r < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

impl MonthEngine for ArithmeticMonthEngine {
    fn epoch_k(&self) -> i64 {
        self.params.epoch_k
    }

    fn get_lunations(&self, year: i32, month: u8) -> CalendarResult<Vec<i64>> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth);
        }
        let n_plus = self.n_plus(year, month);
        if self.is_trigger_label(year, month) {
            Ok(vec![n_plus - 1, n_plus])
        } else {
            Ok(vec![n_plus])
        }
    }

    fn get_month_info(&self, n: i64) -> MonthInfo {
        let cumul = self.cumul_month_from_lunation(n);
        let cumul_next = self.cumul_month_from_lunation(n + 1);
        let cumul_prev = self.cumul_month_from_lunation(n - 1);
        let month = amod12(cumul);
        let year = self.params.y0 + ((cumul - month as i64).div_euclid(12)) as i32;
        let leap_state = if cumul == cumul_next {
            1
        } else if cumul == cumul_prev {
            2
        } else {
            0
        };
        let first = self.first_lunation(year).unwrap_or(n);
        MonthInfo {
            year,
            month,
            leap_state,
            linear_month: n - first,
        }
    }

    fn debug_label(&self, year: i32, month: u8) -> CalendarResult<MonthDebugInfo> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth);
        }
        Ok(MonthDebugInfo {
            m_star: self.mstar(year, month),
            intercalation_index: self.intercalation_index(year, month),
            intercalation_index_internal: self.intercalation_index_internal(year, month),
            is_trigger_label: self.is_trigger_label(year, month),
            n_plus: self.n_plus(year, month),
        })
    }

    fn intercalation_index_traditional(&self, year: i32, month: u8, wrap: bool) -> CalendarResult<i64> {
        Ok(self.intercalation_index_traditional(year, month, wrap))
    }
}

impl ArithmeticMonthEngine {
    /// All residues that mark a trigger (leap-pair) label, useful for
    /// `explain`/debug output.
    pub fn trigger_set(&self) -> Vec<i64> {
        self.params.trigger_set()
    }
}

/// L4's solar-term-transit labeling: leap iff the lunation does not
/// cross into a new "sgang" (solar-term) index.
#[derive(Clone)]
pub struct AstronomicalMonthEngine {
    pub epoch_k: i64,
    pub y0: i32,
    pub m0: u8,
    pub sgang_base: Rat,
    /// True ecliptic longitude of the sun, in turns, evaluated at the
    /// mean tithi boundary of lunation `n`. Injected so `month` has no
    /// upward dependency on `day`.
    pub true_sun_longitude: std::rc::Rc<dyn Fn(i64) -> Rat>,
    pub first_lunation_of_y0: i64,
}

impl AstronomicalMonthEngine {
    pub fn sgang_index(&self, n: i64) -> i64 {
        let longitude = (self.true_sun_longitude)(n);
        math::floor_to_i64(&((&longitude - &self.sgang_base) * math::int(12)))
    }

    /// Smallest lunation index `n` with `sgang_index(n) >= target`.
    /// `sgang_index` is monotonically non-decreasing in `n` (the sun's
    /// true longitude only increases with time), so this gallops
    /// outward from `seed` to bracket the crossing, then bisects —
    /// correct for `n` arbitrarily far from `seed` rather than only
    /// within some fixed-size window around it.
    fn first_n_with_sgang_at_least(&self, target: i64, seed: i64) -> i64 {
        let mut lo = seed;
        let mut hi = seed;
        let mut step = 1i64;
        while self.sgang_index(hi) < target {
            lo = hi;
            hi += step;
            step *= 2;
        }
        step = 1;
        while self.sgang_index(lo) >= target {
            hi = lo;
            lo -= step;
            step *= 2;
        }
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.sgang_index(mid) >= target {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        hi
    }
}

impl MonthEngine for AstronomicalMonthEngine {
    fn epoch_k(&self) -> i64 {
        self.epoch_k
    }

    fn get_lunations(&self, year: i32, month: u8) -> CalendarResult<Vec<i64>> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth);
        }
        // Bracket the cumulative sgang range this year occupies by
        // galloping/bisecting from a coarse linear seed, not by
        // assuming the year's lunations sit in a fixed-size window
        // around it — the true lunation drifts from that seed by the
        // accumulated leap-month count the farther `year` is from `y0`.
        let base_sgang = self.sgang_index(self.first_lunation_of_y0);
        let years_since = (year - self.y0) as i64;
        let seed = self.first_lunation_of_y0 + 12 * years_since;
        let target_lo = base_sgang + 12 * years_since;
        let target_hi = target_lo + 12;

        let n_lo = self.first_n_with_sgang_at_least(target_lo, seed);
        let n_hi_exclusive = self.first_n_with_sgang_at_least(target_hi, n_lo);

        let mut hits = Vec::new();
        for probe in n_lo..n_hi_exclusive {
            let ordinal = amod12((self.sgang_index(probe) - base_sgang) + self.m0 as i64);
            if ordinal == month {
                hits.push(probe);
            }
        }
        if hits.is_empty() {
            return Err(CalendarError::InvalidLabel { year, month, is_leap: false });
        }
        Ok(hits)
    }

    fn get_month_info(&self, n: i64) -> MonthInfo {
        let cur = self.sgang_index(n);
        let next = self.sgang_index(n + 1);
        let prev = self.sgang_index(n - 1);
        let month = amod12((cur - self.sgang_index(self.first_lunation_of_y0)) + self.m0 as i64);
        let leap_state = if cur == next {
            1
        } else if cur == prev {
            2
        } else {
            0
        };
        // Year tracked by counting full 12-step sgang advances from
        // first_lunation_of_y0.
        let offset = cur - self.sgang_index(self.first_lunation_of_y0);
        let year = self.y0 + offset.div_euclid(12) as i32;
        MonthInfo {
            year,
            month,
            leap_state,
            linear_month: n - self.first_lunation_of_y0,
        }
    }

    fn debug_label(&self, year: i32, month: u8) -> CalendarResult<MonthDebugInfo> {
        let lunations = self.get_lunations(year, month)?;
        Ok(MonthDebugInfo {
            m_star: 0,
            intercalation_index: 0,
            intercalation_index_internal: 0,
            is_trigger_label: lunations.len() == 2,
            n_plus: *lunations.last().unwrap(),
        })
    }
}

/// Tagged dispatch over the two month engine families, so a
/// `CalendarEngine` can be generic over the behavior without needing a
/// trait object.
#[derive(Clone)]
pub enum MonthEngineKind {
    Arithmetic(ArithmeticMonthEngine),
    Astronomical(AstronomicalMonthEngine),
}

impl MonthEngine for MonthEngineKind {
    fn epoch_k(&self) -> i64 {
        match self {
            MonthEngineKind::Arithmetic(e) => e.epoch_k(),
            MonthEngineKind::Astronomical(e) => e.epoch_k(),
        }
    }

    fn get_lunations(&self, year: i32, month: u8) -> CalendarResult<Vec<i64>> {
        match self {
            MonthEngineKind::Arithmetic(e) => e.get_lunations(year, month),
            MonthEngineKind::Astronomical(e) => e.get_lunations(year, month),
        }
    }

    fn get_month_info(&self, n: i64) -> MonthInfo {
        match self {
            MonthEngineKind::Arithmetic(e) => e.get_month_info(n),
            MonthEngineKind::Astronomical(e) => e.get_month_info(n),
        }
    }

    fn debug_label(&self, year: i32, month: u8) -> CalendarResult<MonthDebugInfo> {
        match self {
            MonthEngineKind::Arithmetic(e) => e.debug_label(year, month),
            MonthEngineKind::Astronomical(e) => e.debug_label(year, month),
        }
    }

    fn intercalation_index_traditional(&self, year: i32, month: u8, wrap: bool) -> CalendarResult<i64> {
        match self {
            MonthEngineKind::Arithmetic(e) => e.intercalation_index_traditional(year, month, wrap),
            MonthEngineKind::Astronomical(e) => MonthEngine::intercalation_index_traditional(e, year, month, wrap),
        }
    }
}
