// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;
use std::fmt;

use crate::calendar::civil_date::GregorianDate;
use crate::spec::EngineId;

/// A fully resolved Tibetan-style date label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TibetanDate {
    pub engine: EngineId,
    pub tib_year: i32,
    pub month_no: u8,
    pub is_leap_month: bool,
    pub tithi: u8,
    /// `1` by default; `2` for the second civil-day occurrence of a
    /// duplicated-day label.
    pub occ: u8,
}

impl fmt::Display for TibetanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap_month { "leap-" } else { "" };
        write!(f, "{} {}{}-{}", self.tib_year, leap, self.month_no, self.tithi)?;
        if self.occ == 2 {
            write!(f, " (2nd)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Normal,
    Duplicated,
}

#[derive(Debug, Clone)]
pub struct DayInfo {
    pub civil_date: GregorianDate,
    pub engine: EngineId,
    pub tibetan: TibetanDate,
    pub status: DayStatus,
    pub festival_tags: Vec<String>,
    pub debug: Option<crate::calendar::engine::DayDebugInfo>,
}

impl fmt::Display for DayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.civil_date, self.tibetan)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDayEntry {
    pub day: u8,
    pub repeated: bool,
    pub skipped: bool,
}

/// JDN -> civil-day attributes for one lunation, built by the
/// orchestrator's civil-month-boundary algorithm.
pub type CivilMonthMap = BTreeMap<i64, CivilDayEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToGregorianPolicy {
    All,
    Occ,
    First,
    Second,
    Raise,
}
