// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The programmatic surface: every function takes an explicit
//! `&Registry` and engine name, never a global singleton.

use crate::calendar::{CalendarEngine, CivilMonthMap, DayInfo, GregorianDate, TibetanDate, ToGregorianPolicy};
use crate::common::math::Rat;
use crate::common::{CalendarError, CalendarResult};
use crate::month::{MonthEngine, MonthInfo};
use crate::spec::{EngineId, Registry};

fn engine<'a>(reg: &'a Registry, name: &str) -> CalendarResult<&'a CalendarEngine> {
    reg.get(name)
}

pub fn list_engines(reg: &Registry) -> Vec<&'static str> {
    reg.list()
}

pub fn engine_info(reg: &Registry, name: &str) -> CalendarResult<EngineId> {
    Ok(engine(reg, name)?.id.clone())
}

pub fn day_info(reg: &Registry, name: &str, date: GregorianDate, debug: bool) -> CalendarResult<DayInfo> {
    engine(reg, name)?.day_info(date, debug)
}

pub fn to_gregorian(reg: &Registry, name: &str, tibetan: &TibetanDate, policy: ToGregorianPolicy) -> CalendarResult<Vec<GregorianDate>> {
    engine(reg, name)?.to_gregorian(tibetan, policy)
}

pub fn explain(reg: &Registry, name: &str, date: GregorianDate) -> CalendarResult<DayInfo> {
    engine(reg, name)?.explain(date)
}

/// The civil date of the first day (tithi 1) of a Tibetan year.
pub fn new_year_day(reg: &Registry, name: &str, tib_year: i32) -> CalendarResult<GregorianDate> {
    let e = engine(reg, name)?;
    let jdn = e.to_jdn(tib_year, 1, false, 1)?;
    Ok(GregorianDate::from_jdn(jdn))
}

/// `(first_day, last_day)` civil-date bounds of a lunar month.
pub fn month_bounds(reg: &Registry, name: &str, year: i32, month: u8, is_leap: bool) -> CalendarResult<(GregorianDate, GregorianDate)> {
    let e = engine(reg, name)?;
    let first = first_day_of_month(reg, name, year, month, is_leap)?;
    let (ny, nm, nl) = next_month(reg, name, year, month, is_leap)?;
    let next_first_jdn = e.to_jdn(ny, nm, nl, 1)?;
    Ok((first, GregorianDate::from_jdn(next_first_jdn - 1)))
}

pub fn first_day_of_month(reg: &Registry, name: &str, year: i32, month: u8, is_leap: bool) -> CalendarResult<GregorianDate> {
    let e = engine(reg, name)?;
    Ok(GregorianDate::from_jdn(e.to_jdn(year, month, is_leap, 1)?))
}

pub fn last_day_of_month(reg: &Registry, name: &str, year: i32, month: u8, is_leap: bool) -> CalendarResult<GregorianDate> {
    Ok(month_bounds(reg, name, year, month, is_leap)?.1)
}

/// The lunation label immediately following `(year, month, is_leap)`.
pub fn next_month(reg: &Registry, name: &str, year: i32, month: u8, is_leap: bool) -> CalendarResult<(i32, u8, bool)> {
    let e = engine(reg, name)?;
    let n_m = e.resolve_month_lunation(year, month, is_leap)?;
    let info = e.month.get_month_info(n_m + 1);
    Ok((info.year, info.month, leap_state_is_leap(e, info.leap_state)))
}

/// The lunation label immediately preceding `(year, month, is_leap)`.
pub fn prev_month(reg: &Registry, name: &str, year: i32, month: u8, is_leap: bool) -> CalendarResult<(i32, u8, bool)> {
    let e = engine(reg, name)?;
    let n_m = e.resolve_month_lunation(year, month, is_leap)?;
    let info = e.month.get_month_info(n_m - 1);
    Ok((info.year, info.month, leap_state_is_leap(e, info.leap_state)))
}

fn leap_state_is_leap(e: &CalendarEngine, leap_state: u8) -> bool {
    match leap_state {
        1 => e.leap_labeling == crate::calendar::LeapLabeling::FirstIsLeap,
        2 => e.leap_labeling == crate::calendar::LeapLabeling::SecondIsLeap,
        _ => false,
    }
}

/// `12` in an ordinary year, `13` when the year carries an intercalary
/// month.
pub fn months_in_year(reg: &Registry, name: &str, year: i32) -> CalendarResult<u8> {
    let e = engine(reg, name)?;
    let first = e.month.first_lunation(year)?;
    let mut count = 0u8;
    let mut n = first;
    loop {
        let info = e.month.get_month_info(n);
        if info.year != year {
            break;
        }
        count += 1;
        n += 1;
        if count > 13 {
            return Err(CalendarError::ImpossibleResult);
        }
    }
    Ok(count)
}

/// The number of distinct civil days a lunar month spans (usually 30,
/// fewer when a tithi is skipped, more when one is duplicated).
pub fn days_in_month(reg: &Registry, name: &str, year: i32, month: u8, is_leap: bool) -> CalendarResult<u8> {
    let e = engine(reg, name)?;
    let n_m = e.resolve_month_lunation(year, month, is_leap)?;
    let n_d = n_m + e.delta_k();
    let map = e.build_civil_month(n_d);
    Ok(map.len() as u8)
}

pub fn month_info(reg: &Registry, name: &str, year: i32, month: u8) -> CalendarResult<Vec<MonthInfo>> {
    let e = engine(reg, name)?;
    let lunations = e.month.get_lunations(year, month)?;
    Ok(lunations.into_iter().map(|n| e.month.get_month_info(n)).collect())
}

pub fn month_from_n(reg: &Registry, name: &str, n: i64) -> CalendarResult<MonthInfo> {
    Ok(engine(reg, name)?.month.get_month_info(n))
}

/// The true-date kinematic coordinate (days-since-J2000.0, TT) of a
/// given `(lunation, tithi)` pair.
pub fn true_date_dn(reg: &Registry, name: &str, n_d: i64, tithi: u8) -> CalendarResult<Rat> {
    use crate::day::DayEngine;
    let e = engine(reg, name)?;
    let x = crate::common::math::int(30 * n_d + tithi as i64);
    Ok(e.day.true_date(&x))
}

/// The Julian Day Number of the last civil day of lunar month `n_d`.
pub fn end_jd_dn(reg: &Registry, name: &str, n_d: i64) -> CalendarResult<i64> {
    let e = engine(reg, name)?;
    let map = e.build_civil_month(n_d);
    map.keys().next_back().copied().ok_or(CalendarError::ImpossibleResult)
}

pub fn civil_month_n(reg: &Registry, name: &str, n_d: i64) -> CalendarResult<CivilMonthMap> {
    Ok(engine(reg, name)?.build_civil_month(n_d))
}

/// The almanac-style intercalation index for `(year, month)`, only
/// available on a fixed-ratio engine; `EngineLacksCapability` otherwise.
pub fn intercalation_index_traditional(reg: &Registry, name: &str, year: i32, month: u8, wrap: bool) -> CalendarResult<i64> {
    engine(reg, name)?.month.intercalation_index_traditional(year, month, wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::build_registry;

    #[test]
    fn intercalation_index_traditional_succeeds_for_arithmetic_engines() {
        let reg = build_registry();
        let i = intercalation_index_traditional(&reg, "phugpa", 1987, 1, true).unwrap();
        assert!(i >= 0);
    }

    #[test]
    fn intercalation_index_traditional_is_unsupported_on_the_astronomical_engine() {
        let reg = build_registry();
        let err = intercalation_index_traditional(&reg, "reform-l4", 1987, 1, true).unwrap_err();
        assert!(matches!(err, CalendarError::EngineLacksCapability { .. }));
    }
}
