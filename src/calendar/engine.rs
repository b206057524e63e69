// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The orchestrator: binds a `MonthEngine` and a `DayEngine` together,
//! handling epoch synchronization and civil Julian Day boundaries.

use crate::calendar::civil_date::GregorianDate;
use crate::calendar::types::{CivilDayEntry, CivilMonthMap, DayInfo, DayStatus, TibetanDate, ToGregorianPolicy};
use crate::common::{self, math::Rat, CalendarError, CalendarResult};
use crate::day::{DayEngine, DayEngineKind};
use crate::month::{MonthEngine, MonthEngineKind, MonthInfo};
use crate::spec::EngineId;

#[derive(Debug, Clone)]
pub struct DayDebugInfo {
    pub m_star: i64,
    pub intercalation_index: i64,
    pub intercalation_index_internal: i64,
    pub is_trigger_label: bool,
    pub n_plus: i64,
    pub n_d: i64,
    pub linear_month: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeapLabeling {
    FirstIsLeap,
    SecondIsLeap,
}

pub struct CalendarEngine {
    pub id: EngineId,
    pub month: MonthEngineKind,
    pub day: DayEngineKind,
    pub leap_labeling: LeapLabeling,
    delta_k: i64,
}

impl CalendarEngine {
    pub fn new(id: EngineId, month: MonthEngineKind, day: DayEngineKind, leap_labeling: LeapLabeling) -> Self {
        let delta_k = month.epoch_k() - day.epoch_k();
        CalendarEngine { id, month, day, leap_labeling, delta_k }
    }

    /// The fixed offset between the month engine's and day engine's
    /// own lunation epochs (`n_day = n_month + delta_k`).
    pub fn delta_k(&self) -> i64 {
        self.delta_k
    }

    /// Resolves a `(year, month, is_leap)` label to its lunation index.
    pub fn resolve_month_lunation(&self, year: i32, month: u8, is_leap: bool) -> CalendarResult<i64> {
        let n_m_list = self.month.get_lunations(year, month)?;
        if n_m_list.len() == 1 {
            if is_leap {
                return Err(CalendarError::InvalidLabel { year, month, is_leap });
            }
            Ok(n_m_list[0])
        } else if self.leap_labeling == LeapLabeling::FirstIsLeap {
            Ok(if is_leap { n_m_list[0] } else { n_m_list[1] })
        } else {
            Ok(if is_leap { n_m_list[1] } else { n_m_list[0] })
        }
    }

    fn leap_state_to_is_leap(&self, leap_state: u8) -> bool {
        match leap_state {
            1 => self.leap_labeling == LeapLabeling::FirstIsLeap,
            2 => self.leap_labeling == LeapLabeling::SecondIsLeap,
            _ => false,
        }
    }

    /// Translates a full human calendar date into a local Julian Day
    /// Number.
    pub fn to_jdn(&self, year: i32, month: u8, is_leap: bool, tithi: u8) -> CalendarResult<i64> {
        let n_m = self.resolve_month_lunation(year, month, is_leap)?;
        let n_d = n_m + self.delta_k;
        let x = common::math::int(30 * n_d + tithi as i64);
        let t2000_civil = self.day.local_civil_date(&x);
        Ok(common::math::floor_to_i64(&(t2000_civil + common::j2000_jd())))
    }

    pub(crate) fn build_civil_month(&self, n_d: i64) -> CivilMonthMap {
        let mut hits: std::collections::BTreeMap<i64, Vec<u8>> = std::collections::BTreeMap::new();
        for d in 1..=30i64 {
            let x = common::math::int(30 * n_d + d);
            let t2000_civil = self.day.local_civil_date(&x);
            let j = common::math::floor_to_i64(&(t2000_civil + common::j2000_jd()));
            hits.entry(j).or_default().push(d as u8);
        }

        let first_t2000 = self.day.true_date(&common::math::int(30 * (n_d - 1) + 30));
        let first_jd = common::math::floor_to_i64(&(first_t2000 + common::j2000_jd())) + 1;

        let last_t2000 = self.day.true_date(&common::math::int(30 * n_d + 30));
        let last_jd = common::math::floor_to_i64(&(last_t2000 + common::j2000_jd()));

        let mut day_map = CivilMonthMap::new();
        let mut prev_label: Option<u8> = None;

        for j in first_jd..=last_jd {
            let ended = hits.get(&j);
            let entry = match ended {
                None => match prev_label {
                    None => CivilDayEntry { day: 1, repeated: false, skipped: false },
                    Some(p) => CivilDayEntry { day: p, repeated: true, skipped: false },
                },
                Some(labels) => {
                    let label = *labels.last().unwrap();
                    CivilDayEntry { day: label, repeated: false, skipped: labels.len() >= 2 }
                }
            };
            if !entry.repeated {
                prev_label = Some(entry.day);
            }
            day_map.insert(j, entry);
        }
        day_map
    }

    /// Translates a local Julian Day Number into a human calendar date.
    pub fn from_jdn(&self, jdn: i64) -> CalendarResult<ResolvedDate> {
        let approx_t2000 = Rat::from_integer((jdn - common::math::floor_to_i64(&common::j2000_jd())).into())
            + common::math::ratio(1, 2);
        let approx_x = self.day.get_x_from_t2000(&approx_t2000);
        let mut n_d = approx_x.div_euclid(30);

        let mut month_map = self.build_civil_month(n_d);
        if !month_map.contains_key(&jdn) {
            let min_j = *month_map.keys().next().unwrap();
            let max_j = *month_map.keys().next_back().unwrap();
            if jdn < min_j {
                n_d -= 1;
            } else if jdn > max_j {
                n_d += 1;
            }
            month_map = self.build_civil_month(n_d);
        }

        let entry = *month_map
            .get(&jdn)
            .ok_or(CalendarError::OutOfRange { requested: jdn, min: -1, max: -1 })?;

        let n_m = n_d - self.delta_k;
        let m_info: MonthInfo = self.month.get_month_info(n_m);
        let is_leap = self.leap_state_to_is_leap(m_info.leap_state);

        Ok(ResolvedDate {
            year: m_info.year,
            month: m_info.month,
            is_leap,
            day: entry.day,
            repeated: entry.repeated,
            skipped: entry.skipped,
            linear_month: m_info.linear_month,
        })
    }

    pub fn day_info(&self, d: GregorianDate, debug: bool) -> CalendarResult<DayInfo> {
        let jdn = d.to_jdn();
        let res = self.from_jdn(jdn)?;

        let tibetan = TibetanDate {
            engine: self.id.clone(),
            tib_year: res.year,
            month_no: res.month,
            is_leap_month: res.is_leap,
            tithi: res.day,
            occ: if res.repeated { 2 } else { 1 },
        };

        let debug_info = if debug {
            let label_debug = self.month.debug_label(res.year, res.month).ok();
            label_debug.map(|ld| DayDebugInfo {
                m_star: ld.m_star,
                intercalation_index: ld.intercalation_index,
                intercalation_index_internal: ld.intercalation_index_internal,
                is_trigger_label: ld.is_trigger_label,
                n_plus: ld.n_plus,
                n_d: res.linear_month,
                linear_month: res.linear_month,
            })
        } else {
            None
        };

        Ok(DayInfo {
            civil_date: d,
            engine: self.id.clone(),
            tibetan,
            status: if res.repeated { DayStatus::Duplicated } else { DayStatus::Normal },
            festival_tags: Vec::new(),
            debug: debug_info,
        })
    }

    pub fn to_gregorian(&self, t: &TibetanDate, policy: ToGregorianPolicy) -> CalendarResult<Vec<GregorianDate>> {
        let n_m = self.resolve_month_lunation(t.tib_year, t.month_no, t.is_leap_month)?;
        let n_d = n_m + self.delta_k;
        let month_map = self.build_civil_month(n_d);

        let matches: Vec<i64> = month_map
            .iter()
            .filter(|(_, entry)| entry.day == t.tithi)
            .map(|(jdn, _)| *jdn)
            .collect();

        match policy {
            ToGregorianPolicy::All => Ok(matches.into_iter().map(GregorianDate::from_jdn).collect()),
            ToGregorianPolicy::Occ => {
                let idx = (t.occ as usize).saturating_sub(1);
                matches
                    .get(idx)
                    .map(|&jdn| vec![GregorianDate::from_jdn(jdn)])
                    .ok_or(CalendarError::AmbiguousOrMissingMatch { expected: "occ-indexed", found: matches.len() })
            }
            ToGregorianPolicy::First => matches
                .first()
                .map(|&jdn| vec![GregorianDate::from_jdn(jdn)])
                .ok_or(CalendarError::AmbiguousOrMissingMatch { expected: ">=1", found: 0 }),
            ToGregorianPolicy::Second => matches
                .get(1)
                .map(|&jdn| vec![GregorianDate::from_jdn(jdn)])
                .ok_or(CalendarError::AmbiguousOrMissingMatch { expected: "2", found: matches.len() }),
            ToGregorianPolicy::Raise => {
                if matches.len() != 1 {
                    Err(CalendarError::AmbiguousOrMissingMatch { expected: "1", found: matches.len() })
                } else {
                    Ok(vec![GregorianDate::from_jdn(matches[0])])
                }
            }
        }
    }

    pub fn explain(&self, d: GregorianDate) -> CalendarResult<DayInfo> {
        self.day_info(d, true)
    }
}

pub struct ResolvedDate {
    pub year: i32,
    pub month: u8,
    pub is_leap: bool,
    pub day: u8,
    pub repeated: bool,
    pub skipped: bool,
    pub linear_month: i64,
}
