// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// The closed error taxonomy for every fallible operation in this crate.
///
/// Variants are grouped by the layer that raises them: the first block
/// are arithmetic preconditions on a single engine, the second are the
/// orchestrator/registry-level failures a caller of the public API can
/// hit when a label, engine name, or policy doesn't resolve uniquely.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarError {
    InvalidYear,
    InvalidMonth,
    InvalidDay,
    InvalidTithi,
    DivisionByZero,
    OutOfBounds,
    MixedRadixWrongSize,
    MixedRadixZeroBase,
    ImpossibleResult,

    /// A registry lookup named an engine id with no registered spec.
    UnknownEngine { name: String },
    /// The requested operation isn't supported by this engine's kind,
    /// e.g. `intercalation_index_traditional` on an astronomical engine.
    EngineLacksCapability { engine: String, capability: String },
    /// `(year, month, is_leap)` does not name any lunation under this
    /// engine's month labeling.
    InvalidLabel { year: i32, month: u8, is_leap: bool },
    /// A `to_gregorian` policy of `first`/`second`/`raise` was applied
    /// to a tithi with the wrong number of civil-day occurrences.
    AmbiguousOrMissingMatch { expected: &'static str, found: usize },
    /// The requested JDN or lunation falls outside the range this
    /// engine's parameters are valid for.
    OutOfRange { requested: i64, min: i64, max: i64 },
    /// An API call was made against a registry with no engines in it.
    RegistryNotInitialized,
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidYear => write!(f, "invalid year"),
            CalendarError::InvalidMonth => write!(f, "invalid month"),
            CalendarError::InvalidDay => write!(f, "invalid day"),
            CalendarError::InvalidTithi => write!(f, "invalid tithi"),
            CalendarError::DivisionByZero => write!(f, "division by zero"),
            CalendarError::OutOfBounds => write!(f, "out of bounds"),
            CalendarError::MixedRadixWrongSize => write!(f, "mixed radix slices have wrong size"),
            CalendarError::MixedRadixZeroBase => write!(f, "mixed radix base contains zero"),
            CalendarError::ImpossibleResult => write!(f, "impossible result"),
            CalendarError::UnknownEngine { name } => write!(f, "unknown engine '{name}'"),
            CalendarError::EngineLacksCapability { engine, capability } => {
                write!(f, "engine '{engine}' does not support '{capability}'")
            }
            CalendarError::InvalidLabel { year, month, is_leap } => write!(
                f,
                "no such month label: year {year}, month {month}, leap={is_leap}"
            ),
            CalendarError::AmbiguousOrMissingMatch { expected, found } => write!(
                f,
                "policy expected {expected} civil-day occurrence(s), found {found}"
            ),
            CalendarError::OutOfRange { requested, min, max } => write!(
                f,
                "{requested} is out of the supported range [{min}, {max}]"
            ),
            CalendarError::RegistryNotInitialized => write!(f, "engine registry not initialized"),
        }
    }
}

impl Error for CalendarError {}

pub type CalendarResult<T> = Result<T, CalendarError>;
