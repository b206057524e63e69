// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod error;
pub mod math;

pub use error::{CalendarError, CalendarResult};
pub use math::Rat;

/// Julian Day Number of J2000.0 (2000-01-01T12:00 TT), the reference
/// epoch every engine's internal continuous-time coordinate is offset
/// from.
pub fn j2000_jd() -> Rat {
    math::int(2_451_545)
}
