// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The nine shipped calendar specs: five traditional table-based
//! lineages and four reform levels.

pub mod common;

pub mod bhutan;
pub mod karana;
pub mod mongol;
pub mod phugpa;
pub mod tsurphu;

pub mod reform_l1;
pub mod reform_l2;
pub mod reform_l3;
pub mod reform_l4;
