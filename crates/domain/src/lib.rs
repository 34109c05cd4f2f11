// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod format;
mod role;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{Scheme, Slot, SlotKey, all_schemes, default_scheme, find_scheme, schemes};
pub use error::DomainError;
pub use format::{SquadFormat, SquadRequirements, available_formats, preferred_format};
pub use role::SlotRole;
pub use types::{ClubId, MatchFixture, MatchId, PlayerId, PositionCategory, RosterPlayer, TeamId};
pub use validation::{
    validate_catalog, validate_entity_name, validate_jersey_number, validate_lineup_name,
    validate_roster,
};
