// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `league` — clubs, teams, rosters and fixtures
//! - `lineups` — saved lineups and their entries
//! - `notifications` — the player notification outbox
//! - `operators` — operators and sessions

pub mod league;
pub mod lineups;
pub mod notifications;
pub mod operators;

use matchday_domain::{PositionCategory, SquadFormat};
use time::Date;
use time::macros::format_description;

use crate::error::PersistenceError;

/// Reads a stored format name.
pub(crate) fn parse_format(
    table: &'static str,
    raw: &str,
) -> Result<SquadFormat, PersistenceError> {
    raw.parse::<SquadFormat>()
        .map_err(|e| PersistenceError::InvalidStoredValue {
            table,
            message: e.to_string(),
        })
}

/// Reads a stored position category.
pub(crate) fn parse_position(
    table: &'static str,
    raw: &str,
) -> Result<PositionCategory, PersistenceError> {
    raw.parse::<PositionCategory>()
        .map_err(|e| PersistenceError::InvalidStoredValue {
            table,
            message: e.to_string(),
        })
}

/// Reads a stored `YYYY-MM-DD` date.
pub(crate) fn parse_date(table: &'static str, raw: &str) -> Result<Date, PersistenceError> {
    Date::parse(raw, format_description!("[year]-[month]-[day]")).map_err(|e| {
        PersistenceError::InvalidStoredValue {
            table,
            message: format!("bad date '{raw}': {e}"),
        }
    })
}

/// Formats a date for storage as `YYYY-MM-DD`.
pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| PersistenceError::Other(format!("Failed to format date: {e}")))
}
