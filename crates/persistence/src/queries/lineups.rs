// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Saved lineup queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use matchday::{LineupEntry, LineupKey, LineupRecord};
use matchday_domain::{MatchId, PlayerId, SlotKey, TeamId};
use tracing::{debug, warn};

use crate::data_models::LineupSummary;
use crate::diesel_schema::{lineup_players, lineups};
use crate::error::PersistenceError;
use crate::queries::parse_format;

#[derive(Queryable, Selectable)]
#[diesel(table_name = lineups)]
struct LineupRow {
    lineup_id: i64,
    team_id: i64,
    match_id: Option<i64>,
    format: String,
    lineup_name: String,
    formation: String,
    updated_at: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = lineup_players)]
struct LineupPlayerRow {
    player_id: i64,
    position_on_field: String,
    position_x: Option<i32>,
    position_y: Option<i32>,
    jersey_number: Option<i32>,
    is_starter: i32,
    substitute_order: Option<i32>,
}

impl LineupPlayerRow {
    /// Rebuilds the slot key of a starter from its role and coordinates.
    ///
    /// Unreadable coordinates yield no slot; the player is then restored as
    /// selected without a position.
    fn slot_key(&self) -> Option<SlotKey> {
        if self.is_starter == 0 {
            return None;
        }
        let (Some(x), Some(y)) = (self.position_x, self.position_y) else {
            warn!(player_id = self.player_id, "Starter stored without coordinates");
            return None;
        };
        let raw: String = format!("{}-{x}-{y}", self.position_on_field);
        match SlotKey::parse(&raw) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(player_id = self.player_id, error = %e, "Unreadable stored slot");
                None
            }
        }
    }

    fn into_entry(self) -> LineupEntry {
        LineupEntry {
            player_id: PlayerId::new(self.player_id),
            slot_key: self.slot_key(),
            position_label: self.position_on_field,
            is_starter: self.is_starter != 0,
            substitute_order: self.substitute_order.and_then(|n| u32::try_from(n).ok()),
            jersey_number: self.jersey_number.and_then(|n| u8::try_from(n).ok()),
        }
    }
}

impl LineupRow {
    fn into_summary(self) -> Result<LineupSummary, PersistenceError> {
        Ok(LineupSummary {
            lineup_id: self.lineup_id,
            team_id: TeamId::new(self.team_id),
            match_id: self.match_id.map(MatchId::new),
            format: parse_format("lineups", &self.format)?,
            lineup_name: self.lineup_name,
            formation: self.formation,
            updated_at: self.updated_at,
        })
    }
}

fn find_lineup_row(
    conn: &mut SqliteConnection,
    key: &LineupKey,
) -> Result<Option<LineupRow>, PersistenceError> {
    let query = lineups::table
        .filter(lineups::team_id.eq(key.team_id.value()))
        .filter(lineups::format.eq(key.format.as_str()))
        .select(LineupRow::as_select())
        .into_boxed();

    let query = match key.match_id {
        Some(match_id) => query.filter(lineups::match_id.eq(match_id.value())),
        None => query.filter(lineups::match_id.is_null()),
    };

    Ok(query.first(conn).optional()?)
}

/// Returns the ID of the lineup stored under a key.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_lineup_id(
    conn: &mut SqliteConnection,
    key: &LineupKey,
) -> Result<Option<i64>, PersistenceError> {
    Ok(find_lineup_row(conn, key)?.map(|row| row.lineup_id))
}

/// Loads the lineup stored under a key with its entries.
///
/// Starters come first in insertion order, then substitutes by bench order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_lineup(
    conn: &mut SqliteConnection,
    key: &LineupKey,
) -> Result<Option<(i64, LineupRecord)>, PersistenceError> {
    let Some(row) = find_lineup_row(conn, key)? else {
        debug!(team_id = %key.team_id, format = %key.format, "No saved lineup");
        return Ok(None);
    };

    let entries: Vec<LineupPlayerRow> = lineup_players::table
        .filter(lineup_players::lineup_id.eq(row.lineup_id))
        .select(LineupPlayerRow::as_select())
        .order_by((
            lineup_players::is_starter.desc(),
            lineup_players::substitute_order.asc(),
            lineup_players::lineup_player_id.asc(),
        ))
        .load(conn)?;

    debug!(lineup_id = row.lineup_id, entries = entries.len(), "Loaded lineup");

    Ok(Some((
        row.lineup_id,
        LineupRecord {
            key: *key,
            name: row.lineup_name,
            scheme: row.formation,
            entries: entries.into_iter().map(LineupPlayerRow::into_entry).collect(),
        },
    )))
}

/// Lists a team's saved lineups, most recently updated first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_lineups(
    conn: &mut SqliteConnection,
    team_id: TeamId,
) -> Result<Vec<LineupSummary>, PersistenceError> {
    let rows: Vec<LineupRow> = lineups::table
        .filter(lineups::team_id.eq(team_id.value()))
        .select(LineupRow::as_select())
        .order_by((lineups::updated_at.desc(), lineups::lineup_id.desc()))
        .load(conn)?;

    rows.into_iter().map(LineupRow::into_summary).collect()
}
