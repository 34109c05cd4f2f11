// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lineup mutations.
//!
//! A lineup is one header row in `lineups` plus one `lineup_players` row per
//! squad member. Starters store their slot as role and pitch coordinates;
//! substitutes store their position category and bench order.

use diesel::SqliteConnection;
use diesel::prelude::*;
use matchday::{LineupEntry, LineupKey, LineupRecord};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{lineup_players, lineups};
use crate::error::PersistenceError;
use crate::queries::lineups::find_lineup_id;

#[derive(Insertable)]
#[diesel(table_name = lineup_players)]
struct NewLineupPlayer<'a> {
    lineup_id: i64,
    player_id: i64,
    position_on_field: &'a str,
    position_x: Option<i32>,
    position_y: Option<i32>,
    jersey_number: Option<i32>,
    is_starter: i32,
    substitute_order: Option<i32>,
}

impl<'a> NewLineupPlayer<'a> {
    fn from_entry(lineup_id: i64, entry: &'a LineupEntry) -> Result<Self, PersistenceError> {
        let (position_on_field, position_x, position_y): (&str, Option<i32>, Option<i32>) =
            match &entry.slot_key {
                Some(slot) => {
                    let (role, x, y) = slot
                        .parts()
                        .map_err(|e| PersistenceError::Other(format!("Cannot store slot: {e}")))?;
                    (role.code(), Some(i32::from(x)), Some(i32::from(y)))
                }
                None => (entry.position_label.as_str(), None, None),
            };

        Ok(Self {
            lineup_id,
            player_id: entry.player_id.value(),
            position_on_field,
            position_x,
            position_y,
            jersey_number: entry.jersey_number.map(i32::from),
            is_starter: i32::from(entry.is_starter),
            substitute_order: entry
                .substitute_order
                .and_then(|order| i32::try_from(order).ok()),
        })
    }
}

/// Stores a lineup under its key, replacing any lineup already there.
///
/// The header is updated in place when one exists, so the lineup keeps its
/// ID. Old entries are deleted and the new ones inserted in the same
/// transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `record` - The lineup to store
///
/// # Errors
///
/// Returns an error if any statement fails; nothing is written in that case.
pub fn replace_lineup(
    conn: &mut SqliteConnection,
    record: &LineupRecord,
) -> Result<i64, PersistenceError> {
    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let lineup_id: i64 = match find_lineup_id(conn, &record.key)? {
            Some(existing) => {
                diesel::update(lineups::table)
                    .filter(lineups::lineup_id.eq(existing))
                    .set((
                        lineups::lineup_name.eq(&record.name),
                        lineups::formation.eq(&record.scheme),
                        lineups::updated_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                            "CURRENT_TIMESTAMP",
                        )),
                    ))
                    .execute(conn)?;

                let removed: usize = diesel::delete(lineup_players::table)
                    .filter(lineup_players::lineup_id.eq(existing))
                    .execute(conn)?;
                debug!(lineup_id = existing, removed, "Cleared previous lineup entries");
                existing
            }
            None => {
                diesel::insert_into(lineups::table)
                    .values((
                        lineups::team_id.eq(record.key.team_id.value()),
                        lineups::match_id.eq(record.key.match_id.map(|id| id.value())),
                        lineups::format.eq(record.key.format.as_str()),
                        lineups::lineup_name.eq(&record.name),
                        lineups::formation.eq(&record.scheme),
                    ))
                    .execute(conn)?;
                conn.get_last_insert_rowid()?
            }
        };

        let rows: Vec<NewLineupPlayer<'_>> = record
            .entries
            .iter()
            .map(|entry| NewLineupPlayer::from_entry(lineup_id, entry))
            .collect::<Result<_, _>>()?;

        if !rows.is_empty() {
            diesel::insert_into(lineup_players::table)
                .values(&rows)
                .execute(conn)?;
        }

        info!(
            lineup_id,
            team_id = %record.key.team_id,
            format = %record.key.format,
            match_id = ?record.key.match_id,
            entries = rows.len(),
            "Lineup stored"
        );
        Ok(lineup_id)
    })
}

/// Deletes the lineup stored under a key.
///
/// # Returns
///
/// Whether a lineup was deleted.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_lineup(
    conn: &mut SqliteConnection,
    key: &LineupKey,
) -> Result<bool, PersistenceError> {
    let Some(lineup_id) = find_lineup_id(conn, key)? else {
        return Ok(false);
    };

    let deleted: usize = diesel::delete(lineups::table)
        .filter(lineups::lineup_id.eq(lineup_id))
        .execute(conn)?;

    info!(lineup_id, "Lineup deleted");
    Ok(deleted > 0)
}
