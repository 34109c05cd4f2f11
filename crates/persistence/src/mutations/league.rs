// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club, team, player and fixture mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use matchday_domain::{ClubId, MatchId, PlayerId, SquadFormat, TeamId};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewMatch, NewPlayer};
use crate::diesel_schema::{clubs, matches, players, teams};
use crate::error::PersistenceError;
use crate::queries::format_date;

/// Creates a club.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the name is taken.
pub fn create_club(conn: &mut SqliteConnection, name: &str) -> Result<ClubId, PersistenceError> {
    diesel::insert_into(clubs::table)
        .values(clubs::name.eq(name))
        .execute(conn)?;

    let club_id: i64 = conn.get_last_insert_rowid()?;
    info!(club_id, name, "Club created");
    Ok(ClubId::new(club_id))
}

/// Creates a team within a club.
///
/// # Errors
///
/// Returns an error if the club does not exist or already has a team with
/// this name.
pub fn create_team(
    conn: &mut SqliteConnection,
    club_id: ClubId,
    name: &str,
    default_format: SquadFormat,
) -> Result<TeamId, PersistenceError> {
    diesel::insert_into(teams::table)
        .values((
            teams::club_id.eq(club_id.value()),
            teams::name.eq(name),
            teams::default_format.eq(default_format.as_str()),
        ))
        .execute(conn)?;

    let team_id: i64 = conn.get_last_insert_rowid()?;
    info!(team_id, %club_id, name, "Team created");
    Ok(TeamId::new(team_id))
}

/// Adds a player to a team's roster.
///
/// # Errors
///
/// Returns an error if the team does not exist or the shirt number is taken.
pub fn register_player(
    conn: &mut SqliteConnection,
    team_id: TeamId,
    player: &NewPlayer,
) -> Result<PlayerId, PersistenceError> {
    diesel::insert_into(players::table)
        .values((
            players::team_id.eq(team_id.value()),
            players::first_name.eq(&player.first_name),
            players::last_name.eq(&player.last_name),
            players::position.eq(player.position.as_str()),
            players::jersey_number.eq(player.jersey_number.map(i32::from)),
            players::photo_url.eq(player.photo_url.as_deref()),
        ))
        .execute(conn)?;

    let player_id: i64 = conn.get_last_insert_rowid()?;
    info!(
        player_id,
        %team_id,
        position = %player.position,
        jersey_number = ?player.jersey_number,
        "Player registered"
    );
    Ok(PlayerId::new(player_id))
}

/// Schedules a match for a team.
///
/// # Errors
///
/// Returns an error if the team does not exist.
pub fn schedule_match(
    conn: &mut SqliteConnection,
    fixture: &NewMatch,
) -> Result<MatchId, PersistenceError> {
    let kickoff_date: String = format_date(fixture.kickoff)?;

    diesel::insert_into(matches::table)
        .values((
            matches::team_id.eq(fixture.team_id.value()),
            matches::opponent.eq(&fixture.opponent),
            matches::kickoff_date.eq(&kickoff_date),
            matches::format.eq(fixture.format.as_str()),
            matches::venue.eq(fixture.venue.as_deref()),
        ))
        .execute(conn)?;

    let match_id: i64 = conn.get_last_insert_rowid()?;
    info!(
        match_id,
        team_id = %fixture.team_id,
        opponent = %fixture.opponent,
        kickoff = %kickoff_date,
        "Match scheduled"
    );
    Ok(MatchId::new(match_id))
}
