// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club, team, roster and fixture queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use matchday_domain::{ClubId, MatchFixture, MatchId, PlayerId, RosterPlayer, TeamId};
use tracing::{debug, warn};

use crate::data_models::{ClubData, TeamData};
use crate::diesel_schema::{clubs, matches, players, teams};
use crate::error::PersistenceError;
use crate::queries::{parse_date, parse_format, parse_position};

#[derive(Queryable, Selectable)]
#[diesel(table_name = clubs)]
struct ClubRow {
    club_id: i64,
    name: String,
    created_at: String,
}

impl From<ClubRow> for ClubData {
    fn from(row: ClubRow) -> Self {
        Self {
            club_id: ClubId::new(row.club_id),
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = teams)]
struct TeamRow {
    team_id: i64,
    club_id: i64,
    name: String,
    default_format: String,
    created_at: String,
}

impl TeamRow {
    fn into_data(self) -> Result<TeamData, PersistenceError> {
        Ok(TeamData {
            team_id: TeamId::new(self.team_id),
            club_id: ClubId::new(self.club_id),
            name: self.name,
            default_format: parse_format("teams", &self.default_format)?,
            created_at: self.created_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = players)]
struct PlayerRow {
    player_id: i64,
    first_name: String,
    last_name: String,
    position: String,
    jersey_number: Option<i32>,
    photo_url: Option<String>,
}

impl PlayerRow {
    fn into_roster_player(self) -> Result<RosterPlayer, PersistenceError> {
        let jersey_number: Option<u8> = self.jersey_number.and_then(|n| {
            let narrowed: Option<u8> = u8::try_from(n).ok();
            if narrowed.is_none() {
                warn!(player_id = self.player_id, n, "Ignoring out-of-range jersey number");
            }
            narrowed
        });
        Ok(RosterPlayer {
            player_id: PlayerId::new(self.player_id),
            position: parse_position("players", &self.position)?,
            first_name: self.first_name,
            last_name: self.last_name,
            jersey_number,
            photo_url: self.photo_url,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = matches)]
struct MatchRow {
    match_id: i64,
    team_id: i64,
    opponent: String,
    kickoff_date: String,
    format: String,
    venue: Option<String>,
}

impl MatchRow {
    fn into_fixture(self) -> Result<MatchFixture, PersistenceError> {
        Ok(MatchFixture {
            match_id: MatchId::new(self.match_id),
            team_id: TeamId::new(self.team_id),
            opponent: self.opponent,
            kickoff: parse_date("matches", &self.kickoff_date)?,
            format: parse_format("matches", &self.format)?,
            venue: self.venue,
        })
    }
}

/// Retrieves a club by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_club(
    conn: &mut SqliteConnection,
    club_id: ClubId,
) -> Result<Option<ClubData>, PersistenceError> {
    debug!(%club_id, "Looking up club");

    let row: Option<ClubRow> = clubs::table
        .filter(clubs::club_id.eq(club_id.value()))
        .select(ClubRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(ClubData::from))
}

/// Lists all clubs by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_clubs(conn: &mut SqliteConnection) -> Result<Vec<ClubData>, PersistenceError> {
    let rows: Vec<ClubRow> = clubs::table
        .select(ClubRow::as_select())
        .order_by(clubs::name.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(ClubData::from).collect())
}

/// Retrieves a team by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored format is
/// unreadable.
pub fn get_team(
    conn: &mut SqliteConnection,
    team_id: TeamId,
) -> Result<Option<TeamData>, PersistenceError> {
    debug!(%team_id, "Looking up team");

    let row: Option<TeamRow> = teams::table
        .filter(teams::team_id.eq(team_id.value()))
        .select(TeamRow::as_select())
        .first(conn)
        .optional()?;

    row.map(TeamRow::into_data).transpose()
}

/// Lists a club's teams by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_teams(
    conn: &mut SqliteConnection,
    club_id: ClubId,
) -> Result<Vec<TeamData>, PersistenceError> {
    let rows: Vec<TeamRow> = teams::table
        .filter(teams::club_id.eq(club_id.value()))
        .select(TeamRow::as_select())
        .order_by(teams::name.asc())
        .load(conn)?;

    rows.into_iter().map(TeamRow::into_data).collect()
}

/// Lists a team's roster in roster order.
///
/// Roster order is shirt number ascending, players without a number last,
/// then player ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored position is
/// unreadable.
pub fn list_roster(
    conn: &mut SqliteConnection,
    team_id: TeamId,
) -> Result<Vec<RosterPlayer>, PersistenceError> {
    debug!(%team_id, "Loading roster");

    let rows: Vec<PlayerRow> = players::table
        .filter(players::team_id.eq(team_id.value()))
        .select(PlayerRow::as_select())
        .order_by((
            players::jersey_number.is_null().asc(),
            players::jersey_number.asc(),
            players::player_id.asc(),
        ))
        .load(conn)?;

    rows.into_iter().map(PlayerRow::into_roster_player).collect()
}

/// Returns the team a player is registered to.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_player_team(
    conn: &mut SqliteConnection,
    player_id: PlayerId,
) -> Result<Option<TeamId>, PersistenceError> {
    let team_id: Option<i64> = players::table
        .filter(players::player_id.eq(player_id.value()))
        .select(players::team_id)
        .first(conn)
        .optional()?;

    Ok(team_id.map(TeamId::new))
}

/// Retrieves a match by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is
/// unreadable.
pub fn get_match(
    conn: &mut SqliteConnection,
    match_id: MatchId,
) -> Result<Option<MatchFixture>, PersistenceError> {
    debug!(%match_id, "Looking up match");

    let row: Option<MatchRow> = matches::table
        .filter(matches::match_id.eq(match_id.value()))
        .select(MatchRow::as_select())
        .first(conn)
        .optional()?;

    row.map(MatchRow::into_fixture).transpose()
}

/// Lists a team's matches by kickoff date.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is
/// unreadable.
pub fn list_matches(
    conn: &mut SqliteConnection,
    team_id: TeamId,
) -> Result<Vec<MatchFixture>, PersistenceError> {
    let rows: Vec<MatchRow> = matches::table
        .filter(matches::team_id.eq(team_id.value()))
        .select(MatchRow::as_select())
        .order_by((matches::kickoff_date.asc(), matches::match_id.asc()))
        .load(conn)?;

    rows.into_iter().map(MatchRow::into_fixture).collect()
}
