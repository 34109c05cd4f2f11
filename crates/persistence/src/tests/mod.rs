// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod league_tests;
mod lineup_tests;
mod notification_tests;
mod operator_tests;

use crate::{NewMatch, NewPlayer, Persistence};
use matchday::{Command, LineupState, apply};
use matchday_domain::{ClubId, MatchId, PlayerId, PositionCategory, SquadFormat, TeamId};
use time::macros::date;

/// A club with one 5-a-side team and a registered squad.
pub struct SeededTeam {
    pub club_id: ClubId,
    pub team_id: TeamId,
    /// Player ids in registration order.
    pub players: Vec<PlayerId>,
}

pub fn create_test_player(
    first_name: &str,
    position: PositionCategory,
    jersey_number: Option<u8>,
) -> NewPlayer {
    NewPlayer {
        first_name: first_name.to_string(),
        last_name: String::from("Test"),
        position,
        jersey_number,
        photo_url: None,
    }
}

/// Registers 1 goalkeeper, 3 defenders, 2 midfielders and 2 forwards
/// wearing shirts 1 to 8.
pub fn seed_five_a_side_team(persistence: &mut Persistence) -> SeededTeam {
    use PositionCategory::{Defender, Forward, Goalkeeper, Midfielder};

    let club_id: ClubId = persistence.create_club("Harbour United").unwrap();
    let team_id: TeamId = persistence
        .create_team(club_id, "First Team", SquadFormat::FiveASide)
        .unwrap();

    let positions: [PositionCategory; 8] = [
        Goalkeeper, Defender, Defender, Defender, Midfielder, Midfielder, Forward, Forward,
    ];
    let players: Vec<PlayerId> = (1_u8..)
        .zip(positions)
        .map(|(jersey, position)| {
            persistence
                .register_player(
                    team_id,
                    &create_test_player(&format!("Player{jersey}"), position, Some(jersey)),
                )
                .unwrap()
        })
        .collect();

    SeededTeam {
        club_id,
        team_id,
        players,
    }
}

pub fn schedule_test_match(persistence: &mut Persistence, team_id: TeamId) -> MatchId {
    schedule_test_match_in(persistence, team_id, SquadFormat::FiveASide)
}

pub fn schedule_test_match_in(
    persistence: &mut Persistence,
    team_id: TeamId,
    format: SquadFormat,
) -> MatchId {
    persistence
        .schedule_match(&NewMatch {
            team_id,
            opponent: String::from("Riverside Rovers"),
            kickoff: date!(2026 - 03 - 14),
            format,
            venue: Some(String::from("Harbour Park")),
        })
        .unwrap()
}

/// Loads the team's roster, selects everyone and auto-assigns the default scheme.
pub fn create_full_lineup(persistence: &mut Persistence, team_id: TeamId) -> LineupState {
    create_full_lineup_in(persistence, team_id, SquadFormat::FiveASide)
}

pub fn create_full_lineup_in(
    persistence: &mut Persistence,
    team_id: TeamId,
    format: SquadFormat,
) -> LineupState {
    let roster = persistence.list_roster(team_id).unwrap();
    let ids: Vec<PlayerId> = roster.iter().map(|p| p.player_id).collect();
    let mut state: LineupState = LineupState::new(format, roster).unwrap();
    for player_id in ids {
        state = apply(&state, Command::SelectPlayer { player_id })
            .unwrap()
            .new_state;
    }
    apply(&state, Command::AutoAssign).unwrap().new_state
}
