// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use matchday_domain::{ClubId, MatchId, PlayerId, SquadFormat, TeamId};
use matchday_persistence::Persistence;

use crate::{
    ApiError, ApplyDraftCommandsRequest, AuthenticatedActor, CreateClubRequest,
    CreateTeamRequest, DraftCommand, DraftLineup, DraftView, OpenDraftRequest,
    RegisterPlayerRequest, Role, ScheduleMatchRequest, apply_draft_commands, create_club,
    create_team, open_draft, register_player, schedule_match,
};

/// A password that satisfies the default policy.
pub const TEST_PASSWORD: &str = "Matchday-2026!";

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("ADMIN"), Role::Admin, None)
}

pub fn create_test_club_owner(club_id: ClubId) -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("OWNER"), Role::ClubOwner, Some(club_id))
}

/// A club with a 5-a-side team, its squad and one fixture.
pub struct TestLeague {
    pub club_id: ClubId,
    pub team_id: TeamId,
    /// Player ids in roster order: GK, D, D, D, M, M, F, F.
    pub players: Vec<PlayerId>,
    pub match_id: MatchId,
}

pub fn create_test_team(
    persistence: &mut Persistence,
    club_id: ClubId,
    name: &str,
    default_format: SquadFormat,
) -> TeamId {
    create_team(
        persistence,
        &CreateTeamRequest {
            club_id,
            name: name.to_string(),
            default_format,
        },
        &create_test_admin(),
    )
    .unwrap()
    .team_id
}

pub fn create_player_request(
    team_id: TeamId,
    first_name: &str,
    position: &str,
    jersey_number: Option<i64>,
) -> RegisterPlayerRequest {
    RegisterPlayerRequest {
        team_id,
        first_name: first_name.to_string(),
        last_name: String::from("Test"),
        position: position.to_string(),
        jersey_number,
        photo_url: None,
    }
}

pub fn create_match_request(
    team_id: TeamId,
    opponent: &str,
    kickoff: &str,
) -> ScheduleMatchRequest {
    ScheduleMatchRequest {
        team_id,
        opponent: opponent.to_string(),
        kickoff: kickoff.to_string(),
        format: None,
        venue: Some(String::from("Harbour Park")),
    }
}

/// Builds a league through the handlers, acting as admin.
pub fn setup_test_league(persistence: &mut Persistence) -> TestLeague {
    let admin: AuthenticatedActor = create_test_admin();

    let club_id: ClubId = create_club(
        persistence,
        &CreateClubRequest {
            name: String::from("Harbour United"),
        },
        &admin,
    )
    .unwrap()
    .club_id;
    let team_id: TeamId =
        create_test_team(persistence, club_id, "First Team", SquadFormat::FiveASide);

    let positions: [&str; 8] = [
        "Goalkeeper",
        "Defender",
        "Defender",
        "Defender",
        "Midfielder",
        "Midfielder",
        "Forward",
        "Forward",
    ];
    let players: Vec<PlayerId> = (1_i64..)
        .zip(positions)
        .map(|(jersey, position)| {
            let request: RegisterPlayerRequest = create_player_request(
                team_id,
                &format!("Player{jersey}"),
                position,
                Some(jersey),
            );
            register_player(persistence, &request, &admin).unwrap().player_id
        })
        .collect();

    let match_id: MatchId = schedule_match(
        persistence,
        &create_match_request(team_id, "Riverside Rovers", "2026-03-14"),
        &admin,
    )
    .unwrap()
    .fixture
    .match_id;

    TestLeague {
        club_id,
        team_id,
        players,
        match_id,
    }
}

pub fn open_template_draft(persistence: &mut Persistence, league: &TestLeague) -> DraftView {
    open_draft(
        persistence,
        &OpenDraftRequest {
            team_id: league.team_id,
            format: None,
            match_id: None,
        },
        &create_test_admin(),
    )
    .unwrap()
}

pub fn run_commands(
    persistence: &mut Persistence,
    draft: &DraftLineup,
    commands: Vec<DraftCommand>,
) -> Result<DraftView, ApiError> {
    apply_draft_commands(
        persistence,
        ApplyDraftCommandsRequest {
            draft: draft.clone(),
            commands,
        },
        &create_test_admin(),
    )
}

/// Selects the whole squad in roster order, then auto-assigns.
pub fn create_full_draft(persistence: &mut Persistence, league: &TestLeague) -> DraftView {
    let draft: DraftLineup = open_template_draft(persistence, league).draft;
    let mut commands: Vec<DraftCommand> = league
        .players
        .iter()
        .map(|player_id| DraftCommand::SelectPlayer {
            player_id: *player_id,
        })
        .collect();
    commands.push(DraftCommand::AutoAssign);
    run_commands(persistence, &draft, commands).unwrap()
}
