// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_player, schedule_test_match, seed_five_a_side_team};
use crate::{Persistence, PersistenceError, TeamData};
use matchday_domain::{
    ClubId, MatchFixture, MatchId, PlayerId, PositionCategory, RosterPlayer, SquadFormat, TeamId,
};
use time::macros::date;

#[test]
fn test_create_and_get_team() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let club_id: ClubId = persistence.create_club("Harbour United").unwrap();
    let team_id: TeamId = persistence
        .create_team(club_id, "Reserves", SquadFormat::SevenASide)
        .unwrap();

    let team: TeamData = persistence.get_team(team_id).unwrap().unwrap();
    assert_eq!(team.club_id, club_id);
    assert_eq!(team.name, "Reserves");
    assert_eq!(team.default_format, SquadFormat::SevenASide);
    assert_eq!(persistence.list_teams(club_id).unwrap().len(), 1);
}

#[test]
fn test_duplicate_club_name_is_unique_violation() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.create_club("Harbour United").unwrap();

    let result: Result<ClubId, PersistenceError> = persistence.create_club("Harbour United");
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_team_for_missing_club_is_foreign_key_violation() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<TeamId, PersistenceError> =
        persistence.create_team(ClubId::new(999), "Orphans", SquadFormat::FiveASide);
    assert!(matches!(result, Err(PersistenceError::ForeignKeyViolation(_))));
}

#[test]
fn test_missing_team_and_match_return_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    assert!(persistence.get_team(TeamId::new(42)).unwrap().is_none());
    assert!(persistence.get_match(MatchId::new(42)).unwrap().is_none());
    assert!(persistence.get_club(ClubId::new(42)).unwrap().is_none());
}

#[test]
fn test_roster_orders_by_jersey_then_id_with_unnumbered_last() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let club_id: ClubId = persistence.create_club("Harbour United").unwrap();
    let team_id: TeamId = persistence
        .create_team(club_id, "First Team", SquadFormat::FiveASide)
        .unwrap();

    let nine: PlayerId = persistence
        .register_player(
            team_id,
            &create_test_player("Nine", PositionCategory::Forward, Some(9)),
        )
        .unwrap();
    let unnumbered: PlayerId = persistence
        .register_player(
            team_id,
            &create_test_player("Trialist", PositionCategory::Midfielder, None),
        )
        .unwrap();
    let one: PlayerId = persistence
        .register_player(
            team_id,
            &create_test_player("Keeper", PositionCategory::Goalkeeper, Some(1)),
        )
        .unwrap();

    let roster: Vec<RosterPlayer> = persistence.list_roster(team_id).unwrap();
    let order: Vec<PlayerId> = roster.iter().map(|p| p.player_id).collect();

    assert_eq!(order, vec![one, nine, unnumbered]);
    assert_eq!(roster[0].position, PositionCategory::Goalkeeper);
    assert_eq!(roster[0].jersey_number, Some(1));
    assert_eq!(roster[2].jersey_number, None);
}

#[test]
fn test_duplicate_jersey_within_team_is_rejected() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);

    let result: Result<PlayerId, PersistenceError> = persistence.register_player(
        seeded.team_id,
        &create_test_player("Copycat", PositionCategory::Forward, Some(7)),
    );
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_get_player_team() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);

    assert_eq!(
        persistence.get_player_team(seeded.players[0]).unwrap(),
        Some(seeded.team_id)
    );
    assert_eq!(persistence.get_player_team(PlayerId::new(999)).unwrap(), None);
}

#[test]
fn test_schedule_and_get_match() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let match_id: MatchId = schedule_test_match(&mut persistence, seeded.team_id);

    let fixture: MatchFixture = persistence.get_match(match_id).unwrap().unwrap();
    assert_eq!(fixture.team_id, seeded.team_id);
    assert_eq!(fixture.opponent, "Riverside Rovers");
    assert_eq!(fixture.kickoff, date!(2026 - 03 - 14));
    assert_eq!(fixture.format, SquadFormat::FiveASide);
    assert_eq!(fixture.venue.as_deref(), Some("Harbour Park"));
}

#[test]
fn test_list_matches_orders_by_kickoff() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);

    let later: MatchId = schedule_test_match(&mut persistence, seeded.team_id);
    let earlier: MatchId = persistence
        .schedule_match(&crate::NewMatch {
            team_id: seeded.team_id,
            opponent: String::from("Northside"),
            kickoff: date!(2026 - 02 - 01),
            format: SquadFormat::FiveASide,
            venue: None,
        })
        .unwrap();

    let order: Vec<MatchId> = persistence
        .list_matches(seeded.team_id)
        .unwrap()
        .into_iter()
        .map(|fixture| fixture.match_id)
        .collect();
    assert_eq!(order, vec![earlier, later]);
}
