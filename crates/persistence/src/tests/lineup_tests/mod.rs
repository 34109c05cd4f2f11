// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{
    create_full_lineup, create_full_lineup_in, create_test_player, schedule_test_match,
    schedule_test_match_in, seed_five_a_side_team,
};
use crate::{LineupSummary, Persistence};
use matchday::{
    Command, LineupKey, LineupRecord, LineupState, LoadedLineup, SaveOutcome, apply, load_lineup,
    save_lineup,
};
use matchday_domain::{MatchId, PlayerId, PositionCategory, SlotKey, SquadFormat};

#[test]
fn test_save_and_load_round_trips_slots_and_bench() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None);

    save_lineup(&mut persistence, &state, key, "Sunday League").unwrap();
    let loaded: LoadedLineup = load_lineup(&mut persistence, key).unwrap();

    assert_eq!(loaded.state.scheme().name, "2-2");
    assert_eq!(loaded.state.assignments(), state.assignments());
    assert_eq!(loaded.state.selection().len(), 8);
    assert_eq!(
        loaded.state.assignments().occupant(&SlotKey::parse("GK-50-88").unwrap()),
        Some(seeded.players[0])
    );

    let saved: LineupRecord = loaded.saved.unwrap();
    assert_eq!(saved.name, "Sunday League");
    assert_eq!(
        saved.substitute_ids(),
        vec![seeded.players[3], seeded.players[4], seeded.players[5]]
    );
}

#[test]
fn test_stored_entries_keep_labels_and_bench_order() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None);

    save_lineup(&mut persistence, &state, key, "Sunday League").unwrap();
    let (_, record) = persistence.find_lineup(&key).unwrap().unwrap();

    let keeper = record
        .entries
        .iter()
        .find(|entry| entry.player_id == seeded.players[0])
        .unwrap();
    assert!(keeper.is_starter);
    assert_eq!(keeper.position_label, "GK");
    assert_eq!(keeper.jersey_number, Some(1));

    let first_sub = record
        .entries
        .iter()
        .find(|entry| entry.substitute_order == Some(1))
        .unwrap();
    assert_eq!(first_sub.player_id, seeded.players[3]);
    assert_eq!(first_sub.position_label, "Defender");
    assert!(first_sub.slot_key.is_none());
}

#[test]
fn test_saving_twice_keeps_one_lineup_with_latest_content() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let match_id: MatchId = schedule_test_match(&mut persistence, seeded.team_id);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, Some(match_id));

    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);
    let first: SaveOutcome = save_lineup(&mut persistence, &state, key, "Draft").unwrap();

    let trimmed: LineupState = apply(
        &state,
        Command::ReturnToBench {
            player_id: seeded.players[5],
        },
    )
    .unwrap()
    .new_state;
    let second: SaveOutcome = save_lineup(&mut persistence, &trimmed, key, "Final").unwrap();

    assert_eq!(first.lineup_id, second.lineup_id);

    let summaries: Vec<LineupSummary> = persistence.list_lineups(seeded.team_id).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].lineup_name, "Final");
    assert_eq!(summaries[0].match_id, Some(match_id));

    let (_, record) = persistence.find_lineup(&key).unwrap().unwrap();
    assert_eq!(record.entries.len(), 7);
    assert!(
        !record
            .entries
            .iter()
            .any(|entry| entry.player_id == seeded.players[5])
    );
}

#[test]
fn test_resaving_seven_a_side_match_lineup_keeps_one_record() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    for (jersey, position) in [
        (9, PositionCategory::Defender),
        (10, PositionCategory::Midfielder),
        (11, PositionCategory::Forward),
    ] {
        persistence
            .register_player(
                seeded.team_id,
                &create_test_player(&format!("Player{jersey}"), position, Some(jersey)),
            )
            .unwrap();
    }
    let match_id: MatchId =
        schedule_test_match_in(&mut persistence, seeded.team_id, SquadFormat::SevenASide);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::SevenASide, Some(match_id));

    let state: LineupState =
        create_full_lineup_in(&mut persistence, seeded.team_id, SquadFormat::SevenASide);
    assert_eq!(state.scheme().name, "3-2-1");
    let first: SaveOutcome = save_lineup(&mut persistence, &state, key, "Early Pick").unwrap();

    let reshaped: LineupState = apply(
        &state,
        Command::ChangeScheme {
            scheme: String::from("2-3-1"),
        },
    )
    .unwrap()
    .new_state;
    let second: SaveOutcome = save_lineup(&mut persistence, &reshaped, key, "Final").unwrap();

    assert_eq!(first.lineup_id, second.lineup_id);
    let summaries: Vec<LineupSummary> = persistence.list_lineups(seeded.team_id).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].lineup_name, "Final");

    let loaded: LoadedLineup = load_lineup(&mut persistence, key).unwrap();
    assert_eq!(loaded.state.scheme().name, "2-3-1");
    assert_eq!(loaded.state.assignments(), reshaped.assignments());
    assert_eq!(loaded.saved.unwrap().entries.len(), 11);
}

#[test]
fn test_template_and_match_lineups_coexist() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let match_id: MatchId = schedule_test_match(&mut persistence, seeded.team_id);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);

    let template_key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None);
    let match_key: LineupKey =
        LineupKey::new(seeded.team_id, SquadFormat::FiveASide, Some(match_id));

    let template: SaveOutcome =
        save_lineup(&mut persistence, &state, template_key, "Template").unwrap();
    let for_match: SaveOutcome =
        save_lineup(&mut persistence, &state, match_key, "Matchday").unwrap();

    assert_ne!(template.lineup_id, for_match.lineup_id);
    assert_eq!(persistence.list_lineups(seeded.team_id).unwrap().len(), 2);

    let (_, stored_template) = persistence.find_lineup(&template_key).unwrap().unwrap();
    assert_eq!(stored_template.name, "Template");
    assert_eq!(stored_template.key.match_id, None);
}

#[test]
fn test_lineup_for_another_format_is_separate() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);

    save_lineup(
        &mut persistence,
        &state,
        LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None),
        "Fives",
    )
    .unwrap();

    let sevens: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::SevenASide, None);
    assert!(persistence.find_lineup(&sevens).unwrap().is_none());
}

#[test]
fn test_delete_lineup_removes_header_and_entries() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None);

    save_lineup(&mut persistence, &state, key, "Sunday League").unwrap();

    assert!(persistence.delete_lineup(&key).unwrap());
    assert!(persistence.find_lineup(&key).unwrap().is_none());
    assert!(!persistence.delete_lineup(&key).unwrap());
}

#[test]
fn test_failed_replace_keeps_previous_lineup() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None);

    save_lineup(&mut persistence, &state, key, "Original").unwrap();

    let (_, mut broken) = persistence.find_lineup(&key).unwrap().unwrap();
    broken.name = String::from("Broken");
    broken.entries[0].player_id = PlayerId::new(9_999);

    assert!(persistence.replace_lineup(&broken).is_err());

    let (_, kept) = persistence.find_lineup(&key).unwrap().unwrap();
    assert_eq!(kept.name, "Original");
    assert_eq!(kept.entries.len(), 8);
}

#[test]
fn test_load_without_saved_lineup_uses_default_scheme() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None);

    let loaded: LoadedLineup = load_lineup(&mut persistence, key).unwrap();

    assert!(loaded.saved.is_none());
    assert_eq!(loaded.state.scheme().name, "2-2");
    assert_eq!(loaded.state.roster().len(), 8);
    assert!(loaded.state.selection().is_empty());
}
