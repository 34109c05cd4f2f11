// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_five_a_side_roster, create_selected_five_a_side, create_seven_a_side_roster, pid, run,
    select_all, slot,
};
use crate::{Command, CoreError, LineupState, Readiness, SwapTarget, TransitionResult, apply};
use matchday_domain::{DomainError, RosterPlayer, SquadFormat};

fn create_empty_two_two() -> LineupState {
    LineupState::with_scheme(SquadFormat::FiveASide, "2-2", create_five_a_side_roster()).unwrap()
}

#[test]
fn test_new_lineup_uses_default_scheme() {
    let state: LineupState =
        LineupState::new(SquadFormat::SevenASide, create_seven_a_side_roster()).unwrap();

    assert_eq!(state.scheme().name, "3-2-1");
    assert!(state.selection().is_empty());
    assert!(state.assignments().is_empty());
}

#[test]
fn test_new_lineup_rejects_duplicate_roster_entries() {
    let mut roster: Vec<RosterPlayer> = create_five_a_side_roster();
    roster.push(roster[0].clone());

    let result: Result<LineupState, CoreError> = LineupState::new(SquadFormat::FiveASide, roster);
    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DuplicateRosterPlayer(pid(1)))
    );
}

#[test]
fn test_unknown_scheme_is_rejected() {
    let result: Result<LineupState, CoreError> =
        LineupState::with_scheme(SquadFormat::FiveASide, "4-4-2", create_five_a_side_roster());
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::SchemeNotFound { .. }))
    ));
}

#[test]
fn test_select_player_moves_from_bench() {
    let state: LineupState = create_empty_two_two();
    let result: TransitionResult =
        apply(&state, Command::SelectPlayer { player_id: pid(3) }).unwrap();

    assert!(result.new_state.selection().contains(pid(3)));
    assert!(!result.new_state.tiers().bench.contains(&pid(3)));
    assert_eq!(result.action.name, "SelectPlayer");
    assert!(!state.selection().contains(pid(3)));
}

#[test]
fn test_select_player_twice_is_rejected() {
    let state: LineupState = run(
        &create_empty_two_two(),
        Command::SelectPlayer {
            player_id: pid(3),
        },
    );
    let result: Result<TransitionResult, CoreError> =
        apply(&state, Command::SelectPlayer { player_id: pid(3) });

    assert_eq!(result.unwrap_err(), CoreError::PlayerAlreadySelected(pid(3)));
}

#[test]
fn test_select_unknown_player_is_rejected() {
    let result: Result<TransitionResult, CoreError> = apply(
        &create_empty_two_two(),
        Command::SelectPlayer {
            player_id: pid(99),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::PlayerNotInRoster(pid(99)))
    );
}

#[test]
fn test_return_to_bench_vacates_slot() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let result: TransitionResult =
        apply(&state, Command::ReturnToBench { player_id: pid(2) }).unwrap();

    assert!(!result.new_state.selection().contains(pid(2)));
    assert_eq!(
        result.new_state.assignments().occupant(&slot("LB-30-65")),
        None
    );
    assert_eq!(
        result.action.details.as_deref(),
        Some("player=2 vacated=LB-30-65")
    );
}

#[test]
fn test_assign_slot_requires_selection() {
    let result: Result<TransitionResult, CoreError> = apply(
        &create_empty_two_two(),
        Command::AssignSlot {
            slot: slot("GK-50-88"),
            player_id: pid(1),
        },
    );

    assert_eq!(result.unwrap_err(), CoreError::PlayerNotSelected(pid(1)));
}

#[test]
fn test_assign_slot_outside_scheme_is_rejected() {
    let result: Result<TransitionResult, CoreError> = apply(
        &create_selected_five_a_side(),
        Command::AssignSlot {
            slot: slot("ST-50-20"),
            player_id: pid(7),
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::SlotNotInScheme { .. }))
    ));
}

#[test]
fn test_assign_slot_evicts_occupant_to_squad() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let result: TransitionResult = apply(
        &state,
        Command::AssignSlot {
            slot: slot("LF-35-25"),
            player_id: pid(5),
        },
    )
    .unwrap();
    let next: &LineupState = &result.new_state;

    assert_eq!(next.assignments().occupant(&slot("LF-35-25")), Some(pid(5)));
    assert!(next.selection().contains(pid(7)));
    assert!(!next.assignments().contains_player(pid(7)));
    assert_eq!(
        result.action.details.as_deref(),
        Some("slot=LF-35-25 player=5 evicted=7")
    );
}

#[test]
fn test_assign_slot_moves_player_between_slots() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let state: LineupState = run(
        &state,
        Command::AssignSlot {
            slot: slot("RF-65-25"),
            player_id: pid(7),
        },
    );

    assert_eq!(state.assignments().occupant(&slot("RF-65-25")), Some(pid(7)));
    assert_eq!(state.assignments().occupant(&slot("LF-35-25")), None);
    assert_eq!(state.assignments().len(), 4);
}

#[test]
fn test_unassign_slot_keeps_player_selected() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let state: LineupState = run(
        &state,
        Command::UnassignSlot {
            slot: slot("GK-50-88"),
        },
    );

    assert!(state.selection().contains(pid(1)));
    assert!(!state.assignments().contains_player(pid(1)));
    assert_eq!(state.tiers().available, vec![pid(1)]);
}

#[test]
fn test_place_in_first_vacant_slot_uses_slot_order() {
    let state: LineupState = create_selected_five_a_side();
    let state: LineupState = run(&state, Command::PlaceInFirstVacantSlot { player_id: pid(6) });
    let state: LineupState = run(&state, Command::PlaceInFirstVacantSlot { player_id: pid(5) });

    assert_eq!(state.assignments().occupant(&slot("GK-50-88")), Some(pid(6)));
    assert_eq!(state.assignments().occupant(&slot("LB-30-65")), Some(pid(5)));
}

#[test]
fn test_place_in_first_vacant_slot_fails_when_full() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let result: Result<TransitionResult, CoreError> =
        apply(&state, Command::PlaceInFirstVacantSlot { player_id: pid(4) });

    assert_eq!(
        result.unwrap_err(),
        CoreError::NoVacantSlot {
            scheme: String::from("2-2")
        }
    );
}

#[test]
fn test_swap_two_occupied_slots() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let state: LineupState = run(
        &state,
        Command::Swap {
            first: SwapTarget::Slot(slot("LB-30-65")),
            second: SwapTarget::Slot(slot("RF-65-25")),
        },
    );

    assert_eq!(state.assignments().occupant(&slot("LB-30-65")), Some(pid(8)));
    assert_eq!(state.assignments().occupant(&slot("RF-65-25")), Some(pid(2)));
    assert_eq!(state.assignments().len(), 5);
}

#[test]
fn test_swap_slot_with_empty_slot_moves_occupant() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let state: LineupState = run(
        &state,
        Command::UnassignSlot {
            slot: slot("RF-65-25"),
        },
    );
    let state: LineupState = run(
        &state,
        Command::Swap {
            first: SwapTarget::Slot(slot("LF-35-25")),
            second: SwapTarget::Slot(slot("RF-65-25")),
        },
    );

    assert_eq!(state.assignments().occupant(&slot("LF-35-25")), None);
    assert_eq!(state.assignments().occupant(&slot("RF-65-25")), Some(pid(7)));
}

#[test]
fn test_swap_substitute_into_slot() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let state: LineupState = run(
        &state,
        Command::Swap {
            first: SwapTarget::Player(pid(6)),
            second: SwapTarget::Player(pid(8)),
        },
    );

    assert_eq!(state.assignments().occupant(&slot("RF-65-25")), Some(pid(6)));
    assert!(state.selection().contains(pid(8)));
    assert!(state.tiers().substitutes.contains(&pid(8)));
}

#[test]
fn test_swap_two_unassigned_players_changes_nothing() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let result: TransitionResult = apply(
        &state,
        Command::Swap {
            first: SwapTarget::Player(pid(4)),
            second: SwapTarget::Player(pid(5)),
        },
    )
    .unwrap();

    assert_eq!(result.new_state, state);
    assert_eq!(result.action.details.as_deref(), Some("unchanged"));
}

#[test]
fn test_swap_with_unselected_player_is_rejected() {
    let state: LineupState = run(
        &create_empty_two_two(),
        Command::SelectPlayer {
            player_id: pid(1),
        },
    );
    let state: LineupState = run(&state, Command::AutoAssign);
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::Swap {
            first: SwapTarget::Slot(slot("GK-50-88")),
            second: SwapTarget::Player(pid(2)),
        },
    );

    assert_eq!(result.unwrap_err(), CoreError::PlayerNotSelected(pid(2)));
}

#[test]
fn test_change_scheme_unknown_name_is_rejected() {
    let result: Result<TransitionResult, CoreError> = apply(
        &create_selected_five_a_side(),
        Command::ChangeScheme {
            scheme: String::from("9-9-9"),
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::SchemeNotFound { .. }))
    ));
}

#[test]
fn test_change_format_adopts_default_scheme_and_reflows() {
    let state: LineupState = LineupState::with_scheme(
        SquadFormat::FiveASide,
        "2-2",
        create_seven_a_side_roster(),
    )
    .unwrap();
    let state: LineupState = run(&select_all(&state), Command::AutoAssign);
    let state: LineupState = run(
        &state,
        Command::ChangeFormat {
            format: SquadFormat::SevenASide,
        },
    );

    assert_eq!(state.format(), SquadFormat::SevenASide);
    assert_eq!(state.scheme().name, "3-2-1");
    assert_eq!(state.assignments().occupant(&slot("GK-50-88")), Some(pid(1)));
    assert_eq!(state.assignments().occupant(&slot("LB-25-68")), Some(pid(2)));
    assert_eq!(state.assignments().occupant(&slot("RB-75-68")), Some(pid(3)));
    assert_eq!(state.assignments().occupant(&slot("ST-50-20")), Some(pid(9)));
    assert!(!state.assignments().contains_player(pid(10)));
    assert_eq!(state.assignments().len(), 4);
    assert_eq!(state.selection().len(), 11);
}

#[test]
fn test_change_format_requires_large_enough_roster() {
    let result: Result<TransitionResult, CoreError> = apply(
        &create_selected_five_a_side(),
        Command::ChangeFormat {
            format: SquadFormat::SevenASide,
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::RosterTooSmall {
            format: SquadFormat::SevenASide,
            required: 11,
            actual: 8,
        })
    );
}

#[test]
fn test_change_to_same_format_is_unchanged() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let result: TransitionResult = apply(
        &state,
        Command::ChangeFormat {
            format: SquadFormat::FiveASide,
        },
    )
    .unwrap();

    assert_eq!(result.new_state, state);
}

#[test]
fn test_clear_formation_keeps_selection() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let state: LineupState = run(&state, Command::ClearFormation);

    assert!(state.assignments().is_empty());
    assert_eq!(state.selection().len(), 8);
    assert_eq!(state.tiers().available.len(), 5);
    assert_eq!(state.tiers().substitutes.len(), 3);
}

#[test]
fn test_every_assigned_player_is_selected_after_any_command() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let commands: Vec<Command> = vec![
        Command::ReturnToBench { player_id: pid(7) },
        Command::PlaceInFirstVacantSlot { player_id: pid(4) },
        Command::Swap {
            first: SwapTarget::Player(pid(5)),
            second: SwapTarget::Slot(slot("GK-50-88")),
        },
        Command::ChangeScheme {
            scheme: String::from("1-2-1"),
        },
        Command::AutoAssign,
    ];

    let mut current: LineupState = state;
    for command in commands {
        current = run(&current, command);
        for (key, player_id) in current.assignments().iter() {
            assert!(current.selection().contains(player_id));
            assert!(current.scheme().contains(key));
        }
    }
}

#[test]
fn test_readiness_reports_squad_completeness() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let readiness: Readiness = state.readiness();

    assert_eq!(readiness.starters, 5);
    assert_eq!(readiness.open_slots, 0);
    assert_eq!(readiness.substitutes, 3);
    assert_eq!(readiness.squad_size, 8);
    assert!(readiness.minimum_substitutes_met);
    assert!(!readiness.exceeds_recommended_squad);
}

#[test]
fn test_readiness_flags_short_bench() {
    let state: LineupState = run(
        &create_empty_two_two(),
        Command::SelectPlayer {
            player_id: pid(1),
        },
    );
    let readiness: Readiness = state.readiness();

    assert_eq!(readiness.starters, 0);
    assert_eq!(readiness.open_slots, 5);
    assert!(!readiness.minimum_substitutes_met);
}
