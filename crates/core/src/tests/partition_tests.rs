// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use crate::tests::helpers::{
    create_five_a_side_roster, create_selected_five_a_side, create_test_player, pid, run, slot,
};
use crate::{AssignmentMap, Command, LineupState, Selection, Tiers, partition};
use matchday_domain::{PlayerId, PositionCategory, RosterPlayer, SquadFormat};

fn subset_selection(roster: &[RosterPlayer], mask: u32) -> Selection {
    Selection::from_order(
        roster
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, p)| p.player_id),
    )
}

#[test]
fn test_tiers_cover_roster_and_are_disjoint_for_every_selection() {
    let roster: Vec<RosterPlayer> = create_five_a_side_roster();
    let everyone: HashSet<PlayerId> = roster.iter().map(|p| p.player_id).collect();

    for mask in 0..(1_u32 << roster.len()) {
        let selection: Selection = subset_selection(&roster, mask);
        let tiers: Tiers = partition(&roster, &selection, &AssignmentMap::new(), 5);

        let mut seen: HashSet<PlayerId> = HashSet::new();
        for id in tiers
            .bench
            .iter()
            .chain(tiers.available.iter())
            .chain(tiers.substitutes.iter())
        {
            assert!(seen.insert(*id), "player {id} in two tiers (mask {mask:b})");
        }
        assert_eq!(seen, everyone, "mask {mask:b}");
        assert!(tiers.available.len() <= 5);
    }
}

#[test]
fn test_tiers_with_assignments_cover_roster_minus_starters() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let tiers: Tiers = state.tiers();

    let starters: HashSet<PlayerId> = state.assignments().iter().map(|(_, p)| p).collect();
    let mut covered: HashSet<PlayerId> = tiers
        .bench
        .iter()
        .chain(tiers.available.iter())
        .chain(tiers.substitutes.iter())
        .copied()
        .collect();
    assert!(covered.is_disjoint(&starters));
    covered.extend(starters);
    assert_eq!(covered.len(), state.roster().len());
}

#[test]
fn test_empty_roster_gives_empty_tiers() {
    let tiers: Tiers = partition(&[], &Selection::new(), &AssignmentMap::new(), 11);
    assert_eq!(tiers, Tiers::default());
}

#[test]
fn test_bench_keeps_roster_order() {
    let roster: Vec<RosterPlayer> = create_five_a_side_roster();
    let selection: Selection = Selection::from_order([pid(2), pid(5)]);
    let tiers: Tiers = partition(&roster, &selection, &AssignmentMap::new(), 5);
    assert_eq!(
        tiers.bench,
        vec![pid(1), pid(3), pid(4), pid(6), pid(7), pid(8)]
    );
}

#[test]
fn test_available_follows_selection_order_not_roster_order() {
    let roster: Vec<RosterPlayer> = create_five_a_side_roster();
    let selection: Selection =
        Selection::from_order([pid(8), pid(7), pid(6), pid(5), pid(4), pid(3), pid(2)]);
    let tiers: Tiers = partition(&roster, &selection, &AssignmentMap::new(), 5);
    assert_eq!(
        tiers.available,
        vec![pid(8), pid(7), pid(6), pid(5), pid(4)]
    );
    assert_eq!(tiers.substitutes, vec![pid(3), pid(2)]);
}

#[test]
fn test_assigned_players_consume_open_places() {
    let roster: Vec<RosterPlayer> = create_five_a_side_roster();
    let selection: Selection = Selection::from_order((1..=8).map(pid));
    let mut assignments: AssignmentMap = AssignmentMap::new();
    assignments.assign(slot("GK-50-88"), pid(1));
    assignments.assign(slot("LB-30-65"), pid(2));

    let tiers: Tiers = partition(&roster, &selection, &assignments, 5);

    assert_eq!(tiers.available, vec![pid(3), pid(4), pid(5)]);
    assert_eq!(tiers.substitutes, vec![pid(6), pid(7), pid(8)]);
}

#[test]
fn test_auto_assigned_two_two_leaves_three_substitutes() {
    let state: LineupState = run(&create_selected_five_a_side(), Command::AutoAssign);
    let tiers: Tiers = state.tiers();

    assert!(tiers.bench.is_empty());
    assert!(tiers.available.is_empty());
    assert_eq!(tiers.substitutes, vec![pid(4), pid(5), pid(6)]);
}

#[test]
fn test_ninth_selection_with_full_field_becomes_substitute() {
    let mut roster: Vec<RosterPlayer> = create_five_a_side_roster();
    roster.push(create_test_player(9, PositionCategory::Midfielder));

    let state: LineupState =
        LineupState::with_scheme(SquadFormat::FiveASide, "2-2", roster).unwrap();
    let state: LineupState = (1..=8).fold(state, |current, id| {
        run(&current, Command::SelectPlayer { player_id: pid(id) })
    });
    let state: LineupState = run(&state, Command::AutoAssign);
    assert!(state.is_field_full());

    let state: LineupState = run(&state, Command::SelectPlayer { player_id: pid(9) });
    let tiers: Tiers = state.tiers();

    assert!(!tiers.available.contains(&pid(9)));
    assert_eq!(tiers.substitutes.last(), Some(&pid(9)));
    assert_eq!(tiers.substitutes.len(), 4);
}
