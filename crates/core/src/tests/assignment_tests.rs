// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AssignmentMap;
use crate::tests::helpers::{pid, slot};
use matchday_domain::PlayerId;

#[test]
fn test_assign_places_player() {
    let mut map: AssignmentMap = AssignmentMap::new();
    let evicted: Option<PlayerId> = map.assign(slot("GK-50-88"), pid(1));

    assert_eq!(evicted, None);
    assert_eq!(map.occupant(&slot("GK-50-88")), Some(pid(1)));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_assign_moves_player_instead_of_duplicating() {
    let mut map: AssignmentMap = AssignmentMap::new();
    map.assign(slot("LB-30-65"), pid(2));
    map.assign(slot("RB-70-65"), pid(2));

    assert_eq!(map.occupant(&slot("LB-30-65")), None);
    assert_eq!(map.occupant(&slot("RB-70-65")), Some(pid(2)));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_assign_evicts_previous_occupant() {
    let mut map: AssignmentMap = AssignmentMap::new();
    map.assign(slot("LF-35-25"), pid(7));
    let evicted: Option<PlayerId> = map.assign(slot("LF-35-25"), pid(8));

    assert_eq!(evicted, Some(pid(7)));
    assert!(!map.contains_player(pid(7)));
}

#[test]
fn test_reassigning_same_slot_reports_no_eviction() {
    let mut map: AssignmentMap = AssignmentMap::new();
    map.assign(slot("LF-35-25"), pid(7));
    assert_eq!(map.assign(slot("LF-35-25"), pid(7)), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_assign_then_unassign_restores_map() {
    let mut map: AssignmentMap = AssignmentMap::new();
    map.assign(slot("GK-50-88"), pid(1));
    map.assign(slot("LB-30-65"), pid(2));
    let before: AssignmentMap = map.clone();

    map.assign(slot("RF-65-25"), pid(8));
    map.unassign(&slot("RF-65-25"));

    assert_eq!(map, before);
}

#[test]
fn test_remove_player_returns_vacated_slot() {
    let mut map: AssignmentMap = AssignmentMap::new();
    map.assign(slot("GK-50-88"), pid(1));

    assert_eq!(map.remove_player(pid(1)), Some(slot("GK-50-88")));
    assert_eq!(map.remove_player(pid(1)), None);
    assert!(map.is_empty());
}
