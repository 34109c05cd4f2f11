// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk slot assignment: the greedy auto-assigner and scheme-change reflow.

use crate::assignment::AssignmentMap;
use crate::selection::Selection;
use matchday_domain::{PlayerId, RosterPlayer, Scheme, Slot, SlotKey, SlotRole};
use std::collections::HashSet;

/// Fills a scheme from scratch with the greedy role-family matcher.
///
/// Slots are visited in declared order. Each takes the first selected player,
/// in roster order, who is not yet placed and whose category the slot role
/// accepts. Slots without such a player stay empty. There is no backtracking,
/// so an early match can leave a later slot unfilled.
///
/// The result depends only on its inputs, so repeated runs agree.
///
/// # Arguments
///
/// * `scheme` - The scheme to fill
/// * `roster` - The team roster, in roster order
/// * `selection` - The selected players
#[must_use]
pub fn auto_assign(
    scheme: &Scheme,
    roster: &[RosterPlayer],
    selection: &Selection,
) -> AssignmentMap {
    let candidates: Vec<&RosterPlayer> = roster
        .iter()
        .filter(|player| selection.contains(player.player_id))
        .collect();

    let mut used: HashSet<PlayerId> = HashSet::new();
    let mut assignments: AssignmentMap = AssignmentMap::new();

    for slot in scheme.slots {
        let pick: Option<PlayerId> = candidates
            .iter()
            .find(|player| !used.contains(&player.player_id) && slot.role.accepts(player.position))
            .map(|player| player.player_id);

        if let Some(player_id) = pick {
            used.insert(player_id);
            assignments.assign(slot.key(), player_id);
        }
    }

    assignments
}

/// Carries slot occupants from one scheme to another.
///
/// Occupants whose slot key also exists in `to` keep it. The others try the
/// roles listed by [`SlotRole::reflow_candidates`] for their old role, taking
/// the first free slot of the first candidate role that has one. Anyone left
/// over loses their slot.
///
/// # Arguments
///
/// * `assignments` - Occupancy under `from`
/// * `from` - The scheme being left
/// * `to` - The scheme being adopted
#[must_use]
pub fn reflow(assignments: &AssignmentMap, from: &Scheme, to: &Scheme) -> AssignmentMap {
    let mut next: AssignmentMap = AssignmentMap::new();
    let mut displaced: Vec<(SlotRole, PlayerId)> = Vec::new();

    for slot in from.slots {
        let key: SlotKey = slot.key();
        let Some(player_id) = assignments.occupant(&key) else {
            continue;
        };
        if to.contains(&key) {
            next.assign(key, player_id);
        } else {
            displaced.push((slot.role, player_id));
        }
    }

    for (role, player_id) in displaced {
        let target: Option<&Slot> = role.reflow_candidates().iter().find_map(|candidate| {
            to.slots
                .iter()
                .find(|slot| slot.role == *candidate && next.occupant(&slot.key()).is_none())
        });
        if let Some(slot) = target {
            next.assign(slot.key(), player_id);
        }
    }

    next
}
