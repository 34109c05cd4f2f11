// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Squad partitioning.
//!
//! Every roster player is in exactly one of four places: a slot on the pitch,
//! the bench (not selected), available for the starting line-up (selected,
//! unassigned, within the open starting places), or the substitutes (selected,
//! unassigned, beyond them).

use crate::assignment::AssignmentMap;
use crate::selection::Selection;
use matchday_domain::{PlayerId, RosterPlayer};

/// The unassigned tiers of a squad.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tiers {
    /// Roster players not selected, in roster order.
    pub bench: Vec<PlayerId>,
    /// Selected, unassigned players who fit in the open starting places.
    pub available: Vec<PlayerId>,
    /// Selected, unassigned players beyond the open starting places.
    pub substitutes: Vec<PlayerId>,
}

/// Divides a squad into bench, available and substitute tiers.
///
/// Unassigned selected players are taken in selection order. The first
/// `on_field_cap - assigned` of them are available; the rest are substitutes.
/// Assigned players appear in no tier.
///
/// # Arguments
///
/// * `roster` - The team roster, in roster order
/// * `selection` - The selected players
/// * `assignments` - The current slot occupancy
/// * `on_field_cap` - The format's on-field player count
#[must_use]
pub fn partition(
    roster: &[RosterPlayer],
    selection: &Selection,
    assignments: &AssignmentMap,
    on_field_cap: usize,
) -> Tiers {
    let bench: Vec<PlayerId> = roster
        .iter()
        .map(|player| player.player_id)
        .filter(|id| !selection.contains(*id))
        .collect();

    let unassigned: Vec<PlayerId> = selection
        .iter()
        .filter(|id| !assignments.contains_player(*id))
        .collect();

    let open_places: usize = on_field_cap.saturating_sub(assignments.len());
    let split: usize = open_places.min(unassigned.len());
    let (available, substitutes) = unassigned.split_at(split);

    Tiers {
        bench,
        available: available.to_vec(),
        substitutes: substitutes.to_vec(),
    }
}
