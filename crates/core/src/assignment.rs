// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{PlayerId, SlotKey};
use std::collections::BTreeMap;

/// Slot occupancy for the active scheme.
///
/// The map is injective: a player occupies at most one slot. `assign` enforces
/// this at write time by vacating the player's previous slot first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignmentMap {
    slots: BTreeMap<SlotKey, PlayerId>,
}

impl AssignmentMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the occupant of a slot.
    #[must_use]
    pub fn occupant(&self, slot: &SlotKey) -> Option<PlayerId> {
        self.slots.get(slot).copied()
    }

    /// Returns the slot a player occupies.
    #[must_use]
    pub fn slot_of(&self, player_id: PlayerId) -> Option<&SlotKey> {
        self.slots
            .iter()
            .find(|(_, occupant)| **occupant == player_id)
            .map(|(slot, _)| slot)
    }

    /// Returns whether the player occupies any slot.
    #[must_use]
    pub fn contains_player(&self, player_id: PlayerId) -> bool {
        self.slot_of(player_id).is_some()
    }

    /// Iterates occupied slots in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, PlayerId)> {
        self.slots.iter().map(|(slot, player)| (slot, *player))
    }

    /// Places a player in a slot.
    ///
    /// The player is first removed from any other slot. Any previous occupant
    /// of the target slot is evicted.
    ///
    /// # Returns
    ///
    /// The evicted occupant, if it was a different player.
    pub fn assign(&mut self, slot: SlotKey, player_id: PlayerId) -> Option<PlayerId> {
        if self.occupant(&slot) == Some(player_id) {
            return None;
        }
        self.remove_player(player_id);
        self.slots.insert(slot, player_id)
    }

    /// Clears a slot, returning its occupant.
    pub fn unassign(&mut self, slot: &SlotKey) -> Option<PlayerId> {
        self.slots.remove(slot)
    }

    /// Removes a player from whatever slot they occupy.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<SlotKey> {
        let slot: SlotKey = self.slot_of(player_id)?.clone();
        self.slots.remove(&slot);
        Some(slot)
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
