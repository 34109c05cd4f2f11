// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{PlayerId, SlotKey, SquadFormat};

/// A command represents user intent as data only.
///
/// Commands are the only way to change a lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move a player from the bench into the squad.
    SelectPlayer {
        /// The player to select.
        player_id: PlayerId,
    },
    /// Move a player back to the bench, vacating any slot they hold.
    ReturnToBench {
        /// The player to deselect.
        player_id: PlayerId,
    },
    /// Put a selected player in a slot, evicting any occupant.
    AssignSlot {
        /// The target slot.
        slot: SlotKey,
        /// The player to place.
        player_id: PlayerId,
    },
    /// Clear a slot. The occupant stays selected.
    UnassignSlot {
        /// The slot to clear.
        slot: SlotKey,
    },
    /// Put a selected player in the first empty slot of the scheme.
    PlaceInFirstVacantSlot {
        /// The player to place.
        player_id: PlayerId,
    },
    /// Rebuild every slot with the greedy role-family matcher.
    AutoAssign,
    /// Exchange two positions.
    Swap {
        /// One side of the swap.
        first: SwapTarget,
        /// The other side of the swap.
        second: SwapTarget,
    },
    /// Switch to another scheme of the same format, reflowing occupants.
    ChangeScheme {
        /// The scheme name, e.g. `"4-4-2"`.
        scheme: String,
    },
    /// Switch format, adopting its default scheme and reflowing occupants.
    ChangeFormat {
        /// The new format.
        format: SquadFormat,
    },
    /// Empty every slot. The selection is kept.
    ClearFormation,
}

/// One side of a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapTarget {
    /// A slot, occupied or not.
    Slot(SlotKey),
    /// A selected player, wherever they currently are.
    Player(PlayerId),
}
