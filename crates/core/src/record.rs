// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Saved lineups.
//!
//! A lineup is stored as a flat list of entries under a `(team, format, match)`
//! key. Saving replaces whatever was stored under the key.

use crate::assignment::AssignmentMap;
use crate::error::CoreError;
use crate::selection::Selection;
use crate::state::LineupState;
use matchday_domain::{
    MatchId, PlayerId, RosterPlayer, Scheme, Slot, SlotKey, SquadFormat, TeamId,
    default_scheme, find_scheme, validate_lineup_name,
};
use tracing::warn;

/// Identifies a saved lineup. A `None` match is the team's template lineup
/// for the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineupKey {
    /// The team the lineup belongs to.
    pub team_id: TeamId,
    /// The squad format.
    pub format: SquadFormat,
    /// The match the lineup is for, if any.
    pub match_id: Option<MatchId>,
}

impl LineupKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(team_id: TeamId, format: SquadFormat, match_id: Option<MatchId>) -> Self {
        Self {
            team_id,
            format,
            match_id,
        }
    }
}

/// One player's place in a saved lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupEntry {
    /// The player.
    pub player_id: PlayerId,
    /// The slot, for starters.
    pub slot_key: Option<SlotKey>,
    /// Role code for starters, position category for substitutes.
    pub position_label: String,
    /// Whether the player starts.
    pub is_starter: bool,
    /// 1-based bench order, for substitutes.
    pub substitute_order: Option<u32>,
    /// The player's shirt number at save time.
    pub jersey_number: Option<u8>,
}

/// A saved lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupRecord {
    /// Where the lineup is stored.
    pub key: LineupKey,
    /// The lineup name.
    pub name: String,
    /// The scheme name.
    pub scheme: String,
    /// Starters in slot order, then substitutes in bench order.
    pub entries: Vec<LineupEntry>,
}

impl LineupRecord {
    /// Returns the starting entries.
    pub fn starters(&self) -> impl Iterator<Item = &LineupEntry> {
        self.entries.iter().filter(|entry| entry.is_starter)
    }

    /// Returns the substitute entries sorted by bench order.
    #[must_use]
    pub fn substitutes(&self) -> Vec<&LineupEntry> {
        let mut substitutes: Vec<&LineupEntry> =
            self.entries.iter().filter(|entry| !entry.is_starter).collect();
        substitutes.sort_by_key(|entry| entry.substitute_order.unwrap_or(u32::MAX));
        substitutes
    }

    /// Returns the starting player ids.
    #[must_use]
    pub fn starter_ids(&self) -> Vec<PlayerId> {
        self.starters().map(|entry| entry.player_id).collect()
    }

    /// Returns the substitute ids in bench order.
    #[must_use]
    pub fn substitute_ids(&self) -> Vec<PlayerId> {
        self.substitutes()
            .into_iter()
            .map(|entry| entry.player_id)
            .collect()
    }
}

impl LineupState {
    /// Flattens the lineup into a record for storage.
    ///
    /// Starters are listed in slot order with their slot key. Every selected
    /// player without a slot is listed as a substitute in selection order,
    /// numbered from 1.
    ///
    /// # Arguments
    ///
    /// * `key` - Where the record will be stored
    /// * `name` - The lineup name
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, the key's format differs from
    /// the lineup's, or there are more starters than the format fields.
    pub fn to_record(&self, key: LineupKey, name: &str) -> Result<LineupRecord, CoreError> {
        validate_lineup_name(name)?;

        if key.format != self.format() {
            return Err(CoreError::FormatMismatch {
                expected: key.format,
                actual: self.format(),
            });
        }

        let starters: Vec<(&'static Slot, PlayerId)> = self.starters();
        let allowed: usize = self.format().players_on_field();
        if starters.len() > allowed {
            return Err(CoreError::TooManyStarters {
                format: self.format(),
                starters: starters.len(),
                allowed,
            });
        }

        let jersey = |player_id: PlayerId| -> Option<u8> {
            self.player(player_id).and_then(|player| player.jersey_number)
        };

        let mut entries: Vec<LineupEntry> = starters
            .into_iter()
            .map(|(slot, player_id)| LineupEntry {
                player_id,
                slot_key: Some(slot.key()),
                position_label: slot.role.code().to_string(),
                is_starter: true,
                substitute_order: None,
                jersey_number: jersey(player_id),
            })
            .collect();

        let bench_order = self
            .selection()
            .iter()
            .filter(|player_id| !self.assignments().contains_player(*player_id));
        for (order, player_id) in (1_u32..).zip(bench_order) {
            let position_label: String = self
                .player(player_id)
                .map(|player| player.position.as_str().to_string())
                .unwrap_or_default();
            entries.push(LineupEntry {
                player_id,
                slot_key: None,
                position_label,
                is_starter: false,
                substitute_order: Some(order),
                jersey_number: jersey(player_id),
            });
        }

        Ok(LineupRecord {
            key,
            name: name.trim().to_string(),
            scheme: self.scheme().name.to_string(),
            entries,
        })
    }

    /// Rebuilds a lineup from a saved record.
    ///
    /// An unknown scheme falls back to the format's default. A starter whose
    /// slot is not in the scheme, or whose slot was already taken, stays
    /// selected without a slot. Entries for players no longer on the roster
    /// are dropped.
    ///
    /// # Arguments
    ///
    /// * `roster` - The current team roster
    /// * `record` - The saved lineup
    ///
    /// # Errors
    ///
    /// Returns an error if the roster lists a player twice.
    pub fn from_record(
        roster: Vec<RosterPlayer>,
        record: &LineupRecord,
    ) -> Result<Self, CoreError> {
        let format: SquadFormat = record.key.format;
        let scheme: &'static Scheme = find_scheme(format, &record.scheme).unwrap_or_else(|_| {
            warn!(
                scheme = %record.scheme,
                %format,
                "Saved scheme no longer exists, using default"
            );
            default_scheme(format)
        });

        let base: Self = Self::new(format, roster)?;
        let on_roster = |player_id: PlayerId| -> bool {
            let present: bool = base.player(player_id).is_some();
            if !present {
                warn!(%player_id, "Saved lineup references a player no longer on the roster");
            }
            present
        };

        let mut selection: Selection = Selection::new();
        let mut assignments: AssignmentMap = AssignmentMap::new();

        for entry in record.starters() {
            if !on_roster(entry.player_id) {
                continue;
            }
            selection.insert(entry.player_id);
            let Some(slot) = entry.slot_key.as_ref() else {
                continue;
            };
            if scheme.contains(slot) && assignments.occupant(slot).is_none() {
                assignments.assign(slot.clone(), entry.player_id);
            }
        }

        for entry in record.substitutes() {
            if on_roster(entry.player_id) {
                selection.insert(entry.player_id);
            }
        }

        Ok(Self::from_parts(
            format,
            scheme,
            base.into_roster(),
            selection,
            assignments,
        ))
    }
}
