// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment::AssignmentMap;
use crate::error::CoreError;
use crate::partition::{Tiers, partition};
use crate::selection::Selection;
use matchday_domain::{
    DomainError, PlayerId, RosterPlayer, Scheme, Slot, SlotKey, SquadFormat, SquadRequirements,
    default_scheme, find_scheme, validate_roster,
};

/// An in-progress lineup for one team in one format.
///
/// Invariants:
/// - every assigned player is selected
/// - every selected player is on the roster
/// - every occupied slot belongs to `scheme`
/// - no player occupies two slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupState {
    format: SquadFormat,
    scheme: &'static Scheme,
    roster: Vec<RosterPlayer>,
    selection: Selection,
    assignments: AssignmentMap,
}

impl LineupState {
    /// Creates an empty lineup using the format's default scheme.
    ///
    /// # Arguments
    ///
    /// * `format` - The squad format
    /// * `roster` - The team roster, in roster order
    ///
    /// # Errors
    ///
    /// Returns an error if the roster lists a player twice.
    pub fn new(format: SquadFormat, roster: Vec<RosterPlayer>) -> Result<Self, CoreError> {
        validate_roster(&roster)?;
        Ok(Self {
            format,
            scheme: default_scheme(format),
            roster,
            selection: Selection::new(),
            assignments: AssignmentMap::new(),
        })
    }

    /// Creates an empty lineup using a named scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme does not exist for the format or the
    /// roster lists a player twice.
    pub fn with_scheme(
        format: SquadFormat,
        scheme: &str,
        roster: Vec<RosterPlayer>,
    ) -> Result<Self, CoreError> {
        let scheme: &'static Scheme = find_scheme(format, scheme)?;
        let mut state: Self = Self::new(format, roster)?;
        state.scheme = scheme;
        Ok(state)
    }

    /// Rebuilds a lineup from client-held parts, checking every invariant.
    ///
    /// Unlike [`LineupState::from_record`], nothing is repaired: any
    /// inconsistency is an error.
    ///
    /// # Arguments
    ///
    /// * `format` - The squad format
    /// * `scheme` - The scheme name
    /// * `roster` - The team roster, in roster order
    /// * `selection` - Selected players in selection order
    /// * `assignments` - Occupied slots
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme is unknown, a player is not on the
    /// roster or selected twice, an assigned player is not selected, a slot
    /// is outside the scheme, or a slot or player appears in two assignments.
    pub fn restore(
        format: SquadFormat,
        scheme: &str,
        roster: Vec<RosterPlayer>,
        selection: &[PlayerId],
        assignments: &[(SlotKey, PlayerId)],
    ) -> Result<Self, CoreError> {
        let mut state: Self = Self::with_scheme(format, scheme, roster)?;

        for player_id in selection {
            if state.player(*player_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::PlayerNotInRoster(
                    *player_id,
                )));
            }
            if !state.selection.insert(*player_id) {
                return Err(CoreError::PlayerAlreadySelected(*player_id));
            }
        }

        for (slot, player_id) in assignments {
            if !state.selection.contains(*player_id) {
                return Err(CoreError::PlayerNotSelected(*player_id));
            }
            if !state.scheme.contains(slot) {
                return Err(CoreError::DomainViolation(DomainError::SlotNotInScheme {
                    scheme: state.scheme.name.to_string(),
                    slot: slot.to_string(),
                }));
            }
            if state.assignments.occupant(slot).is_some()
                || state.assignments.contains_player(*player_id)
            {
                return Err(CoreError::ConflictingAssignment {
                    slot: slot.to_string(),
                    player_id: *player_id,
                });
            }
            state.assignments.assign(slot.clone(), *player_id);
        }

        Ok(state)
    }

    /// Assembles a state from parts that already satisfy the invariants.
    pub(crate) const fn from_parts(
        format: SquadFormat,
        scheme: &'static Scheme,
        roster: Vec<RosterPlayer>,
        selection: Selection,
        assignments: AssignmentMap,
    ) -> Self {
        Self {
            format,
            scheme,
            roster,
            selection,
            assignments,
        }
    }

    /// Returns the squad format.
    #[must_use]
    pub const fn format(&self) -> SquadFormat {
        self.format
    }

    /// Returns the active scheme.
    #[must_use]
    pub const fn scheme(&self) -> &'static Scheme {
        self.scheme
    }

    /// Returns the roster in roster order.
    #[must_use]
    pub fn roster(&self) -> &[RosterPlayer] {
        &self.roster
    }

    /// Returns the selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the slot occupancy.
    #[must_use]
    pub const fn assignments(&self) -> &AssignmentMap {
        &self.assignments
    }

    /// Looks up a roster player.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&RosterPlayer> {
        self.roster.iter().find(|p| p.player_id == player_id)
    }

    /// Partitions the unassigned roster into tiers.
    #[must_use]
    pub fn tiers(&self) -> Tiers {
        partition(
            &self.roster,
            &self.selection,
            &self.assignments,
            self.format.players_on_field(),
        )
    }

    /// Returns the starters with their slots, in scheme slot order.
    #[must_use]
    pub fn starters(&self) -> Vec<(&'static Slot, PlayerId)> {
        self.scheme
            .slots
            .iter()
            .filter_map(|slot| {
                self.assignments
                    .occupant(&slot.key())
                    .map(|player| (slot, player))
            })
            .collect()
    }

    /// Returns the empty slots, in scheme slot order.
    #[must_use]
    pub fn open_slots(&self) -> Vec<&'static Slot> {
        self.scheme
            .slots
            .iter()
            .filter(|slot| self.assignments.occupant(&slot.key()).is_none())
            .collect()
    }

    /// Returns whether every slot is occupied.
    #[must_use]
    pub fn is_field_full(&self) -> bool {
        self.assignments.len() >= self.format.players_on_field()
    }

    /// Summarises how complete the matchday squad is.
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        let requirements: SquadRequirements = self.format.requirements();
        let starters: usize = self.assignments.len();
        let substitutes: usize = self.selection.len().saturating_sub(starters);
        Readiness {
            starters,
            open_slots: requirements.players_on_field.saturating_sub(starters),
            substitutes,
            squad_size: self.selection.len(),
            minimum_substitutes_met: substitutes >= requirements.min_substitutes,
            exceeds_recommended_squad: self.selection.len() > requirements.recommended_squad,
        }
    }

    pub(crate) fn into_roster(self) -> Vec<RosterPlayer> {
        self.roster
    }

    pub(crate) const fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub(crate) const fn assignments_mut(&mut self) -> &mut AssignmentMap {
        &mut self.assignments
    }

    pub(crate) const fn set_scheme(&mut self, scheme: &'static Scheme) {
        self.scheme = scheme;
    }

    pub(crate) const fn set_format(&mut self, format: SquadFormat) {
        self.format = format;
    }
}

/// Advisory completeness figures for a lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readiness {
    /// Occupied slots.
    pub starters: usize,
    /// Empty slots.
    pub open_slots: usize,
    /// Selected players without a slot.
    pub substitutes: usize,
    /// All selected players.
    pub squad_size: usize,
    /// Whether the format's minimum substitute count is reached.
    pub minimum_substitutes_met: bool,
    /// Whether the squad is larger than the format recommends.
    pub exceeds_recommended_squad: bool,
}

/// Represents the specific action performed by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AutoAssign`", "`Swap`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The result of applying a command to a lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The lineup after the command.
    pub new_state: LineupState,
    /// What the command did.
    pub action: Action,
}
