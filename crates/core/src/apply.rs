// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assigner::{auto_assign, reflow};
use crate::assignment::AssignmentMap;
use crate::command::{Command, SwapTarget};
use crate::error::CoreError;
use crate::state::{Action, LineupState, TransitionResult};
use matchday_domain::{
    DomainError, PlayerId, Scheme, Slot, SlotKey, SquadFormat, default_scheme, find_scheme,
};

/// Applies a command to a lineup, producing a new lineup.
///
/// This function is pure: the input state is never modified.
///
/// # Arguments
///
/// * `state` - The current lineup
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` with the new lineup and a summary of the action
/// * `Err(CoreError)` if the command violates a lineup rule
///
/// # Errors
///
/// Returns an error if:
/// - the player is not on the roster, or not selected when a slot is requested
/// - the slot does not belong to the active scheme
/// - no slot is free for `PlaceInFirstVacantSlot`
/// - the scheme is unknown, or the roster is too small for a new format
pub fn apply(state: &LineupState, command: Command) -> Result<TransitionResult, CoreError> {
    let mut next: LineupState = state.clone();

    let action: Action = match command {
        Command::SelectPlayer { player_id } => {
            require_on_roster(state, player_id)?;
            if !next.selection_mut().insert(player_id) {
                return Err(CoreError::PlayerAlreadySelected(player_id));
            }
            Action::new(
                String::from("SelectPlayer"),
                Some(format!("player={player_id}")),
            )
        }
        Command::ReturnToBench { player_id } => {
            require_on_roster(state, player_id)?;
            let vacated: Option<SlotKey> = next.assignments_mut().remove_player(player_id);
            next.selection_mut().remove(player_id);
            Action::new(
                String::from("ReturnToBench"),
                Some(match vacated {
                    Some(slot) => format!("player={player_id} vacated={slot}"),
                    None => format!("player={player_id}"),
                }),
            )
        }
        Command::AssignSlot { slot, player_id } => {
            require_selected(state, player_id)?;
            require_slot(state.scheme(), &slot)?;
            let evicted: Option<PlayerId> = next.assignments_mut().assign(slot.clone(), player_id);
            Action::new(
                String::from("AssignSlot"),
                Some(match evicted {
                    Some(previous) => format!("slot={slot} player={player_id} evicted={previous}"),
                    None => format!("slot={slot} player={player_id}"),
                }),
            )
        }
        Command::UnassignSlot { slot } => {
            require_slot(state.scheme(), &slot)?;
            let cleared: Option<PlayerId> = next.assignments_mut().unassign(&slot);
            Action::new(
                String::from("UnassignSlot"),
                Some(match cleared {
                    Some(player_id) => format!("slot={slot} player={player_id}"),
                    None => format!("slot={slot} empty"),
                }),
            )
        }
        Command::PlaceInFirstVacantSlot { player_id } => {
            require_selected(state, player_id)?;
            let slot: &Slot = state
                .open_slots()
                .into_iter()
                .next()
                .ok_or_else(|| CoreError::NoVacantSlot {
                    scheme: state.scheme().name.to_string(),
                })?;
            next.assignments_mut().assign(slot.key(), player_id);
            Action::new(
                String::from("PlaceInFirstVacantSlot"),
                Some(format!("slot={} player={player_id}", slot.key())),
            )
        }
        Command::AutoAssign => {
            let filled: AssignmentMap =
                auto_assign(state.scheme(), state.roster(), state.selection());
            let count: usize = filled.len();
            *next.assignments_mut() = filled;
            Action::new(
                String::from("AutoAssign"),
                Some(format!(
                    "filled={count} of {}",
                    state.format().players_on_field()
                )),
            )
        }
        Command::Swap { first, second } => swap(state, &mut next, &first, &second)?,
        Command::ChangeScheme { scheme } => {
            let target: &'static Scheme = find_scheme(state.format(), &scheme)?;
            let carried: AssignmentMap = reflow(state.assignments(), state.scheme(), target);
            let kept: usize = carried.len();
            next.set_scheme(target);
            *next.assignments_mut() = carried;
            Action::new(
                String::from("ChangeScheme"),
                Some(format!(
                    "from={} to={} kept={kept} of {}",
                    state.scheme().name,
                    target.name,
                    state.assignments().len()
                )),
            )
        }
        Command::ChangeFormat { format } => change_format(state, &mut next, format)?,
        Command::ClearFormation => {
            let cleared: usize = state.assignments().len();
            next.assignments_mut().clear();
            Action::new(
                String::from("ClearFormation"),
                Some(format!("cleared={cleared}")),
            )
        }
    };

    Ok(TransitionResult {
        new_state: next,
        action,
    })
}

fn require_on_roster(state: &LineupState, player_id: PlayerId) -> Result<(), CoreError> {
    if state.player(player_id).is_none() {
        return Err(CoreError::DomainViolation(DomainError::PlayerNotInRoster(
            player_id,
        )));
    }
    Ok(())
}

fn require_selected(state: &LineupState, player_id: PlayerId) -> Result<(), CoreError> {
    require_on_roster(state, player_id)?;
    if !state.selection().contains(player_id) {
        return Err(CoreError::PlayerNotSelected(player_id));
    }
    Ok(())
}

fn require_slot(scheme: &Scheme, slot: &SlotKey) -> Result<(), CoreError> {
    if !scheme.contains(slot) {
        return Err(CoreError::DomainViolation(DomainError::SlotNotInScheme {
            scheme: scheme.name.to_string(),
            slot: slot.to_string(),
        }));
    }
    Ok(())
}

/// Resolves a swap side to the slot it refers to, if any.
fn resolve_side(state: &LineupState, side: &SwapTarget) -> Result<Option<SlotKey>, CoreError> {
    match side {
        SwapTarget::Slot(slot) => {
            require_slot(state.scheme(), slot)?;
            Ok(Some(slot.clone()))
        }
        SwapTarget::Player(player_id) => {
            require_selected(state, *player_id)?;
            Ok(state.assignments().slot_of(*player_id).cloned())
        }
    }
}

/// Exchanges two positions.
///
/// Slot with slot trades occupants. Slot with an unassigned player puts the
/// player in the slot; the previous occupant stays selected. Two unassigned
/// players leave the lineup unchanged.
fn swap(
    state: &LineupState,
    next: &mut LineupState,
    first: &SwapTarget,
    second: &SwapTarget,
) -> Result<Action, CoreError> {
    let first_slot: Option<SlotKey> = resolve_side(state, first)?;
    let second_slot: Option<SlotKey> = resolve_side(state, second)?;

    let details: String = match (first_slot, second_slot) {
        (Some(a), Some(b)) => {
            let occupant_a: Option<PlayerId> = state.assignments().occupant(&a);
            let occupant_b: Option<PlayerId> = state.assignments().occupant(&b);
            let assignments: &mut AssignmentMap = next.assignments_mut();
            assignments.unassign(&a);
            assignments.unassign(&b);
            if let Some(player_id) = occupant_b {
                assignments.assign(a.clone(), player_id);
            }
            if let Some(player_id) = occupant_a {
                assignments.assign(b.clone(), player_id);
            }
            format!("slots {a} <-> {b}")
        }
        (Some(slot), None) => {
            let SwapTarget::Player(player_id) = second else {
                return Ok(unchanged_swap());
            };
            next.assignments_mut().assign(slot.clone(), *player_id);
            format!("player={player_id} into {slot}")
        }
        (None, Some(slot)) => {
            let SwapTarget::Player(player_id) = first else {
                return Ok(unchanged_swap());
            };
            next.assignments_mut().assign(slot.clone(), *player_id);
            format!("player={player_id} into {slot}")
        }
        (None, None) => return Ok(unchanged_swap()),
    };

    Ok(Action::new(String::from("Swap"), Some(details)))
}

fn unchanged_swap() -> Action {
    Action::new(String::from("Swap"), Some(String::from("unchanged")))
}

fn change_format(
    state: &LineupState,
    next: &mut LineupState,
    format: SquadFormat,
) -> Result<Action, CoreError> {
    if format == state.format() {
        return Ok(Action::new(
            String::from("ChangeFormat"),
            Some(format!("{format} unchanged")),
        ));
    }

    let required: usize = format.requirements().min_players;
    if !format.is_available_for(state.roster().len()) {
        return Err(CoreError::DomainViolation(DomainError::RosterTooSmall {
            format,
            required,
            actual: state.roster().len(),
        }));
    }

    let target: &'static Scheme = default_scheme(format);
    let carried: AssignmentMap = reflow(state.assignments(), state.scheme(), target);
    next.set_format(format);
    next.set_scheme(target);
    *next.assignments_mut() = carried;

    Ok(Action::new(
        String::from("ChangeFormat"),
        Some(format!(
            "from={} to={format} scheme={}",
            state.format(),
            target.name
        )),
    ))
}
