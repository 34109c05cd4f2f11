// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{SlotKey, schemes};
use crate::error::DomainError;
use crate::format::SquadFormat;
use crate::types::{PlayerId, RosterPlayer};
use std::collections::HashSet;

/// Longest accepted lineup name, in characters.
const MAX_LINEUP_NAME_LEN: usize = 80;

/// Longest accepted club, team or player name, in characters.
const MAX_ENTITY_NAME_LEN: usize = 100;

/// Validates the compiled formation catalog.
///
/// Every scheme must be filed under the format it declares, carry exactly one
/// slot per on-field player, keep its slots on the pitch, and never repeat a
/// slot key.
///
/// # Errors
///
/// Returns the first integrity violation found.
pub fn validate_catalog() -> Result<(), DomainError> {
    for format in SquadFormat::ALL {
        for scheme in schemes(format) {
            if scheme.format != format {
                return Err(DomainError::SchemeFormatMismatch {
                    scheme: scheme.name,
                    expected: format,
                    actual: scheme.format,
                });
            }

            if scheme.slots.len() != format.players_on_field() {
                return Err(DomainError::SchemeSlotCountMismatch {
                    scheme: scheme.name,
                    expected: format.players_on_field(),
                    actual: scheme.slots.len(),
                });
            }

            let mut seen: HashSet<SlotKey> = HashSet::new();
            for slot in scheme.slots {
                let key: SlotKey = slot.key();
                if slot.x > 100 || slot.y > 100 {
                    return Err(DomainError::SlotOutOfBounds {
                        scheme: scheme.name,
                        slot: key.to_string(),
                    });
                }
                if !seen.insert(key.clone()) {
                    return Err(DomainError::DuplicateSlotKey {
                        scheme: scheme.name,
                        slot: key.to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Validates that a roster lists each player once.
///
/// # Errors
///
/// Returns `DomainError::DuplicateRosterPlayer` for the first repeated id.
pub fn validate_roster(roster: &[RosterPlayer]) -> Result<(), DomainError> {
    let mut seen: HashSet<PlayerId> = HashSet::new();
    for player in roster {
        if !seen.insert(player.player_id) {
            return Err(DomainError::DuplicateRosterPlayer(player.player_id));
        }
    }
    Ok(())
}

/// Validates a lineup name.
///
/// # Errors
///
/// Returns an error if the name is blank or longer than 80 characters.
pub fn validate_lineup_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidLineupName(String::from(
            "Lineup name cannot be empty",
        )));
    }
    if name.trim().chars().count() > MAX_LINEUP_NAME_LEN {
        return Err(DomainError::InvalidLineupName(format!(
            "Lineup name cannot exceed {MAX_LINEUP_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates a club, team or player name.
///
/// # Arguments
///
/// * `field` - The name of the field, used in the error
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns an error if the value is blank or longer than 100 characters.
pub fn validate_entity_name(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidName {
            field,
            reason: String::from("cannot be empty"),
        });
    }
    if value.trim().chars().count() > MAX_ENTITY_NAME_LEN {
        return Err(DomainError::InvalidName {
            field,
            reason: format!("cannot exceed {MAX_ENTITY_NAME_LEN} characters"),
        });
    }
    Ok(())
}

/// Validates a shirt number and narrows it to `u8`.
///
/// # Errors
///
/// Returns an error if the number is outside 1..=99.
pub fn validate_jersey_number(number: i64) -> Result<u8, DomainError> {
    u8::try_from(number)
        .ok()
        .filter(|n| (1..=99).contains(n))
        .ok_or(DomainError::InvalidJerseyNumber(number))
}
