// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use matchday::{CoreError, LineupServiceError};
use matchday_domain::DomainError;
use matchday_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A lineup or league rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// Catalog integrity failures are internal: they can only come from a broken
/// build, never from a request.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPositionCategory(value) => ApiError::InvalidInput {
            field: String::from("position"),
            message: format!(
                "Unknown position '{value}'. Must be Goalkeeper, Defender, Midfielder or Forward"
            ),
        },
        DomainError::InvalidSquadFormat(value) => ApiError::InvalidInput {
            field: String::from("format"),
            message: format!("Unknown format '{value}'. Must be 5-a-side, 7-a-side or 11-a-side"),
        },
        DomainError::InvalidSlotRole(value) => ApiError::InvalidInput {
            field: String::from("slot"),
            message: format!("Unknown role '{value}'"),
        },
        DomainError::InvalidSlotKey(value) => ApiError::InvalidInput {
            field: String::from("slot"),
            message: format!("Slot '{value}' is not of the form ROLE-X-Y"),
        },
        DomainError::SchemeNotFound { format, scheme } => ApiError::ResourceNotFound {
            resource_type: String::from("Scheme"),
            message: format!("Scheme '{scheme}' does not exist for {format}"),
        },
        DomainError::SlotNotInScheme { scheme, slot } => ApiError::DomainRuleViolation {
            rule: String::from("slot_in_scheme"),
            message: format!("Slot {slot} is not part of scheme '{scheme}'"),
        },
        DomainError::PlayerNotInRoster(player_id) => ApiError::DomainRuleViolation {
            rule: String::from("player_on_roster"),
            message: format!("Player {player_id} is not on the team roster"),
        },
        DomainError::DuplicateRosterPlayer(player_id) => ApiError::Internal {
            message: format!("Roster lists player {player_id} more than once"),
        },
        DomainError::RosterTooSmall {
            format,
            required,
            actual,
        } => ApiError::DomainRuleViolation {
            rule: String::from("minimum_roster"),
            message: format!("{format} needs at least {required} players, the roster has {actual}"),
        },
        integrity @ (DomainError::SchemeSlotCountMismatch { .. }
        | DomainError::DuplicateSlotKey { .. }
        | DomainError::SchemeFormatMismatch { .. }
        | DomainError::SlotOutOfBounds { .. }) => ApiError::Internal {
            message: format!("Formation catalog is inconsistent: {integrity}"),
        },
        DomainError::InvalidLineupName(message) => ApiError::InvalidInput {
            field: String::from("name"),
            message,
        },
        DomainError::InvalidName { field, reason } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} {reason}"),
        },
        DomainError::InvalidJerseyNumber(number) => ApiError::InvalidInput {
            field: String::from("jersey_number"),
            message: format!("Jersey number {number} must be between 1 and 99"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::PlayerNotSelected(player_id) => ApiError::DomainRuleViolation {
            rule: String::from("selected_before_assigned"),
            message: format!("Player {player_id} must be selected before taking a slot"),
        },
        CoreError::PlayerAlreadySelected(player_id) => ApiError::DomainRuleViolation {
            rule: String::from("single_selection"),
            message: format!("Player {player_id} is already in the matchday squad"),
        },
        CoreError::NoVacantSlot { scheme } => ApiError::DomainRuleViolation {
            rule: String::from("vacant_slot"),
            message: format!("Every slot of scheme '{scheme}' is already filled"),
        },
        CoreError::TooManyStarters {
            format,
            starters,
            allowed,
        } => ApiError::DomainRuleViolation {
            rule: String::from("starter_limit"),
            message: format!("{format} allows {allowed} starters, the lineup has {starters}"),
        },
        CoreError::ConflictingAssignment { slot, player_id } => ApiError::InvalidInput {
            field: String::from("assignments"),
            message: format!("Player {player_id} and slot {slot} may each be assigned only once"),
        },
        CoreError::FormatMismatch { expected, actual } => ApiError::InvalidInput {
            field: String::from("format"),
            message: format!("Draft is {actual} but the lineup is keyed for {expected}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Constraint violations come from requests that clash with stored data;
/// everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(message) => ApiError::DomainRuleViolation {
            rule: String::from("unique"),
            message,
        },
        PersistenceError::ForeignKeyViolation(message) => ApiError::InvalidInput {
            field: String::from("reference"),
            message,
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::OperatorNotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

/// Translates a lineup service error into an API error.
#[must_use]
pub fn translate_service_error(err: LineupServiceError<PersistenceError>) -> ApiError {
    match err {
        LineupServiceError::Rejected(core_err) => translate_core_error(core_err),
        LineupServiceError::Repository(persistence_err) => {
            translate_persistence_error(persistence_err)
        }
    }
}
