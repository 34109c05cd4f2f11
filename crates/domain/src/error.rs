// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::format::SquadFormat;
use crate::types::PlayerId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The position category name is not recognised.
    InvalidPositionCategory(String),
    /// The squad format name is not recognised.
    InvalidSquadFormat(String),
    /// The slot role code is not recognised.
    InvalidSlotRole(String),
    /// The slot key is not of the form `{role}-{x}-{y}`.
    InvalidSlotKey(String),
    /// No scheme with this name exists for the format.
    SchemeNotFound {
        /// The format that was searched.
        format: SquadFormat,
        /// The requested scheme name.
        scheme: String,
    },
    /// The slot does not belong to the active scheme.
    SlotNotInScheme {
        /// The active scheme.
        scheme: String,
        /// The requested slot key.
        slot: String,
    },
    /// The player is not on the team roster.
    PlayerNotInRoster(PlayerId),
    /// The roster lists the same player more than once.
    DuplicateRosterPlayer(PlayerId),
    /// The roster is too small to field the format.
    RosterTooSmall {
        /// The requested format.
        format: SquadFormat,
        /// Players the format requires.
        required: usize,
        /// Players on the roster.
        actual: usize,
    },
    /// A catalog scheme does not have one slot per on-field player.
    SchemeSlotCountMismatch {
        /// The scheme name.
        scheme: &'static str,
        /// The format's on-field count.
        expected: usize,
        /// Slots declared by the scheme.
        actual: usize,
    },
    /// A catalog scheme declares the same slot key twice.
    DuplicateSlotKey {
        /// The scheme name.
        scheme: &'static str,
        /// The repeated key.
        slot: String,
    },
    /// A catalog scheme is filed under the wrong format.
    SchemeFormatMismatch {
        /// The scheme name.
        scheme: &'static str,
        /// The format table the scheme is listed in.
        expected: SquadFormat,
        /// The format the scheme declares.
        actual: SquadFormat,
    },
    /// A catalog slot lies outside the pitch.
    SlotOutOfBounds {
        /// The scheme name.
        scheme: &'static str,
        /// The offending key.
        slot: String,
    },
    /// The lineup name is empty or too long.
    InvalidLineupName(String),
    /// A club, team or player name is empty or too long.
    InvalidName {
        /// The field that was validated.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// The jersey number is outside 1..=99.
    InvalidJerseyNumber(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPositionCategory(value) => {
                write!(f, "Invalid position category: '{value}'")
            }
            Self::InvalidSquadFormat(value) => write!(f, "Invalid squad format: '{value}'"),
            Self::InvalidSlotRole(value) => write!(f, "Invalid slot role: '{value}'"),
            Self::InvalidSlotKey(value) => write!(f, "Invalid slot key: '{value}'"),
            Self::SchemeNotFound { format, scheme } => {
                write!(f, "Scheme '{scheme}' does not exist for {format}")
            }
            Self::SlotNotInScheme { scheme, slot } => {
                write!(f, "Slot '{slot}' is not part of scheme '{scheme}'")
            }
            Self::PlayerNotInRoster(player_id) => {
                write!(f, "Player {player_id} is not on the roster")
            }
            Self::DuplicateRosterPlayer(player_id) => {
                write!(f, "Player {player_id} appears more than once on the roster")
            }
            Self::RosterTooSmall {
                format,
                required,
                actual,
            } => write!(
                f,
                "{format} requires at least {required} registered players, roster has {actual}"
            ),
            Self::SchemeSlotCountMismatch {
                scheme,
                expected,
                actual,
            } => write!(
                f,
                "Scheme '{scheme}' declares {actual} slots but the format fields {expected}"
            ),
            Self::DuplicateSlotKey { scheme, slot } => {
                write!(f, "Scheme '{scheme}' declares slot '{slot}' more than once")
            }
            Self::SchemeFormatMismatch {
                scheme,
                expected,
                actual,
            } => write!(
                f,
                "Scheme '{scheme}' is listed under {expected} but declares {actual}"
            ),
            Self::SlotOutOfBounds { scheme, slot } => {
                write!(f, "Scheme '{scheme}' places slot '{slot}' outside the pitch")
            }
            Self::InvalidLineupName(reason) => write!(f, "Invalid lineup name: {reason}"),
            Self::InvalidName { field, reason } => write!(f, "Invalid {field}: {reason}"),
            Self::InvalidJerseyNumber(number) => {
                write!(f, "Jersey number {number} must be between 1 and 99")
            }
        }
    }
}

impl std::error::Error for DomainError {}
