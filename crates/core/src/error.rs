// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{DomainError, PlayerId, SquadFormat};

/// Errors that can occur while editing or recording a lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The player must be selected before taking a slot.
    PlayerNotSelected(PlayerId),
    /// The player is already in the squad.
    PlayerAlreadySelected(PlayerId),
    /// Every slot of the scheme is occupied.
    NoVacantSlot {
        /// The active scheme.
        scheme: String,
    },
    /// The lineup has more starters than the format fields.
    TooManyStarters {
        /// The lineup's format.
        format: SquadFormat,
        /// Starters in the lineup.
        starters: usize,
        /// Players the format fields.
        allowed: usize,
    },
    /// A restored lineup places a player twice or fills a slot twice.
    ConflictingAssignment {
        /// The slot in conflict.
        slot: String,
        /// The player in conflict.
        player_id: PlayerId,
    },
    /// The lineup was built for a different format than the record key.
    FormatMismatch {
        /// The record key's format.
        expected: SquadFormat,
        /// The lineup's format.
        actual: SquadFormat,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PlayerNotSelected(player_id) => {
                write!(f, "Player {player_id} is not in the matchday squad")
            }
            Self::PlayerAlreadySelected(player_id) => {
                write!(f, "Player {player_id} is already in the matchday squad")
            }
            Self::NoVacantSlot { scheme } => {
                write!(f, "Every slot of scheme '{scheme}' is already filled")
            }
            Self::TooManyStarters {
                format,
                starters,
                allowed,
            } => write!(
                f,
                "{format} allows {allowed} starters but the lineup has {starters}"
            ),
            Self::ConflictingAssignment { slot, player_id } => write!(
                f,
                "Player {player_id} cannot take slot {slot}: the player or slot is already assigned"
            ),
            Self::FormatMismatch { expected, actual } => {
                write!(f, "Lineup is {actual} but the record is keyed for {expected}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// Errors from saving or loading a lineup through a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineupServiceError<E> {
    /// The lineup itself is invalid.
    Rejected(CoreError),
    /// The repository failed.
    Repository(E),
}

impl<E: std::fmt::Display> std::fmt::Display for LineupServiceError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "Lineup rejected: {err}"),
            Self::Repository(err) => write!(f, "Repository error: {err}"),
        }
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for LineupServiceError<E> {}

impl<E> From<CoreError> for LineupServiceError<E> {
    fn from(err: CoreError) -> Self {
        Self::Rejected(err)
    }
}
