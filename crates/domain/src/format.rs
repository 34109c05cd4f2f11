// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Squad formats and their roster requirements.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The number of players per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SquadFormat {
    /// Five players on the field.
    #[serde(rename = "5-a-side", alias = "5s")]
    FiveASide,
    /// Seven players on the field.
    #[serde(rename = "7-a-side", alias = "7s")]
    SevenASide,
    /// Eleven players on the field.
    #[serde(rename = "11-a-side", alias = "11s")]
    ElevenASide,
}

/// Roster and squad sizes required to field a team in a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquadRequirements {
    /// Registered players a team needs before the format is offered.
    pub min_players: usize,
    /// Players that start on the field.
    pub players_on_field: usize,
    /// Substitutes a complete matchday squad carries.
    pub min_substitutes: usize,
    /// Suggested matchday squad size.
    pub recommended_squad: usize,
}

impl SquadFormat {
    /// All formats in ascending size.
    pub const ALL: [Self; 3] = [Self::FiveASide, Self::SevenASide, Self::ElevenASide];

    /// Returns the canonical name, e.g. `"7-a-side"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FiveASide => "5-a-side",
            Self::SevenASide => "7-a-side",
            Self::ElevenASide => "11-a-side",
        }
    }

    /// Returns the short key, e.g. `"7s"`.
    #[must_use]
    pub const fn short_key(&self) -> &'static str {
        match self {
            Self::FiveASide => "5s",
            Self::SevenASide => "7s",
            Self::ElevenASide => "11s",
        }
    }

    /// Returns the number of starting players.
    #[must_use]
    pub const fn players_on_field(&self) -> usize {
        self.requirements().players_on_field
    }

    /// Returns the roster and squad requirements for this format.
    #[must_use]
    pub const fn requirements(&self) -> SquadRequirements {
        match self {
            Self::FiveASide => SquadRequirements {
                min_players: 8,
                players_on_field: 5,
                min_substitutes: 3,
                recommended_squad: 8,
            },
            Self::SevenASide => SquadRequirements {
                min_players: 11,
                players_on_field: 7,
                min_substitutes: 4,
                recommended_squad: 11,
            },
            Self::ElevenASide => SquadRequirements {
                min_players: 14,
                players_on_field: 11,
                min_substitutes: 3,
                recommended_squad: 18,
            },
        }
    }

    /// Returns whether a roster of `roster_len` players can field this format.
    #[must_use]
    pub const fn is_available_for(&self, roster_len: usize) -> bool {
        roster_len >= self.requirements().min_players
    }
}

impl FromStr for SquadFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| {
                format.as_str().eq_ignore_ascii_case(needle)
                    || format.short_key().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::InvalidSquadFormat(s.to_string()))
    }
}

impl std::fmt::Display for SquadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns every format a roster of `roster_len` players can field.
///
/// # Arguments
///
/// * `roster_len` - The number of registered players
///
/// # Returns
///
/// The formats whose minimum roster is met, smallest first.
#[must_use]
pub fn available_formats(roster_len: usize) -> Vec<SquadFormat> {
    SquadFormat::ALL
        .into_iter()
        .filter(|format| format.is_available_for(roster_len))
        .collect()
}

/// Returns the largest format the roster can field, else 5-a-side.
#[must_use]
pub fn preferred_format(roster_len: usize) -> SquadFormat {
    available_formats(roster_len)
        .last()
        .copied()
        .unwrap_or(SquadFormat::FiveASide)
}
