// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::format::SquadFormat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Declares an integer identifier newtype backed by a database row id.
macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw row id.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Identifies a player on a team roster.
    PlayerId
);
row_id!(
    /// Identifies a team within a club.
    TeamId
);
row_id!(
    /// Identifies a club.
    ClubId
);
row_id!(
    /// Identifies a scheduled match.
    MatchId
);

/// The declared playing position of a roster player.
///
/// Each player declares exactly one category. Slot roles decide which
/// categories they accept (see [`crate::SlotRole::accepts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCategory {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionCategory {
    /// All categories in pitch order, from goal outwards.
    pub const ALL: [Self; 4] = [
        Self::Goalkeeper,
        Self::Defender,
        Self::Midfielder,
        Self::Forward,
    ];

    /// Returns the canonical stored name of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goalkeeper",
            Self::Defender => "Defender",
            Self::Midfielder => "Midfielder",
            Self::Forward => "Forward",
        }
    }
}

impl FromStr for PositionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidPositionCategory(s.to_string()))
    }
}

impl std::fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A player as seen by the lineup engine.
///
/// Roster players are owned by roster management and are read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlayer {
    /// The player identifier.
    pub player_id: PlayerId,
    /// The declared position category.
    pub position: PositionCategory,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Shirt number, if one has been issued.
    #[serde(default)]
    pub jersey_number: Option<u8>,
    /// Profile photo location.
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl RosterPlayer {
    /// Creates a roster player without optional display attributes.
    ///
    /// # Arguments
    ///
    /// * `player_id` - The player identifier
    /// * `position` - The declared position category
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    #[must_use]
    pub fn new(
        player_id: PlayerId,
        position: PositionCategory,
        first_name: &str,
        last_name: &str,
    ) -> Self {
        Self {
            player_id,
            position,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            jersey_number: None,
            photo_url: None,
        }
    }

    /// Sets the shirt number.
    #[must_use]
    pub const fn with_jersey_number(mut self, jersey_number: u8) -> Self {
        self.jersey_number = Some(jersey_number);
        self
    }

    /// Returns "First Last", or whichever part is present.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// A scheduled match that a lineup can be announced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFixture {
    /// The match identifier.
    pub match_id: MatchId,
    /// The team the lineup belongs to.
    pub team_id: TeamId,
    /// The opposing side's display name.
    pub opponent: String,
    /// The match day.
    pub kickoff: Date,
    /// The squad format the match is played in.
    pub format: SquadFormat,
    /// Where the match is played, if known.
    pub venue: Option<String>,
}
