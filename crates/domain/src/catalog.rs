// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The formation catalog.
//!
//! Schemes are compiled in and never edited at runtime. Each scheme belongs to
//! exactly one squad format and lists exactly `players_on_field` slots, with
//! coordinates on a 0..=100 pitch (x left to right, y attack to defence).
//! `validate_catalog` checks these properties.

use crate::error::DomainError;
use crate::format::SquadFormat;
use crate::role::SlotRole;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One position on the pitch within a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    /// The tactical role of the slot.
    pub role: SlotRole,
    /// Horizontal coordinate, 0 (left touchline) to 100.
    pub x: u8,
    /// Vertical coordinate, 0 (opponent goal) to 100 (own goal).
    pub y: u8,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(role: SlotRole, x: u8, y: u8) -> Self {
        Self { role, x, y }
    }

    /// Returns the key that identifies this slot within its scheme.
    #[must_use]
    pub fn key(&self) -> SlotKey {
        SlotKey::from_parts(self.role, self.x, self.y)
    }
}

/// Synthetic slot identifier of the form `{role}-{x}-{y}`, e.g. `CB-40-70`.
///
/// Keys are stable across schemes, so a slot that exists in two schemes of a
/// format has the same key in both. Deserialized keys are parsed and
/// normalised like [`SlotKey::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotKey(String);

impl SlotKey {
    /// Builds a key from its parts.
    #[must_use]
    pub fn from_parts(role: SlotRole, x: u8, y: u8) -> Self {
        Self(format!("{}-{x}-{y}", role.code()))
    }

    /// Parses and normalises a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not `{role}-{x}-{y}` with a known role
    /// and coordinates in 0..=100.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let (role, x, y) = Self::split(value)?;
        Ok(Self::from_parts(role, x, y))
    }

    /// Returns the role encoded in the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is malformed.
    pub fn role(&self) -> Result<SlotRole, DomainError> {
        self.parts().map(|(role, _, _)| role)
    }

    /// Returns the role and pitch coordinates encoded in the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is malformed.
    pub fn parts(&self) -> Result<(SlotRole, u8, u8), DomainError> {
        Self::split(&self.0)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split(value: &str) -> Result<(SlotRole, u8, u8), DomainError> {
        let invalid = || DomainError::InvalidSlotKey(value.to_string());

        let mut parts = value.trim().split('-');
        let (Some(role), Some(x), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let role: SlotRole = role.parse().map_err(|_| invalid())?;
        let x: u8 = x.parse().map_err(|_| invalid())?;
        let y: u8 = y.parse().map_err(|_| invalid())?;
        if x > 100 || y > 100 {
            return Err(invalid());
        }
        Ok((role, x, y))
    }
}

impl FromStr for SlotKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SlotKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SlotKey> for String {
    fn from(key: SlotKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named tactical layout for one squad format.
#[derive(Debug, PartialEq, Eq)]
pub struct Scheme {
    /// The scheme identifier, e.g. `"4-3-3"`.
    pub name: &'static str,
    /// The display label, e.g. `"1-3 (Diamond)"`.
    pub label: &'static str,
    /// The format this scheme is valid for.
    pub format: SquadFormat,
    /// Slots in declared order. Auto-assignment fills them in this order.
    pub slots: &'static [Slot],
}

impl Scheme {
    /// Returns the slot with the given key, if this scheme has one.
    #[must_use]
    pub fn slot(&self, key: &SlotKey) -> Option<&'static Slot> {
        self.slots.iter().find(|slot| slot.key() == *key)
    }

    /// Returns whether the scheme has a slot with the given key.
    #[must_use]
    pub fn contains(&self, key: &SlotKey) -> bool {
        self.slot(key).is_some()
    }

    /// Returns the slot keys in declared order.
    #[must_use]
    pub fn slot_keys(&self) -> Vec<SlotKey> {
        self.slots.iter().map(Slot::key).collect()
    }
}

const GK: SlotRole = SlotRole::Goalkeeper;
const CB: SlotRole = SlotRole::CentreBack;
const LB: SlotRole = SlotRole::LeftBack;
const RB: SlotRole = SlotRole::RightBack;
const DM: SlotRole = SlotRole::DefensiveMidfielder;
const CM: SlotRole = SlotRole::CentralMidfielder;
const AM: SlotRole = SlotRole::AttackingMidfielder;
const LM: SlotRole = SlotRole::LeftMidfielder;
const RM: SlotRole = SlotRole::RightMidfielder;
const LW: SlotRole = SlotRole::LeftWinger;
const RW: SlotRole = SlotRole::RightWinger;
const LF: SlotRole = SlotRole::LeftForward;
const RF: SlotRole = SlotRole::RightForward;
const ST: SlotRole = SlotRole::Striker;

static FIVE_A_SIDE: [Scheme; 4] = [
    Scheme {
        name: "2-2",
        label: "2-2",
        format: SquadFormat::FiveASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(LB, 30, 65),
            Slot::new(RB, 70, 65),
            Slot::new(LF, 35, 25),
            Slot::new(RF, 65, 25),
        ],
    },
    Scheme {
        name: "1-2-1",
        label: "1-2-1",
        format: SquadFormat::FiveASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(CB, 50, 68),
            Slot::new(LM, 30, 45),
            Slot::new(RM, 70, 45),
            Slot::new(ST, 50, 20),
        ],
    },
    Scheme {
        name: "1-3",
        label: "1-3 (Diamond)",
        format: SquadFormat::FiveASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(CB, 50, 65),
            Slot::new(LW, 25, 40),
            Slot::new(RW, 75, 40),
            Slot::new(ST, 50, 20),
        ],
    },
    Scheme {
        name: "1-1-2",
        label: "1-1-2",
        format: SquadFormat::FiveASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(CB, 50, 70),
            Slot::new(CM, 50, 45),
            Slot::new(LF, 35, 20),
            Slot::new(RF, 65, 20),
        ],
    },
];

static SEVEN_A_SIDE: [Scheme; 5] = [
    Scheme {
        name: "3-2-1",
        label: "3-2-1",
        format: SquadFormat::SevenASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(LB, 25, 68),
            Slot::new(CB, 50, 68),
            Slot::new(RB, 75, 68),
            Slot::new(LM, 35, 45),
            Slot::new(RM, 65, 45),
            Slot::new(ST, 50, 20),
        ],
    },
    Scheme {
        name: "2-3-1",
        label: "2-3-1",
        format: SquadFormat::SevenASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(LB, 35, 68),
            Slot::new(RB, 65, 68),
            Slot::new(LM, 25, 45),
            Slot::new(CM, 50, 48),
            Slot::new(RM, 75, 45),
            Slot::new(ST, 50, 20),
        ],
    },
    Scheme {
        name: "2-2-2",
        label: "2-2-2",
        format: SquadFormat::SevenASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(LB, 35, 68),
            Slot::new(RB, 65, 68),
            Slot::new(LM, 30, 45),
            Slot::new(RM, 70, 45),
            Slot::new(ST, 40, 20),
            Slot::new(ST, 60, 20),
        ],
    },
    Scheme {
        name: "3-3-1",
        label: "3-3-1",
        format: SquadFormat::SevenASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(LB, 25, 68),
            Slot::new(CB, 50, 68),
            Slot::new(RB, 75, 68),
            Slot::new(LM, 30, 45),
            Slot::new(RM, 70, 45),
            Slot::new(ST, 50, 20),
        ],
    },
    Scheme {
        name: "2-1-3",
        label: "2-1-3",
        format: SquadFormat::SevenASide,
        slots: &[
            Slot::new(GK, 50, 88),
            Slot::new(LB, 35, 68),
            Slot::new(RB, 65, 68),
            Slot::new(CM, 50, 48),
            Slot::new(LW, 30, 25),
            Slot::new(ST, 50, 20),
            Slot::new(RW, 70, 25),
        ],
    },
];

static ELEVEN_A_SIDE: [Scheme; 8] = [
    Scheme {
        name: "4-3-3",
        label: "4-3-3",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(LB, 20, 70),
            Slot::new(CB, 40, 70),
            Slot::new(CB, 60, 70),
            Slot::new(RB, 80, 70),
            Slot::new(CM, 35, 45),
            Slot::new(CM, 50, 50),
            Slot::new(CM, 65, 45),
            Slot::new(LW, 20, 20),
            Slot::new(ST, 50, 15),
            Slot::new(RW, 80, 20),
        ],
    },
    Scheme {
        name: "4-4-2",
        label: "4-4-2",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(LB, 20, 70),
            Slot::new(CB, 40, 70),
            Slot::new(CB, 60, 70),
            Slot::new(RB, 80, 70),
            Slot::new(LM, 20, 45),
            Slot::new(CM, 40, 50),
            Slot::new(CM, 60, 50),
            Slot::new(RM, 80, 45),
            Slot::new(ST, 40, 20),
            Slot::new(ST, 60, 20),
        ],
    },
    Scheme {
        name: "3-5-2",
        label: "3-5-2",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(CB, 30, 70),
            Slot::new(CB, 50, 70),
            Slot::new(CB, 70, 70),
            Slot::new(LM, 15, 45),
            Slot::new(CM, 35, 50),
            Slot::new(CM, 50, 55),
            Slot::new(CM, 65, 50),
            Slot::new(RM, 85, 45),
            Slot::new(ST, 40, 20),
            Slot::new(ST, 60, 20),
        ],
    },
    Scheme {
        name: "4-2-3-1",
        label: "4-2-3-1",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(LB, 20, 70),
            Slot::new(CB, 40, 70),
            Slot::new(CB, 60, 70),
            Slot::new(RB, 80, 70),
            Slot::new(CM, 40, 55),
            Slot::new(CM, 60, 55),
            Slot::new(LW, 20, 35),
            Slot::new(AM, 50, 35),
            Slot::new(RW, 80, 35),
            Slot::new(ST, 50, 15),
        ],
    },
    Scheme {
        name: "3-4-3",
        label: "3-4-3",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(CB, 30, 70),
            Slot::new(CB, 50, 70),
            Slot::new(CB, 70, 70),
            Slot::new(LM, 20, 45),
            Slot::new(CM, 40, 50),
            Slot::new(CM, 60, 50),
            Slot::new(RM, 80, 45),
            Slot::new(LW, 20, 20),
            Slot::new(ST, 50, 15),
            Slot::new(RW, 80, 20),
        ],
    },
    Scheme {
        name: "4-1-4-1",
        label: "4-1-4-1",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(LB, 20, 70),
            Slot::new(CB, 40, 70),
            Slot::new(CB, 60, 70),
            Slot::new(RB, 80, 70),
            Slot::new(DM, 50, 55),
            Slot::new(LM, 20, 40),
            Slot::new(CM, 40, 45),
            Slot::new(CM, 60, 45),
            Slot::new(RM, 80, 40),
            Slot::new(ST, 50, 15),
        ],
    },
    Scheme {
        name: "5-3-2",
        label: "5-3-2",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(LB, 15, 70),
            Slot::new(CB, 35, 70),
            Slot::new(CB, 50, 70),
            Slot::new(CB, 65, 70),
            Slot::new(RB, 85, 70),
            Slot::new(CM, 35, 45),
            Slot::new(CM, 50, 50),
            Slot::new(CM, 65, 45),
            Slot::new(ST, 40, 20),
            Slot::new(ST, 60, 20),
        ],
    },
    Scheme {
        name: "5-4-1",
        label: "5-4-1",
        format: SquadFormat::ElevenASide,
        slots: &[
            Slot::new(GK, 50, 90),
            Slot::new(LB, 15, 70),
            Slot::new(CB, 35, 70),
            Slot::new(CB, 50, 70),
            Slot::new(CB, 65, 70),
            Slot::new(RB, 85, 70),
            Slot::new(LM, 20, 45),
            Slot::new(CM, 40, 50),
            Slot::new(CM, 60, 50),
            Slot::new(RM, 80, 45),
            Slot::new(ST, 50, 15),
        ],
    },
];

/// Returns the schemes available for a format, in catalog order.
#[must_use]
pub fn schemes(format: SquadFormat) -> &'static [Scheme] {
    match format {
        SquadFormat::FiveASide => &FIVE_A_SIDE,
        SquadFormat::SevenASide => &SEVEN_A_SIDE,
        SquadFormat::ElevenASide => &ELEVEN_A_SIDE,
    }
}

/// Iterates over every scheme of every format.
pub fn all_schemes() -> impl Iterator<Item = &'static Scheme> {
    SquadFormat::ALL
        .into_iter()
        .flat_map(|format| schemes(format).iter())
}

/// Looks up a scheme by name within a format.
///
/// # Arguments
///
/// * `format` - The squad format
/// * `name` - The scheme name, e.g. `"4-4-2"`
///
/// # Errors
///
/// Returns `DomainError::SchemeNotFound` if the format has no such scheme.
pub fn find_scheme(format: SquadFormat, name: &str) -> Result<&'static Scheme, DomainError> {
    schemes(format)
        .iter()
        .find(|scheme| scheme.name == name.trim())
        .ok_or_else(|| DomainError::SchemeNotFound {
            format,
            scheme: name.to_string(),
        })
}

/// Returns the scheme a new lineup starts with: the first in catalog order.
#[must_use]
pub fn default_scheme(format: SquadFormat) -> &'static Scheme {
    &schemes(format)[0]
}
