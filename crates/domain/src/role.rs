// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tactical role tags carried by formation slots.

use crate::error::DomainError;
use crate::types::PositionCategory;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role a slot plays within a scheme, e.g. `CB` or `ST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotRole {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "CB")]
    CentreBack,
    #[serde(rename = "LB")]
    LeftBack,
    #[serde(rename = "RB")]
    RightBack,
    #[serde(rename = "LWB")]
    LeftWingBack,
    #[serde(rename = "RWB")]
    RightWingBack,
    #[serde(rename = "DM")]
    DefensiveMidfielder,
    #[serde(rename = "CDM")]
    CentralDefensiveMidfielder,
    #[serde(rename = "CM")]
    CentralMidfielder,
    #[serde(rename = "CAM")]
    CentralAttackingMidfielder,
    #[serde(rename = "AM")]
    AttackingMidfielder,
    #[serde(rename = "LM")]
    LeftMidfielder,
    #[serde(rename = "RM")]
    RightMidfielder,
    #[serde(rename = "LW")]
    LeftWinger,
    #[serde(rename = "RW")]
    RightWinger,
    #[serde(rename = "LF")]
    LeftForward,
    #[serde(rename = "RF")]
    RightForward,
    #[serde(rename = "CF")]
    CentreForward,
    #[serde(rename = "ST")]
    Striker,
}

impl SlotRole {
    /// Every known role.
    pub const ALL: [Self; 19] = [
        Self::Goalkeeper,
        Self::CentreBack,
        Self::LeftBack,
        Self::RightBack,
        Self::LeftWingBack,
        Self::RightWingBack,
        Self::DefensiveMidfielder,
        Self::CentralDefensiveMidfielder,
        Self::CentralMidfielder,
        Self::CentralAttackingMidfielder,
        Self::AttackingMidfielder,
        Self::LeftMidfielder,
        Self::RightMidfielder,
        Self::LeftWinger,
        Self::RightWinger,
        Self::LeftForward,
        Self::RightForward,
        Self::CentreForward,
        Self::Striker,
    ];

    /// Returns the short role code shown on the pitch.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::CentreBack => "CB",
            Self::LeftBack => "LB",
            Self::RightBack => "RB",
            Self::LeftWingBack => "LWB",
            Self::RightWingBack => "RWB",
            Self::DefensiveMidfielder => "DM",
            Self::CentralDefensiveMidfielder => "CDM",
            Self::CentralMidfielder => "CM",
            Self::CentralAttackingMidfielder => "CAM",
            Self::AttackingMidfielder => "AM",
            Self::LeftMidfielder => "LM",
            Self::RightMidfielder => "RM",
            Self::LeftWinger => "LW",
            Self::RightWinger => "RW",
            Self::LeftForward => "LF",
            Self::RightForward => "RF",
            Self::CentreForward => "CF",
            Self::Striker => "ST",
        }
    }

    /// Returns whether a player of `category` may fill this role.
    ///
    /// The rule is a match on the role code: `GK` takes goalkeepers, codes
    /// containing `B` take defenders, codes containing `M` take midfielders,
    /// and `ST` or codes containing `W` or `F` take forwards. A role may
    /// accept more than one category (`LWB` accepts defenders and forwards).
    #[must_use]
    pub fn accepts(&self, category: PositionCategory) -> bool {
        let code: &str = self.code();
        match category {
            PositionCategory::Goalkeeper => code == "GK",
            PositionCategory::Defender => code.contains('B'),
            PositionCategory::Midfielder => code.contains('M'),
            PositionCategory::Forward => {
                code == "ST" || code.contains('W') || code.contains('F')
            }
        }
    }

    /// Returns the roles an occupant of this role may move to when the
    /// scheme changes, most natural first. The role itself always leads.
    #[must_use]
    pub const fn reflow_candidates(&self) -> &'static [Self] {
        match self {
            Self::Goalkeeper => &[Self::Goalkeeper],
            Self::CentreBack => &[
                Self::CentreBack,
                Self::LeftBack,
                Self::RightBack,
                Self::LeftWingBack,
                Self::RightWingBack,
            ],
            Self::LeftBack => &[Self::LeftBack, Self::CentreBack, Self::LeftWingBack],
            Self::RightBack => &[Self::RightBack, Self::CentreBack, Self::RightWingBack],
            Self::LeftWingBack => &[Self::LeftWingBack, Self::LeftBack],
            Self::RightWingBack => &[Self::RightWingBack, Self::RightBack],
            Self::CentralMidfielder => &[
                Self::CentralMidfielder,
                Self::CentralAttackingMidfielder,
                Self::CentralDefensiveMidfielder,
                Self::LeftMidfielder,
                Self::RightMidfielder,
            ],
            Self::CentralAttackingMidfielder => &[
                Self::CentralAttackingMidfielder,
                Self::CentralMidfielder,
                Self::LeftMidfielder,
                Self::RightMidfielder,
            ],
            Self::CentralDefensiveMidfielder => {
                &[Self::CentralDefensiveMidfielder, Self::CentralMidfielder]
            }
            Self::LeftMidfielder => &[
                Self::LeftMidfielder,
                Self::CentralMidfielder,
                Self::CentralAttackingMidfielder,
                Self::LeftWinger,
            ],
            Self::RightMidfielder => &[
                Self::RightMidfielder,
                Self::CentralMidfielder,
                Self::CentralAttackingMidfielder,
                Self::RightWinger,
            ],
            Self::LeftWinger => &[Self::LeftWinger, Self::LeftMidfielder, Self::Striker],
            Self::RightWinger => &[Self::RightWinger, Self::RightMidfielder, Self::Striker],
            Self::Striker => &[
                Self::Striker,
                Self::LeftWinger,
                Self::RightWinger,
                Self::CentreForward,
            ],
            Self::CentreForward => &[Self::CentreForward, Self::Striker],
            Self::LeftForward => &[Self::LeftForward, Self::LeftWinger, Self::Striker],
            Self::RightForward => &[Self::RightForward, Self::RightWinger, Self::Striker],
            Self::DefensiveMidfielder => &[Self::DefensiveMidfielder],
            Self::AttackingMidfielder => &[Self::AttackingMidfielder],
        }
    }
}

impl FromStr for SlotRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidSlotRole(s.to_string()))
    }
}

impl std::fmt::Display for SlotRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
