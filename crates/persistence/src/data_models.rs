// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{ClubId, MatchId, PlayerId, PositionCategory, SquadFormat, TeamId};
use serde::{Deserialize, Serialize};
use time::Date;

/// A stored club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubData {
    pub club_id: ClubId,
    pub name: String,
    pub created_at: String,
}

/// A stored team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    pub team_id: TeamId,
    pub club_id: ClubId,
    pub name: String,
    pub default_format: SquadFormat,
    pub created_at: String,
}

/// A player to add to a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub position: PositionCategory,
    pub jersey_number: Option<u8>,
    pub photo_url: Option<String>,
}

/// A fixture to schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub team_id: TeamId,
    pub opponent: String,
    pub kickoff: Date,
    pub format: SquadFormat,
    pub venue: Option<String>,
}

/// A stored lineup header, without its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupSummary {
    pub lineup_id: i64,
    pub team_id: TeamId,
    pub match_id: Option<MatchId>,
    pub format: SquadFormat,
    pub lineup_name: String,
    pub formation: String,
    pub updated_at: String,
}

/// An outbox notification addressed to one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    pub notification_id: i64,
    pub player_id: PlayerId,
    pub match_id: Option<MatchId>,
    pub title: String,
    pub body: String,
    pub link: String,
    pub is_read: bool,
    pub created_at: String,
}

/// A stored operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorData {
    pub operator_id: i64,
    pub login_name: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub club_id: Option<ClubId>,
    pub is_disabled: bool,
    pub created_at: String,
    pub disabled_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// A stored login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub operator_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}
