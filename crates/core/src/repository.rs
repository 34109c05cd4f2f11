// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage seams used by the lineup service.
//!
//! The engine only needs these operations. Any store that implements them can
//! back [`crate::save_lineup`] and [`crate::load_lineup`].

use crate::announcement::LineupAnnouncement;
use crate::record::{LineupKey, LineupRecord};
use matchday_domain::{MatchFixture, MatchId, RosterPlayer, TeamId};

/// Read and write access to rosters, fixtures and saved lineups.
pub trait LineupRepository {
    /// The store's error type.
    type Error: std::fmt::Display;

    /// Returns a team's roster in roster order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn fetch_roster(&mut self, team_id: TeamId) -> Result<Vec<RosterPlayer>, Self::Error>;

    /// Returns a scheduled match, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_fixture(&mut self, match_id: MatchId) -> Result<Option<MatchFixture>, Self::Error>;

    /// Returns the lineup saved under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_lineup(&mut self, key: &LineupKey) -> Result<Option<LineupRecord>, Self::Error>;

    /// Stores a lineup, replacing anything saved under the same key.
    ///
    /// After this returns, exactly one lineup exists for the key.
    ///
    /// # Returns
    ///
    /// The stored lineup's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the previous lineup is then kept.
    fn replace_lineup(&mut self, record: &LineupRecord) -> Result<i64, Self::Error>;
}

/// Delivery of lineup announcements to players.
pub trait NotificationDispatcher {
    /// The dispatcher's error type.
    type Error: std::fmt::Display;

    /// Sends the announcement's messages.
    ///
    /// # Returns
    ///
    /// The number of player notifications created.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails.
    fn dispatch(&mut self, announcement: &LineupAnnouncement) -> Result<usize, Self::Error>;
}
