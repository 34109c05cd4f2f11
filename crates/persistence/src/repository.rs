// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lineup service seams backed by the database.

use matchday::{
    LineupAnnouncement, LineupKey, LineupRecord, LineupRepository, NotificationDispatcher,
    PushMessage,
};
use matchday_domain::{MatchFixture, MatchId, RosterPlayer, TeamId};

use crate::error::PersistenceError;
use crate::{Persistence, mutations, queries};

impl LineupRepository for Persistence {
    type Error = PersistenceError;

    fn fetch_roster(&mut self, team_id: TeamId) -> Result<Vec<RosterPlayer>, Self::Error> {
        queries::league::list_roster(&mut self.conn, team_id)
    }

    fn find_fixture(&mut self, match_id: MatchId) -> Result<Option<MatchFixture>, Self::Error> {
        queries::league::get_match(&mut self.conn, match_id)
    }

    fn find_lineup(&mut self, key: &LineupKey) -> Result<Option<LineupRecord>, Self::Error> {
        Ok(queries::lineups::find_lineup(&mut self.conn, key)?.map(|(_, record)| record))
    }

    fn replace_lineup(&mut self, record: &LineupRecord) -> Result<i64, Self::Error> {
        mutations::lineups::replace_lineup(&mut self.conn, record)
    }
}

impl NotificationDispatcher for Persistence {
    type Error = PersistenceError;

    fn dispatch(&mut self, announcement: &LineupAnnouncement) -> Result<usize, Self::Error> {
        let messages: Vec<PushMessage> = announcement.messages();
        mutations::notifications::enqueue_notifications(
            &mut self.conn,
            Some(announcement.match_id),
            &messages,
        )
    }
}
