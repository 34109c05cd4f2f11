// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use crate::{
    Command, LineupAnnouncement, LineupKey, LineupRecord, LineupRepository, LineupState,
    NotificationDispatcher, apply,
};
use matchday_domain::{
    MatchFixture, MatchId, PlayerId, PositionCategory, RosterPlayer, SlotKey, SquadFormat, TeamId,
};
use time::macros::date;

pub fn create_test_player(id: i64, position: PositionCategory) -> RosterPlayer {
    RosterPlayer::new(PlayerId::new(id), position, &format!("Player{id}"), "Test")
        .with_jersey_number(u8::try_from(id).unwrap())
}

/// Builds a roster from position categories; ids start at 1.
pub fn create_test_roster(positions: &[PositionCategory]) -> Vec<RosterPlayer> {
    (1_i64..)
        .zip(positions.iter())
        .map(|(id, position)| create_test_player(id, *position))
        .collect()
}

/// 1 goalkeeper (1), 3 defenders (2-4), 2 midfielders (5-6), 2 forwards (7-8).
pub fn create_five_a_side_roster() -> Vec<RosterPlayer> {
    use PositionCategory::{Defender, Forward, Goalkeeper, Midfielder};
    create_test_roster(&[
        Goalkeeper, Defender, Defender, Defender, Midfielder, Midfielder, Forward, Forward,
    ])
}

/// 1 goalkeeper (1), 4 defenders (2-5), 3 midfielders (6-8), 3 forwards (9-11).
pub fn create_seven_a_side_roster() -> Vec<RosterPlayer> {
    use PositionCategory::{Defender, Forward, Goalkeeper, Midfielder};
    create_test_roster(&[
        Goalkeeper, Defender, Defender, Defender, Defender, Midfielder, Midfielder, Midfielder,
        Forward, Forward, Forward,
    ])
}

/// 1 goalkeeper (1), 5 defenders (2-6), 4 midfielders (7-10), 4 forwards (11-14).
pub fn create_eleven_a_side_roster() -> Vec<RosterPlayer> {
    use PositionCategory::{Defender, Forward, Goalkeeper, Midfielder};
    create_test_roster(&[
        Goalkeeper, Defender, Defender, Defender, Defender, Defender, Midfielder, Midfielder,
        Midfielder, Midfielder, Forward, Forward, Forward, Forward,
    ])
}

pub fn slot(key: &str) -> SlotKey {
    SlotKey::parse(key).unwrap()
}

pub fn pid(id: i64) -> PlayerId {
    PlayerId::new(id)
}

pub fn run(state: &LineupState, command: Command) -> LineupState {
    apply(state, command).unwrap().new_state
}

/// Selects every roster player in roster order.
pub fn select_all(state: &LineupState) -> LineupState {
    let ids: Vec<PlayerId> = state.roster().iter().map(|p| p.player_id).collect();
    ids.into_iter().fold(state.clone(), |current, player_id| {
        run(&current, Command::SelectPlayer { player_id })
    })
}

/// A 5-a-side lineup on "2-2" with all eight players selected.
pub fn create_selected_five_a_side() -> LineupState {
    let state: LineupState =
        LineupState::with_scheme(SquadFormat::FiveASide, "2-2", create_five_a_side_roster())
            .unwrap();
    select_all(&state)
}

pub fn create_test_fixture(match_id: i64, team_id: i64) -> MatchFixture {
    MatchFixture {
        match_id: MatchId::new(match_id),
        team_id: TeamId::new(team_id),
        opponent: String::from("Riverside Rovers"),
        kickoff: date!(2026 - 03 - 14),
        format: SquadFormat::SevenASide,
        venue: None,
    }
}

/// In-memory repository used to exercise the lineup service.
#[derive(Default)]
pub struct MemoryStore {
    pub rosters: HashMap<TeamId, Vec<RosterPlayer>>,
    pub fixtures: HashMap<MatchId, MatchFixture>,
    pub lineups: Vec<(i64, LineupRecord)>,
    pub announcements: Vec<LineupAnnouncement>,
    pub fail_dispatch: bool,
    next_id: i64,
}

impl MemoryStore {
    pub fn count_for(&self, key: &LineupKey) -> usize {
        self.lineups.iter().filter(|(_, r)| r.key == *key).count()
    }
}

impl LineupRepository for MemoryStore {
    type Error = String;

    fn fetch_roster(&mut self, team_id: TeamId) -> Result<Vec<RosterPlayer>, Self::Error> {
        Ok(self.rosters.get(&team_id).cloned().unwrap_or_default())
    }

    fn find_fixture(&mut self, match_id: MatchId) -> Result<Option<MatchFixture>, Self::Error> {
        Ok(self.fixtures.get(&match_id).cloned())
    }

    fn find_lineup(&mut self, key: &LineupKey) -> Result<Option<LineupRecord>, Self::Error> {
        Ok(self
            .lineups
            .iter()
            .find(|(_, record)| record.key == *key)
            .map(|(_, record)| record.clone()))
    }

    fn replace_lineup(&mut self, record: &LineupRecord) -> Result<i64, Self::Error> {
        if let Some((id, existing)) = self.lineups.iter_mut().find(|(_, r)| r.key == record.key) {
            *existing = record.clone();
            return Ok(*id);
        }
        self.next_id += 1;
        self.lineups.push((self.next_id, record.clone()));
        Ok(self.next_id)
    }
}

impl NotificationDispatcher for MemoryStore {
    type Error = String;

    fn dispatch(&mut self, announcement: &LineupAnnouncement) -> Result<usize, Self::Error> {
        if self.fail_dispatch {
            return Err(String::from("push gateway unavailable"));
        }
        self.announcements.push(announcement.clone());
        Ok(announcement.starters.len() + announcement.substitutes.len())
    }
}
