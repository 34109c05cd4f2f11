// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::record::LineupRecord;
use matchday_domain::{MatchFixture, MatchId, PlayerId, TeamId};
use time::Date;
use time::macros::format_description;

/// Tells the squad who starts and who is on the bench for a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupAnnouncement {
    /// The match.
    pub match_id: MatchId,
    /// The team.
    pub team_id: TeamId,
    /// The opposing side.
    pub opponent: String,
    /// The match day.
    pub kickoff: Date,
    /// Starting players.
    pub starters: Vec<PlayerId>,
    /// Substitutes in bench order.
    pub substitutes: Vec<PlayerId>,
}

/// A notification addressed to a group of players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    /// The players who receive the message.
    pub recipients: Vec<PlayerId>,
    /// Headline.
    pub title: String,
    /// Message text.
    pub body: String,
    /// Where the message leads in the player dashboard.
    pub link: String,
}

impl LineupAnnouncement {
    /// Builds the announcement for a saved lineup.
    #[must_use]
    pub fn for_record(fixture: &MatchFixture, record: &LineupRecord) -> Self {
        Self {
            match_id: fixture.match_id,
            team_id: record.key.team_id,
            opponent: fixture.opponent.clone(),
            kickoff: fixture.kickoff,
            starters: record.starter_ids(),
            substitutes: record.substitute_ids(),
        }
    }

    /// Returns the messages to deliver: one for the starters and, when the
    /// bench is not empty, one for the substitutes.
    #[must_use]
    pub fn messages(&self) -> Vec<PushMessage> {
        let fixture: String = self.fixture_phrase();
        let link: String = format!("/dashboard/player/matches/{}", self.match_id);

        let mut messages: Vec<PushMessage> = Vec::with_capacity(2);
        if !self.starters.is_empty() {
            messages.push(PushMessage {
                recipients: self.starters.clone(),
                title: String::from("You're in the Starting XI!"),
                body: format!("You've been selected to start{fixture}"),
                link: link.clone(),
            });
        }
        if !self.substitutes.is_empty() {
            messages.push(PushMessage {
                recipients: self.substitutes.clone(),
                title: String::from("You're on the Bench"),
                body: format!("You're a substitute{fixture}"),
                link,
            });
        }
        messages
    }

    /// " against X on 14 Mar", omitting parts that are blank.
    fn fixture_phrase(&self) -> String {
        let mut phrase: String = String::new();
        if !self.opponent.trim().is_empty() {
            phrase.push_str(" against ");
            phrase.push_str(self.opponent.trim());
        }
        if let Ok(day) = self
            .kickoff
            .format(format_description!("[day padding:none] [month repr:short]"))
        {
            phrase.push_str(" on ");
            phrase.push_str(&day);
        }
        phrase
    }
}
