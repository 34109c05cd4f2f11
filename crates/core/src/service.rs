// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Saving and loading lineups through a repository.

use crate::announcement::LineupAnnouncement;
use crate::error::LineupServiceError;
use crate::record::{LineupKey, LineupRecord};
use crate::repository::{LineupRepository, NotificationDispatcher};
use crate::state::LineupState;
use matchday_domain::{MatchFixture, MatchId, RosterPlayer};
use tracing::{debug, info, warn};

/// The result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// The stored lineup's id.
    pub lineup_id: i64,
    /// What was stored.
    pub record: LineupRecord,
    /// Player notifications created, when the lineup was announced.
    pub notified: Option<usize>,
}

/// A lineup read back from a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLineup {
    /// The editable lineup.
    pub state: LineupState,
    /// The stored record, if one existed.
    pub saved: Option<LineupRecord>,
}

/// Saves a lineup and announces it when it is for a match.
///
/// The record replaces anything stored under `key`. When `key.match_id` is
/// set and the fixture exists, starters and substitutes are notified.
/// Announcement failures are logged and do not fail the save.
///
/// # Arguments
///
/// * `store` - The repository and notification dispatcher
/// * `state` - The lineup to save
/// * `key` - Where to store it
/// * `name` - The lineup name
///
/// # Errors
///
/// Returns `LineupServiceError::Rejected` if the lineup cannot be recorded and
/// `LineupServiceError::Repository` if the write fails.
pub fn save_lineup<S>(
    store: &mut S,
    state: &LineupState,
    key: LineupKey,
    name: &str,
) -> Result<SaveOutcome, LineupServiceError<<S as LineupRepository>::Error>>
where
    S: LineupRepository + NotificationDispatcher,
{
    let record: LineupRecord = state.to_record(key, name)?;

    let lineup_id: i64 = store
        .replace_lineup(&record)
        .map_err(LineupServiceError::Repository)?;

    info!(
        lineup_id,
        team_id = %key.team_id,
        format = %key.format,
        match_id = ?key.match_id,
        starters = record.starter_ids().len(),
        substitutes = record.substitute_ids().len(),
        "Lineup saved"
    );

    let notified: Option<usize> = match key.match_id {
        Some(match_id) => announce(store, match_id, &record),
        None => None,
    };

    Ok(SaveOutcome {
        lineup_id,
        record,
        notified,
    })
}

fn announce<S>(store: &mut S, match_id: MatchId, record: &LineupRecord) -> Option<usize>
where
    S: LineupRepository + NotificationDispatcher,
{
    let fixture: MatchFixture = match store.find_fixture(match_id) {
        Ok(Some(fixture)) => fixture,
        Ok(None) => {
            warn!(%match_id, "Match not found, lineup not announced");
            return None;
        }
        Err(e) => {
            warn!(%match_id, error = %e, "Failed to load match, lineup not announced");
            return None;
        }
    };

    let announcement: LineupAnnouncement = LineupAnnouncement::for_record(&fixture, record);
    match NotificationDispatcher::dispatch(store, &announcement) {
        Ok(count) => {
            debug!(%match_id, count, "Lineup announced");
            Some(count)
        }
        Err(e) => {
            warn!(%match_id, error = %e, "Failed to announce lineup");
            None
        }
    }
}

/// Loads the lineup stored under a key, or a fresh one.
///
/// A fresh lineup uses the format's default scheme and an empty selection.
///
/// # Errors
///
/// Returns `LineupServiceError::Repository` if the store cannot be read and
/// `LineupServiceError::Rejected` if the roster is inconsistent.
pub fn load_lineup<R: LineupRepository>(
    store: &mut R,
    key: LineupKey,
) -> Result<LoadedLineup, LineupServiceError<R::Error>> {
    let roster: Vec<RosterPlayer> = store
        .fetch_roster(key.team_id)
        .map_err(LineupServiceError::Repository)?;
    let saved: Option<LineupRecord> = store
        .find_lineup(&key)
        .map_err(LineupServiceError::Repository)?;

    let state: LineupState = match &saved {
        Some(record) => LineupState::from_record(roster, record)?,
        None => LineupState::new(key.format, roster)?,
    };

    Ok(LoadedLineup { state, saved })
}
