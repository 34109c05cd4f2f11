// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the matchday lineup service.
//!
//! This crate stores clubs, teams, rosters, fixtures, saved lineups, the
//! player notification outbox, operators and sessions. It is built on Diesel
//! over `SQLite`.
//!
//! ## Storage
//!
//! - File databases run in WAL mode
//! - In-memory databases are shared-cache and uniquely named per instance,
//!   so tests never observe each other's data
//! - Foreign key enforcement is verified at startup; a connection without it
//!   is refused
//!
//! ## Lineups
//!
//! A lineup is keyed by `(team, format, match)`. A missing match is the
//! team's template lineup for that format. Saving replaces the header and
//! every entry row inside one transaction, so readers see either the old or
//! the new lineup.
//!
//! [`Persistence`] implements [`matchday::LineupRepository`] and
//! [`matchday::NotificationDispatcher`], so it can be handed straight to
//! [`matchday::save_lineup`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use matchday::{LineupKey, LineupRecord, PushMessage};
use matchday_domain::{
    ClubId, MatchFixture, MatchId, PlayerId, RosterPlayer, SquadFormat, TeamId,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod repository;

#[cfg(test)]
mod tests;

pub use data_models::{
    ClubData, LineupSummary, NewMatch, NewPlayer, NotificationData, OperatorData, SessionData,
    TeamData,
};
pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the lineup service.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Clubs & Teams
    // ========================================================================

    /// Creates a club.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the name is taken.
    pub fn create_club(&mut self, name: &str) -> Result<ClubId, PersistenceError> {
        mutations::league::create_club(&mut self.conn, name)
    }

    /// Looks up a club.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_club(&mut self, club_id: ClubId) -> Result<Option<ClubData>, PersistenceError> {
        queries::league::get_club(&mut self.conn, club_id)
    }

    /// Lists all clubs by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_clubs(&mut self) -> Result<Vec<ClubData>, PersistenceError> {
        queries::league::list_clubs(&mut self.conn)
    }

    /// Creates a team within a club.
    ///
    /// # Arguments
    ///
    /// * `club_id` - The owning club
    /// * `name` - The team name, unique within the club
    /// * `default_format` - The format new lineups open in
    ///
    /// # Errors
    ///
    /// Returns an error if the club does not exist or the name is taken.
    pub fn create_team(
        &mut self,
        club_id: ClubId,
        name: &str,
        default_format: SquadFormat,
    ) -> Result<TeamId, PersistenceError> {
        mutations::league::create_team(&mut self.conn, club_id, name, default_format)
    }

    /// Looks up a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_team(&mut self, team_id: TeamId) -> Result<Option<TeamData>, PersistenceError> {
        queries::league::get_team(&mut self.conn, team_id)
    }

    /// Lists a club's teams.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_teams(&mut self, club_id: ClubId) -> Result<Vec<TeamData>, PersistenceError> {
        queries::league::list_teams(&mut self.conn, club_id)
    }

    // ========================================================================
    // Players & Matches
    // ========================================================================

    /// Adds a player to a team's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the team does not exist or the shirt number is
    /// already worn in the team.
    pub fn register_player(
        &mut self,
        team_id: TeamId,
        player: &NewPlayer,
    ) -> Result<PlayerId, PersistenceError> {
        mutations::league::register_player(&mut self.conn, team_id, player)
    }

    /// Returns a team's roster ordered by shirt number, then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_roster(&mut self, team_id: TeamId) -> Result<Vec<RosterPlayer>, PersistenceError> {
        queries::league::list_roster(&mut self.conn, team_id)
    }

    /// Returns the team a player belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_player_team(
        &mut self,
        player_id: PlayerId,
    ) -> Result<Option<TeamId>, PersistenceError> {
        queries::league::get_player_team(&mut self.conn, player_id)
    }

    /// Schedules a match.
    ///
    /// # Errors
    ///
    /// Returns an error if the team does not exist.
    pub fn schedule_match(&mut self, fixture: &NewMatch) -> Result<MatchId, PersistenceError> {
        mutations::league::schedule_match(&mut self.conn, fixture)
    }

    /// Looks up a match.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_match(
        &mut self,
        match_id: MatchId,
    ) -> Result<Option<MatchFixture>, PersistenceError> {
        queries::league::get_match(&mut self.conn, match_id)
    }

    /// Lists a team's matches by kickoff date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_matches(&mut self, team_id: TeamId) -> Result<Vec<MatchFixture>, PersistenceError> {
        queries::league::list_matches(&mut self.conn, team_id)
    }

    // ========================================================================
    // Lineups
    // ========================================================================

    /// Loads the lineup saved under a key, with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored value is
    /// unreadable.
    pub fn find_lineup(
        &mut self,
        key: &LineupKey,
    ) -> Result<Option<(i64, LineupRecord)>, PersistenceError> {
        queries::lineups::find_lineup(&mut self.conn, key)
    }

    /// Stores a lineup, replacing anything saved under the same key.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the previous lineup is then kept.
    pub fn replace_lineup(&mut self, record: &LineupRecord) -> Result<i64, PersistenceError> {
        mutations::lineups::replace_lineup(&mut self.conn, record)
    }

    /// Deletes the lineup saved under a key.
    ///
    /// # Returns
    ///
    /// Whether a lineup was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_lineup(&mut self, key: &LineupKey) -> Result<bool, PersistenceError> {
        mutations::lineups::delete_lineup(&mut self.conn, key)
    }

    /// Lists a team's saved lineups, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_lineups(
        &mut self,
        team_id: TeamId,
    ) -> Result<Vec<LineupSummary>, PersistenceError> {
        queries::lineups::list_lineups(&mut self.conn, team_id)
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Writes one outbox row per recipient of each message.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is written in that case.
    pub fn enqueue_notifications(
        &mut self,
        match_id: Option<MatchId>,
        messages: &[PushMessage],
    ) -> Result<usize, PersistenceError> {
        mutations::notifications::enqueue_notifications(&mut self.conn, match_id, messages)
    }

    /// Lists a player's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_notifications(
        &mut self,
        player_id: PlayerId,
    ) -> Result<Vec<NotificationData>, PersistenceError> {
        queries::notifications::list_notifications(&mut self.conn, player_id)
    }

    /// Marks a player's notification as read.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn mark_notification_read(
        &mut self,
        player_id: PlayerId,
        notification_id: i64,
    ) -> Result<bool, PersistenceError> {
        mutations::notifications::mark_notification_read(&mut self.conn, player_id, notification_id)
    }

    // ========================================================================
    // Operators
    // ========================================================================

    /// Creates a new operator.
    ///
    /// # Arguments
    ///
    /// * `login_name` - The login name (will be normalized to uppercase)
    /// * `display_name` - The display name
    /// * `password` - The plain-text password (will be hashed)
    /// * `role` - The role (`Admin` or `ClubOwner`)
    /// * `club_id` - The club a `ClubOwner` manages
    ///
    /// # Errors
    ///
    /// Returns an error if the operator cannot be created.
    pub fn create_operator(
        &mut self,
        login_name: &str,
        display_name: &str,
        password: &str,
        role: &str,
        club_id: Option<ClubId>,
    ) -> Result<i64, PersistenceError> {
        mutations::operators::create_operator(
            &mut self.conn,
            login_name,
            display_name,
            password,
            role,
            club_id,
        )
    }

    /// Retrieves an operator by login name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_operator_by_login(
        &mut self,
        login_name: &str,
    ) -> Result<Option<OperatorData>, PersistenceError> {
        queries::operators::get_operator_by_login(&mut self.conn, login_name)
    }

    /// Retrieves an operator by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_operator_by_id(
        &mut self,
        operator_id: i64,
    ) -> Result<Option<OperatorData>, PersistenceError> {
        queries::operators::get_operator_by_id(&mut self.conn, operator_id)
    }

    /// Lists all operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_operators(&mut self) -> Result<Vec<OperatorData>, PersistenceError> {
        queries::operators::list_operators(&mut self.conn)
    }

    /// Counts all operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_operators(&mut self) -> Result<i64, PersistenceError> {
        queries::operators::count_operators(&mut self.conn)
    }

    /// Counts active (not disabled) admin operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_active_admin_operators(&mut self) -> Result<i64, PersistenceError> {
        queries::operators::count_active_admin_operators(&mut self.conn)
    }

    /// Updates the last login timestamp for an operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_last_login(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::operators::update_last_login(&mut self.conn, operator_id)
    }

    /// Disables an operator and ends their sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not exist.
    pub fn disable_operator(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::operators::disable_operator(&mut self.conn, operator_id)
    }

    /// Re-enables a disabled operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not exist.
    pub fn enable_operator(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::operators::enable_operator(&mut self.conn, operator_id)
    }

    /// Verifies a password against an operator's stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash cannot be read.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        queries::operators::verify_password(password, password_hash)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Creates a new session for an operator.
    ///
    /// # Arguments
    ///
    /// * `session_token` - The unique session token
    /// * `operator_id` - The operator ID
    /// * `expires_at` - The expiration timestamp (ISO 8601 format)
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        operator_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::operators::create_session(&mut self.conn, session_token, operator_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::operators::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::operators::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::operators::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all expired sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        mutations::operators::delete_expired_sessions(&mut self.conn)
    }
}
