// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator and session queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use matchday_domain::ClubId;
use tracing::debug;

use crate::data_models::{OperatorData, SessionData};
use crate::diesel_schema::{operators, sessions};
use crate::error::PersistenceError;

/// Diesel Queryable struct for operator rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = operators)]
struct OperatorRow {
    operator_id: i64,
    login_name: String,
    display_name: String,
    password_hash: String,
    role: String,
    club_id: Option<i64>,
    is_disabled: i32,
    created_at: String,
    disabled_at: Option<String>,
    last_login_at: Option<String>,
}

impl From<OperatorRow> for OperatorData {
    fn from(row: OperatorRow) -> Self {
        Self {
            operator_id: row.operator_id,
            login_name: row.login_name,
            display_name: row.display_name,
            password_hash: row.password_hash,
            role: row.role,
            club_id: row.club_id.map(ClubId::new),
            is_disabled: row.is_disabled != 0,
            created_at: row.created_at,
            disabled_at: row.disabled_at,
            last_login_at: row.last_login_at,
        }
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    session_id: i64,
    session_token: String,
    operator_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

/// Retrieves an operator by login name.
///
/// The `login_name` is normalized to uppercase for case-insensitive lookup.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `login_name` - The login name to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the operator is not found.
pub fn get_operator_by_login(
    conn: &mut SqliteConnection,
    login_name: &str,
) -> Result<Option<OperatorData>, PersistenceError> {
    let normalized_login: String = login_name.to_uppercase();

    debug!(login_name = %normalized_login, "Looking up operator by login");

    let row: Option<OperatorRow> = operators::table
        .filter(operators::login_name.eq(&normalized_login))
        .select(OperatorRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(OperatorData::from))
}

/// Retrieves an operator by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the operator is not found.
pub fn get_operator_by_id(
    conn: &mut SqliteConnection,
    operator_id: i64,
) -> Result<Option<OperatorData>, PersistenceError> {
    debug!(operator_id, "Looking up operator by ID");

    let row: Option<OperatorRow> = operators::table
        .filter(operators::operator_id.eq(operator_id))
        .select(OperatorRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(OperatorData::from))
}

/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    let row: Option<SessionRow> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| SessionData {
        session_id: row.session_id,
        session_token: row.session_token,
        operator_id: row.operator_id,
        created_at: row.created_at,
        last_activity_at: row.last_activity_at,
        expires_at: row.expires_at,
    }))
}

/// Lists all operators by login name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_operators(conn: &mut SqliteConnection) -> Result<Vec<OperatorData>, PersistenceError> {
    debug!("Listing all operators");

    let rows: Vec<OperatorRow> = operators::table
        .select(OperatorRow::as_select())
        .order_by(operators::login_name.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(OperatorData::from).collect())
}

/// Counts the total number of operators.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_operators(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = operators::table
        .select(count(operators::operator_id))
        .first(conn)?;

    debug!(count, "Counted operators");
    Ok(count)
}

/// Counts operators with the `Admin` role that are not disabled.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_active_admin_operators(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = operators::table
        .filter(operators::role.eq("Admin"))
        .filter(operators::is_disabled.eq(0))
        .select(count(operators::operator_id))
        .first(conn)?;

    debug!(count, "Counted active admin operators");
    Ok(count)
}

/// Verifies a password against a stored hash.
///
/// # Arguments
///
/// * `password` - The plain text password to verify
/// * `password_hash` - The stored bcrypt hash
///
/// # Errors
///
/// Returns an error if password verification fails.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
