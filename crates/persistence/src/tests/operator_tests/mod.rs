// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for operator and session persistence operations.

use crate::{OperatorData, Persistence, PersistenceError, SessionData};
use matchday_domain::ClubId;

#[test]
fn test_create_operator_normalizes_login_and_hashes_password() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let operator_id: i64 = persistence
        .create_operator("coach", "Coach Carter", "password", "Admin", None)
        .unwrap();

    let operator: OperatorData = persistence.get_operator_by_login("Coach").unwrap().unwrap();
    assert_eq!(operator.operator_id, operator_id);
    assert_eq!(operator.login_name, "COACH");
    assert_ne!(operator.password_hash, "password");
    assert!(
        persistence
            .verify_password("password", &operator.password_hash)
            .unwrap()
    );
    assert!(
        !persistence
            .verify_password("wrong", &operator.password_hash)
            .unwrap()
    );
}

#[test]
fn test_club_owner_keeps_club_binding() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let club_id: ClubId = persistence.create_club("Harbour United").unwrap();
    let operator_id: i64 = persistence
        .create_operator("owner", "Club Owner", "password", "ClubOwner", Some(club_id))
        .unwrap();

    let operator: OperatorData = persistence.get_operator_by_id(operator_id).unwrap().unwrap();
    assert_eq!(operator.role, "ClubOwner");
    assert_eq!(operator.club_id, Some(club_id));
}

#[test]
fn test_duplicate_login_is_rejected_case_insensitively() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_operator("coach", "Coach", "password", "Admin", None)
        .unwrap();

    let result: Result<i64, PersistenceError> =
        persistence.create_operator("COACH", "Coach Again", "password", "Admin", None);
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_operator_counts() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.count_operators().unwrap(), 0);

    let admin: i64 = persistence
        .create_operator("admin", "Admin", "password", "Admin", None)
        .unwrap();
    persistence
        .create_operator("owner", "Owner", "password", "ClubOwner", None)
        .unwrap();

    assert_eq!(persistence.count_operators().unwrap(), 2);
    assert_eq!(persistence.count_active_admin_operators().unwrap(), 1);

    persistence.disable_operator(admin).unwrap();
    assert_eq!(persistence.count_active_admin_operators().unwrap(), 0);
    assert_eq!(persistence.list_operators().unwrap().len(), 2);
}

#[test]
fn test_disable_and_enable_operator() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let operator_id: i64 = persistence
        .create_operator("coach", "Coach", "password", "Admin", None)
        .unwrap();
    persistence
        .create_session("session_token_1", operator_id, "2099-01-01T00:00:00.000000000Z")
        .unwrap();

    persistence.disable_operator(operator_id).unwrap();

    let operator: OperatorData = persistence.get_operator_by_id(operator_id).unwrap().unwrap();
    assert!(operator.is_disabled);
    assert!(operator.disabled_at.is_some());
    assert!(
        persistence
            .get_session_by_token("session_token_1")
            .unwrap()
            .is_none()
    );

    persistence.enable_operator(operator_id).unwrap();

    let operator: OperatorData = persistence.get_operator_by_id(operator_id).unwrap().unwrap();
    assert!(!operator.is_disabled);
    assert!(operator.disabled_at.is_none());
}

#[test]
fn test_disable_missing_operator_fails() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<(), PersistenceError> = persistence.disable_operator(404);
    assert!(matches!(result, Err(PersistenceError::OperatorNotFound(_))));
}

#[test]
fn test_enable_missing_operator_fails() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<(), PersistenceError> = persistence.enable_operator(404);
    assert!(matches!(result, Err(PersistenceError::OperatorNotFound(_))));
}

#[test]
fn test_update_last_login_sets_timestamp() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let operator_id: i64 = persistence
        .create_operator("coach", "Coach", "password", "Admin", None)
        .unwrap();

    persistence.update_last_login(operator_id).unwrap();

    let operator: OperatorData = persistence.get_operator_by_id(operator_id).unwrap().unwrap();
    assert!(operator.last_login_at.is_some());
}

#[test]
fn test_session_lifecycle() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let operator_id: i64 = persistence
        .create_operator("coach", "Coach", "password", "Admin", None)
        .unwrap();

    let session_id: i64 = persistence
        .create_session("session_abc", operator_id, "2099-01-01T00:00:00.000000000Z")
        .unwrap();
    persistence.update_session_activity(session_id).unwrap();

    let session: SessionData = persistence
        .get_session_by_token("session_abc")
        .unwrap()
        .unwrap();
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.operator_id, operator_id);

    persistence.delete_session("session_abc").unwrap();
    assert!(
        persistence
            .get_session_by_token("session_abc")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_delete_expired_sessions_keeps_live_ones() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let operator_id: i64 = persistence
        .create_operator("coach", "Coach", "password", "Admin", None)
        .unwrap();

    persistence
        .create_session("expired", operator_id, "2000-01-01T00:00:00.000000000Z")
        .unwrap();
    persistence
        .create_session("live", operator_id, "2099-01-01T00:00:00.000000000Z")
        .unwrap();

    assert_eq!(persistence.delete_expired_sessions().unwrap(), 1);
    assert!(persistence.get_session_by_token("expired").unwrap().is_none());
    assert!(persistence.get_session_by_token("live").unwrap().is_some());
}
