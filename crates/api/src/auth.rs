// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use matchday_domain::ClubId;
use matchday_persistence::{OperatorData, Persistence, SessionData};
use time::format_description::well_known::Iso8601;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Operator roles for authorization.
///
/// Roles apply only to operators, never to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// League administrator.
    ///
    /// Admins may:
    /// - create clubs, teams, players and fixtures
    /// - create operators
    /// - edit and save any team's lineups
    Admin,
    /// Owner of a single club.
    ///
    /// Club owners may read rosters and fixtures and edit lineups, but only
    /// for teams of the club they are bound to.
    ClubOwner,
}

impl Role {
    /// Returns the stored role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::ClubOwner => "ClubOwner",
        }
    }

    /// Parses a stored role name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Admin" => Some(Self::Admin),
            "ClubOwner" => Some(Self::ClubOwner),
            _ => None,
        }
    }
}

/// An authenticated operator with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The operator's login name.
    pub id: String,
    /// The role assigned to this operator.
    pub role: Role,
    /// The club a `ClubOwner` manages.
    pub club_id: Option<ClubId>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The operator's login name
    /// * `role` - The role assigned to this operator
    /// * `club_id` - The club a `ClubOwner` manages
    #[must_use]
    pub const fn new(id: String, role: Role, club_id: Option<ClubId>) -> Self {
        Self { id, role, club_id }
    }

    /// Builds the actor for a stored operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored role is unknown.
    pub fn from_operator(operator: &OperatorData) -> Result<Self, AuthError> {
        let role: Role =
            Role::parse(&operator.role).ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", operator.role),
            })?;
        Ok(Self::new(operator.login_name.clone(), role, operator.club_id))
    }
}

/// Role-based access checks.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the actor is an admin.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The action being attempted, for the error
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::ClubOwner => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin role"),
            }),
        }
    }

    /// Checks that the actor may manage a club's teams.
    ///
    /// Admins may manage every club. A club owner may manage only the club
    /// they are bound to.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is a club owner of another club, or of
    /// no club at all.
    pub fn authorize_club(
        actor: &AuthenticatedActor,
        club_id: ClubId,
        action: &str,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::ClubOwner if actor.club_id == Some(club_id) => Ok(()),
            Role::ClubOwner => {
                warn!(
                    operator = %actor.id,
                    %club_id,
                    action,
                    "Club owner denied access to another club"
                );
                Err(AuthError::Unauthorized {
                    action: action.to_string(),
                    required_role: format!("Admin role or ownership of club {club_id}"),
                })
            }
        }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session lifetime.
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Verifies credentials and opens a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login_name` - The operator login name (case-insensitive)
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the operator is unknown or disabled, the password
    /// is wrong, or the session cannot be stored.
    pub fn login(
        persistence: &mut Persistence,
        login_name: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, OperatorData), AuthError> {
        let operator: OperatorData = persistence
            .get_operator_by_login(login_name.trim())
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid login name or password"),
            })?;

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let password_ok: bool = persistence
            .verify_password(password, &operator.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to verify password: {e}"),
            })?;
        if !password_ok {
            warn!(login_name = %operator.login_name, "Rejected login with wrong password");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid login name or password"),
            });
        }

        let authenticated_actor: AuthenticatedActor = AuthenticatedActor::from_operator(&operator)?;

        let session_token: String = Self::generate_session_token();
        let expires_at: String = (OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION)
            .format(&Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, operator.operator_id, &expires_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(operator.operator_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        info!(
            login_name = %operator.login_name,
            role = authenticated_actor.role.as_str(),
            "Operator logged in"
        );

        Ok((session_token, authenticated_actor, operator))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or its
    /// operator is missing or disabled.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, OperatorData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::database_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            OffsetDateTime::parse(&session.expires_at, &Iso8601::DEFAULT).map_err(|e| {
                AuthError::AuthenticationFailed {
                    reason: format!("Failed to parse session expiration: {e}"),
                }
            })?;

        if OffsetDateTime::now_utc() > expires_at {
            debug!(session_id = session.session_id, "Session expired");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let operator: OperatorData = persistence
            .get_operator_by_id(session.operator_id)
            .map_err(Self::database_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Operator not found"),
            })?;

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let authenticated_actor: AuthenticatedActor = AuthenticatedActor::from_operator(&operator)?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::database_error)?;

        Ok((authenticated_actor, operator))
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be deleted.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })
    }

    /// Generates a session token from the clock and a random suffix.
    fn generate_session_token() -> String {
        let timestamp: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    fn database_error(err: matchday_persistence::PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
