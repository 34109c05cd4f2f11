// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer session extraction for authenticated routes.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use matchday_api::{AuthenticatedActor, AuthenticationService};
use matchday_persistence::{OperatorData, Persistence};
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// The operator behind an `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing or malformed, or when the
/// session is unknown, expired, or belongs to a disabled operator.
pub struct SessionOperator(pub AuthenticatedActor, pub OperatorData);

/// Reads the bearer token from the request headers.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, SessionError> {
    let auth_header: &str = headers
        .get("Authorization")
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        SessionError::InvalidAuthorizationHeader
    })
}

impl FromRequestParts<AppState> for SessionOperator {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: &str = bearer_token(&parts.headers)?;

        let mut persistence: tokio::sync::MutexGuard<'_, Persistence> =
            state.persistence.lock().await;
        let (actor, operator): (AuthenticatedActor, OperatorData) =
            AuthenticationService::validate_session(&mut persistence, token).map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;

        debug!(
            login_name = %operator.login_name,
            role = ?actor.role,
            "Session validated"
        );

        Ok(Self(actor, operator))
    }
}

/// Why a request carried no usable session.
#[derive(Debug)]
pub enum SessionError {
    /// No `Authorization` header.
    MissingAuthorizationHeader,
    /// The header is not `Bearer <token>`.
    InvalidAuthorizationHeader,
    /// The token did not resolve to an active session.
    InvalidSession(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAuthorizationHeader => write!(f, "Missing Authorization header"),
            Self::InvalidAuthorizationHeader => write!(
                f,
                "Invalid Authorization header format. Expected: 'Bearer <token>'"
            ),
            Self::InvalidSession(reason) => write!(f, "Session validation failed: {reason}"),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let body: axum::Json<ErrorResponse> = axum::Json(ErrorResponse {
            error: true,
            message: self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
