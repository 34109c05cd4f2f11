// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod live;
mod session;


use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use matchday_api::{
    ApiError, ApplyDraftCommandsRequest, BootstrapStatusResponse, CreateClubRequest,
    CreateClubResponse, CreateFirstAdminRequest, CreateFirstAdminResponse, CreateOperatorRequest,
    CreateOperatorResponse, CreateTeamRequest, CreateTeamResponse, DraftView, GetLineupRequest,
    LineupInfo, ListFormatsResponse, ListMatchesResponse, ListOperatorsResponse, LoginRequest,
    LoginResponse, OpenDraftRequest, OperatorStatusResponse, RegisterPlayerRequest,
    RegisterPlayerResponse, RosterResponse, SaveLineupRequest, SaveLineupResponse,
    ScheduleMatchRequest, ScheduleMatchResponse, WhoAmIResponse,
};
use matchday_domain::{DomainError, TeamId};
use matchday_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use crate::session::{SessionOperator, bearer_token};

/// How often expired sessions are purged.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Matchday Server - HTTP server for club lineup management
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// League, lineup and operator storage.
    pub persistence: Arc<Mutex<Persistence>>,
    /// Live event fan-out for dashboards.
    pub live: Arc<LiveEventBroadcaster>,
}

impl AppState {
    /// Wraps a persistence adapter with a fresh broadcaster.
    fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            live: Arc::new(LiveEventBroadcaster::new()),
        }
    }
}

/// Query parameters for the formats endpoint.
#[derive(Debug, Deserialize)]
struct ListFormatsQuery {
    /// Only list formats a roster of this size can field.
    roster_size: Option<usize>,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `"ok"` when the server answers.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error indicator.
    pub error: bool,
    /// Error message.
    pub message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { message } => {
                error!(error = %message, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

impl From<session::SessionError> for HttpError {
    fn from(err: session::SessionError) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Health & authentication
// ============================================================================

/// Handler for GET `/api/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/api/auth/bootstrap`.
///
/// Reports whether the first admin still has to be created.
async fn handle_bootstrap_status(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<BootstrapStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: BootstrapStatusResponse = matchday_api::check_bootstrap_status(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for POST `/api/auth/bootstrap`.
///
/// Creates the first admin. Refused once any operator exists.
async fn handle_create_first_admin(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateFirstAdminRequest>,
) -> Result<Json<CreateFirstAdminResponse>, HttpError> {
    info!(login_name = %req.login_name, "Handling create_first_admin request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateFirstAdminResponse =
        matchday_api::create_first_admin(&mut persistence, req)?;
    drop(persistence);

    info!(operator_id = response.operator_id, "Created first admin");
    Ok(Json(response))
}

/// Handler for POST `/api/auth/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login_name = %req.login_name, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = matchday_api::login(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/api/auth/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let token: &str = bearer_token(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    matchday_api::logout(&mut persistence, token)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/api/auth/me`.
async fn handle_whoami(SessionOperator(actor, operator): SessionOperator) -> Json<WhoAmIResponse> {
    Json(matchday_api::whoami(&actor, &operator))
}

// ============================================================================
// League management
// ============================================================================

/// Handler for GET `/api/formats`.
async fn handle_list_formats(Query(query): Query<ListFormatsQuery>) -> Json<ListFormatsResponse> {
    Json(matchday_api::list_formats(query.roster_size))
}

/// Handler for POST `/api/operators`.
async fn handle_create_operator(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<CreateOperatorRequest>,
) -> Result<Json<CreateOperatorResponse>, HttpError> {
    info!(
        actor = %actor.id,
        login_name = %req.login_name,
        role = %req.role,
        "Handling create_operator request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateOperatorResponse =
        matchday_api::create_operator(&mut persistence, req, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/api/operators`.
async fn handle_list_operators(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
) -> Result<Json<ListOperatorsResponse>, HttpError> {
    debug!(actor = %actor.id, "Handling list_operators request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListOperatorsResponse = matchday_api::list_operators(&mut persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/api/operators/{operator_id}/disable`.
async fn handle_disable_operator(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(operator_id): Path<i64>,
) -> Result<Json<OperatorStatusResponse>, HttpError> {
    info!(actor = %actor.id, operator_id, "Handling disable_operator request");

    let mut persistence = app_state.persistence.lock().await;
    let response: OperatorStatusResponse =
        matchday_api::disable_operator(&mut persistence, operator_id, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/api/operators/{operator_id}/enable`.
async fn handle_enable_operator(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(operator_id): Path<i64>,
) -> Result<Json<OperatorStatusResponse>, HttpError> {
    info!(actor = %actor.id, operator_id, "Handling enable_operator request");

    let mut persistence = app_state.persistence.lock().await;
    let response: OperatorStatusResponse =
        matchday_api::enable_operator(&mut persistence, operator_id, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/api/clubs`.
async fn handle_create_club(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<CreateClubRequest>,
) -> Result<Json<CreateClubResponse>, HttpError> {
    info!(actor = %actor.id, name = %req.name, "Handling create_club request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateClubResponse = matchday_api::create_club(&mut persistence, &req, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/api/teams`.
async fn handle_create_team(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Json<CreateTeamResponse>, HttpError> {
    info!(
        actor = %actor.id,
        club_id = %req.club_id,
        name = %req.name,
        "Handling create_team request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateTeamResponse = matchday_api::create_team(&mut persistence, &req, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/api/players`.
async fn handle_register_player(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<RegisterPlayerRequest>,
) -> Result<Json<RegisterPlayerResponse>, HttpError> {
    info!(
        actor = %actor.id,
        team_id = %req.team_id,
        "Handling register_player request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterPlayerResponse =
        matchday_api::register_player(&mut persistence, &req, &actor)?;
    drop(persistence);

    app_state.live.broadcast(&LiveEvent::PlayerRegistered {
        team_id: response.team_id,
        player_id: response.player_id,
    });

    Ok(Json(response))
}

/// Handler for POST `/api/matches`.
async fn handle_schedule_match(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<ScheduleMatchRequest>,
) -> Result<Json<ScheduleMatchResponse>, HttpError> {
    info!(
        actor = %actor.id,
        team_id = %req.team_id,
        opponent = %req.opponent,
        "Handling schedule_match request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ScheduleMatchResponse =
        matchday_api::schedule_match(&mut persistence, &req, &actor)?;
    drop(persistence);

    app_state.live.broadcast(&LiveEvent::MatchScheduled {
        team_id: response.fixture.team_id,
        match_id: response.fixture.match_id,
        opponent: response.fixture.opponent.clone(),
        kickoff: response.fixture.kickoff.clone(),
    });

    Ok(Json(response))
}

/// Handler for GET `/api/teams/{team_id}/roster`.
async fn handle_get_roster(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(team_id): Path<i64>,
) -> Result<Json<RosterResponse>, HttpError> {
    debug!(team_id, "Handling get_roster request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RosterResponse =
        matchday_api::get_roster(&mut persistence, TeamId::new(team_id), &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/api/teams/{team_id}/matches`.
async fn handle_list_matches(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(team_id): Path<i64>,
) -> Result<Json<ListMatchesResponse>, HttpError> {
    debug!(team_id, "Handling list_matches request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListMatchesResponse =
        matchday_api::list_matches(&mut persistence, TeamId::new(team_id), &actor)?;
    Ok(Json(response))
}

// ============================================================================
// Lineups
// ============================================================================

/// Handler for POST `/api/lineups/draft`.
///
/// Opens the saved lineup for a team, format and match, or a fresh draft.
async fn handle_open_draft(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<OpenDraftRequest>,
) -> Result<Json<DraftView>, HttpError> {
    debug!(team_id = %req.team_id, "Handling open_draft request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DraftView = matchday_api::open_draft(&mut persistence, &req, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/api/lineups/draft/commands`.
///
/// Applies editor commands to a client-held draft and returns the result.
async fn handle_apply_draft_commands(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<ApplyDraftCommandsRequest>,
) -> Result<Json<DraftView>, HttpError> {
    debug!(
        team_id = %req.draft.team_id,
        commands = req.commands.len(),
        "Handling apply_draft_commands request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: DraftView = matchday_api::apply_draft_commands(&mut persistence, req, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/api/lineups`.
///
/// Saves a draft as the lineup for its key and tells live listeners.
async fn handle_save_lineup(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<SaveLineupRequest>,
) -> Result<Json<SaveLineupResponse>, HttpError> {
    info!(
        actor = %actor.id,
        team_id = %req.draft.team_id,
        name = %req.name,
        "Handling save_lineup request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: SaveLineupResponse = matchday_api::save_lineup(&mut persistence, &req, &actor)?;
    drop(persistence);

    app_state.live.broadcast(&lineup_saved_event(&response.lineup));

    info!(
        lineup_id = response.lineup.lineup_id,
        notified = ?response.notified,
        "Saved lineup"
    );

    Ok(Json(response))
}

/// Handler for POST `/api/lineups/lookup`.
async fn handle_get_lineup(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<GetLineupRequest>,
) -> Result<Json<LineupInfo>, HttpError> {
    debug!(team_id = %req.team_id, "Handling get_lineup request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LineupInfo = matchday_api::get_lineup(&mut persistence, &req, &actor)?;
    Ok(Json(response))
}

fn lineup_saved_event(lineup: &LineupInfo) -> LiveEvent {
    LiveEvent::LineupSaved {
        team_id: lineup.team_id,
        format: lineup.format,
        match_id: lineup.match_id,
        lineup_id: lineup.lineup_id,
        starters: lineup.starters.iter().map(|entry| entry.player_id).collect(),
        substitutes: lineup
            .substitutes
            .iter()
            .map(|entry| entry.player_id)
            .collect(),
    }
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route(
            "/api/auth/bootstrap",
            get(handle_bootstrap_status).post(handle_create_first_admin),
        )
        .route("/api/auth/login", post(handle_login))
        .route("/api/auth/logout", post(handle_logout))
        .route("/api/auth/me", get(handle_whoami))
        .route("/api/formats", get(handle_list_formats))
        .route(
            "/api/operators",
            get(handle_list_operators).post(handle_create_operator),
        )
        .route(
            "/api/operators/{operator_id}/disable",
            post(handle_disable_operator),
        )
        .route(
            "/api/operators/{operator_id}/enable",
            post(handle_enable_operator),
        )
        .route("/api/clubs", post(handle_create_club))
        .route("/api/teams", post(handle_create_team))
        .route("/api/teams/{team_id}/roster", get(handle_get_roster))
        .route("/api/teams/{team_id}/matches", get(handle_list_matches))
        .route("/api/players", post(handle_register_player))
        .route("/api/matches", post(handle_schedule_match))
        .route("/api/lineups", post(handle_save_lineup))
        .route("/api/lineups/draft", post(handle_open_draft))
        .route(
            "/api/lineups/draft/commands",
            post(handle_apply_draft_commands),
        )
        .route("/api/lineups/lookup", post(handle_get_lineup))
        .route("/api/live", get(live_events_handler))
        .with_state(app_state)
}

/// Deletes expired sessions once per interval, forever.
async fn purge_expired_sessions(persistence: Arc<Mutex<Persistence>>) {
    let mut interval: tokio::time::Interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
    loop {
        interval.tick().await;
        let mut guard = persistence.lock().await;
        match guard.delete_expired_sessions() {
            Ok(0) => {}
            Ok(purged) => info!(purged, "Purged expired sessions"),
            Err(e) => warn!(error = %e, "Failed to purge expired sessions"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Matchday Server");

    matchday_domain::validate_catalog().map_err(|e: DomainError| {
        error!(error = %e, "Formation catalog failed validation");
        e
    })?;

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState::new(persistence);
    tokio::spawn(purge_expired_sessions(Arc::clone(&app_state.persistence)));

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
