// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler that touches a team checks the actor first: admins may act
//! on any team, club owners only on their own club's teams.

use std::str::FromStr;

use matchday::{
    LineupKey, LineupRecord, LineupState, LoadedLineup, Readiness, SaveOutcome, Tiers,
    TransitionResult, apply,
};
use matchday_domain::{
    ClubId, DomainError, MatchFixture, MatchId, PlayerId, PositionCategory, RosterPlayer, Scheme,
    SlotKey, SquadFormat, SquadRequirements, TeamId, available_formats, preferred_format, schemes,
    validate_entity_name, validate_jersey_number,
};
use matchday_persistence::{ClubData, NewMatch, NewPlayer, OperatorData, Persistence, TeamData};
use time::Date;
use time::macros::format_description;
use tracing::{debug, info};

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
    translate_service_error,
};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    ActionInfo, ApplyDraftCommandsRequest, BootstrapStatusResponse, CreateClubRequest,
    CreateClubResponse, CreateFirstAdminRequest, CreateFirstAdminResponse, CreateOperatorRequest,
    CreateOperatorResponse, CreateTeamRequest, CreateTeamResponse, DraftLineup, DraftView,
    FormatInfo, GetLineupRequest, LineupEntryInfo, LineupInfo, ListFormatsResponse,
    ListMatchesResponse, ListOperatorsResponse, LoginRequest, LoginResponse, MatchInfo,
    OpenDraftRequest, OperatorInfo, OperatorStatusResponse, PitchSlot, PlayerSummary, ReadinessInfo,
    RegisterPlayerRequest, RegisterPlayerResponse, RosterResponse, SaveLineupRequest,
    SaveLineupResponse, ScheduleMatchRequest, ScheduleMatchResponse, SchemeInfo, SlotAssignment,
    SlotInfo, WhoAmIResponse,
};

// ========================================================================
// Formation catalog
// ========================================================================

/// Lists the squad formats with their requirements and schemes.
///
/// # Arguments
///
/// * `roster_size` - When given, only formats this roster size allows are
///   listed and the preferred format is reported
#[must_use]
pub fn list_formats(roster_size: Option<usize>) -> ListFormatsResponse {
    let formats: Vec<SquadFormat> =
        roster_size.map_or_else(|| SquadFormat::ALL.to_vec(), available_formats);

    ListFormatsResponse {
        formats: formats.into_iter().map(format_info).collect(),
        preferred_format: roster_size.map(preferred_format),
    }
}

fn format_info(format: SquadFormat) -> FormatInfo {
    let requirements: SquadRequirements = format.requirements();
    FormatInfo {
        format,
        short_key: format.short_key().to_string(),
        players_on_field: requirements.players_on_field,
        min_players: requirements.min_players,
        min_substitutes: requirements.min_substitutes,
        recommended_squad: requirements.recommended_squad,
        schemes: schemes(format).iter().map(scheme_info).collect(),
    }
}

fn scheme_info(scheme: &Scheme) -> SchemeInfo {
    SchemeInfo {
        name: scheme.name.to_string(),
        label: scheme.label.to_string(),
        slots: scheme
            .slots
            .iter()
            .map(|slot| SlotInfo {
                key: slot.key(),
                role: slot.role,
                x: slot.x,
                y: slot.y,
            })
            .collect(),
    }
}

// ========================================================================
// Authentication & bootstrap
// ========================================================================

/// Reports whether the first admin still has to be created.
///
/// # Errors
///
/// Returns an error if the operators cannot be counted.
pub fn check_bootstrap_status(
    persistence: &mut Persistence,
) -> Result<BootstrapStatusResponse, ApiError> {
    let operator_count: i64 = persistence
        .count_operators()
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to count operators: {e}"),
        })?;

    Ok(BootstrapStatusResponse {
        needs_bootstrap: operator_count == 0,
    })
}

/// Creates the first admin operator.
///
/// This only succeeds while no operator exists.
///
/// # Errors
///
/// Returns an error if:
/// - Operators already exist
/// - The password breaks the policy
/// - Database operations fail
pub fn create_first_admin(
    persistence: &mut Persistence,
    request: CreateFirstAdminRequest,
) -> Result<CreateFirstAdminResponse, ApiError> {
    let operator_count: i64 = persistence
        .count_operators()
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to count operators: {e}"),
        })?;

    if operator_count > 0 {
        return Err(ApiError::Unauthorized {
            action: String::from("create_first_admin"),
            required_role: String::from("Bootstrap mode (no operators exist)"),
        });
    }

    validate_entity_name("display_name", &request.display_name).map_err(translate_domain_error)?;
    PasswordPolicy::default().validate(
        &request.password,
        &request.password_confirmation,
        &request.login_name,
        &request.display_name,
    )?;

    let operator_id: i64 = persistence
        .create_operator(
            request.login_name.trim(),
            request.display_name.trim(),
            &request.password,
            Role::Admin.as_str(),
            None,
        )
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to create first admin: {e}"),
        })?;

    let login_name: String = request.login_name.trim().to_uppercase();
    info!(operator_id, %login_name, "First admin created");

    Ok(CreateFirstAdminResponse {
        operator_id,
        login_name,
        message: String::from("First admin operator created successfully"),
    })
}

/// Authenticates an operator and opens a session.
///
/// # Errors
///
/// Returns an error if the credentials are wrong, the operator is disabled,
/// or the session cannot be stored.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, actor, operator): (String, AuthenticatedActor, OperatorData) =
        AuthenticationService::login(persistence, &request.login_name, &request.password)?;

    Ok(LoginResponse {
        session_token,
        login_name: operator.login_name,
        display_name: operator.display_name,
        role: actor.role.as_str().to_string(),
        club_id: actor.club_id,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Describes the operator behind a validated session.
#[must_use]
pub fn whoami(actor: &AuthenticatedActor, operator: &OperatorData) -> WhoAmIResponse {
    WhoAmIResponse {
        login_name: operator.login_name.clone(),
        display_name: operator.display_name.clone(),
        role: actor.role.as_str().to_string(),
        club_id: actor.club_id,
        last_login_at: operator.last_login_at.clone(),
    }
}

/// Creates an operator.
///
/// Only admins may create operators. A club owner must be bound to an
/// existing club; an admin must not be bound to one.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an admin
/// - The role is unknown or the club binding is wrong
/// - The password breaks the policy
/// - The login name is taken
pub fn create_operator(
    persistence: &mut Persistence,
    request: CreateOperatorRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CreateOperatorResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "create_operator")?;

    let role: Role = Role::parse(&request.role).ok_or_else(|| ApiError::InvalidInput {
        field: String::from("role"),
        message: format!(
            "Invalid role: {}. Must be 'Admin' or 'ClubOwner'",
            request.role
        ),
    })?;

    match (role, request.club_id) {
        (Role::ClubOwner, None) => {
            return Err(ApiError::InvalidInput {
                field: String::from("club_id"),
                message: String::from("A club owner must be bound to a club"),
            });
        }
        (Role::ClubOwner, Some(club_id)) => {
            require_club(persistence, club_id)?;
        }
        (Role::Admin, Some(_)) => {
            return Err(ApiError::InvalidInput {
                field: String::from("club_id"),
                message: String::from("An admin cannot be bound to a club"),
            });
        }
        (Role::Admin, None) => {}
    }

    validate_entity_name("display_name", &request.display_name).map_err(translate_domain_error)?;
    PasswordPolicy::default().validate(
        &request.password,
        &request.password_confirmation,
        &request.login_name,
        &request.display_name,
    )?;

    let operator_id: i64 = persistence
        .create_operator(
            request.login_name.trim(),
            request.display_name.trim(),
            &request.password,
            role.as_str(),
            request.club_id,
        )
        .map_err(translate_persistence_error)?;

    let login_name: String = request.login_name.trim().to_uppercase();
    info!(
        operator_id,
        %login_name,
        role = role.as_str(),
        created_by = %authenticated_actor.id,
        "Operator created"
    );

    Ok(CreateOperatorResponse {
        operator_id,
        login_name,
        role: role.as_str().to_string(),
        club_id: request.club_id,
        message: format!("Operator created with role {}", role.as_str()),
    })
}

/// Lists every operator. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the read fails.
pub fn list_operators(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListOperatorsResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "list_operators")?;

    let operators: Vec<OperatorData> =
        persistence.list_operators().map_err(translate_persistence_error)?;

    Ok(ListOperatorsResponse {
        operators: operators
            .into_iter()
            .map(|operator| OperatorInfo {
                operator_id: operator.operator_id,
                login_name: operator.login_name,
                display_name: operator.display_name,
                role: operator.role,
                club_id: operator.club_id,
                is_disabled: operator.is_disabled,
                created_at: operator.created_at,
                last_login_at: operator.last_login_at,
            })
            .collect(),
    })
}

/// Disables an operator and ends every session they hold. Admin only.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an admin
/// - The operator does not exist
/// - The operator is the last active admin
pub fn disable_operator(
    persistence: &mut Persistence,
    operator_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<OperatorStatusResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "disable_operator")?;
    let target: OperatorData = require_operator(persistence, operator_id)?;

    if target.role == Role::Admin.as_str() && !target.is_disabled {
        let active_admins: i64 = persistence
            .count_active_admin_operators()
            .map_err(translate_persistence_error)?;
        if active_admins <= 1 {
            return Err(ApiError::DomainRuleViolation {
                rule: String::from("last_active_admin"),
                message: String::from("Operation would leave the league without an active admin"),
            });
        }
    }

    persistence
        .disable_operator(operator_id)
        .map_err(translate_persistence_error)?;

    info!(
        operator_id,
        login_name = %target.login_name,
        disabled_by = %authenticated_actor.id,
        "Operator disabled"
    );

    Ok(OperatorStatusResponse {
        operator_id,
        message: format!("Operator {} disabled", target.login_name),
        login_name: target.login_name,
        is_disabled: true,
    })
}

/// Re-enables a disabled operator. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the operator does not
/// exist.
pub fn enable_operator(
    persistence: &mut Persistence,
    operator_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<OperatorStatusResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "enable_operator")?;
    let target: OperatorData = require_operator(persistence, operator_id)?;

    persistence
        .enable_operator(operator_id)
        .map_err(translate_persistence_error)?;

    info!(
        operator_id,
        login_name = %target.login_name,
        enabled_by = %authenticated_actor.id,
        "Operator re-enabled"
    );

    Ok(OperatorStatusResponse {
        operator_id,
        message: format!("Operator {} re-enabled", target.login_name),
        login_name: target.login_name,
        is_disabled: false,
    })
}

// ========================================================================
// Clubs, teams, players, matches
// ========================================================================

/// Creates a club. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the name is invalid, or a
/// club with the name exists.
pub fn create_club(
    persistence: &mut Persistence,
    request: &CreateClubRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CreateClubResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "create_club")?;
    validate_entity_name("name", &request.name).map_err(translate_domain_error)?;

    let name: &str = request.name.trim();
    let club_id: ClubId = persistence
        .create_club(name)
        .map_err(translate_persistence_error)?;

    info!(%club_id, name, "Club created");

    Ok(CreateClubResponse {
        club_id,
        name: name.to_string(),
        message: format!("Club '{name}' created"),
    })
}

/// Creates a team within a club. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the club does not exist,
/// the name is invalid, or the club already has a team with the name.
pub fn create_team(
    persistence: &mut Persistence,
    request: &CreateTeamRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CreateTeamResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "create_team")?;
    validate_entity_name("name", &request.name).map_err(translate_domain_error)?;
    require_club(persistence, request.club_id)?;

    let name: &str = request.name.trim();
    let team_id: TeamId = persistence
        .create_team(request.club_id, name, request.default_format)
        .map_err(translate_persistence_error)?;

    info!(%team_id, club_id = %request.club_id, name, "Team created");

    Ok(CreateTeamResponse {
        team_id,
        club_id: request.club_id,
        name: name.to_string(),
        default_format: request.default_format,
        message: format!("Team '{name}' created"),
    })
}

/// Adds a player to a team's roster. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the team does not exist,
/// a field is invalid, or the shirt number is already worn in the team.
pub fn register_player(
    persistence: &mut Persistence,
    request: &RegisterPlayerRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<RegisterPlayerResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "register_player")?;
    require_team(persistence, request.team_id)?;

    validate_entity_name("first_name", &request.first_name).map_err(translate_domain_error)?;
    validate_entity_name("last_name", &request.last_name).map_err(translate_domain_error)?;
    let position: PositionCategory =
        PositionCategory::from_str(&request.position).map_err(translate_domain_error)?;
    let jersey_number: Option<u8> = request
        .jersey_number
        .map(validate_jersey_number)
        .transpose()
        .map_err(translate_domain_error)?;

    let player: NewPlayer = NewPlayer {
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        position,
        jersey_number,
        photo_url: non_empty(request.photo_url.as_deref()),
    };

    let player_id: PlayerId = persistence
        .register_player(request.team_id, &player)
        .map_err(translate_persistence_error)?;

    let display_name: String = format!("{} {}", player.first_name, player.last_name);
    info!(
        %player_id,
        team_id = %request.team_id,
        position = position.as_str(),
        jersey_number = ?jersey_number,
        "Player registered"
    );

    Ok(RegisterPlayerResponse {
        player_id,
        team_id: request.team_id,
        message: format!("{display_name} added to the roster"),
        display_name,
    })
}

/// Schedules a match for a team. Admin only.
///
/// The match plays in the team's default format unless one is given.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the team does not exist,
/// the opponent is blank, or the kickoff is not a `YYYY-MM-DD` date.
pub fn schedule_match(
    persistence: &mut Persistence,
    request: &ScheduleMatchRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ScheduleMatchResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "schedule_match")?;
    let team: TeamData = require_team(persistence, request.team_id)?;

    validate_entity_name("opponent", &request.opponent).map_err(translate_domain_error)?;
    let kickoff: Date = Date::parse(
        request.kickoff.trim(),
        format_description!("[year]-[month]-[day]"),
    )
    .map_err(|e| ApiError::InvalidInput {
        field: String::from("kickoff"),
        message: format!("Kickoff '{}' is not a YYYY-MM-DD date: {e}", request.kickoff),
    })?;

    let fixture: NewMatch = NewMatch {
        team_id: team.team_id,
        opponent: request.opponent.trim().to_string(),
        kickoff,
        format: request.format.unwrap_or(team.default_format),
        venue: non_empty(request.venue.as_deref()),
    };

    let match_id: MatchId = persistence
        .schedule_match(&fixture)
        .map_err(translate_persistence_error)?;

    info!(
        %match_id,
        team_id = %fixture.team_id,
        opponent = %fixture.opponent,
        format = %fixture.format,
        "Match scheduled"
    );

    let scheduled: MatchFixture = MatchFixture {
        match_id,
        team_id: fixture.team_id,
        opponent: fixture.opponent,
        kickoff: fixture.kickoff,
        format: fixture.format,
        venue: fixture.venue,
    };
    let info: MatchInfo = match_info(&scheduled)?;

    Ok(ScheduleMatchResponse {
        message: format!("Match against {} scheduled for {}", info.opponent, info.kickoff),
        fixture: info,
    })
}

/// Returns a team's roster and the formats it can field.
///
/// # Errors
///
/// Returns an error if the team does not exist or the actor may not manage
/// it.
pub fn get_roster(
    persistence: &mut Persistence,
    team_id: TeamId,
    authenticated_actor: &AuthenticatedActor,
) -> Result<RosterResponse, ApiError> {
    let team: TeamData = authorize_team(persistence, team_id, authenticated_actor, "get_roster")?;
    let roster: Vec<RosterPlayer> = load_roster(persistence, team_id)?;

    Ok(RosterResponse {
        team_id,
        team_name: team.name,
        available_formats: available_formats(roster.len()),
        preferred_format: preferred_format(roster.len()),
        players: roster.iter().map(player_summary).collect(),
    })
}

/// Lists a team's matches by match day.
///
/// # Errors
///
/// Returns an error if the team does not exist or the actor may not manage
/// it.
pub fn list_matches(
    persistence: &mut Persistence,
    team_id: TeamId,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListMatchesResponse, ApiError> {
    authorize_team(persistence, team_id, authenticated_actor, "list_matches")?;

    let fixtures: Vec<MatchFixture> = persistence
        .list_matches(team_id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to list matches: {e}"),
        })?;

    Ok(ListMatchesResponse {
        team_id,
        matches: fixtures.iter().map(match_info).collect::<Result<_, _>>()?,
    })
}

// ========================================================================
// Lineup drafts
// ========================================================================

/// Opens a draft for a team.
///
/// The draft holds the lineup saved under `(team, format, match)` or, when
/// nothing is saved, an empty lineup in the format's default scheme. The
/// format is the requested one, else the match's, else the team default.
///
/// # Errors
///
/// Returns an error if the team or match does not exist, the match belongs
/// to another team or is played in a different format than requested, or
/// the actor may not manage the team.
pub fn open_draft(
    persistence: &mut Persistence,
    request: &OpenDraftRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<DraftView, ApiError> {
    let team: TeamData =
        authorize_team(persistence, request.team_id, authenticated_actor, "open_draft")?;
    let fixture: Option<MatchFixture> = request
        .match_id
        .map(|match_id| require_fixture(persistence, match_id, team.team_id))
        .transpose()?;

    if let (Some(fixture), Some(format)) = (fixture.as_ref(), request.format) {
        require_fixture_format(fixture, format)?;
    }

    let format: SquadFormat = request
        .format
        .or_else(|| fixture.as_ref().map(|fixture| fixture.format))
        .unwrap_or(team.default_format);
    let key: LineupKey = LineupKey::new(team.team_id, format, request.match_id);

    let loaded: LoadedLineup =
        matchday::load_lineup(persistence, key).map_err(translate_service_error)?;

    debug!(
        team_id = %key.team_id,
        format = %key.format,
        match_id = ?key.match_id,
        saved = loaded.saved.is_some(),
        "Draft opened"
    );

    Ok(draft_view(
        &loaded.state,
        key.team_id,
        key.match_id,
        loaded.saved.map(|record| record.name),
        Vec::new(),
    ))
}

/// Applies edits to a draft and returns the result.
///
/// The draft is rebuilt from what the client sent against the current
/// roster, then each command is applied in order. The batch fails on the
/// first rejected command and nothing is returned for the partial result.
///
/// # Errors
///
/// Returns an error if the draft is inconsistent with the roster or scheme,
/// any command is rejected, or the actor may not manage the team.
pub fn apply_draft_commands(
    persistence: &mut Persistence,
    request: ApplyDraftCommandsRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<DraftView, ApiError> {
    authorize_team(
        persistence,
        request.draft.team_id,
        authenticated_actor,
        "apply_draft_commands",
    )?;

    let mut state: LineupState = restore_draft(persistence, &request.draft)?;
    let mut actions: Vec<ActionInfo> = Vec::with_capacity(request.commands.len());

    for command in request.commands {
        let result: TransitionResult =
            apply(&state, command.into()).map_err(translate_core_error)?;

        info!(
            team_id = %request.draft.team_id,
            operator = %authenticated_actor.id,
            action = %result.action.name,
            details = ?result.action.details,
            "Draft command applied"
        );

        actions.push(ActionInfo {
            name: result.action.name,
            details: result.action.details,
        });
        state = result.new_state;
    }

    Ok(draft_view(
        &state,
        request.draft.team_id,
        request.draft.match_id,
        None,
        actions,
    ))
}

/// Saves a draft under `(team, format, match)`, replacing what was there.
///
/// When the draft is for a match, its starters and substitutes are notified.
/// A match lineup is always keyed by the match's own format.
///
/// # Errors
///
/// Returns an error if the draft is inconsistent, the name is invalid, the
/// match belongs to another team or is played in another format, the roster
/// is too small for the format, the actor may not manage the team, or the
/// write fails.
pub fn save_lineup(
    persistence: &mut Persistence,
    request: &SaveLineupRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<SaveLineupResponse, ApiError> {
    let team: TeamData = authorize_team(
        persistence,
        request.draft.team_id,
        authenticated_actor,
        "save_lineup",
    )?;
    if let Some(match_id) = request.draft.match_id {
        let fixture: MatchFixture = require_fixture(persistence, match_id, team.team_id)?;
        require_fixture_format(&fixture, request.draft.format)?;
    }

    let state: LineupState = restore_draft(persistence, &request.draft)?;
    let roster_len: usize = state.roster().len();
    if !state.format().is_available_for(roster_len) {
        return Err(translate_domain_error(DomainError::RosterTooSmall {
            format: state.format(),
            required: state.format().requirements().min_players,
            actual: roster_len,
        }));
    }
    let key: LineupKey = LineupKey::new(team.team_id, state.format(), request.draft.match_id);

    let outcome: SaveOutcome = matchday::save_lineup(persistence, &state, key, &request.name)
        .map_err(translate_service_error)?;

    let message: String = match outcome.notified {
        Some(count) => format!("Lineup '{}' saved, {count} players notified", outcome.record.name),
        None => format!("Lineup '{}' saved", outcome.record.name),
    };

    Ok(SaveLineupResponse {
        lineup: lineup_info(outcome.lineup_id, &outcome.record),
        notified: outcome.notified,
        message,
    })
}

/// Looks up the lineup saved under `(team, format, match)`.
///
/// # Errors
///
/// Returns an error if nothing is saved under the key or the actor may not
/// manage the team.
pub fn get_lineup(
    persistence: &mut Persistence,
    request: &GetLineupRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<LineupInfo, ApiError> {
    authorize_team(persistence, request.team_id, authenticated_actor, "get_lineup")?;

    let key: LineupKey = LineupKey::new(request.team_id, request.format, request.match_id);
    let (lineup_id, record): (i64, LineupRecord) = persistence
        .find_lineup(&key)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Lineup"),
            message: format!(
                "No {} lineup saved for team {}{}",
                request.format,
                request.team_id,
                request
                    .match_id
                    .map_or_else(String::new, |match_id| format!(" and match {match_id}"))
            ),
        })?;

    Ok(lineup_info(lineup_id, &record))
}

// ========================================================================
// Helpers
// ========================================================================

fn require_club(persistence: &mut Persistence, club_id: ClubId) -> Result<ClubData, ApiError> {
    persistence
        .get_club(club_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Club"),
            message: format!("Club {club_id} does not exist"),
        })
}

fn require_team(persistence: &mut Persistence, team_id: TeamId) -> Result<TeamData, ApiError> {
    persistence
        .get_team(team_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Team"),
            message: format!("Team {team_id} does not exist"),
        })
}

/// Loads a team and checks the actor may manage its club.
fn authorize_team(
    persistence: &mut Persistence,
    team_id: TeamId,
    actor: &AuthenticatedActor,
    action: &str,
) -> Result<TeamData, ApiError> {
    let team: TeamData = require_team(persistence, team_id)?;
    AuthorizationService::authorize_club(actor, team.club_id, action)?;
    Ok(team)
}

fn require_operator(
    persistence: &mut Persistence,
    operator_id: i64,
) -> Result<OperatorData, ApiError> {
    persistence
        .get_operator_by_id(operator_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message: format!("Operator with ID {operator_id} not found"),
        })
}

fn require_fixture(
    persistence: &mut Persistence,
    match_id: MatchId,
    team_id: TeamId,
) -> Result<MatchFixture, ApiError> {
    let fixture: MatchFixture = persistence
        .get_match(match_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Match"),
            message: format!("Match {match_id} does not exist"),
        })?;

    if fixture.team_id != team_id {
        return Err(ApiError::InvalidInput {
            field: String::from("match_id"),
            message: format!("Match {match_id} is not a fixture of team {team_id}"),
        });
    }

    Ok(fixture)
}

fn require_fixture_format(fixture: &MatchFixture, format: SquadFormat) -> Result<(), ApiError> {
    if fixture.format != format {
        return Err(ApiError::InvalidInput {
            field: String::from("format"),
            message: format!(
                "Match {} is played {}, not {format}",
                fixture.match_id, fixture.format
            ),
        });
    }
    Ok(())
}

fn load_roster(
    persistence: &mut Persistence,
    team_id: TeamId,
) -> Result<Vec<RosterPlayer>, ApiError> {
    persistence
        .list_roster(team_id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load roster: {e}"),
        })
}

/// Rebuilds a client-held draft against the current roster.
fn restore_draft(
    persistence: &mut Persistence,
    draft: &DraftLineup,
) -> Result<LineupState, ApiError> {
    let roster: Vec<RosterPlayer> = load_roster(persistence, draft.team_id)?;
    let assignments: Vec<(SlotKey, PlayerId)> = draft
        .assignments
        .iter()
        .map(|assignment| {
            SlotKey::parse(assignment.slot.as_str())
                .map(|slot| (slot, assignment.player_id))
                .map_err(translate_domain_error)
        })
        .collect::<Result<_, _>>()?;

    LineupState::restore(
        draft.format,
        &draft.scheme,
        roster,
        &draft.selection,
        &assignments,
    )
    .map_err(translate_core_error)
}

fn draft_view(
    state: &LineupState,
    team_id: TeamId,
    match_id: Option<MatchId>,
    saved_name: Option<String>,
    actions: Vec<ActionInfo>,
) -> DraftView {
    let pitch: Vec<PitchSlot> = state
        .scheme()
        .slots
        .iter()
        .map(|slot| {
            let key: SlotKey = slot.key();
            let player: Option<PlayerSummary> = state
                .assignments()
                .occupant(&key)
                .and_then(|player_id| state.player(player_id))
                .map(player_summary);
            PitchSlot {
                slot: key,
                role: slot.role,
                x: slot.x,
                y: slot.y,
                player,
            }
        })
        .collect();

    let tiers: Tiers = state.tiers();
    let readiness: Readiness = state.readiness();

    DraftView {
        draft: draft_lineup(state, team_id, match_id),
        pitch,
        bench: player_summaries(state, &tiers.bench),
        available: player_summaries(state, &tiers.available),
        substitutes: player_summaries(state, &tiers.substitutes),
        readiness: ReadinessInfo {
            starters: readiness.starters,
            open_slots: readiness.open_slots,
            substitutes: readiness.substitutes,
            squad_size: readiness.squad_size,
            minimum_substitutes_met: readiness.minimum_substitutes_met,
            exceeds_recommended_squad: readiness.exceeds_recommended_squad,
        },
        saved_name,
        actions,
    }
}

fn draft_lineup(
    state: &LineupState,
    team_id: TeamId,
    match_id: Option<MatchId>,
) -> DraftLineup {
    DraftLineup {
        team_id,
        format: state.format(),
        match_id,
        scheme: state.scheme().name.to_string(),
        selection: state.selection().iter().collect(),
        assignments: state
            .starters()
            .into_iter()
            .map(|(slot, player_id)| SlotAssignment {
                slot: slot.key(),
                player_id,
            })
            .collect(),
    }
}

fn player_summaries(state: &LineupState, player_ids: &[PlayerId]) -> Vec<PlayerSummary> {
    player_ids
        .iter()
        .filter_map(|player_id| state.player(*player_id))
        .map(player_summary)
        .collect()
}

fn player_summary(player: &RosterPlayer) -> PlayerSummary {
    PlayerSummary {
        player_id: player.player_id,
        display_name: player.display_name(),
        position: player.position,
        jersey_number: player.jersey_number,
        photo_url: player.photo_url.clone(),
    }
}

fn match_info(fixture: &MatchFixture) -> Result<MatchInfo, ApiError> {
    let kickoff: String = fixture
        .kickoff
        .format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format kickoff date: {e}"),
        })?;

    Ok(MatchInfo {
        match_id: fixture.match_id,
        team_id: fixture.team_id,
        opponent: fixture.opponent.clone(),
        kickoff,
        format: fixture.format,
        venue: fixture.venue.clone(),
    })
}

fn lineup_info(lineup_id: i64, record: &LineupRecord) -> LineupInfo {
    let entry_info = |entry: &matchday::LineupEntry| LineupEntryInfo {
        player_id: entry.player_id,
        slot: entry.slot_key.clone(),
        position_label: entry.position_label.clone(),
        substitute_order: entry.substitute_order,
        jersey_number: entry.jersey_number,
    };

    LineupInfo {
        lineup_id,
        team_id: record.key.team_id,
        format: record.key.format,
        match_id: record.key.match_id,
        name: record.name.clone(),
        scheme: record.scheme.clone(),
        starters: record.starters().map(entry_info).collect(),
        substitutes: record.substitutes().into_iter().map(entry_info).collect(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
