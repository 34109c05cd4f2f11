// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the matchday lineup service.
//!
//! Handlers take request DTOs and an authenticated actor, drive the lineup
//! engine through [`matchday_persistence::Persistence`] and return response
//! DTOs. Drafts are stateless: the client holds the draft and sends it back
//! with each batch of edits.

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

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error, translate_service_error,
};
pub use handlers::{
    apply_draft_commands, check_bootstrap_status, create_club, create_first_admin, create_operator,
    create_team, disable_operator, enable_operator, get_lineup, get_roster, list_formats,
    list_matches, list_operators, login, logout, open_draft, register_player, save_lineup,
    schedule_match, whoami,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    ActionInfo, ApplyDraftCommandsRequest, BootstrapStatusResponse, CreateClubRequest,
    CreateClubResponse, CreateFirstAdminRequest, CreateFirstAdminResponse, CreateOperatorRequest,
    CreateOperatorResponse, CreateTeamRequest, CreateTeamResponse, DraftCommand, DraftLineup,
    DraftView, FormatInfo, GetLineupRequest, LineupEntryInfo, LineupInfo, ListFormatsResponse,
    ListMatchesResponse, ListOperatorsResponse, LoginRequest, LoginResponse, MatchInfo,
    OpenDraftRequest, OperatorInfo, OperatorStatusResponse, PitchSlot, PlayerSummary, ReadinessInfo,
    RegisterPlayerRequest, RegisterPlayerResponse, RosterResponse, SaveLineupRequest,
    SaveLineupResponse, ScheduleMatchRequest, ScheduleMatchResponse, SchemeInfo, SlotAssignment,
    SlotInfo, SwapSide, WhoAmIResponse,
};
