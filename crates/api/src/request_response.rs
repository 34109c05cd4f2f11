// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the API as `YYYY-MM-DD` strings.

use matchday::{Command, SwapTarget};
use matchday_domain::{
    ClubId, MatchId, PlayerId, PositionCategory, SlotKey, SlotRole, SquadFormat, TeamId,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication & operators
// ============================================================================

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The operator login name.
    pub login_name: String,
    /// The operator password.
    pub password: String,
}

/// API response for successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token to send as a bearer token.
    pub session_token: String,
    /// The operator login name.
    pub login_name: String,
    /// The operator display name.
    pub display_name: String,
    /// The operator role.
    pub role: String,
    /// The club a club owner manages.
    pub club_id: Option<ClubId>,
}

/// API response describing the current operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// The operator login name.
    pub login_name: String,
    /// The operator display name.
    pub display_name: String,
    /// The operator role.
    pub role: String,
    /// The club a club owner manages.
    pub club_id: Option<ClubId>,
    /// When the operator last logged in.
    pub last_login_at: Option<String>,
}

/// API response for the bootstrap check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapStatusResponse {
    /// Whether no operator exists yet.
    pub needs_bootstrap: bool,
}

/// API request to create the first admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFirstAdminRequest {
    /// The login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// The password.
    pub password: String,
    /// The password typed again.
    pub password_confirmation: String,
}

/// API response for first admin creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFirstAdminResponse {
    /// The new operator's id.
    pub operator_id: i64,
    /// The normalized login name.
    pub login_name: String,
    /// A success message.
    pub message: String,
}

/// API request to create an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOperatorRequest {
    /// The login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// The password.
    pub password: String,
    /// The password typed again.
    pub password_confirmation: String,
    /// `Admin` or `ClubOwner`.
    pub role: String,
    /// The managed club, required for club owners.
    #[serde(default)]
    pub club_id: Option<ClubId>,
}

/// API response for operator creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOperatorResponse {
    /// The new operator's id.
    pub operator_id: i64,
    /// The normalized login name.
    pub login_name: String,
    /// The operator role.
    pub role: String,
    /// The managed club.
    pub club_id: Option<ClubId>,
    /// A success message.
    pub message: String,
}

/// One operator as listed for admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    /// The operator id.
    pub operator_id: i64,
    /// The normalized login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// The operator role.
    pub role: String,
    /// The managed club.
    pub club_id: Option<ClubId>,
    /// Whether the operator may log in.
    pub is_disabled: bool,
    /// When the operator was created.
    pub created_at: String,
    /// The last successful login.
    pub last_login_at: Option<String>,
}

/// API response listing operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperatorsResponse {
    /// Every operator, ordered by login name.
    pub operators: Vec<OperatorInfo>,
}

/// API response for disabling or re-enabling an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorStatusResponse {
    /// The operator id.
    pub operator_id: i64,
    /// The normalized login name.
    pub login_name: String,
    /// Whether the operator is now disabled.
    pub is_disabled: bool,
    /// A success message.
    pub message: String,
}

// ============================================================================
// Formation catalog
// ============================================================================

/// One slot of a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    /// The slot key.
    pub key: SlotKey,
    /// The slot role.
    pub role: SlotRole,
    /// Horizontal coordinate.
    pub x: u8,
    /// Vertical coordinate.
    pub y: u8,
}

/// One scheme of a format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeInfo {
    /// The scheme name.
    pub name: String,
    /// The display label.
    pub label: String,
    /// Slots in scheme order.
    pub slots: Vec<SlotInfo>,
}

/// One squad format with its requirements and schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatInfo {
    /// The format.
    pub format: SquadFormat,
    /// The short key, e.g. `5s`.
    pub short_key: String,
    /// Players on the field.
    pub players_on_field: usize,
    /// Minimum roster size.
    pub min_players: usize,
    /// Minimum substitutes for a complete squad.
    pub min_substitutes: usize,
    /// Suggested matchday squad size.
    pub recommended_squad: usize,
    /// The schemes, default first.
    pub schemes: Vec<SchemeInfo>,
}

/// API response listing formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFormatsResponse {
    /// The formats, in ascending size.
    pub formats: Vec<FormatInfo>,
    /// The largest format the roster size allows, when one was given.
    pub preferred_format: Option<SquadFormat>,
}

// ============================================================================
// Clubs, teams, players, matches
// ============================================================================

/// API request to create a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClubRequest {
    /// The club name.
    pub name: String,
}

/// API response for club creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClubResponse {
    /// The new club's id.
    pub club_id: ClubId,
    /// The club name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to create a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    /// The owning club.
    pub club_id: ClubId,
    /// The team name.
    pub name: String,
    /// The format new lineups open in.
    pub default_format: SquadFormat,
}

/// API response for team creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTeamResponse {
    /// The new team's id.
    pub team_id: TeamId,
    /// The owning club.
    pub club_id: ClubId,
    /// The team name.
    pub name: String,
    /// The default format.
    pub default_format: SquadFormat,
    /// A success message.
    pub message: String,
}

/// API request to add a player to a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPlayerRequest {
    /// The team.
    pub team_id: TeamId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// `Goalkeeper`, `Defender`, `Midfielder` or `Forward`.
    pub position: String,
    /// Shirt number, 1 to 99.
    #[serde(default)]
    pub jersey_number: Option<i64>,
    /// Profile photo location.
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// API response for player registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPlayerResponse {
    /// The new player's id.
    pub player_id: PlayerId,
    /// The team.
    pub team_id: TeamId,
    /// "First Last".
    pub display_name: String,
    /// A success message.
    pub message: String,
}

/// API request to schedule a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMatchRequest {
    /// The team.
    pub team_id: TeamId,
    /// The opposing side.
    pub opponent: String,
    /// The match day, `YYYY-MM-DD`.
    pub kickoff: String,
    /// The format; the team default when absent.
    #[serde(default)]
    pub format: Option<SquadFormat>,
    /// Where the match is played.
    #[serde(default)]
    pub venue: Option<String>,
}

/// A scheduled match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    /// The match id.
    pub match_id: MatchId,
    /// The team.
    pub team_id: TeamId,
    /// The opposing side.
    pub opponent: String,
    /// The match day, `YYYY-MM-DD`.
    pub kickoff: String,
    /// The format.
    pub format: SquadFormat,
    /// Where the match is played.
    pub venue: Option<String>,
}

/// API response for match scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMatchResponse {
    /// The scheduled match.
    pub fixture: MatchInfo,
    /// A success message.
    pub message: String,
}

/// API response listing a team's matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMatchesResponse {
    /// The team.
    pub team_id: TeamId,
    /// Matches by match day.
    pub matches: Vec<MatchInfo>,
}

/// A roster player as shown on the pitch and in the tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// The player id.
    pub player_id: PlayerId,
    /// "First Last".
    pub display_name: String,
    /// The declared position category.
    pub position: PositionCategory,
    /// Shirt number.
    pub jersey_number: Option<u8>,
    /// Profile photo location.
    pub photo_url: Option<String>,
}

/// API response for a team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterResponse {
    /// The team.
    pub team_id: TeamId,
    /// The team name.
    pub team_name: String,
    /// Players in roster order.
    pub players: Vec<PlayerSummary>,
    /// Formats the roster is large enough for.
    pub available_formats: Vec<SquadFormat>,
    /// The largest available format.
    pub preferred_format: SquadFormat,
}

// ============================================================================
// Lineup drafts
// ============================================================================

/// One occupied slot of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// The slot.
    pub slot: SlotKey,
    /// Its occupant.
    pub player_id: PlayerId,
}

/// A lineup being edited, held by the client between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLineup {
    /// The team.
    pub team_id: TeamId,
    /// The format.
    pub format: SquadFormat,
    /// The match, for a matchday lineup.
    #[serde(default)]
    pub match_id: Option<MatchId>,
    /// The scheme name.
    pub scheme: String,
    /// Selected players in selection order.
    pub selection: Vec<PlayerId>,
    /// Occupied slots.
    pub assignments: Vec<SlotAssignment>,
}

/// One slot of the pitch view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchSlot {
    /// The slot key.
    pub slot: SlotKey,
    /// The slot role.
    pub role: SlotRole,
    /// Horizontal coordinate.
    pub x: u8,
    /// Vertical coordinate.
    pub y: u8,
    /// The occupant.
    pub player: Option<PlayerSummary>,
}

/// How complete a draft squad is. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessInfo {
    /// Occupied slots.
    pub starters: usize,
    /// Empty slots.
    pub open_slots: usize,
    /// Selected players without a slot.
    pub substitutes: usize,
    /// All selected players.
    pub squad_size: usize,
    /// Whether the minimum substitute count is reached.
    pub minimum_substitutes_met: bool,
    /// Whether the squad is larger than recommended.
    pub exceeds_recommended_squad: bool,
}

/// One applied command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInfo {
    /// The action name.
    pub name: String,
    /// Details about the action.
    pub details: Option<String>,
}

/// A draft together with everything needed to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftView {
    /// The draft to send back on the next request.
    pub draft: DraftLineup,
    /// Every slot of the scheme, in scheme order.
    pub pitch: Vec<PitchSlot>,
    /// Roster players not selected.
    pub bench: Vec<PlayerSummary>,
    /// Selected players who fit in the open starting places.
    pub available: Vec<PlayerSummary>,
    /// Selected players beyond the open starting places.
    pub substitutes: Vec<PlayerSummary>,
    /// Squad completeness.
    pub readiness: ReadinessInfo,
    /// The name of the saved lineup the draft was loaded from.
    pub saved_name: Option<String>,
    /// The commands applied by this request.
    pub actions: Vec<ActionInfo>,
}

/// API request to open a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDraftRequest {
    /// The team.
    pub team_id: TeamId,
    /// The format; the match format or team default when absent.
    #[serde(default)]
    pub format: Option<SquadFormat>,
    /// The match, for a matchday lineup.
    #[serde(default)]
    pub match_id: Option<MatchId>,
}

/// One side of a swap command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwapSide {
    /// A slot, occupied or not.
    Slot {
        /// The slot.
        slot: SlotKey,
    },
    /// A selected player.
    Player {
        /// The player.
        player_id: PlayerId,
    },
}

impl From<SwapSide> for SwapTarget {
    fn from(side: SwapSide) -> Self {
        match side {
            SwapSide::Slot { slot } => Self::Slot(slot),
            SwapSide::Player { player_id } => Self::Player(player_id),
        }
    }
}

/// A lineup edit, as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftCommand {
    /// Move a player from the bench into the squad.
    SelectPlayer {
        /// The player.
        player_id: PlayerId,
    },
    /// Move a player back to the bench.
    ReturnToBench {
        /// The player.
        player_id: PlayerId,
    },
    /// Put a selected player in a slot.
    AssignSlot {
        /// The slot.
        slot: SlotKey,
        /// The player.
        player_id: PlayerId,
    },
    /// Clear a slot.
    UnassignSlot {
        /// The slot.
        slot: SlotKey,
    },
    /// Put a selected player in the first empty slot.
    PlaceInFirstVacantSlot {
        /// The player.
        player_id: PlayerId,
    },
    /// Fill every slot automatically.
    AutoAssign,
    /// Exchange two positions.
    Swap {
        /// One side.
        first: SwapSide,
        /// The other side.
        second: SwapSide,
    },
    /// Switch scheme.
    ChangeScheme {
        /// The scheme name.
        scheme: String,
    },
    /// Switch format.
    ChangeFormat {
        /// The format.
        format: SquadFormat,
    },
    /// Empty every slot.
    ClearFormation,
}

impl From<DraftCommand> for Command {
    fn from(command: DraftCommand) -> Self {
        match command {
            DraftCommand::SelectPlayer { player_id } => Self::SelectPlayer { player_id },
            DraftCommand::ReturnToBench { player_id } => Self::ReturnToBench { player_id },
            DraftCommand::AssignSlot { slot, player_id } => Self::AssignSlot { slot, player_id },
            DraftCommand::UnassignSlot { slot } => Self::UnassignSlot { slot },
            DraftCommand::PlaceInFirstVacantSlot { player_id } => {
                Self::PlaceInFirstVacantSlot { player_id }
            }
            DraftCommand::AutoAssign => Self::AutoAssign,
            DraftCommand::Swap { first, second } => Self::Swap {
                first: first.into(),
                second: second.into(),
            },
            DraftCommand::ChangeScheme { scheme } => Self::ChangeScheme { scheme },
            DraftCommand::ChangeFormat { format } => Self::ChangeFormat { format },
            DraftCommand::ClearFormation => Self::ClearFormation,
        }
    }
}

/// API request to apply edits to a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyDraftCommandsRequest {
    /// The draft as last returned by the server.
    pub draft: DraftLineup,
    /// Edits, applied in order.
    pub commands: Vec<DraftCommand>,
}

// ============================================================================
// Saved lineups
// ============================================================================

/// API request to save a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveLineupRequest {
    /// The draft to save.
    pub draft: DraftLineup,
    /// The lineup name.
    pub name: String,
}

/// One player of a saved lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntryInfo {
    /// The player.
    pub player_id: PlayerId,
    /// The slot, for starters.
    pub slot: Option<SlotKey>,
    /// Role code for starters, position category for substitutes.
    pub position_label: String,
    /// Bench order, for substitutes.
    pub substitute_order: Option<u32>,
    /// Shirt number at save time.
    pub jersey_number: Option<u8>,
}

/// A saved lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupInfo {
    /// The lineup id.
    pub lineup_id: i64,
    /// The team.
    pub team_id: TeamId,
    /// The format.
    pub format: SquadFormat,
    /// The match, for a matchday lineup.
    pub match_id: Option<MatchId>,
    /// The lineup name.
    pub name: String,
    /// The scheme name.
    pub scheme: String,
    /// Starters in slot order.
    pub starters: Vec<LineupEntryInfo>,
    /// Substitutes in bench order.
    pub substitutes: Vec<LineupEntryInfo>,
}

/// API response for a saved lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveLineupResponse {
    /// The stored lineup.
    pub lineup: LineupInfo,
    /// Player notifications queued, when the lineup was announced.
    pub notified: Option<usize>,
    /// A success message.
    pub message: String,
}

/// API request to look up a saved lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLineupRequest {
    /// The team.
    pub team_id: TeamId,
    /// The format.
    pub format: SquadFormat,
    /// The match; the template lineup when absent.
    #[serde(default)]
    pub match_id: Option<MatchId>,
}
