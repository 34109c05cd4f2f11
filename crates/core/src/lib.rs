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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod announcement;
mod apply;
mod assigner;
mod assignment;
mod command;
mod error;
mod partition;
mod record;
mod repository;
mod selection;
mod service;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use announcement::{LineupAnnouncement, PushMessage};
pub use apply::apply;
pub use assigner::{auto_assign, reflow};
pub use assignment::AssignmentMap;
pub use command::{Command, SwapTarget};
pub use error::{CoreError, LineupServiceError};
pub use partition::{Tiers, partition};
pub use record::{LineupEntry, LineupKey, LineupRecord};
pub use repository::{LineupRepository, NotificationDispatcher};
pub use selection::Selection;
pub use service::{LoadedLineup, SaveOutcome, load_lineup, save_lineup};
pub use state::{Action, LineupState, Readiness, TransitionResult};
