// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `league` — clubs, teams, players and fixtures
//! - `lineups` — lineup replacement and removal
//! - `notifications` — the player notification outbox
//! - `operators` — operators and sessions
//!
//! Inserts read their new row ID back through
//! [`PersistenceBackend::get_last_insert_rowid`](crate::backend::PersistenceBackend).

pub mod league;
pub mod lineups;
pub mod notifications;
pub mod operators;
