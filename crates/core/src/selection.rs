// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::PlayerId;

/// The players moved from the bench into the matchday squad.
///
/// Players are kept in selection order: the order in which they joined the
/// squad. This order decides which unassigned players are offered for the
/// open starting places and which become substitutes (see [`crate::partition`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    order: Vec<PlayerId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Builds a selection from ids in selection order, dropping repeats.
    pub fn from_order<I: IntoIterator<Item = PlayerId>>(ids: I) -> Self {
        let mut selection: Self = Self::new();
        for id in ids {
            selection.insert(id);
        }
        selection
    }

    /// Returns whether the player is selected.
    #[must_use]
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.order.contains(&player_id)
    }

    /// Returns the number of selected players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether nobody is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the selected ids in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[PlayerId] {
        &self.order
    }

    /// Iterates the selected ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order.iter().copied()
    }

    /// Appends a player. Returns false if already selected.
    pub(crate) fn insert(&mut self, player_id: PlayerId) -> bool {
        if self.contains(player_id) {
            return false;
        }
        self.order.push(player_id);
        true
    }

    /// Removes a player. Returns false if not selected.
    pub(crate) fn remove(&mut self, player_id: PlayerId) -> bool {
        let before: usize = self.order.len();
        self.order.retain(|id| *id != player_id);
        self.order.len() != before
    }
}
