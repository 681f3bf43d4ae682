//! Game state: the single source of truth for every known player.
//!
//! # Absence is normal
//!
//! Packets race with the join/leave notifications that bracket a player's
//! lifetime: a bounce for player 3 may arrive just after player 3 left.
//! Lookups therefore return `Option` and never create a player implicitly.
//! A miss is an expected outcome, not an error.
//!
//! # Duplicate policy
//!
//! [`GameState::add_player`] **rejects** an id that is already present with
//! [`StateError::DuplicatePlayer`].  It never overwrites the existing entry
//! and never stores two players with the same id.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::domain::player::{Player, PlayerId};

/// Errors raised by state lifecycle operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// A player with this id is already present.
    #[error("player {0} already exists")]
    DuplicatePlayer(PlayerId),
}

/// In-memory model of all players, keyed by id.
#[derive(Debug, Default)]
pub struct GameState {
    players: HashMap<PlayerId, Player>,
}

impl GameState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the player with `id`, or `None` if it is not present.
    pub fn get_player_by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Returns a mutable reference to the player with `id`, or `None`.
    pub fn get_player_by_id_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Returns `true` if a player with `id` is present.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// Inserts a new player.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicatePlayer`] if the id is already present;
    /// the existing player is left untouched.
    pub fn add_player(&mut self, player: Player) -> Result<(), StateError> {
        use std::collections::hash_map::Entry;

        match self.players.entry(player.id) {
            Entry::Occupied(_) => Err(StateError::DuplicatePlayer(player.id)),
            Entry::Vacant(slot) => {
                debug!(player_id = player.id, name = %player.name, "player added");
                slot.insert(player);
                Ok(())
            }
        }
    }

    /// Removes and returns the player with `id`, or `None` if absent.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let removed = self.players.remove(&id);
        if removed.is_some() {
            debug!(player_id = id, "player removed");
        }
        removed
    }

    /// Number of players currently known.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterates all players in unspecified order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
