//! SCORE_UPDATE handler.
//!
//! Overwrites `score`, `kills`, and `deaths` for an existing player and
//! publishes `PlayerChange`.  Unknown ids are ignored.
//!
//! # Where `deaths` comes from
//!
//! Older clients assigned `deaths` from the packet's `totalkills` field, so
//! both stats always showed the same number.  This handler reads
//! `totaldeaths` by default.  [`DeathsSource::TotalKills`] reproduces the old
//! behaviour for anyone comparing output against those clients; it is
//! selected with `compat.legacy_deaths_from_kills = true` in the config file.

use ab_core::GameState;

use super::{HandlerError, MessageHandler};
use crate::application::event_queue::EventQueue;
use crate::application::events::{EventArgs, EventKind, EventMessage, PlayerArgs};

/// Which packet field populates `Player::deaths`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeathsSource {
    /// `deaths = totaldeaths`.
    #[default]
    TotalDeaths,
    /// `deaths = totalkills` (legacy client behaviour).
    TotalKills,
}

/// Handles [`EventKind::ScoreUpdate`].
#[derive(Debug, Default)]
pub struct ScoreUpdateHandler {
    deaths_source: DeathsSource,
}

impl ScoreUpdateHandler {
    pub fn new(deaths_source: DeathsSource) -> Self {
        Self { deaths_source }
    }
}

impl MessageHandler for ScoreUpdateHandler {
    fn name(&self) -> &'static str {
        "score_update"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[EventKind::ScoreUpdate]
    }

    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        queue: &mut EventQueue,
    ) -> Result<(), HandlerError> {
        let EventArgs::ScoreUpdate(msg) = event.args() else {
            return Err(HandlerError::unexpected_payload(self.name(), event, "ScoreUpdate"));
        };

        let Some(player) = state.get_player_by_id_mut(msg.id) else {
            return Ok(());
        };

        player.score = msg.score;
        player.kills = u32::from(msg.totalkills);
        player.deaths = match self.deaths_source {
            DeathsSource::TotalDeaths => u32::from(msg.totaldeaths),
            DeathsSource::TotalKills => u32::from(msg.totalkills),
        };

        queue.publish(
            EventKind::PlayerChange,
            EventArgs::Player(PlayerArgs { player_id: msg.id }),
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
