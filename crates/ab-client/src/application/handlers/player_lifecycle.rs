//! Player lifecycle handlers: PLAYER_NEW and PLAYER_LEAVE.
//!
//! These are the only handlers that change *which* players exist.  A join for
//! an id that is already present is rejected by the state and surfaces as
//! [`HandlerError::State`]; a leave for an unknown id is an ordinary miss.

use ab_core::{GameState, Player, Pos};
use tracing::debug;

use super::{HandlerError, MessageHandler};
use crate::application::event_queue::EventQueue;
use crate::application::events::{EventArgs, EventKind, EventMessage, PlayerArgs};

/// Handles [`EventKind::PlayerNew`]; publishes `PlayerAdded`.
#[derive(Debug, Default)]
pub struct PlayerNewHandler;

impl MessageHandler for PlayerNewHandler {
    fn name(&self) -> &'static str {
        "player_new"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[EventKind::PlayerNew]
    }

    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        queue: &mut EventQueue,
    ) -> Result<(), HandlerError> {
        let EventArgs::PlayerNew(msg) = event.args() else {
            return Err(HandlerError::unexpected_payload(self.name(), event, "PlayerNew"));
        };

        let mut player = Player::new(msg.id, msg.name.clone());
        player.pos = Pos::new(msg.pos_x, msg.pos_y);
        player.rot = msg.rot;
        state.add_player(player)?;

        queue.publish(
            EventKind::PlayerAdded,
            EventArgs::Player(PlayerArgs { player_id: msg.id }),
        );
        Ok(())
    }
}

/// Handles [`EventKind::PlayerLeave`]; publishes `PlayerRemoved`.
#[derive(Debug, Default)]
pub struct PlayerLeaveHandler;

impl MessageHandler for PlayerLeaveHandler {
    fn name(&self) -> &'static str {
        "player_leave"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[EventKind::PlayerLeave]
    }

    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        queue: &mut EventQueue,
    ) -> Result<(), HandlerError> {
        let EventArgs::PlayerLeave(msg) = event.args() else {
            return Err(HandlerError::unexpected_payload(self.name(), event, "PlayerLeave"));
        };

        if state.remove_player(msg.id).is_none() {
            debug!(player_id = msg.id, "leave for unknown player ignored");
            return Ok(());
        }

        queue.publish(
            EventKind::PlayerRemoved,
            EventArgs::Player(PlayerArgs { player_id: msg.id }),
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
