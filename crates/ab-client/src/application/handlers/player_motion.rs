//! Motion handlers: PLAYER_BOUNCE and PLAYER_UPDATE.
//!
//! Both packets carry the same motion snapshot and are applied the same way:
//!
//! 1. Look the player up; on a miss, do nothing.
//! 2. Decode the keystate.  Only if it decodes, overwrite the movement flags.
//!    An undecodable keystate leaves the previous flags in place.
//! 3. Always overwrite position, rotation, and speed.
//! 4. Publish `PlayerChange`.

use ab_core::protocol::messages::PlayerMotionPacket;
use ab_core::{decode_movement, GameState, Pos};

use super::{HandlerError, MessageHandler};
use crate::application::event_queue::EventQueue;
use crate::application::events::{EventArgs, EventKind, EventMessage, PlayerArgs};

/// Applies one motion snapshot to state and publishes `PlayerChange`.
fn apply_motion(motion: &PlayerMotionPacket, state: &mut GameState, queue: &mut EventQueue) {
    let Some(player) = state.get_player_by_id_mut(motion.id) else {
        return;
    };

    if let Some(movement) = decode_movement(u32::from(motion.keystate)) {
        player.apply_movement(movement);
    }

    player.pos = Pos::new(motion.pos_x, motion.pos_y);
    player.rot = motion.rot;
    player.speed = Pos::new(motion.speed_x, motion.speed_y);

    queue.publish(
        EventKind::PlayerChange,
        EventArgs::Player(PlayerArgs {
            player_id: motion.id,
        }),
    );
}

fn narrow<'a>(
    handler: &'static str,
    event: &'a EventMessage,
) -> Result<&'a PlayerMotionPacket, HandlerError> {
    match event.args() {
        EventArgs::Motion(motion) => Ok(motion),
        _ => Err(HandlerError::unexpected_payload(handler, event, "Motion")),
    }
}

/// Handles [`EventKind::PlayerBounce`].
#[derive(Debug, Default)]
pub struct PlayerBounceHandler;

impl MessageHandler for PlayerBounceHandler {
    fn name(&self) -> &'static str {
        "player_bounce"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[EventKind::PlayerBounce]
    }

    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        queue: &mut EventQueue,
    ) -> Result<(), HandlerError> {
        let motion = narrow(self.name(), event)?;
        apply_motion(motion, state, queue);
        Ok(())
    }
}

/// Handles [`EventKind::PlayerUpdate`].
#[derive(Debug, Default)]
pub struct PlayerUpdateHandler;

impl MessageHandler for PlayerUpdateHandler {
    fn name(&self) -> &'static str {
        "player_update"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[EventKind::PlayerUpdate]
    }

    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        queue: &mut EventQueue,
    ) -> Result<(), HandlerError> {
        let motion = narrow(self.name(), event)?;
        apply_motion(motion, state, queue);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
