//! Downstream observers registered by the binary.
//!
//! [`ChangeLogger`] stands in for a renderer or scoreboard: it subscribes to
//! the derived events and writes what changed to the log.  It reads the
//! player from the live state when it runs, so it reports current values.
//! [`log_scoreboard`] prints the final standings once a replay ends.

use ab_core::{GameState, Player};
use tracing::{debug, info};

use crate::application::event_queue::EventQueue;
use crate::application::events::{EventArgs, EventKind, EventMessage};
use crate::application::handlers::{HandlerError, MessageHandler};

#[derive(Debug, Default)]
pub struct ChangeLogger;

impl MessageHandler for ChangeLogger {
    fn name(&self) -> &'static str {
        "change_logger"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[
            EventKind::PlayerAdded,
            EventKind::PlayerRemoved,
            EventKind::PlayerChange,
            EventKind::ChatMessage,
        ]
    }

    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        _queue: &mut EventQueue,
    ) -> Result<(), HandlerError> {
        match (event.kind(), event.args()) {
            (EventKind::PlayerRemoved, EventArgs::Player(args)) => {
                info!(player_id = args.player_id, "player left");
            }
            (EventKind::ChatMessage, EventArgs::Chat(chat)) => {
                let name = state
                    .get_player_by_id(chat.player_id)
                    .map_or("?", |p| p.name.as_str());
                info!(player_id = chat.player_id, chat_type = ?chat.chat_type, "{name}: {}", chat.chat_message);
            }
            (kind, EventArgs::Player(args)) => {
                // Resolved now: the player may have left since the event was published.
                let Some(player) = state.get_player_by_id(args.player_id) else {
                    return Ok(());
                };
                if kind == EventKind::PlayerAdded {
                    info!(player_id = player.id, name = %player.name, "player joined");
                } else {
                    debug!(
                        player_id = player.id,
                        x = player.pos.x,
                        y = player.pos.y,
                        score = player.score,
                        kills = player.kills,
                        deaths = player.deaths,
                        "player changed"
                    );
                }
            }
            _ => {
                return Err(HandlerError::unexpected_payload(self.name(), event, "Player or Chat"));
            }
        }
        Ok(())
    }
}

/// Players ordered by score, highest first.  Ties are broken by id.
pub fn scoreboard(state: &GameState) -> Vec<&Player> {
    let mut players: Vec<&Player> = state.players().collect();
    players.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
    players
}

/// Logs one line per player in [`scoreboard`] order.
pub fn log_scoreboard(state: &GameState) {
    for (rank, player) in scoreboard(state).into_iter().enumerate() {
        info!(
            rank = rank + 1,
            player_id = player.id,
            name = %player.name,
            score = player.score,
            kills = player.kills,
            deaths = player.deaths,
            "standing"
        );
    }
}
