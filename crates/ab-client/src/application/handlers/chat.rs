//! CHAT_PUBLIC handler: re-publishes public chat lines as `ChatMessage`.

use ab_core::GameState;

use super::{HandlerError, MessageHandler};
use crate::application::event_queue::EventQueue;
use crate::application::events::{ChatArgs, ChatType, EventArgs, EventKind, EventMessage};

/// Handles [`EventKind::ChatPublic`].
///
/// Lines from ids the client does not know are dropped, like every other
/// lookup miss.  State is read, never written.
#[derive(Debug, Default)]
pub struct ChatPublicHandler;

impl MessageHandler for ChatPublicHandler {
    fn name(&self) -> &'static str {
        "chat_public"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[EventKind::ChatPublic]
    }

    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        queue: &mut EventQueue,
    ) -> Result<(), HandlerError> {
        let EventArgs::ChatPublic(msg) = event.args() else {
            return Err(HandlerError::unexpected_payload(self.name(), event, "ChatPublic"));
        };

        if !state.contains(msg.id) {
            return Ok(());
        }

        queue.publish(
            EventKind::ChatMessage,
            EventArgs::Chat(ChatArgs {
                player_id: msg.id,
                chat_type: ChatType::Public,
                chat_message: msg.text.clone(),
            }),
        );
        Ok(())
    }
}
