//! Client engine: one object that owns the state, the queue, and the
//! processor, and turns decoded packets into state changes.
//!
//! # Lifecycle (for beginners)
//!
//! ```text
//! ServerPacket ──ingest──► EventQueue ──dispatch──► handlers ──► GameState
//!                              ▲                        │
//!                              └──── derived events ────┘
//! ```
//!
//! 1. [`ClientEngine::ingest`] maps a packet to its inbound event and queues it.
//! 2. [`ClientEngine::dispatch`] drains the queue through the processor.
//!    Built-in handlers mutate state and publish derived events
//!    (`PlayerChange`, `PlayerAdded`, ...), which reach any observer handlers
//!    passed to [`ClientEngine::new`] on the next pass.
//!
//! [`ClientEngine::handle_packet`] does both steps for one packet.

use std::sync::Arc;

use ab_core::{GameState, ServerPacket};
use tracing::debug;

use crate::application::event_queue::EventQueue;
use crate::application::handlers::{builtin_handlers, DeathsSource, MessageHandler};
use crate::application::ingest::event_for;
use crate::application::processor::{DrainReport, EventQueueProcessor, DEFAULT_MAX_PASSES};

/// Tunables for [`ClientEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Upper bound on dispatch passes per [`ClientEngine::dispatch`].
    pub max_passes: usize,
    /// Which score packet field populates `Player::deaths`.
    pub deaths_source: DeathsSource,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            deaths_source: DeathsSource::TotalDeaths,
        }
    }
}

pub struct ClientEngine {
    state: GameState,
    queue: EventQueue,
    processor: EventQueueProcessor,
}

impl ClientEngine {
    /// Registers the built-in protocol handlers, then `extra_handlers` in the
    /// order given.
    pub fn new(options: EngineOptions, extra_handlers: Vec<Arc<dyn MessageHandler>>) -> Self {
        let handlers = builtin_handlers(options.deaths_source)
            .into_iter()
            .chain(extra_handlers);
        let processor = EventQueueProcessor::new(handlers).with_max_passes(options.max_passes);

        Self {
            state: GameState::new(),
            queue: EventQueue::new(),
            processor,
        }
    }

    /// Queues the inbound event for `packet` without dispatching it.
    pub fn ingest(&mut self, packet: ServerPacket) {
        let player_id = packet.player_id();
        let (kind, args) = event_for(packet);
        debug!(?kind, player_id, "ingest");
        self.queue.publish(kind, args);
    }

    /// Drains every queued event (and the events they cause).
    pub fn dispatch(&mut self) -> DrainReport {
        self.processor.drain(&mut self.queue, &mut self.state)
    }

    /// [`ingest`](Self::ingest) followed by [`dispatch`](Self::dispatch).
    pub fn handle_packet(&mut self, packet: ServerPacket) -> DrainReport {
        self.ingest(packet);
        self.dispatch()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of events waiting for the next [`dispatch`](Self::dispatch).
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
