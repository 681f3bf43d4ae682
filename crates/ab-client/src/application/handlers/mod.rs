//! Message handler contract and the built-in handler table.
//!
//! # How handlers work (for beginners)
//!
//! A handler is a small object that says "I care about these event kinds"
//! ([`MessageHandler::handles`]) and "here is what I do with one of them"
//! ([`MessageHandler::exec`]).  The processor builds a `kind → handlers` map
//! once at startup and calls `exec` for every matching event.
//!
//! `exec` receives everything it may touch as explicit arguments: the event,
//! the [`GameState`] to mutate, and the [`EventQueue`] to publish derived
//! events on.  Handlers must not hold on to either after returning.
//!
//! # The lookup-miss rule
//!
//! Every handler that targets an existing player looks it up first.  If the
//! player is not there (it already left, or has not joined yet), the handler
//! returns `Ok(())` immediately: no mutation, no publish.

use std::sync::Arc;

use ab_core::{GameState, StateError};
use thiserror::Error;

use crate::application::event_queue::EventQueue;
use crate::application::events::{EventKind, EventMessage};

pub mod chat;
pub mod player_lifecycle;
pub mod player_motion;
pub mod score_update;

pub use chat::ChatPublicHandler;
pub use player_lifecycle::{PlayerLeaveHandler, PlayerNewHandler};
pub use player_motion::{PlayerBounceHandler, PlayerUpdateHandler};
pub use score_update::{DeathsSource, ScoreUpdateHandler};

/// Error type for handler execution.
#[derive(Debug, Error, PartialEq)]
pub enum HandlerError {
    /// The payload does not match the shape the handler's kind requires.
    /// This is a protocol contract violation, not a recoverable condition.
    #[error("{handler}: expected {expected} payload for {kind:?}, got {actual}")]
    UnexpectedPayload {
        handler: &'static str,
        kind: EventKind,
        expected: &'static str,
        actual: &'static str,
    },

    /// The state rejected a lifecycle operation.
    #[error("state rejected update: {0}")]
    State(#[from] StateError),
}

impl HandlerError {
    /// Builds an [`HandlerError::UnexpectedPayload`] for `event`.
    pub fn unexpected_payload(
        handler: &'static str,
        event: &EventMessage,
        expected: &'static str,
    ) -> Self {
        HandlerError::UnexpectedPayload {
            handler,
            kind: event.kind(),
            expected,
            actual: event.args().variant_name(),
        }
    }
}

/// A unit of dispatch bound to one or more event kinds.
#[cfg_attr(test, mockall::automock)]
pub trait MessageHandler: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// The fixed, non-empty set of kinds this handler is registered for.
    fn handles(&self) -> &'static [EventKind];

    /// Handles one event whose kind is a member of [`handles`](Self::handles).
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] on a payload contract violation or a rejected
    /// state operation.  The processor logs it and keeps dispatching.
    fn exec(
        &self,
        event: &EventMessage,
        state: &mut GameState,
        queue: &mut EventQueue,
    ) -> Result<(), HandlerError>;
}

/// Returns the protocol handlers every client registers, in registration order.
pub fn builtin_handlers(deaths_source: DeathsSource) -> Vec<Arc<dyn MessageHandler>> {
    vec![
        Arc::new(PlayerNewHandler),
        Arc::new(PlayerLeaveHandler),
        Arc::new(PlayerUpdateHandler),
        Arc::new(PlayerBounceHandler),
        Arc::new(ScoreUpdateHandler::new(deaths_source)),
        Arc::new(ChatPublicHandler),
    ]
}
