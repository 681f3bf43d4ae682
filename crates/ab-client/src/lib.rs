//! ab-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does ab-client do? (for beginners)
//!
//! A multiplayer game server streams small binary packets to every client:
//! "player 5 joined", "player 3 bounced off a wall", "player 7's score is now
//! 120".  The client keeps its own copy of the world (`GameState`) and must
//! apply each packet to it, then tell the rest of the client (renderers,
//! scoreboards, chat windows) what changed.
//!
//! This crate does that in three steps:
//!
//! 1. A decoded [`ServerPacket`](ab_core::ServerPacket) becomes an inbound
//!    event on the [`EventQueue`](application::event_queue::EventQueue).
//! 2. The [`EventQueueProcessor`](application::processor::EventQueueProcessor)
//!    hands it to every [`MessageHandler`](application::handlers::MessageHandler)
//!    registered for its kind.  Built-in handlers update the state.
//! 3. Those handlers publish derived events such as `PlayerChange`, which are
//!    dispatched to downstream observers on the next pass.
//!
//! The binary replays a capture file of wire frames through this pipeline
//! and logs the resulting changes.

/// Application layer: events, queue, handlers, processor, engine.
pub mod application;

/// Infrastructure layer: config file, logging setup, capture replay, observers.
pub mod infrastructure;
