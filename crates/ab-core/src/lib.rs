//! # ab-core
//!
//! Shared library for the AB game client containing the server packet codec,
//! the keystate decoder, and the authoritative player state model.
//!
//! It has zero dependencies on sockets, timers, rendering, or async runtimes,
//! so everything here can be unit-tested without any external setup.
//!
//! # Architecture overview (for beginners)
//!
//! The game server streams compact binary packets to every connected client:
//! "player 7 bounced off a wall", "player 3 scored", "player 12 left".  The
//! client has to turn that stream into a consistent picture of the arena.
//! This crate holds the pieces of that pipeline that are pure data and pure
//! functions:
//!
//! - **`protocol`** – How bytes travel over the network.  Packets are framed
//!   with a 4-byte header and decoded into typed Rust structs.  The
//!   `keystate` submodule unpacks the movement bitfield carried by motion
//!   packets.
//!
//! - **`domain`** – The in-memory model of every player the client knows
//!   about (`GameState`), plus the lookup and lifecycle operations the
//!   message handlers use to mutate it.
//!
//! The dispatch machinery that connects the two (event queue, processor,
//! handlers) lives in the `ab-client` crate.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `ab_core::GameState` instead of `ab_core::domain::state::GameState`.
pub use domain::player::{Player, PlayerId, Pos};
pub use domain::state::{GameState, StateError};
pub use protocol::codec::{decode_packet, encode_packet, ProtocolError};
pub use protocol::keystate::{decode_movement, MovementFlags, Strafe};
pub use protocol::messages::ServerPacket;
