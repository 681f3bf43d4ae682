//! Domain entities for the AB game client.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code has **no** imports from
//! network libraries, async runtimes, or rendering code, and can be compiled
//! and tested anywhere without setup.
//!
//! Here the domain is the client's picture of the arena: every known
//! [`player::Player`] and the [`state::GameState`] that owns them.  Message
//! handlers in the `ab-client` crate are the only code that mutates it.

/// A single player entity and its value types.
pub mod player;

/// The authoritative collection of players.
pub mod state;
