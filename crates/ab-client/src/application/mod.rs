//! Application layer: event dispatch and state synchronisation.
//!
//! # What lives here?
//!
//! - **`events`** – The closed [`EventKind`](events::EventKind) set, the
//!   per-kind payloads, and the immutable [`EventMessage`](events::EventMessage)
//!   envelope.
//!
//! - **`event_queue`** – FIFO buffer of pending events.
//!
//! - **`handlers`** – The [`MessageHandler`](handlers::MessageHandler) trait
//!   and the built-in protocol handlers that apply server packets to the
//!   `GameState`.
//!
//! - **`processor`** – Routes each queued event to its handlers in dispatch
//!   passes and isolates handler failures.
//!
//! - **`ingest`** – Maps decoded `ServerPacket`s to inbound events.
//!
//! - **`engine`** – Owns state, queue, and processor behind one facade.
//!
//! Nothing in this layer performs I/O.

pub mod engine;
pub mod event_queue;
pub mod events;
pub mod handlers;
pub mod ingest;
pub mod processor;
