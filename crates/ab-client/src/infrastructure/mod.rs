//! Infrastructure layer for the client application.
//!
//! Contains everything that touches the outside world: the config file, the
//! global tracing subscriber, and the capture file that feeds packets in.
//!
//! **Dependency rule**: this layer may depend on `application` and `ab_core`,
//! but MUST NOT be imported by the `application` or domain layers.
//!
//! # Sub-modules
//!
//! - **`config`** – TOML config schema with serde defaults and `load_config`.
//!
//! - **`logging`** – `tracing-subscriber` setup (compact or JSON output).
//!
//! - **`capture`** – Reads a capture file of concatenated wire frames on a
//!   tokio task and streams decoded packets over an `mpsc` channel.
//!
//! - **`observers`** – Handlers for derived events that report state changes
//!   to the log.

pub mod capture;
pub mod config;
pub mod logging;
pub mod observers;
