//! AB client entry point.
//!
//! Replays a capture file of server frames through the client engine and logs
//! every state change it produces.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()            -- TOML file, defaults if absent
//!  └─ init_tracing()           -- RUST_LOG > --log-level > config
//!  └─ open_capture_feed()      -- read file (errors exit non-zero),
//!                                 then a tokio task decodes frames
//!  └─ dispatch loop
//!       └─ ClientEngine::handle_packet()
//!            ├─ built-in handlers  -> GameState
//!            └─ ChangeLogger       -> log output
//! ```
//!
//! # Dispatch loop (for beginners)
//!
//! The `tokio::select!` loop waits for whichever comes first: the next packet
//! from the capture task, or Ctrl+C.  Each packet is fully dispatched
//! (including every event it causes) before the next one is read, so the
//! engine never sees two packets interleaved.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use ab_client::application::engine::ClientEngine;
use ab_client::application::handlers::MessageHandler;
use ab_client::infrastructure::{
    capture::open_capture_feed, config::load_config, logging::init_tracing,
    observers::{log_scoreboard, ChangeLogger},
};

/// Command-line arguments for the client binary.
#[derive(Debug, Parser)]
#[command(
    name = "ab-client",
    about = "Replays captured server packets through the client event engine",
    version
)]
struct Cli {
    /// Capture file of concatenated wire frames.
    capture: PathBuf,

    /// Path to the TOML config file.  A missing file means all defaults.
    #[arg(long, default_value = "ab-client.toml", env = "AB_CONFIG")]
    config: PathBuf,

    /// Tracing filter directive, e.g. `debug` or `ab_client=trace`.
    ///
    /// Overrides `logging.level`; `RUST_LOG` still takes precedence.
    #[arg(long, env = "AB_LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    init_tracing(&config.logging, cli.log_level.as_deref())
        .map_err(|e| anyhow::anyhow!(e))
        .context("initialising tracing")?;

    info!(capture = %cli.capture.display(), "ab-client starting");

    let observers: Vec<Arc<dyn MessageHandler>> = vec![Arc::new(ChangeLogger)];
    let mut engine = ClientEngine::new(config.engine_options(), observers);

    let mut feed = open_capture_feed(&cli.capture)
        .await
        .with_context(|| format!("reading capture {}", cli.capture.display()))?;

    // ── Dispatch loop ─────────────────────────────────────────────────────────
    let mut packets = 0usize;
    let mut failures = 0usize;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            next = feed.recv() => {
                let Some(packet) = next else { break };
                let report = engine.handle_packet(packet);
                packets += 1;
                failures += report.handler_failures;
                if report.exhausted {
                    warn!(queued = engine.queue_len(), "events left queued after pass limit");
                }
            }
            _ = &mut shutdown => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    log_scoreboard(engine.state());
    info!(
        packets,
        handler_failures = failures,
        players = engine.state().player_count(),
        "replay finished"
    );
    Ok(())
}
