//! Tracing subscriber setup for the binary.
//!
//! Filter precedence: `RUST_LOG` if set, then the `--log-level` flag, then
//! `logging.level` from the config file.
//!
//! [`init_tracing`] also replaces the default panic hook, which writes raw
//! text to stderr, with one that reports the panic as a `tracing` error
//! event.  Panics caught by the event processor still pass through the hook,
//! so JSON output stays one event per line.

use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::{LogFormat, LoggingConfig};

/// Picks the filter directive used when `RUST_LOG` is unset.
pub fn effective_level<'a>(cfg: &'a LoggingConfig, level_override: Option<&'a str>) -> &'a str {
    level_override.unwrap_or(&cfg.level)
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if the directive cannot be parsed or a global subscriber
/// is already installed.
pub fn init_tracing(
    cfg: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(effective_level(cfg, level_override))?,
    };

    match cfg.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()?,
    }

    install_panic_hook();
    Ok(())
}

/// Routes panic reports through `tracing::error!` instead of stderr.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// `MakeWriter` target that appends formatted events to a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_panic_hook_reports_caught_panic_as_tracing_event() {
        // Arrange
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        // Act
        install_panic_hook();
        tracing::subscriber::with_default(subscriber, || {
            let _ = std::panic::catch_unwind(|| panic!("observer exploded"));
        });
        drop(std::panic::take_hook());

        // Assert
        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("observer exploded"), "{output}");
    }

    #[test]
    fn test_override_beats_config_level() {
        let cfg = LoggingConfig::default();
        assert_eq!(effective_level(&cfg, Some("debug")), "debug");
    }

    #[test]
    fn test_config_level_used_without_override() {
        let cfg = LoggingConfig {
            level: "ab_client=trace".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(effective_level(&cfg, None), "ab_client=trace");
    }
}
