//! TOML configuration for the client binary.
//!
//! # File layout (for beginners)
//!
//! ```toml
//! [logging]
//! level = "info"      # tracing filter directive, e.g. "ab_client=debug"
//! format = "compact"  # or "json"
//!
//! [dispatch]
//! max_passes = 64
//!
//! [compat]
//! legacy_deaths_from_kills = false
//! ```
//!
//! Every section and every key is optional.  Missing values fall back to the
//! defaults above through `#[serde(default = "...")]`, and a missing file is
//! the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::engine::EngineOptions;
use crate::application::handlers::DeathsSource;
use crate::application::processor::DEFAULT_MAX_PASSES;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub compat: CompatConfig,
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchConfig {
    /// Upper bound on dispatch passes per drain.  Must be at least 1.
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompatConfig {
    /// Populate `deaths` from `totalkills`, as older clients did.
    #[serde(default)]
    pub legacy_deaths_from_kills: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_passes: default_max_passes(),
        }
    }
}

impl ClientConfig {
    /// Engine options derived from the `[dispatch]` and `[compat]` sections.
    pub fn engine_options(&self) -> EngineOptions {
        let deaths_source = if self.compat.legacy_deaths_from_kills {
            DeathsSource::TotalKills
        } else {
            DeathsSource::TotalDeaths
        };
        EngineOptions {
            max_passes: self.dispatch.max_passes,
            deaths_source,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch.max_passes == 0 {
            return Err(ConfigError::Invalid(
                "dispatch.max_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parses and validates a config document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML and
/// [`ConfigError::Invalid`] for out-of-range values.
pub fn parse_config(content: &str) -> Result<ClientConfig, ConfigError> {
    let cfg: ClientConfig = toml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Loads `ClientConfig` from `path`, returning the defaults if the file does
/// not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// plus anything [`parse_config`] returns.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ClientConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
