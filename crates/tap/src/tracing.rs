//! Tracing configuration for the update-tap CLI
//!
//! Logging is configured from the environment only, so the command line stays
//! limited to the release inputs. All output goes to stderr.

use std::io;
pub use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "CCW_TAP_LOG";
/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "CCW_TAP_LOG_FORMAT";

/// Tracing output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Pretty-printed human-readable format
    Pretty,
    /// Compact single-line format
    Compact,
    /// Structured JSON format
    Json,
}

impl std::str::FromStr for TracingFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown tracing format: {s}")),
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Output format
    pub format: TracingFormat,
    /// Level applied when `RUST_LOG` is unset
    pub level: Level,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            format: TracingFormat::Compact,
            level: Level::WARN, // Default to quiet operation
        }
    }
}

impl TracingConfig {
    /// Reads [`LOG_LEVEL_ENV`] and [`LOG_FORMAT_ENV`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            format: lookup(LOG_FORMAT_ENV)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.format),
            level: lookup(LOG_LEVEL_ENV)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.level),
        }
    }
}

fn default_directives(level: Level) -> String {
    let level_str = level.as_str().to_lowercase();
    format!("ccw_tap={level_str},ccw_release={level_str},ccw_homebrew={level_str}")
}

/// Initialize tracing with the given configuration
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: TracingConfig) -> miette::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(config.level)))
        .map_err(|e| miette::miette!("Failed to create tracing filter: {e}"))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        TracingFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_target(true),
            )
            .try_init(),
        TracingFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_target(false),
            )
            .try_init(),
        TracingFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true),
            )
            .try_init(),
    };
    result.map_err(|e| miette::miette!("Failed to initialize tracing: {e}"))?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        format = ?config.format,
        "Tracing initialized"
    );

    Ok(())
}
