//! Logging initialization.
//!
//! The registry itself only emits `tracing` events; applications embedding it
//! decide whether to install a subscriber. `init_logging` installs the usual
//! one: a `fmt` layer on stderr filtered by `RUST_LOG` and the configured
//! level.

use tracing_subscriber::{EnvFilter, fmt};

use super::config::LoggingConfig;
use super::error::{Error, Result};

/// Build the filter for the given logging configuration from `RUST_LOG`.
///
/// See [`filter_from_directives`] for how the two are combined.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    filter_from_directives(config, &directives)
}

/// Build the filter for the given logging configuration from explicit
/// directives.
///
/// With no directives the configured level is the filter. A global level in
/// `directives`, such as `warn`, replaces the configured level rather than
/// adding to it. Unparsable directives are a configuration error.
pub fn filter_from_directives(config: &LoggingConfig, directives: &str) -> Result<EnvFilter> {
    EnvFilter::builder()
        .with_default_directive(config.level().into())
        .parse(directives)
        .map_err(|e| Error::config(format!("invalid RUST_LOG directives: {}", e)))
}

/// Initialize the logging subsystem.
///
/// Fails if `RUST_LOG` cannot be parsed or a global subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    install(config, filter)
}

fn install(config: &LoggingConfig, filter: EnvFilter) -> Result<()> {
    fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))
}
