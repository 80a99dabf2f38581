//! Error types and handling for the locator registry.
//!
//! This module defines a unified error type covering the domain errors and
//! the crate's own setup failures.

use thiserror::Error;

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the locators domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::locators::ResourceError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The logging subsystem could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new logging error.
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
