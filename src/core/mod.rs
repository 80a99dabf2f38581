//! Core module containing shared infrastructure components.
//!
//! Configuration, the unified error type and logging setup.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, LoggingConfig, ManagerConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
