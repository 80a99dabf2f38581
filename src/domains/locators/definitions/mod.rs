//! Locator definitions module.
//!
//! Production locators live in the crates that know their resource space and
//! only need to implement `ResourceLocator`. The locators here are in-memory
//! ones, handy for wiring small registries and for tests.

mod static_locator;

pub use static_locator::StaticLocator;
