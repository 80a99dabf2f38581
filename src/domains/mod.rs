//! Domains module containing the registry's business logic.
//!
//! - **resources**: what locators find and build
//! - **locators**: the locator capability and the best-match manager

pub mod locators;
pub mod resources;
