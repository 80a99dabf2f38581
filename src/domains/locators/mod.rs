//! Locators domain module.
//!
//! A locator searches one resource space and can build resources for the
//! classes it understands. The `BestMatchResourceManager` aggregates any number
//! of them.
//!
//! ## Architecture
//!
//! - `locator.rs` - the `ResourceLocator` trait every locator implements
//! - `manager.rs` - merging, deduplication and best-match creation
//! - `definitions/` - bundled in-memory locators
//! - `error.rs` - resource creation errors
//!
//! ## Adding a New Locator
//!
//! 1. Implement `ResourceLocator` for your type
//! 2. Register it with `BestMatchResourceManager::register_locator`
//!
//! **No need to modify `manager.rs`!**

pub mod definitions;
mod error;
mod locator;
mod manager;

pub use definitions::StaticLocator;
pub use error::{ResourceError, ResourceErrorKind};
pub use locator::{ResourceLocator, SharedLocator};
pub use manager::{BestMatchResourceManager, ResourceManager};
