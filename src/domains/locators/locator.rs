//! The locator capability.
//!
//! A locator knows one resource space (a source tree, a namespace convention,
//! an in-memory list) and answers two kinds of questions about it: "what do you
//! have for this query" and "can you build a resource for this class, and how
//! sure are you".

use std::sync::Arc;

use crate::domains::resources::SharedResource;

/// Trait implemented by every resource locator.
///
/// The registry only ever talks to locators through this trait. Locators are
/// expected to be fast, local and in-memory; every call is synchronous.
pub trait ResourceLocator: Send + Sync {
    /// Rank used to settle duplicates between locators. Higher wins.
    ///
    /// Must stay fixed for the locator's lifetime. Need not be unique.
    fn priority(&self) -> i32;

    /// Whether this locator can search for `query`.
    fn supports_query(&self, query: &str) -> bool;

    /// Search results for a non-empty query.
    ///
    /// Only called after [`supports_query`](Self::supports_query) returned true.
    fn find_resources(&self, query: &str) -> Vec<SharedResource>;

    /// Every resource this locator knows of. Used for the empty query.
    fn get_all_resources(&self) -> Vec<SharedResource>;

    /// Whether this locator can build a resource for `classname`.
    fn supports_class(&self, classname: &str) -> bool;

    /// How specifically this locator matches `classname`.
    ///
    /// Only meaningful when [`supports_class`](Self::supports_class) is true.
    fn calculate_match_score(&self, classname: &str) -> i64;

    /// Build the resource for `classname`.
    fn create_resource(&self, classname: &str) -> anyhow::Result<SharedResource>;
}

/// Locators are registered and held as shared trait objects.
pub type SharedLocator = Arc<dyn ResourceLocator>;
