//! Best-match resource locator registry.
//!
//! This crate aggregates resources from any number of prioritized locators and
//! picks the single best locator when a resource has to be created for a
//! class.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling and logging setup
//! - **domains**: the registry's business logic
//!   - **resources**: the `Resource` capability and a plain class resource
//!   - **locators**: the `ResourceLocator` trait and `BestMatchResourceManager`
//!
//! # Example
//!
//! ```rust
//! use spec_locator::{BestMatchResourceManager, Resource, StaticLocator};
//!
//! let manager = BestMatchResourceManager::new()
//!     .with_locator(StaticLocator::new(1).with_namespace("Acme"))
//!     .with_locator(StaticLocator::new(1).with_namespace("Acme\\Billing"));
//!
//! // The more specific namespace has the higher match score.
//! let resource = manager.create_resource("Acme\\Billing\\Invoice").unwrap();
//! assert_eq!(resource.spec_classname(), "spec\\Acme\\Billing\\InvoiceSpec");
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result};
pub use domains::locators::{
    BestMatchResourceManager, ResourceError, ResourceErrorKind, ResourceLocator, ResourceManager,
    SharedLocator, StaticLocator,
};
pub use domains::resources::{ClassResource, Resource, SharedResource};
