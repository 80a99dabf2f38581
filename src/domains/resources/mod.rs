//! Resources domain module.
//!
//! A resource is whatever a locator finds or builds. The registry only needs
//! one thing from it: a spec classname, used as the identity key when results
//! from several locators are merged.
//!
//! - `resource.rs` - the `Resource` capability and the shared handle type
//! - `class_resource.rs` - a plain value resource for class/spec pairs

mod class_resource;
mod resource;

pub use class_resource::{ClassResource, DEFAULT_SPEC_PREFIX};
pub use resource::{Resource, SharedResource};
