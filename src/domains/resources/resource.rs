//! The resource capability consumed by the locator registry.

use std::fmt;
use std::sync::Arc;

/// A located or constructible unit, identified by its spec classname.
///
/// Two resources reporting the same spec classname are treated as the same
/// resource by the registry, whatever locator produced them.
pub trait Resource: Send + Sync {
    /// Identity key used for deduplication across locators.
    fn spec_classname(&self) -> &str;

    /// Human readable name. Defaults to the spec classname.
    fn name(&self) -> &str {
        self.spec_classname()
    }

    /// Classname of the code under specification, when known.
    fn src_classname(&self) -> Option<&str> {
        None
    }
}

/// Resources are shared, never copied, between locators and callers.
pub type SharedResource = Arc<dyn Resource>;

impl fmt::Debug for dyn Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("spec_classname", &self.spec_classname())
            .field("name", &self.name())
            .finish()
    }
}
