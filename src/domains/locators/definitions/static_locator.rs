//! In-memory locator over a fixed namespace and resource list.

use anyhow::bail;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::domains::locators::ResourceLocator;
use crate::domains::resources::{ClassResource, DEFAULT_SPEC_PREFIX, Resource, SharedResource};

/// Locator serving a fixed set of resources under one source namespace.
///
/// Classes inside the namespace are supported, and the match score is the
/// length of the namespace, so a locator bound to `Acme\Billing\` outranks one
/// bound to `Acme\` for `Acme\Billing\Invoice`. A locator with an empty
/// namespace supports every class with a score of zero.
pub struct StaticLocator {
    priority: i32,
    namespace: String,
    spec_prefix: String,
    resources: Vec<SharedResource>,
}

impl StaticLocator {
    /// Create an empty locator with the given priority and no namespace.
    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            namespace: String::new(),
            spec_prefix: DEFAULT_SPEC_PREFIX.to_string(),
            resources: Vec::new(),
        }
    }

    /// Restrict the locator to classes under `namespace`.
    ///
    /// The namespace is stored without a leading separator and with a
    /// trailing one, so `Acme` and `\Acme\` are equivalent.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        let trimmed = namespace.trim_matches('\\');
        self.namespace = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}\\", trimmed)
        };
        self
    }

    /// Namespace prepended to created spec classnames.
    pub fn with_spec_prefix(mut self, spec_prefix: &str) -> Self {
        self.spec_prefix = spec_prefix.to_string();
        self
    }

    /// Add a resource to the locator's list.
    pub fn with_resource<R: Resource + 'static>(mut self, resource: R) -> Self {
        self.resources.push(Arc::new(resource));
        self
    }

    /// Add an already shared resource to the locator's list.
    pub fn with_shared_resource(mut self, resource: SharedResource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Normalized namespace, empty when the locator accepts every class.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn in_namespace(&self, classname: &str) -> bool {
        classname.trim_start_matches('\\').starts_with(&self.namespace)
    }

    fn matches_query(resource: &SharedResource, query: &str) -> bool {
        resource.spec_classname().starts_with(query)
            || resource
                .src_classname()
                .is_some_and(|src| src.starts_with(query))
    }
}

impl ResourceLocator for StaticLocator {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports_query(&self, query: &str) -> bool {
        let query = query.trim_start_matches('\\');
        !query.is_empty()
            && (self.in_namespace(query)
                || self
                    .resources
                    .iter()
                    .any(|resource| Self::matches_query(resource, query)))
    }

    fn find_resources(&self, query: &str) -> Vec<SharedResource> {
        let query = query.trim_start_matches('\\');
        self.resources
            .iter()
            .filter(|resource| Self::matches_query(resource, query))
            .cloned()
            .collect()
    }

    fn get_all_resources(&self) -> Vec<SharedResource> {
        self.resources.clone()
    }

    fn supports_class(&self, classname: &str) -> bool {
        !classname.trim_matches('\\').is_empty() && self.in_namespace(classname)
    }

    fn calculate_match_score(&self, classname: &str) -> i64 {
        if self.in_namespace(classname) {
            self.namespace.len() as i64
        } else {
            0
        }
    }

    fn create_resource(&self, classname: &str) -> anyhow::Result<SharedResource> {
        if !self.supports_class(classname) {
            bail!(
                "class {} is outside namespace {:?}",
                classname,
                self.namespace
            );
        }

        let classname = classname.trim_matches('\\');
        if let Some(known) = self
            .resources
            .iter()
            .find(|resource| resource.src_classname() == Some(classname))
        {
            debug!(classname, "Returning known resource");
            return Ok(known.clone());
        }

        debug!(classname, spec_prefix = %self.spec_prefix, "Creating class resource");
        Ok(Arc::new(ClassResource::for_class(classname, &self.spec_prefix)))
    }
}

impl fmt::Debug for StaticLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticLocator")
            .field("priority", &self.priority)
            .field("namespace", &self.namespace)
            .field("spec_prefix", &self.spec_prefix)
            .field("resources", &self.resources.len())
            .finish()
    }
}
