//! Best-match resource manager.
//!
//! The manager keeps an ordered list of locators and answers two questions:
//! which resources match a query (merged across every locator, one per spec
//! classname) and which single locator should build the resource for a class
//! (the one with the strictly highest match score).
//!
//! Registration needs `&mut self` while both queries take `&self`, so a manager
//! that is shared behind an `Arc` after setup is frozen for free.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace, warn};

use super::error::ResourceError;
use super::locator::{ResourceLocator, SharedLocator};
use crate::core::config::ManagerConfig;
use crate::domains::resources::SharedResource;

/// Read side of a resource registry.
pub trait ResourceManager: Send + Sync {
    /// Resources matching `query`, or every known resource for an empty query.
    fn locate_resources(&self, query: &str) -> Vec<SharedResource>;

    /// Build the resource for `classname`.
    fn create_resource(&self, classname: &str) -> Result<SharedResource, ResourceError>;
}

/// Resource manager that merges locator results by priority and creates
/// resources through the best matching locator.
pub struct BestMatchResourceManager {
    config: ManagerConfig,

    /// Registered locators, in registration order.
    locators: Vec<SharedLocator>,
}

impl BestMatchResourceManager {
    /// Create an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Create an empty manager with the given configuration.
    pub fn with_config(config: ManagerConfig) -> Self {
        debug!(manager = %config.label, "Initializing BestMatchResourceManager");

        Self {
            config,
            locators: Vec::new(),
        }
    }

    /// Register a locator. Locators are never deduplicated or removed.
    pub fn register_locator(&mut self, locator: SharedLocator) {
        info!(
            manager = %self.config.label,
            priority = locator.priority(),
            registered = self.locators.len() + 1,
            "Registering resource locator"
        );
        self.locators.push(locator);
    }

    /// Builder-style variant of [`register_locator`](Self::register_locator).
    pub fn with_locator<L: ResourceLocator + 'static>(mut self, locator: L) -> Self {
        self.register_locator(Arc::new(locator));
        self
    }

    /// Registered locators, in registration order.
    pub fn locators(&self) -> &[SharedLocator] {
        &self.locators
    }

    /// Number of registered locators.
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Whether no locator has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Locate resources across every registered locator.
    ///
    /// An empty query enumerates each locator's full resource list. A
    /// non-empty query only consults locators that support it. Results are
    /// collected in registration order and then deduplicated by spec
    /// classname: the resource from the higher priority locator survives, and
    /// on equal priority the one collected last wins. Each surviving resource
    /// sits at the position where its spec classname was first seen.
    #[instrument(skip(self), fields(manager = %self.config.label))]
    pub fn locate_resources(&self, query: &str) -> Vec<SharedResource> {
        let mut collected: Vec<(i32, SharedResource)> = Vec::new();

        for locator in &self.locators {
            let priority = locator.priority();

            let found = if query.is_empty() {
                locator.get_all_resources()
            } else if locator.supports_query(query) {
                locator.find_resources(query)
            } else {
                trace!(priority, "Locator does not support query, skipping");
                continue;
            };

            trace!(priority, found = found.len(), "Collected resources from locator");
            collected.extend(found.into_iter().map(|resource| (priority, resource)));
        }

        let total = collected.len();
        let resources = remove_duplicate_resources(collected);

        debug!(
            collected = total,
            returned = resources.len(),
            "Located resources"
        );

        resources
    }

    /// Create the resource for `classname` through the best matching locator.
    ///
    /// Fails with [`ResourceError::CreationNotSupported`] when no locator
    /// supports the class and with [`ResourceError::CreationAmbiguous`] when
    /// the highest match score is shared. Errors from the chosen locator are
    /// returned as [`ResourceError::Locator`] without alteration.
    #[instrument(skip(self), fields(manager = %self.config.label))]
    pub fn create_resource(&self, classname: &str) -> Result<SharedResource, ResourceError> {
        let supporting: Vec<&SharedLocator> = self
            .locators
            .iter()
            .filter(|locator| locator.supports_class(classname))
            .collect();

        let scored: Vec<(i64, &SharedLocator)> = supporting
            .into_iter()
            .map(|locator| (locator.calculate_match_score(classname), locator))
            .collect();

        let Some(best_score) = scored.iter().map(|(score, _)| *score).max() else {
            warn!("No locator supports class");
            return Err(ResourceError::not_supported(classname));
        };

        let mut best = scored.iter().filter(|(score, _)| *score == best_score);
        let chosen = best.next().map(|(_, locator)| *locator);
        let tied = 1 + best.count();

        match chosen {
            Some(locator) if tied == 1 => {
                debug!(
                    score = best_score,
                    priority = locator.priority(),
                    supporting = scored.len(),
                    "Creating resource with best matching locator"
                );
                Ok(locator.create_resource(classname)?)
            }
            _ => {
                warn!(
                    score = best_score,
                    candidates = tied,
                    "Several locators share the best match score"
                );
                Err(ResourceError::ambiguous(classname, best_score, tied))
            }
        }
    }
}

/// Keep one resource per spec classname.
///
/// A later duplicate replaces the kept resource when its locator priority is
/// greater or equal, and takes over the kept resource's position.
fn remove_duplicate_resources(collected: Vec<(i32, SharedResource)>) -> Vec<SharedResource> {
    let mut kept: Vec<(i32, SharedResource)> = Vec::with_capacity(collected.len());
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (priority, resource) in collected {
        let existing = slots.get(resource.spec_classname()).copied();

        match existing {
            Some(slot) => {
                let (kept_priority, kept_resource) = &mut kept[slot];
                if priority >= *kept_priority {
                    trace!(
                        spec = resource.spec_classname(),
                        priority,
                        replaced_priority = *kept_priority,
                        "Replacing duplicate resource"
                    );
                    *kept_priority = priority;
                    *kept_resource = resource;
                } else {
                    trace!(
                        spec = resource.spec_classname(),
                        priority,
                        kept_priority = *kept_priority,
                        "Dropping duplicate resource from lower priority locator"
                    );
                }
            }
            None => {
                slots.insert(resource.spec_classname().to_string(), kept.len());
                kept.push((priority, resource));
            }
        }
    }

    kept.into_iter().map(|(_, resource)| resource).collect()
}

impl ResourceManager for BestMatchResourceManager {
    fn locate_resources(&self, query: &str) -> Vec<SharedResource> {
        BestMatchResourceManager::locate_resources(self, query)
    }

    fn create_resource(&self, classname: &str) -> Result<SharedResource, ResourceError> {
        BestMatchResourceManager::create_resource(self, classname)
    }
}

impl Default for BestMatchResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<SharedLocator> for BestMatchResourceManager {
    fn from_iter<I: IntoIterator<Item = SharedLocator>>(iter: I) -> Self {
        let mut manager = Self::new();
        for locator in iter {
            manager.register_locator(locator);
        }
        manager
    }
}

impl fmt::Debug for BestMatchResourceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let priorities: Vec<i32> = self.locators.iter().map(|l| l.priority()).collect();
        f.debug_struct("BestMatchResourceManager")
            .field("config", &self.config)
            .field("locator_priorities", &priorities)
            .finish()
    }
}
