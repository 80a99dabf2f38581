//! Plain value resource describing a class and its spec.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::resource::Resource;

/// Namespace prepended to a source classname to derive its spec classname.
pub const DEFAULT_SPEC_PREFIX: &str = "spec";

/// A class under specification and the spec class that describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResource {
    /// Fully qualified source classname, e.g. `Acme\Cart`.
    pub src_classname: String,

    /// Fully qualified spec classname, e.g. `spec\Acme\CartSpec`.
    pub spec_classname: String,

    /// Location of the source file, if the locator knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_path: Option<PathBuf>,

    /// Location of the spec file, if the locator knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_path: Option<PathBuf>,
}

impl ClassResource {
    /// Create a resource from explicit classnames.
    pub fn new(src_classname: impl Into<String>, spec_classname: impl Into<String>) -> Self {
        Self {
            src_classname: src_classname.into(),
            spec_classname: spec_classname.into(),
            src_path: None,
            spec_path: None,
        }
    }

    /// Derive the spec classname from a source classname.
    ///
    /// `Acme\Cart` with prefix `spec` becomes `spec\Acme\CartSpec`. Leading
    /// and trailing separators on either part are ignored.
    pub fn for_class(src_classname: &str, spec_prefix: &str) -> Self {
        let src = src_classname.trim_matches('\\');
        let prefix = spec_prefix.trim_matches('\\');

        let spec_classname = if prefix.is_empty() {
            format!("{}Spec", src)
        } else {
            format!("{}\\{}Spec", prefix, src)
        };

        Self::new(src, spec_classname)
    }

    /// Attach the source and spec file locations.
    pub fn with_paths(mut self, src_path: impl Into<PathBuf>, spec_path: impl Into<PathBuf>) -> Self {
        self.src_path = Some(src_path.into());
        self.spec_path = Some(spec_path.into());
        self
    }

    /// Short class name without its namespace.
    pub fn short_name(&self) -> &str {
        self.src_classname
            .rsplit('\\')
            .next()
            .unwrap_or(&self.src_classname)
    }
}

impl Resource for ClassResource {
    fn spec_classname(&self) -> &str {
        &self.spec_classname
    }

    fn name(&self) -> &str {
        self.short_name()
    }

    fn src_classname(&self) -> Option<&str> {
        Some(&self.src_classname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_class_derives_spec_classname() {
        let resource = ClassResource::for_class("Acme\\Cart", DEFAULT_SPEC_PREFIX);
        assert_eq!(resource.src_classname, "Acme\\Cart");
        assert_eq!(resource.spec_classname(), "spec\\Acme\\CartSpec");
        assert_eq!(resource.name(), "Cart");
    }

    #[test]
    fn test_for_class_trims_separators() {
        let resource = ClassResource::for_class("\\Acme\\Cart", "\\spec\\");
        assert_eq!(resource.spec_classname(), "spec\\Acme\\CartSpec");
    }

    #[test]
    fn test_for_class_without_prefix() {
        let resource = ClassResource::for_class("Cart", "");
        assert_eq!(resource.spec_classname(), "CartSpec");
        assert_eq!(resource.src_classname(), Some("Cart"));
    }

    #[test]
    fn test_serializes_without_missing_paths() {
        let resource = ClassResource::new("Acme\\Cart", "spec\\Acme\\CartSpec");
        let json = serde_json::to_value(&resource).unwrap();
        assert!(json.get("src_path").is_none());

        let with_paths = resource.with_paths("src/Acme/Cart.php", "spec/Acme/CartSpec.php");
        let json = serde_json::to_value(&with_paths).unwrap();
        assert_eq!(json["spec_path"], "spec/Acme/CartSpec.php");
    }
}
