//! Bundle coordinates
//!
//! A bundle is a versioned, Maven-coordinate-identified unit of packaged
//! content. `BundleDescriptor` is the immutable identity of one bundle;
//! equality and hashing run over (group, artifact, version, classifier,
//! type), while `base_version` is informational only.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::error::{Result, descriptor_field_missing};

/// Classifier marking a bundle as a runtime plugin
pub const MULE_PLUGIN_CLASSIFIER: &str = "mule-plugin";

/// Default bundle packaging type
pub const DEFAULT_BUNDLE_TYPE: &str = "jar";

/// Maven-style coordinates identifying a bundle
#[derive(Debug, Clone)]
pub struct BundleDescriptor {
    group_id: String,
    artifact_id: String,
    version: String,
    base_version: Option<String>,
    classifier: Option<String>,
    bundle_type: String,
    // Derived file name, computed at most once even under concurrent access
    artifact_file_name: OnceLock<String>,
}

impl BundleDescriptor {
    pub fn builder() -> BundleDescriptorBuilder {
        BundleDescriptorBuilder::default()
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base_version(&self) -> Option<&str> {
        self.base_version.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn bundle_type(&self) -> &str {
        &self.bundle_type
    }

    /// Whether this bundle packages a runtime plugin
    pub fn is_plugin(&self) -> bool {
        self.classifier.as_deref() == Some(MULE_PLUGIN_CLASSIFIER)
    }

    /// The file name of this bundle: `artifactId-version[-classifier]`
    pub fn artifact_file_name(&self) -> &str {
        self.artifact_file_name.get_or_init(|| {
            let mut file_name = format!("{}-{}", self.artifact_id, self.version);
            if let Some(classifier) = &self.classifier {
                file_name.push('-');
                file_name.push_str(classifier);
            }
            file_name
        })
    }
}

impl PartialEq for BundleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.version == other.version
            && self.classifier == other.classifier
            && self.bundle_type == other.bundle_type
    }
}

impl Eq for BundleDescriptor {}

impl Hash for BundleDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
        self.version.hash(state);
        self.classifier.hash(state);
        self.bundle_type.hash(state);
    }
}

impl fmt::Display for BundleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// Builder for [`BundleDescriptor`]
///
/// `group_id`, `artifact_id` and `version` are mandatory; `build()` fails
/// before a half-valid descriptor can escape.
#[derive(Debug, Default)]
pub struct BundleDescriptorBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    base_version: Option<String>,
    classifier: Option<String>,
    bundle_type: Option<String>,
}

impl BundleDescriptorBuilder {
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn base_version(mut self, base_version: impl Into<String>) -> Self {
        self.base_version = Some(base_version.into());
        self
    }

    pub fn classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn bundle_type(mut self, bundle_type: impl Into<String>) -> Self {
        self.bundle_type = Some(bundle_type.into());
        self
    }

    /// Build the descriptor
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::MissingDescriptorField` when `group_id`,
    /// `artifact_id` or `version` is absent or empty.
    pub fn build(self) -> Result<BundleDescriptor> {
        let group_id = mandatory(self.group_id, "groupId")?;
        let artifact_id = mandatory(self.artifact_id, "artifactId")?;
        let version = mandatory(self.version, "version")?;

        Ok(BundleDescriptor {
            group_id,
            artifact_id,
            version,
            base_version: self.base_version,
            classifier: self.classifier,
            bundle_type: self
                .bundle_type
                .unwrap_or_else(|| DEFAULT_BUNDLE_TYPE.to_string()),
            artifact_file_name: OnceLock::new(),
        })
    }
}

fn mandatory(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(descriptor_field_missing("bundle descriptor", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArtificerError;
    use std::sync::Arc;

    fn descriptor() -> BundleDescriptor {
        BundleDescriptor::builder()
            .group_id("org.example")
            .artifact_id("billing")
            .version("1.2.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(descriptor().artifact_file_name(), "billing-1.2.0");
    }

    #[test]
    fn test_artifact_file_name_with_classifier() {
        let descriptor = BundleDescriptor::builder()
            .group_id("org.example")
            .artifact_id("billing")
            .version("1.2.0")
            .classifier(MULE_PLUGIN_CLASSIFIER)
            .build()
            .unwrap();
        assert_eq!(descriptor.artifact_file_name(), "billing-1.2.0-mule-plugin");
    }

    #[test]
    fn test_artifact_file_name_concurrent_access() {
        let descriptor = Arc::new(descriptor());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let descriptor = Arc::clone(&descriptor);
                std::thread::spawn(move || descriptor.artifact_file_name().to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "billing-1.2.0");
        }
    }

    #[test]
    fn test_build_without_version_fails() {
        let result = BundleDescriptor::builder()
            .group_id("org.example")
            .artifact_id("billing")
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ArtificerError::MissingDescriptorField { .. }
        ));
    }

    #[test]
    fn test_build_with_empty_group_fails() {
        let result = BundleDescriptor::builder()
            .group_id("")
            .artifact_id("billing")
            .version("1.0.0")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_default_bundle_type() {
        assert_eq!(descriptor().bundle_type(), "jar");
    }

    #[test]
    fn test_is_plugin() {
        assert!(!descriptor().is_plugin());
        let plugin = BundleDescriptor::builder()
            .group_id("org.example")
            .artifact_id("http-connector")
            .version("1.0.0")
            .classifier(MULE_PLUGIN_CLASSIFIER)
            .build()
            .unwrap();
        assert!(plugin.is_plugin());
    }

    #[test]
    fn test_equality_ignores_base_version() {
        let with_base = BundleDescriptor::builder()
            .group_id("org.example")
            .artifact_id("billing")
            .version("1.2.0")
            .base_version("1.2.0-SNAPSHOT")
            .build()
            .unwrap();
        assert_eq!(with_base, descriptor());
    }

    #[test]
    fn test_equality_distinguishes_classifier() {
        let classified = BundleDescriptor::builder()
            .group_id("org.example")
            .artifact_id("billing")
            .version("1.2.0")
            .classifier("tests")
            .build()
            .unwrap();
        assert_ne!(classified, descriptor());
    }

    #[test]
    fn test_display() {
        assert_eq!(descriptor().to_string(), "org.example:billing:1.2.0");
    }
}
