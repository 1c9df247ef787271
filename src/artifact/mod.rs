//! Artifact descriptor model
//!
//! The in-memory representation of deployable units: bundle coordinates,
//! dependency edges, the classloader isolation contract and the descriptor
//! entity itself.

pub mod bundle;
pub mod class_loader;
pub mod dependency;
pub mod descriptor;

pub use bundle::{BundleDescriptor, BundleDescriptorBuilder, MULE_PLUGIN_CLASSIFIER};
pub use class_loader::{ClassLoaderConfiguration, ClassLoaderConfigurationBuilder};
pub use dependency::{BundleDependency, BundleDependencyBuilder, BundleScope};
pub use descriptor::{
    ArtifactDescriptor, ArtifactKind, DeployableAttributes, LicenseModel, PluginAttributes,
    Product,
};

/// The kinds of deployable units the runtime isolates from each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    Application,
    Domain,
    Plugin,
}

impl ArtifactType {
    /// Stable name used in loader registration and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Application => "application",
            ArtifactType::Domain => "domain",
            ArtifactType::Plugin => "plugin",
        }
    }

    /// Parse a stable artifact type name
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "application" | "app" => Some(ArtifactType::Application),
            "domain" => Some(ArtifactType::Domain),
            "plugin" => Some(ArtifactType::Plugin),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_type_names() {
        assert_eq!(ArtifactType::Application.as_str(), "application");
        assert_eq!(ArtifactType::Domain.as_str(), "domain");
        assert_eq!(ArtifactType::Plugin.as_str(), "plugin");
    }

    #[test]
    fn test_artifact_type_parse() {
        assert_eq!(ArtifactType::parse("application"), Some(ArtifactType::Application));
        assert_eq!(ArtifactType::parse("app"), Some(ArtifactType::Application));
        assert_eq!(ArtifactType::parse("Domain"), Some(ArtifactType::Domain));
        assert_eq!(ArtifactType::parse("plugin"), Some(ArtifactType::Plugin));
        assert_eq!(ArtifactType::parse("policy"), None);
    }
}
