//! Bundle dependency edges
//!
//! A `BundleDependency` is a directed edge from an owning bundle to another
//! bundle, carrying its resolution scope, the resolved on-disk location, the
//! additional and transitive dependency lists, and the packages/resources
//! that edge contributes to the owner's classloader.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::artifact::bundle::BundleDescriptor;
use crate::error::{Result, descriptor_field_missing};

/// Dependency-resolution visibility tier of a bundle dependency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BundleScope {
    #[default]
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

impl BundleScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleScope::Compile => "compile",
            BundleScope::Provided => "provided",
            BundleScope::Runtime => "runtime",
            BundleScope::Test => "test",
            BundleScope::System => "system",
            BundleScope::Import => "import",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "compile" => Some(BundleScope::Compile),
            "provided" => Some(BundleScope::Provided),
            "runtime" => Some(BundleScope::Runtime),
            "test" => Some(BundleScope::Test),
            "system" => Some(BundleScope::System),
            "import" => Some(BundleScope::Import),
            _ => None,
        }
    }
}

impl std::fmt::Display for BundleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved dependency edge to another bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDependency {
    descriptor: BundleDescriptor,
    scope: BundleScope,
    bundle_location: Option<PathBuf>,
    additional_dependencies: Vec<BundleDependency>,
    transitive_dependencies: Vec<BundleDependency>,
    packages: BTreeSet<String>,
    resources: BTreeSet<String>,
}

impl BundleDependency {
    pub fn builder() -> BundleDependencyBuilder {
        BundleDependencyBuilder::default()
    }

    /// Start a builder pre-populated from an existing dependency
    pub fn builder_from(template: &BundleDependency) -> BundleDependencyBuilder {
        BundleDependencyBuilder {
            descriptor: Some(template.descriptor.clone()),
            scope: template.scope,
            bundle_location: template.bundle_location.clone(),
            additional_dependencies: template.additional_dependencies.clone(),
            transitive_dependencies: template.transitive_dependencies.clone(),
            packages: template.packages.clone(),
            resources: template.resources.clone(),
        }
    }

    pub fn descriptor(&self) -> &BundleDescriptor {
        &self.descriptor
    }

    pub fn scope(&self) -> BundleScope {
        self.scope
    }

    pub fn bundle_location(&self) -> Option<&Path> {
        self.bundle_location.as_deref()
    }

    /// Extra resolved artifacts bundled alongside this dependency,
    /// e.g. native libraries
    pub fn additional_dependencies(&self) -> &[BundleDependency] {
        &self.additional_dependencies
    }

    pub fn transitive_dependencies(&self) -> &[BundleDependency] {
        &self.transitive_dependencies
    }

    /// Packages this dependency contributes to the owning artifact
    pub fn packages(&self) -> &BTreeSet<String> {
        &self.packages
    }

    /// Resources this dependency contributes to the owning artifact
    pub fn resources(&self) -> &BTreeSet<String> {
        &self.resources
    }
}

/// Builder for [`BundleDependency`]; `descriptor` is mandatory
#[derive(Debug, Default)]
pub struct BundleDependencyBuilder {
    descriptor: Option<BundleDescriptor>,
    scope: BundleScope,
    bundle_location: Option<PathBuf>,
    additional_dependencies: Vec<BundleDependency>,
    transitive_dependencies: Vec<BundleDependency>,
    packages: BTreeSet<String>,
    resources: BTreeSet<String>,
}

impl BundleDependencyBuilder {
    pub fn descriptor(mut self, descriptor: BundleDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    pub fn scope(mut self, scope: BundleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn bundle_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.bundle_location = Some(location.into());
        self
    }

    pub fn additional_dependencies(
        mut self,
        dependencies: impl IntoIterator<Item = BundleDependency>,
    ) -> Self {
        self.additional_dependencies = dependencies.into_iter().collect();
        self
    }

    pub fn transitive_dependencies(
        mut self,
        dependencies: impl IntoIterator<Item = BundleDependency>,
    ) -> Self {
        self.transitive_dependencies = dependencies.into_iter().collect();
        self
    }

    pub fn packages(mut self, packages: impl IntoIterator<Item = String>) -> Self {
        self.packages = packages.into_iter().collect();
        self
    }

    pub fn resources(mut self, resources: impl IntoIterator<Item = String>) -> Self {
        self.resources = resources.into_iter().collect();
        self
    }

    /// Build the dependency
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::MissingDescriptorField` when no descriptor
    /// was supplied.
    pub fn build(self) -> Result<BundleDependency> {
        let descriptor = self
            .descriptor
            .ok_or_else(|| descriptor_field_missing("bundle dependency", "descriptor"))?;

        Ok(BundleDependency {
            descriptor,
            scope: self.scope,
            bundle_location: self.bundle_location,
            additional_dependencies: self.additional_dependencies,
            transitive_dependencies: self.transitive_dependencies,
            packages: self.packages,
            resources: self.resources,
        })
    }
}
