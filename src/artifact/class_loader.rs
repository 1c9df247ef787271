//! Classloader isolation contract
//!
//! `ClassLoaderConfiguration` draws the hard boundary between what an
//! artifact privately uses and what it exposes: exported packages/resources
//! are visible to dependents, local ones are not, and privileged exports
//! name the specific artifacts allowed to cross the boundary anyway.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::artifact::dependency::BundleDependency;

static NULL_CONFIGURATION: OnceLock<ClassLoaderConfiguration> = OnceLock::new();

/// The isolation contract for one artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassLoaderConfiguration {
    locations: Vec<PathBuf>,
    exported_packages: BTreeSet<String>,
    exported_resources: BTreeSet<String>,
    local_packages: BTreeSet<String>,
    local_resources: BTreeSet<String>,
    dependencies: Vec<BundleDependency>,
    privileged_exported_packages: BTreeSet<String>,
    privileged_artifacts: BTreeSet<String>,
    include_test_dependencies: bool,
}

impl ClassLoaderConfiguration {
    pub fn builder() -> ClassLoaderConfigurationBuilder {
        ClassLoaderConfigurationBuilder::default()
    }

    /// The shared "no classloader needed" sentinel
    pub fn null() -> &'static ClassLoaderConfiguration {
        NULL_CONFIGURATION.get_or_init(ClassLoaderConfiguration::default)
    }

    /// Whether this configuration is the null sentinel
    pub fn is_null(&self) -> bool {
        self == Self::null()
    }

    /// Resolvable locations contributing classes and resources
    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    /// Packages visible to dependent artifacts
    pub fn exported_packages(&self) -> &BTreeSet<String> {
        &self.exported_packages
    }

    /// Resources visible to dependent artifacts
    pub fn exported_resources(&self) -> &BTreeSet<String> {
        &self.exported_resources
    }

    /// Packages private to this artifact
    pub fn local_packages(&self) -> &BTreeSet<String> {
        &self.local_packages
    }

    /// Resources private to this artifact
    pub fn local_resources(&self) -> &BTreeSet<String> {
        &self.local_resources
    }

    /// Dependency edges, in declaration order
    pub fn dependencies(&self) -> &[BundleDependency] {
        &self.dependencies
    }

    /// Packages visible only to the privileged artifacts
    pub fn privileged_exported_packages(&self) -> &BTreeSet<String> {
        &self.privileged_exported_packages
    }

    /// Artifacts allowed to see the privileged packages
    pub fn privileged_artifacts(&self) -> &BTreeSet<String> {
        &self.privileged_artifacts
    }

    pub fn include_test_dependencies(&self) -> bool {
        self.include_test_dependencies
    }
}

/// Builder for [`ClassLoaderConfiguration`]
///
/// `build()` freezes the accumulated collections into an immutable value.
#[derive(Debug, Default)]
pub struct ClassLoaderConfigurationBuilder {
    configuration: ClassLoaderConfiguration,
}

impl ClassLoaderConfigurationBuilder {
    /// Add a resolvable location
    pub fn containing(mut self, location: impl Into<PathBuf>) -> Self {
        self.configuration.locations.push(location.into());
        self
    }

    pub fn exporting_packages(mut self, packages: impl IntoIterator<Item = String>) -> Self {
        self.configuration.exported_packages.extend(packages);
        self
    }

    pub fn exporting_resources(mut self, resources: impl IntoIterator<Item = String>) -> Self {
        self.configuration.exported_resources.extend(resources);
        self
    }

    pub fn with_local_packages(mut self, packages: impl IntoIterator<Item = String>) -> Self {
        self.configuration.local_packages.extend(packages);
        self
    }

    pub fn with_local_resources(mut self, resources: impl IntoIterator<Item = String>) -> Self {
        self.configuration.local_resources.extend(resources);
        self
    }

    /// Grant named artifacts access to otherwise-private packages
    pub fn exporting_privileged_packages(
        mut self,
        packages: impl IntoIterator<Item = String>,
        artifacts: impl IntoIterator<Item = String>,
    ) -> Self {
        self.configuration.privileged_exported_packages.extend(packages);
        self.configuration.privileged_artifacts.extend(artifacts);
        self
    }

    pub fn depending_on(
        mut self,
        dependencies: impl IntoIterator<Item = BundleDependency>,
    ) -> Self {
        self.configuration.dependencies.extend(dependencies);
        self
    }

    pub fn include_test_dependencies(mut self, include: bool) -> Self {
        self.configuration.include_test_dependencies = include;
        self
    }

    pub fn build(self) -> ClassLoaderConfiguration {
        self.configuration
    }
}
