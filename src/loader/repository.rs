//! Descriptor loader registry
//!
//! An explicit, caller-constructed registry: loaders are registered once at
//! startup through the builder, then the frozen repository is shared behind
//! an `Arc` and looked up from any thread without locking.

use std::sync::Arc;

use crate::artifact::ArtifactType;
use crate::error::{Result, loader};
use crate::loader::{BundleDescriptorLoader, ClassLoaderConfigurationLoader};

/// Registry of descriptor loaders keyed by `(id, artifact type)`
#[derive(Default)]
pub struct DescriptorLoaderRepository {
    bundle_descriptor_loaders: Vec<Arc<dyn BundleDescriptorLoader>>,
    class_loader_configuration_loaders: Vec<Arc<dyn ClassLoaderConfigurationLoader>>,
}

impl DescriptorLoaderRepository {
    pub fn builder() -> DescriptorLoaderRepositoryBuilder {
        DescriptorLoaderRepositoryBuilder::default()
    }

    /// A repository with the standard Maven loaders registered
    pub fn with_standard_loaders() -> Self {
        use crate::loader::maven::{
            MavenBundleDescriptorLoader, MavenPackageClassLoaderConfigurationLoader,
        };

        Self::builder()
            .register_bundle_descriptor_loader(Arc::new(MavenBundleDescriptorLoader))
            .register_class_loader_configuration_loader(Arc::new(
                MavenPackageClassLoaderConfigurationLoader,
            ))
            .build()
    }

    /// Find the bundle descriptor loader matching `id` and `artifact_type`
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::LoaderNotFound` when no registered loader
    /// matches both criteria.
    pub fn bundle_descriptor_loader(
        &self,
        id: &str,
        artifact_type: ArtifactType,
    ) -> Result<&dyn BundleDescriptorLoader> {
        self.bundle_descriptor_loaders
            .iter()
            .find(|loader| loader.id() == id && loader.supports_artifact_type(artifact_type))
            .map(AsRef::as_ref)
            .ok_or_else(|| loader::not_found_for(id, artifact_type))
    }

    /// Find the classloader configuration loader matching `id` and
    /// `artifact_type`
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::LoaderNotFound` when no registered loader
    /// matches both criteria.
    pub fn class_loader_configuration_loader(
        &self,
        id: &str,
        artifact_type: ArtifactType,
    ) -> Result<&dyn ClassLoaderConfigurationLoader> {
        self.class_loader_configuration_loaders
            .iter()
            .find(|loader| loader.id() == id && loader.supports_artifact_type(artifact_type))
            .map(AsRef::as_ref)
            .ok_or_else(|| loader::not_found_for(id, artifact_type))
    }
}

/// Builder accumulating loader registrations
#[derive(Default)]
pub struct DescriptorLoaderRepositoryBuilder {
    repository: DescriptorLoaderRepository,
}

impl DescriptorLoaderRepositoryBuilder {
    pub fn register_bundle_descriptor_loader(
        mut self,
        loader: Arc<dyn BundleDescriptorLoader>,
    ) -> Self {
        self.repository.bundle_descriptor_loaders.push(loader);
        self
    }

    pub fn register_class_loader_configuration_loader(
        mut self,
        loader: Arc<dyn ClassLoaderConfigurationLoader>,
    ) -> Self {
        self.repository.class_loader_configuration_loaders.push(loader);
        self
    }

    pub fn build(self) -> DescriptorLoaderRepository {
        self.repository
    }
}
