//! Descriptor loader SPI
//!
//! Loaders are pluggable strategies turning raw manifest attributes into a
//! resolved [`BundleDescriptor`] or [`ClassLoaderConfiguration`]. Each loader
//! declares a stable id and the artifact types it supports; the repository
//! resolves `(id, artifact type)` lookups so the factory never names a
//! concrete loader type.

pub mod maven;
pub mod repository;

pub use repository::{DescriptorLoaderRepository, DescriptorLoaderRepositoryBuilder};

use std::path::Path;

use crate::artifact::{ArtifactType, BundleDescriptor, ClassLoaderConfiguration};
use crate::error::Result;
use crate::model::LoaderAttributes;

/// Strategy resolving bundle coordinates from manifest attributes
pub trait BundleDescriptorLoader: Send + Sync {
    /// Stable id this loader registers under
    fn id(&self) -> &str;

    fn supports_artifact_type(&self, artifact_type: ArtifactType) -> bool;

    /// Resolve a bundle descriptor for the artifact at `location`
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::InvalidLoaderAttributes` when the attribute
    /// map cannot satisfy this loader's preconditions.
    fn load(
        &self,
        location: &Path,
        attributes: &LoaderAttributes,
        artifact_type: ArtifactType,
    ) -> Result<BundleDescriptor>;
}

/// Strategy resolving the classloader isolation contract from manifest
/// attributes
pub trait ClassLoaderConfigurationLoader: Send + Sync {
    /// Stable id this loader registers under
    fn id(&self) -> &str;

    fn supports_artifact_type(&self, artifact_type: ArtifactType) -> bool;

    /// Resolve a classloader configuration for the artifact at `location`
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::InvalidLoaderAttributes` when the attribute
    /// map cannot satisfy this loader's preconditions.
    fn load(
        &self,
        location: &Path,
        attributes: &LoaderAttributes,
        artifact_type: ArtifactType,
    ) -> Result<ClassLoaderConfiguration>;
}
