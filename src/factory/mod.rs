//! Descriptor factory
//!
//! Turns an artifact folder into a fully resolved descriptor: locate and
//! parse the manifest, resolve the bundle descriptor and classloader
//! configuration through the loader repository, then hand the descriptor to
//! the kind-specific [`DescriptorConfigurer`] for its own fields. Loader
//! lookup and execution failures are wrapped into the descriptor-create
//! error naming the offending loader id and folder; callers never see the
//! lower-level error types.

pub mod application;
pub mod domain;
pub mod plugin;

pub use application::ApplicationDescriptorConfigurer;
pub use domain::DomainDescriptorConfigurer;
pub use plugin::PluginDescriptorConfigurer;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::artifact::{ArtifactDescriptor, ArtifactType};
use crate::error::{ArtificerError, Result, descriptor_create_failed};
use crate::loader::DescriptorLoaderRepository;
use crate::model::{ArtifactManifest, read_manifest};
use crate::version::parse_version;

/// Kind-specific construction hook
pub trait DescriptorConfigurer: Send + Sync {
    /// The artifact type this configurer builds descriptors for
    fn artifact_type(&self) -> ArtifactType;

    /// Fresh descriptor of this configurer's kind
    fn new_descriptor(&self, name: &str) -> Result<ArtifactDescriptor>;

    /// Populate kind-specific descriptor fields from the manifest
    fn configure(
        &self,
        manifest: &ArtifactManifest,
        descriptor: &mut ArtifactDescriptor,
        location: &Path,
    ) -> Result<()>;
}

/// Creates artifact descriptors from artifact folders
pub struct DescriptorFactory {
    repository: Arc<DescriptorLoaderRepository>,
    configurer: Box<dyn DescriptorConfigurer>,
}

impl DescriptorFactory {
    pub fn new(
        repository: Arc<DescriptorLoaderRepository>,
        configurer: Box<dyn DescriptorConfigurer>,
    ) -> Self {
        DescriptorFactory {
            repository,
            configurer,
        }
    }

    /// Factory for application descriptors
    pub fn application(repository: Arc<DescriptorLoaderRepository>) -> Self {
        let configurer = ApplicationDescriptorConfigurer::new(Arc::clone(&repository));
        Self::new(repository, Box::new(configurer))
    }

    /// Factory for domain descriptors
    pub fn domain(repository: Arc<DescriptorLoaderRepository>) -> Self {
        let configurer = DomainDescriptorConfigurer::new(Arc::clone(&repository));
        Self::new(repository, Box::new(configurer))
    }

    /// Factory for plugin descriptors
    pub fn plugin(repository: Arc<DescriptorLoaderRepository>) -> Self {
        Self::new(repository, Box::new(PluginDescriptorConfigurer))
    }

    /// Factory for the given artifact type
    pub fn for_type(repository: Arc<DescriptorLoaderRepository>, artifact_type: ArtifactType) -> Self {
        match artifact_type {
            ArtifactType::Application => Self::application(repository),
            ArtifactType::Domain => Self::domain(repository),
            ArtifactType::Plugin => Self::plugin(repository),
        }
    }

    /// Create a descriptor for the artifact at `artifact_folder`
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::DescriptorCreateFailed` when the manifest is
    /// absent, a declared loader is unknown, or a loader rejects its
    /// attributes; `ManifestParseFailed` when the manifest content is
    /// malformed.
    pub fn create(&self, artifact_folder: &Path) -> Result<ArtifactDescriptor> {
        self.create_with_properties(artifact_folder, BTreeMap::new())
    }

    /// Create a descriptor, attaching deploy-time property overrides
    pub fn create_with_properties(
        &self,
        artifact_folder: &Path,
        deployment_properties: BTreeMap<String, String>,
    ) -> Result<ArtifactDescriptor> {
        let folder_name = display_folder(artifact_folder);

        let manifest = match read_manifest(artifact_folder) {
            Ok(manifest) => manifest,
            Err(ArtificerError::ManifestNotFound { path }) => {
                return Err(descriptor_create_failed(
                    folder_name,
                    format!("artifact manifest not found at '{path}'"),
                ));
            }
            Err(e) => return Err(e),
        };

        let name = artifact_name(&manifest, artifact_folder)
            .ok_or_else(|| descriptor_create_failed(&folder_name, "artifact name cannot be determined"))?;

        let mut descriptor = self.configurer.new_descriptor(&name)?;
        if artifact_folder.is_dir() {
            descriptor.set_root_folder(artifact_folder);
        }

        self.resolve_bundle_descriptor(&manifest, &mut descriptor, artifact_folder, &folder_name)?;
        self.resolve_class_loader_configuration(
            &manifest,
            &mut descriptor,
            artifact_folder,
            &folder_name,
        )?;

        if let Some(min_version) = &manifest.min_mule_version {
            let version = parse_version(min_version)
                .map_err(|e| descriptor_create_failed(&folder_name, e.to_string()))?;
            descriptor.set_min_runtime_version(version);
        }
        if let Some(product) = manifest.required_product {
            descriptor.set_required_product(product);
        }
        if !deployment_properties.is_empty() {
            descriptor.set_deployment_properties(deployment_properties);
        }

        self.configurer
            .configure(&manifest, &mut descriptor, artifact_folder)?;

        Ok(descriptor)
    }

    fn resolve_bundle_descriptor(
        &self,
        manifest: &ArtifactManifest,
        descriptor: &mut ArtifactDescriptor,
        artifact_folder: &Path,
        folder_name: &str,
    ) -> Result<()> {
        let Some(loader_descriptor) = &manifest.bundle_descriptor_loader else {
            return Ok(());
        };

        let artifact_type = self.configurer.artifact_type();
        let loader = self
            .repository
            .bundle_descriptor_loader(&loader_descriptor.id, artifact_type)
            .map_err(|_| {
                descriptor_create_failed(
                    folder_name,
                    format!(
                        "the identifier '{}' for a bundle descriptor loader is not supported",
                        loader_descriptor.id
                    ),
                )
            })?;

        let bundle_descriptor = loader
            .load(artifact_folder, &loader_descriptor.attributes, artifact_type)
            .map_err(|e| descriptor_create_failed(folder_name, e.to_string()))?;
        descriptor.set_bundle_descriptor(bundle_descriptor);
        Ok(())
    }

    fn resolve_class_loader_configuration(
        &self,
        manifest: &ArtifactManifest,
        descriptor: &mut ArtifactDescriptor,
        artifact_folder: &Path,
        folder_name: &str,
    ) -> Result<()> {
        let Some(loader_descriptor) = &manifest.class_loader_model_loader_descriptor else {
            return Ok(());
        };

        let artifact_type = self.configurer.artifact_type();
        let loader = self
            .repository
            .class_loader_configuration_loader(&loader_descriptor.id, artifact_type)
            .map_err(|_| {
                descriptor_create_failed(
                    folder_name,
                    format!(
                        "the identifier '{}' for a classloader configuration loader is not supported",
                        loader_descriptor.id
                    ),
                )
            })?;

        let configuration = loader
            .load(artifact_folder, &loader_descriptor.attributes, artifact_type)
            .map_err(|e| descriptor_create_failed(folder_name, e.to_string()))?;
        descriptor.set_class_loader_configuration(configuration);
        Ok(())
    }
}

/// Descriptor name: the manifest's declared name, falling back to the
/// folder's file name
fn artifact_name(manifest: &ArtifactManifest, artifact_folder: &Path) -> Option<String> {
    manifest
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| {
            artifact_folder
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
}

/// Canonicalized folder path for error messages
fn display_folder(artifact_folder: &Path) -> String {
    dunce::canonicalize(artifact_folder)
        .unwrap_or_else(|_| PathBuf::from(artifact_folder))
        .display()
        .to_string()
}
