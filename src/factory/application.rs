//! Application descriptor configuration

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::artifact::{ArtifactDescriptor, ArtifactType};
use crate::error::Result;
use crate::factory::{DescriptorConfigurer, DescriptorFactory};
use crate::loader::DescriptorLoaderRepository;
use crate::model::ArtifactManifest;

/// Populates application-specific descriptor fields
pub struct ApplicationDescriptorConfigurer {
    plugin_factory: DescriptorFactory,
}

impl ApplicationDescriptorConfigurer {
    pub fn new(repository: Arc<DescriptorLoaderRepository>) -> Self {
        ApplicationDescriptorConfigurer {
            plugin_factory: DescriptorFactory::plugin(repository),
        }
    }
}

impl DescriptorConfigurer for ApplicationDescriptorConfigurer {
    fn artifact_type(&self) -> ArtifactType {
        ArtifactType::Application
    }

    fn new_descriptor(&self, name: &str) -> Result<ArtifactDescriptor> {
        ArtifactDescriptor::application(name)
    }

    fn configure(
        &self,
        manifest: &ArtifactManifest,
        descriptor: &mut ArtifactDescriptor,
        _location: &Path,
    ) -> Result<()> {
        configure_deployable(manifest, descriptor, &self.plugin_factory)
    }
}

/// Shared deployable configuration for applications and domains: manifest
/// fields plus the plugin set resolved from plugin-classified classloader
/// dependencies
pub(crate) fn configure_deployable(
    manifest: &ArtifactManifest,
    descriptor: &mut ArtifactDescriptor,
    plugin_factory: &DescriptorFactory,
) -> Result<()> {
    let plugin_folders: Vec<PathBuf> = descriptor
        .class_loader_configuration()
        .dependencies()
        .iter()
        .filter(|dependency| dependency.descriptor().is_plugin())
        .filter_map(|dependency| dependency.bundle_location().map(Path::to_path_buf))
        .collect();

    let mut plugins = Vec::with_capacity(plugin_folders.len());
    for folder in plugin_folders {
        plugins.push(plugin_factory.create(&folder)?);
    }

    let Some(attributes) = descriptor.deployable_attributes_mut() else {
        return Ok(());
    };

    if let Some(enabled) = manifest.redeployment_enabled {
        attributes.set_redeployment_enabled(enabled);
    }
    if !manifest.configs.is_empty() {
        attributes.set_config_resources(manifest.configs.iter().cloned());
    }
    if let Some(log_config_file) = &manifest.log_config_file {
        attributes.set_log_config_file(log_config_file);
    }
    if !manifest.supported_java_versions.is_empty() {
        attributes.set_supported_java_versions(manifest.supported_java_versions.iter().cloned());
    }
    attributes.set_plugins(plugins);

    Ok(())
}
