//! Plugin descriptor configuration

use std::path::Path;

use crate::artifact::{ArtifactDescriptor, ArtifactType};
use crate::error::Result;
use crate::factory::DescriptorConfigurer;
use crate::model::ArtifactManifest;

/// Populates plugin-specific descriptor fields
pub struct PluginDescriptorConfigurer;

impl DescriptorConfigurer for PluginDescriptorConfigurer {
    fn artifact_type(&self) -> ArtifactType {
        ArtifactType::Plugin
    }

    fn new_descriptor(&self, name: &str) -> Result<ArtifactDescriptor> {
        ArtifactDescriptor::plugin(name)
    }

    fn configure(
        &self,
        manifest: &ArtifactManifest,
        descriptor: &mut ArtifactDescriptor,
        _location: &Path,
    ) -> Result<()> {
        if let Some(attributes) = descriptor.plugin_attributes_mut() {
            if let Some(extension_model) = &manifest.extension_model_loader_descriptor {
                attributes.set_extension_model_descriptor(extension_model.clone());
            }
            if let Some(license) = &manifest.license {
                attributes.set_license(license.clone());
            }
        }
        Ok(())
    }
}
