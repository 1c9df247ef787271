//! Domain descriptor configuration

use std::path::Path;
use std::sync::Arc;

use crate::artifact::descriptor::DEFAULT_DOMAIN_CONFIG_RESOURCE;
use crate::artifact::{ArtifactDescriptor, ArtifactType};
use crate::error::Result;
use crate::factory::application::configure_deployable;
use crate::factory::{DescriptorConfigurer, DescriptorFactory};
use crate::loader::DescriptorLoaderRepository;
use crate::model::ArtifactManifest;

/// Populates domain-specific descriptor fields
pub struct DomainDescriptorConfigurer {
    plugin_factory: DescriptorFactory,
}

impl DomainDescriptorConfigurer {
    pub fn new(repository: Arc<DescriptorLoaderRepository>) -> Self {
        DomainDescriptorConfigurer {
            plugin_factory: DescriptorFactory::plugin(repository),
        }
    }
}

impl DescriptorConfigurer for DomainDescriptorConfigurer {
    fn artifact_type(&self) -> ArtifactType {
        ArtifactType::Domain
    }

    fn new_descriptor(&self, name: &str) -> Result<ArtifactDescriptor> {
        ArtifactDescriptor::domain(name)
    }

    fn configure(
        &self,
        manifest: &ArtifactManifest,
        descriptor: &mut ArtifactDescriptor,
        _location: &Path,
    ) -> Result<()> {
        configure_deployable(manifest, descriptor, &self.plugin_factory)?;

        // A domain without declared configs still has its canonical one
        if let Some(attributes) = descriptor.deployable_attributes_mut() {
            if attributes.config_resources().is_empty() {
                attributes.set_config_resources([DEFAULT_DOMAIN_CONFIG_RESOURCE.to_string()]);
            }
        }
        Ok(())
    }
}
