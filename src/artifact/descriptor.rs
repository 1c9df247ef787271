//! Artifact descriptor entity
//!
//! One descriptor per deployable unit. Common attributes live on
//! [`ArtifactDescriptor`]; kind-specific attributes are carried in the
//! [`ArtifactKind`] payload (applications and domains share the deployable
//! payload, plugins carry extension/license metadata).

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use semver::Version;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::artifact::ArtifactType;
use crate::artifact::bundle::BundleDescriptor;
use crate::artifact::class_loader::ClassLoaderConfiguration;
use crate::error::{Result, descriptor_field_missing};
use crate::model::LoaderDescriptor;

/// Config resource a domain gets when its manifest declares none
pub const DEFAULT_DOMAIN_CONFIG_RESOURCE: &str = "mule-domain-config.xml";

/// Product line an artifact may require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Product {
    Mule,
    MuleEe,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Mule => "MULE",
            Product::MuleEe => "MULE_EE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "MULE" => Some(Product::Mule),
            "MULE_EE" | "MULE-EE" => Some(Product::MuleEe),
            _ => None,
        }
    }

    /// Whether an artifact requiring `self` can run on `running`
    ///
    /// The EE product includes the base one, so base-product artifacts run
    /// on either; EE artifacts require EE.
    pub fn runs_on(&self, running: Product) -> bool {
        match self {
            Product::Mule => true,
            Product::MuleEe => running == Product::MuleEe,
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// License metadata a plugin may carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseModel {
    pub provider: Option<String>,
    pub required_entitlement: Option<String>,
    pub allows_evaluation: bool,
}

/// Attributes shared by deployable units (applications and domains)
#[derive(Debug, Clone, PartialEq)]
pub struct DeployableAttributes {
    redeployment_enabled: bool,
    config_resources: BTreeSet<String>,
    plugins: Vec<ArtifactDescriptor>,
    log_config_file: Option<PathBuf>,
    supported_java_versions: BTreeSet<String>,
    data_folder_name: String,
}

impl DeployableAttributes {
    /// Create the attributes for a named deployable
    ///
    /// The data folder name is unique per descriptor instance so native
    /// libraries staged for consecutive (re)deployments never collide.
    pub fn new(artifact_name: &str) -> Self {
        DeployableAttributes {
            redeployment_enabled: true,
            config_resources: BTreeSet::new(),
            plugins: Vec::new(),
            log_config_file: None,
            supported_java_versions: BTreeSet::new(),
            data_folder_name: format!("{artifact_name}-{}", Uuid::new_v4()),
        }
    }

    pub fn redeployment_enabled(&self) -> bool {
        self.redeployment_enabled
    }

    pub fn set_redeployment_enabled(&mut self, enabled: bool) {
        self.redeployment_enabled = enabled;
    }

    pub fn config_resources(&self) -> &BTreeSet<String> {
        &self.config_resources
    }

    /// Replace the config resource set, normalizing path separators to `/`
    pub fn set_config_resources(&mut self, resources: impl IntoIterator<Item = String>) {
        self.config_resources = resources
            .into_iter()
            .map(|resource| resource.replace('\\', "/"))
            .collect();
    }

    /// Plugin descriptors this deployable depends on, ordered by name
    pub fn plugins(&self) -> &[ArtifactDescriptor] {
        &self.plugins
    }

    pub fn set_plugins(&mut self, mut plugins: Vec<ArtifactDescriptor>) {
        // Name order keeps deployment deterministic
        plugins.sort_by(|a, b| a.name().cmp(b.name()));
        self.plugins = plugins;
    }

    pub fn log_config_file(&self) -> Option<&Path> {
        self.log_config_file.as_deref()
    }

    pub fn set_log_config_file(&mut self, file: impl Into<PathBuf>) {
        self.log_config_file = Some(file.into());
    }

    pub fn supported_java_versions(&self) -> &BTreeSet<String> {
        &self.supported_java_versions
    }

    pub fn set_supported_java_versions(&mut self, versions: impl IntoIterator<Item = String>) {
        self.supported_java_versions = versions.into_iter().collect();
    }

    /// Unique folder name for staging this deployable's native libraries
    pub fn data_folder_name(&self) -> &str {
        &self.data_folder_name
    }
}

/// Attributes specific to plugins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginAttributes {
    extension_model_descriptor: Option<LoaderDescriptor>,
    license: Option<LicenseModel>,
}

impl PluginAttributes {
    pub fn extension_model_descriptor(&self) -> Option<&LoaderDescriptor> {
        self.extension_model_descriptor.as_ref()
    }

    pub fn set_extension_model_descriptor(&mut self, descriptor: LoaderDescriptor) {
        self.extension_model_descriptor = Some(descriptor);
    }

    pub fn license(&self) -> Option<&LicenseModel> {
        self.license.as_ref()
    }

    pub fn set_license(&mut self, license: LicenseModel) {
        self.license = Some(license);
    }
}

/// Kind-specific payload of a descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactKind {
    Application(DeployableAttributes),
    Domain(DeployableAttributes),
    Plugin(PluginAttributes),
}

impl ArtifactKind {
    pub fn artifact_type(&self) -> ArtifactType {
        match self {
            ArtifactKind::Application(_) => ArtifactType::Application,
            ArtifactKind::Domain(_) => ArtifactType::Domain,
            ArtifactKind::Plugin(_) => ArtifactType::Plugin,
        }
    }
}

/// The in-memory description of one deployable unit
///
/// Created by a factory in a single construction pass; the setters exist for
/// that pass and are not meant to be called afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactDescriptor {
    name: String,
    root_folder: Option<PathBuf>,
    class_loader_configuration: ClassLoaderConfiguration,
    bundle_descriptor: Option<BundleDescriptor>,
    min_runtime_version: Option<Version>,
    required_product: Option<Product>,
    deployment_properties: BTreeMap<String, String>,
    kind: ArtifactKind,
}

impl ArtifactDescriptor {
    /// Create a descriptor with the given mandatory name and kind
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::MissingDescriptorField` when the name is
    /// empty.
    pub fn new(name: impl Into<String>, kind: ArtifactKind) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(descriptor_field_missing("artifact descriptor", "name"));
        }
        Ok(ArtifactDescriptor {
            name,
            root_folder: None,
            class_loader_configuration: ClassLoaderConfiguration::default(),
            bundle_descriptor: None,
            min_runtime_version: None,
            required_product: None,
            deployment_properties: BTreeMap::new(),
            kind,
        })
    }

    /// Create an application descriptor
    pub fn application(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let attributes = DeployableAttributes::new(&name);
        Self::new(name, ArtifactKind::Application(attributes))
    }

    /// Create a domain descriptor
    pub fn domain(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let attributes = DeployableAttributes::new(&name);
        Self::new(name, ArtifactKind::Domain(attributes))
    }

    /// Create a plugin descriptor
    pub fn plugin(name: impl Into<String>) -> Result<Self> {
        Self::new(name, ArtifactKind::Plugin(PluginAttributes::default()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artifact_type(&self) -> ArtifactType {
        self.kind.artifact_type()
    }

    pub fn kind(&self) -> &ArtifactKind {
        &self.kind
    }

    pub fn root_folder(&self) -> Option<&Path> {
        self.root_folder.as_deref()
    }

    pub fn set_root_folder(&mut self, folder: impl Into<PathBuf>) {
        self.root_folder = Some(folder.into());
    }

    pub fn class_loader_configuration(&self) -> &ClassLoaderConfiguration {
        &self.class_loader_configuration
    }

    pub fn set_class_loader_configuration(&mut self, configuration: ClassLoaderConfiguration) {
        self.class_loader_configuration = configuration;
    }

    pub fn bundle_descriptor(&self) -> Option<&BundleDescriptor> {
        self.bundle_descriptor.as_ref()
    }

    pub fn set_bundle_descriptor(&mut self, descriptor: BundleDescriptor) {
        self.bundle_descriptor = Some(descriptor);
    }

    pub fn min_runtime_version(&self) -> Option<&Version> {
        self.min_runtime_version.as_ref()
    }

    pub fn set_min_runtime_version(&mut self, version: Version) {
        self.min_runtime_version = Some(version);
    }

    pub fn required_product(&self) -> Option<Product> {
        self.required_product
    }

    pub fn set_required_product(&mut self, product: Product) {
        self.required_product = Some(product);
    }

    /// Deploy-time key/value overrides
    pub fn deployment_properties(&self) -> &BTreeMap<String, String> {
        &self.deployment_properties
    }

    pub fn set_deployment_properties(&mut self, properties: BTreeMap<String, String>) {
        self.deployment_properties = properties;
    }

    /// Deployable payload, when this is an application or domain
    pub fn deployable_attributes(&self) -> Option<&DeployableAttributes> {
        match &self.kind {
            ArtifactKind::Application(attributes) | ArtifactKind::Domain(attributes) => {
                Some(attributes)
            }
            ArtifactKind::Plugin(_) => None,
        }
    }

    pub fn deployable_attributes_mut(&mut self) -> Option<&mut DeployableAttributes> {
        match &mut self.kind {
            ArtifactKind::Application(attributes) | ArtifactKind::Domain(attributes) => {
                Some(attributes)
            }
            ArtifactKind::Plugin(_) => None,
        }
    }

    /// Plugin payload, when this is a plugin
    pub fn plugin_attributes(&self) -> Option<&PluginAttributes> {
        match &self.kind {
            ArtifactKind::Plugin(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn plugin_attributes_mut(&mut self) -> Option<&mut PluginAttributes> {
        match &mut self.kind {
            ArtifactKind::Plugin(attributes) => Some(attributes),
            _ => None,
        }
    }
}
