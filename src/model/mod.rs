//! Raw artifact manifest model
//!
//! The manifest is a JSON file at `META-INF/mule-artifact/mule-artifact.json`
//! inside the artifact root. This module owns its deserialized shape; the
//! factory consumes the accessors, the loaders consume the free-form
//! attribute maps. Field names stay camelCase on the wire.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::artifact::{LicenseModel, Product};
use crate::error::{Result, file_read_failed, manifest_not_found, manifest_parse_failed};

/// Folder inside the artifact root holding the manifest
pub const ARTIFACT_MANIFEST_FOLDER: &str = "META-INF/mule-artifact";

/// Manifest file name
pub const ARTIFACT_MANIFEST_FILE: &str = "mule-artifact.json";

/// Free-form attribute map handed to a descriptor loader
pub type LoaderAttributes = serde_json::Map<String, serde_json::Value>;

/// A loader selection in the manifest: a stable id plus loader-specific
/// attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderDescriptor {
    pub id: String,
    pub attributes: LoaderAttributes,
}

impl LoaderDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        LoaderDescriptor {
            id: id.into(),
            attributes: LoaderAttributes::new(),
        }
    }
}

/// The deserialized artifact manifest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactManifest {
    pub name: Option<String>,
    pub min_mule_version: Option<String>,
    pub required_product: Option<Product>,
    pub class_loader_model_loader_descriptor: Option<LoaderDescriptor>,
    pub bundle_descriptor_loader: Option<LoaderDescriptor>,
    pub configs: Vec<String>,
    pub redeployment_enabled: Option<bool>,
    pub log_config_file: Option<String>,
    pub supported_java_versions: Vec<String>,
    pub extension_model_loader_descriptor: Option<LoaderDescriptor>,
    pub license: Option<LicenseModel>,
}

impl ArtifactManifest {
    /// Parse a manifest from its JSON text
    ///
    /// # Errors
    ///
    /// Returns `ArtificerError::ManifestParseFailed` naming the offending
    /// source on malformed content.
    pub fn from_json(source: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(source)
            .map_err(|e| manifest_parse_failed(origin.display().to_string(), e.to_string()))
    }
}

/// Path of the manifest inside an artifact folder
pub fn manifest_path(artifact_folder: &Path) -> PathBuf {
    artifact_folder
        .join(ARTIFACT_MANIFEST_FOLDER)
        .join(ARTIFACT_MANIFEST_FILE)
}

/// Locate and parse the manifest of an artifact folder
///
/// # Errors
///
/// Returns `ArtificerError::ManifestNotFound` when the manifest file is
/// absent, `FileReadFailed` when it cannot be read, and
/// `ManifestParseFailed` when its content is malformed.
pub fn read_manifest(artifact_folder: &Path) -> Result<ArtifactManifest> {
    let path = manifest_path(artifact_folder);
    if !path.is_file() {
        return Err(manifest_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

    ArtifactManifest::from_json(&content, &path)
}
