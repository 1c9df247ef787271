//! Maven-convention descriptor loaders
//!
//! The `maven` bundle descriptor loader reads the artifact's coordinates
//! from the manifest attributes. The `maven-package` classloader loader
//! reads the isolation contract (exported/local partitions, privileged
//! exports, dependency list) from the attributes and contributes the
//! artifact's `classes/` folder and `lib/*.jar` files as locations.

use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::artifact::{
    ArtifactType, BundleDependency, BundleDescriptor, BundleScope, ClassLoaderConfiguration,
};
use crate::error::{Result, invalid_loader_attributes};
use crate::loader::{BundleDescriptorLoader, ClassLoaderConfigurationLoader};
use crate::model::LoaderAttributes;

/// Id the bundle descriptor loader registers under
pub const MAVEN_LOADER_ID: &str = "maven";

/// Id the classloader configuration loader registers under
pub const MAVEN_PACKAGE_LOADER_ID: &str = "maven-package";

/// Folder holding an exploded artifact's classes
const CLASSES_FOLDER: &str = "classes";

/// Folder holding an exploded artifact's bundled jars
const LIB_FOLDER: &str = "lib";

/// Resolves bundle coordinates from `groupId`/`artifactId`/`version`
/// attributes
pub struct MavenBundleDescriptorLoader;

impl BundleDescriptorLoader for MavenBundleDescriptorLoader {
    fn id(&self) -> &str {
        MAVEN_LOADER_ID
    }

    fn supports_artifact_type(&self, _artifact_type: ArtifactType) -> bool {
        true
    }

    fn load(
        &self,
        _location: &Path,
        attributes: &LoaderAttributes,
        _artifact_type: ArtifactType,
    ) -> Result<BundleDescriptor> {
        descriptor_from_attributes(MAVEN_LOADER_ID, attributes)
    }
}

/// Resolves the classloader isolation contract from the manifest attributes
pub struct MavenPackageClassLoaderConfigurationLoader;

impl ClassLoaderConfigurationLoader for MavenPackageClassLoaderConfigurationLoader {
    fn id(&self) -> &str {
        MAVEN_PACKAGE_LOADER_ID
    }

    fn supports_artifact_type(&self, _artifact_type: ArtifactType) -> bool {
        true
    }

    fn load(
        &self,
        location: &Path,
        attributes: &LoaderAttributes,
        _artifact_type: ArtifactType,
    ) -> Result<ClassLoaderConfiguration> {
        let mut builder = ClassLoaderConfiguration::builder();

        for local_location in artifact_locations(location) {
            builder = builder.containing(local_location);
        }

        builder = builder
            .exporting_packages(string_list(attributes, "exportedPackages")?)
            .exporting_resources(string_list(attributes, "exportedResources")?)
            .with_local_packages(string_list(attributes, "localPackages")?)
            .with_local_resources(string_list(attributes, "localResources")?)
            .exporting_privileged_packages(
                string_list(attributes, "privilegedExportedPackages")?,
                string_list(attributes, "privilegedArtifactIds")?,
            )
            .include_test_dependencies(bool_attribute(attributes, "includeTestDependencies")?);

        if let Some(value) = attributes.get("dependencies") {
            builder = builder.depending_on(dependency_list(value)?);
        }

        Ok(builder.build())
    }
}

/// Locations an exploded artifact contributes: its `classes/` folder and
/// every jar directly under `lib/`
fn artifact_locations(location: &Path) -> Vec<PathBuf> {
    let mut locations = Vec::new();

    let classes = location.join(CLASSES_FOLDER);
    if classes.is_dir() {
        locations.push(classes);
    }

    let lib = location.join(LIB_FOLDER);
    if lib.is_dir() {
        let mut jars: Vec<PathBuf> = WalkDir::new(&lib)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|extension| extension == "jar")
            })
            .map(|entry| entry.path().to_path_buf())
            .collect();
        // Sort for deterministic classpath order
        jars.sort();
        locations.extend(jars);
    }

    locations
}

fn descriptor_from_attributes(
    loader: &str,
    attributes: &LoaderAttributes,
) -> Result<BundleDescriptor> {
    let mut builder = BundleDescriptor::builder()
        .group_id(string_attribute(loader, attributes, "groupId")?)
        .artifact_id(string_attribute(loader, attributes, "artifactId")?)
        .version(string_attribute(loader, attributes, "version")?);

    if let Some(base_version) = optional_string(loader, attributes, "baseVersion")? {
        builder = builder.base_version(base_version);
    }
    if let Some(classifier) = optional_string(loader, attributes, "classifier")? {
        builder = builder.classifier(classifier);
    }
    if let Some(bundle_type) = optional_string(loader, attributes, "type")? {
        builder = builder.bundle_type(bundle_type);
    }

    builder
        .build()
        .map_err(|e| invalid_loader_attributes(loader, e.to_string()))
}

fn string_attribute(loader: &str, attributes: &LoaderAttributes, key: &str) -> Result<String> {
    optional_string(loader, attributes, key)?.ok_or_else(|| {
        invalid_loader_attributes(loader, format!("attribute '{key}' is missing"))
    })
}

fn optional_string(
    loader: &str,
    attributes: &LoaderAttributes,
    key: &str,
) -> Result<Option<String>> {
    match attributes.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid_loader_attributes(
            loader,
            format!("attribute '{key}' must be a string"),
        )),
    }
}

fn string_list(attributes: &LoaderAttributes, key: &str) -> Result<Vec<String>> {
    match attributes.get(key) {
        None => Ok(Vec::new()),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| match value {
                Value::String(value) => Ok(value.clone()),
                _ => Err(invalid_loader_attributes(
                    MAVEN_PACKAGE_LOADER_ID,
                    format!("attribute '{key}' must be a list of strings"),
                )),
            })
            .collect(),
        Some(_) => Err(invalid_loader_attributes(
            MAVEN_PACKAGE_LOADER_ID,
            format!("attribute '{key}' must be a list of strings"),
        )),
    }
}

fn bool_attribute(attributes: &LoaderAttributes, key: &str) -> Result<bool> {
    match attributes.get(key) {
        None => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(Value::String(value)) => Ok(value == "true"),
        Some(_) => Err(invalid_loader_attributes(
            MAVEN_PACKAGE_LOADER_ID,
            format!("attribute '{key}' must be a boolean"),
        )),
    }
}

fn dependency_list(value: &Value) -> Result<Vec<BundleDependency>> {
    let Value::Array(entries) = value else {
        return Err(invalid_loader_attributes(
            MAVEN_PACKAGE_LOADER_ID,
            "attribute 'dependencies' must be a list",
        ));
    };
    entries.iter().map(dependency_entry).collect()
}

fn dependency_entry(value: &Value) -> Result<BundleDependency> {
    let Value::Object(entry) = value else {
        return Err(invalid_loader_attributes(
            MAVEN_PACKAGE_LOADER_ID,
            "dependency entries must be objects",
        ));
    };

    let descriptor = descriptor_from_attributes(MAVEN_PACKAGE_LOADER_ID, entry)?;
    let mut builder = BundleDependency::builder().descriptor(descriptor);

    if let Some(scope) = optional_string(MAVEN_PACKAGE_LOADER_ID, entry, "scope")? {
        let scope = BundleScope::parse(&scope).ok_or_else(|| {
            invalid_loader_attributes(
                MAVEN_PACKAGE_LOADER_ID,
                format!("unknown dependency scope '{scope}'"),
            )
        })?;
        builder = builder.scope(scope);
    }

    if let Some(location) = optional_string(MAVEN_PACKAGE_LOADER_ID, entry, "location")? {
        builder = builder.bundle_location(location);
    }

    builder = builder
        .packages(string_list(entry, "packages")?)
        .resources(string_list(entry, "resources")?);

    if let Some(additional) = entry.get("additionalDependencies") {
        builder = builder.additional_dependencies(dependency_list(additional)?);
    }
    if let Some(transitive) = entry.get("transitiveDependencies") {
        builder = builder.transitive_dependencies(dependency_list(transitive)?);
    }

    builder
        .build()
        .map_err(|e| invalid_loader_attributes(MAVEN_PACKAGE_LOADER_ID, e.to_string()))
}
