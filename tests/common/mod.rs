//! Common test utilities for Artificer integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test artifact folder with a manifest
#[allow(dead_code)]
pub struct TestArtifact {
    /// Temporary directory keeping the artifact alive
    pub temp: TempDir,
    /// Path to the artifact root
    pub path: PathBuf,
}

impl TestArtifact {
    /// Create an artifact folder containing the given manifest JSON
    #[allow(dead_code)]
    pub fn with_manifest(name: &str, manifest: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join(name);
        let manifest_dir = path.join("META-INF/mule-artifact");
        std::fs::create_dir_all(&manifest_dir).expect("Failed to create manifest directory");
        std::fs::write(manifest_dir.join("mule-artifact.json"), manifest)
            .expect("Failed to write manifest");
        Self { temp, path }
    }

    /// Create an artifact folder with a complete well-formed manifest
    #[allow(dead_code)]
    pub fn well_formed(name: &str) -> Self {
        Self::with_manifest(name, &well_formed_manifest(name))
    }

    /// Write an extra file inside the artifact folder
    #[allow(dead_code)]
    pub fn write_file(&self, relative: &str, content: &str) {
        let file_path = self.path.join(relative);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

/// A manifest declaring maven loaders, coordinates and deployment metadata
#[allow(dead_code)]
pub fn well_formed_manifest(name: &str) -> String {
    format!(
        r#"{{
            "name": "{name}",
            "minMuleVersion": "4.4.0",
            "requiredProduct": "MULE",
            "configs": ["{name}-flows.xml"],
            "supportedJavaVersions": ["11", "17"],
            "bundleDescriptorLoader": {{
                "id": "maven",
                "attributes": {{
                    "groupId": "org.example",
                    "artifactId": "{name}",
                    "version": "1.2.0"
                }}
            }},
            "classLoaderModelLoaderDescriptor": {{
                "id": "maven-package",
                "attributes": {{
                    "exportedPackages": ["org.example.{name}.api"],
                    "localPackages": ["org.example.{name}.internal"]
                }}
            }}
        }}"#
    )
}

/// Command builder for the real artificer binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn artificer_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("artificer").unwrap()
}
