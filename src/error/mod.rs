//! Error types and handling for Artificer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Descriptor construction errors
//! - [`loader`]: Descriptor loader lookup and contract errors
//! - [`version`]: Version parsing errors
//! - [`validation`]: Validator policy errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

// Declare submodules
pub mod descriptor;
pub mod fs;
pub mod loader;
pub mod validation;
pub mod version;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use descriptor::{
    create_failed as descriptor_create_failed, manifest_not_found,
    manifest_parse_failed, missing_field as descriptor_field_missing,
};
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed};
#[allow(unused_imports)]
pub use loader::{
    invalid_attributes as invalid_loader_attributes, not_found as loader_not_found,
};
#[allow(unused_imports)]
pub use validation::{
    bundle_descriptor_missing, malformed_bundle_version, product_mismatch,
    runtime_version_too_old, unsupported_java_version,
};
#[allow(unused_imports)]
pub use version::invalid_dependency_version;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Artificer operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArtificerError {
    // Descriptor construction errors
    #[error("Failed to create descriptor for artifact at '{artifact}': {reason}")]
    #[diagnostic(
        code(artificer::descriptor::create_failed),
        help("Check the artifact manifest and the loader ids it declares")
    )]
    DescriptorCreateFailed { artifact: String, reason: String },

    #[error("Artifact manifest not found: {path}")]
    #[diagnostic(
        code(artificer::descriptor::manifest_not_found),
        help("Every artifact must carry META-INF/mule-artifact/mule-artifact.json")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse artifact manifest: {path}")]
    #[diagnostic(code(artificer::descriptor::manifest_parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Missing mandatory field '{field}' on {owner}")]
    #[diagnostic(code(artificer::descriptor::missing_field))]
    MissingDescriptorField { owner: String, field: String },

    // Loader errors
    #[error("No descriptor loader registered with id '{id}' for artifact type '{artifact_type}'")]
    #[diagnostic(
        code(artificer::loader::not_found),
        help("Register the loader on the repository before creating descriptors")
    )]
    LoaderNotFound { id: String, artifact_type: String },

    #[error("Invalid attributes for descriptor loader '{loader}': {reason}")]
    #[diagnostic(code(artificer::loader::invalid_attributes))]
    InvalidLoaderAttributes { loader: String, reason: String },

    // Version errors
    #[error("Unable to parse bundle version '{version}': {reason}")]
    #[diagnostic(code(artificer::version::invalid_dependency_version))]
    InvalidDependencyVersion { version: String, reason: String },

    // Validation policy errors
    #[error("Artifact '{artifact}' requires runtime version {required} or newer, but {running} is running")]
    #[diagnostic(code(artificer::validation::runtime_version_too_old))]
    RuntimeVersionTooOld {
        artifact: String,
        required: String,
        running: String,
    },

    #[error("Artifact '{artifact}' requires product {required}, but {running} is running")]
    #[diagnostic(code(artificer::validation::product_mismatch))]
    ProductMismatch {
        artifact: String,
        required: String,
        running: String,
    },

    #[error("Artifact '{artifact}' declares a malformed bundle version: {reason}")]
    #[diagnostic(code(artificer::validation::malformed_bundle_version))]
    MalformedBundleVersion { artifact: String, reason: String },

    #[error("Artifact '{artifact}' has no bundle descriptor")]
    #[diagnostic(
        code(artificer::validation::bundle_descriptor_missing),
        help("Declare a bundleDescriptorLoader section in the artifact manifest")
    )]
    BundleDescriptorMissing { artifact: String },

    #[error("Artifact '{artifact}' does not support Java {running} (supported: {supported})")]
    #[diagnostic(code(artificer::validation::unsupported_java_version))]
    UnsupportedJavaVersion {
        artifact: String,
        running: String,
        supported: String,
    },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(artificer::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(artificer::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ArtificerError {
    fn from(err: std::io::Error) -> Self {
        ArtificerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ArtificerError {
    fn from(err: serde_json::Error) -> Self {
        ArtificerError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ArtificerError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = ArtificerError::LoaderNotFound {
            id: "maven".to_string(),
            artifact_type: "plugin".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No descriptor loader registered with id 'maven' for artifact type 'plugin'"
        );
    }

    #[test]
    fn test_error_code() {
        let err = ArtificerError::LoaderNotFound {
            id: "maven".to_string(),
            artifact_type: "application".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("artificer::loader::not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArtificerError = io_err.into();
        assert!(matches!(err, ArtificerError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "not json at all";
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str(json_str);
        let json_err = parse_result.unwrap_err();
        let err: ArtificerError = json_err.into();
        assert!(matches!(err, ArtificerError::ManifestParseFailed { .. }));
    }

    // Descriptor error tests
    #[test]
    fn test_descriptor_create_failed() {
        let err = descriptor_create_failed("/apps/billing", "missing manifest");
        assert!(matches!(err, ArtificerError::DescriptorCreateFailed { .. }));
        assert!(err.to_string().contains("/apps/billing"));
        assert!(err.to_string().contains("missing manifest"));
    }

    #[test]
    fn test_manifest_not_found() {
        let err = manifest_not_found("/apps/billing/META-INF/mule-artifact/mule-artifact.json");
        assert!(matches!(err, ArtificerError::ManifestNotFound { .. }));
        assert!(err.to_string().contains("Artifact manifest not found"));
    }

    #[test]
    fn test_descriptor_field_missing() {
        let err = descriptor_field_missing("bundle descriptor", "version");
        assert!(matches!(err, ArtificerError::MissingDescriptorField { .. }));
        assert_eq!(
            err.to_string(),
            "Missing mandatory field 'version' on bundle descriptor"
        );
    }

    // Loader error tests
    #[test]
    fn test_loader_not_found() {
        let err = loader_not_found("unknown-id", "domain");
        assert!(matches!(err, ArtificerError::LoaderNotFound { .. }));
        assert!(err.to_string().contains("unknown-id"));
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_invalid_loader_attributes() {
        let err = invalid_loader_attributes("maven", "attribute 'artifactId' is missing");
        assert!(matches!(err, ArtificerError::InvalidLoaderAttributes { .. }));
        assert!(err.to_string().contains("maven"));
    }

    // Version error tests
    test_error_contains!(
        test_invalid_dependency_version,
        invalid_dependency_version("1.x", "unexpected character 'x'"),
        "Unable to parse bundle version",
        "1.x",
    );

    // Validation error tests
    test_error_contains!(
        test_runtime_version_too_old,
        runtime_version_too_old("billing", "4.6.0", "4.4.0"),
        "requires runtime version 4.6.0",
        "4.4.0 is running",
    );

    test_error_contains!(
        test_product_mismatch,
        product_mismatch("billing", "MULE_EE", "MULE"),
        "requires product MULE_EE",
    );

    test_error_contains!(
        test_bundle_descriptor_missing,
        bundle_descriptor_missing("billing"),
        "has no bundle descriptor",
    );

    test_error_contains!(
        test_unsupported_java_version,
        unsupported_java_version("billing", "21", "11, 17"),
        "does not support Java 21",
        "11, 17",
    );

    // File system error tests
    #[test]
    fn test_file_read_failed() {
        let err = file_read_failed("/tmp/app/manifest.json", "permission denied");
        assert!(matches!(err, ArtificerError::FileReadFailed { .. }));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_io_error() {
        let err = io_error("broken pipe");
        assert!(matches!(err, ArtificerError::IoError { .. }));
        assert!(err.to_string().contains("IO error"));
    }
}
