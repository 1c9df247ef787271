//! Validator policy errors

use super::ArtificerError;

/// Creates a runtime version too old error
pub fn runtime_version_too_old(
    artifact: impl Into<String>,
    required: impl Into<String>,
    running: impl Into<String>,
) -> ArtificerError {
    ArtificerError::RuntimeVersionTooOld {
        artifact: artifact.into(),
        required: required.into(),
        running: running.into(),
    }
}

/// Creates a product mismatch error
pub fn product_mismatch(
    artifact: impl Into<String>,
    required: impl Into<String>,
    running: impl Into<String>,
) -> ArtificerError {
    ArtificerError::ProductMismatch {
        artifact: artifact.into(),
        required: required.into(),
        running: running.into(),
    }
}

/// Creates a malformed bundle version error
pub fn malformed_bundle_version(
    artifact: impl Into<String>,
    reason: impl Into<String>,
) -> ArtificerError {
    ArtificerError::MalformedBundleVersion {
        artifact: artifact.into(),
        reason: reason.into(),
    }
}

/// Creates a bundle descriptor missing error
pub fn bundle_descriptor_missing(artifact: impl Into<String>) -> ArtificerError {
    ArtificerError::BundleDescriptorMissing {
        artifact: artifact.into(),
    }
}

/// Creates an unsupported Java version error
pub fn unsupported_java_version(
    artifact: impl Into<String>,
    running: impl Into<String>,
    supported: impl Into<String>,
) -> ArtificerError {
    ArtificerError::UnsupportedJavaVersion {
        artifact: artifact.into(),
        running: running.into(),
        supported: supported.into(),
    }
}
