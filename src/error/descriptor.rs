//! Descriptor construction errors

use super::ArtificerError;

/// Creates a descriptor create failed error
pub fn create_failed(artifact: impl Into<String>, reason: impl Into<String>) -> ArtificerError {
    ArtificerError::DescriptorCreateFailed {
        artifact: artifact.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest not found error
pub fn manifest_not_found(path: impl Into<String>) -> ArtificerError {
    ArtificerError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn manifest_parse_failed(
    path: impl Into<String>,
    reason: impl Into<String>,
) -> ArtificerError {
    ArtificerError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing mandatory field error
pub fn missing_field(owner: impl Into<String>, field: impl Into<String>) -> ArtificerError {
    ArtificerError::MissingDescriptorField {
        owner: owner.into(),
        field: field.into(),
    }
}
