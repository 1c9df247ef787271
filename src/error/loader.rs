//! Descriptor loader lookup and contract errors

use super::ArtificerError;

use crate::artifact::ArtifactType;

/// Creates a loader not found error
pub fn not_found(id: impl Into<String>, artifact_type: impl Into<String>) -> ArtificerError {
    ArtificerError::LoaderNotFound {
        id: id.into(),
        artifact_type: artifact_type.into(),
    }
}

/// Creates a loader not found error for a typed lookup
pub fn not_found_for(id: impl Into<String>, artifact_type: ArtifactType) -> ArtificerError {
    not_found(id, artifact_type.as_str())
}

/// Creates an invalid loader attributes error
pub fn invalid_attributes(
    loader: impl Into<String>,
    reason: impl Into<String>,
) -> ArtificerError {
    ArtificerError::InvalidLoaderAttributes {
        loader: loader.into(),
        reason: reason.into(),
    }
}
