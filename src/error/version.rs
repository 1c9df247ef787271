//! Version parsing errors

use super::ArtificerError;

/// Creates an invalid dependency version error
pub fn invalid_dependency_version(
    version: impl Into<String>,
    reason: impl Into<String>,
) -> ArtificerError {
    ArtificerError::InvalidDependencyVersion {
        version: version.into(),
        reason: reason.into(),
    }
}
