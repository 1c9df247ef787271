//! File system errors

use super::ArtificerError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ArtificerError {
    ArtificerError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ArtificerError {
    ArtificerError::IoError {
        message: message.into(),
    }
}
