//! Storage error types

use std::path::PathBuf;
use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while reading or writing stored state
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored JSON could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// A key that cannot name a file
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A lock guarding in-memory state was poisoned
    #[error("Storage lock poisoned")]
    Lock,
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the stored data itself is unreadable, as opposed to the medium
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            StorageError::Serialization(_) | StorageError::UnsupportedVersion { .. }
        )
    }
}

/// Translates storage failures into port errors
///
/// - `Serialization` and `UnsupportedVersion` -> `PortError::Serialization`
/// - everything else -> `PortError::Storage`
impl From<StorageError> for PortError {
    fn from(error: StorageError) -> Self {
        if error.is_corrupt() {
            PortError::serialization(error.to_string())
        } else {
            PortError::storage("Claims storage failed", error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_maps_to_serialization() {
        let error = StorageError::UnsupportedVersion { found: 3, expected: 0 };
        assert!(error.is_corrupt());
        assert!(matches!(PortError::from(error), PortError::Serialization { .. }));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let error = StorageError::io(
            "/nowhere/claims.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!error.is_corrupt());
        let port: PortError = error.into();
        assert!(matches!(port, PortError::Storage { source: Some(_), .. }));
    }
}
