//! Storage-specific error type wrapping filesystem and CSV errors.

use std::path::PathBuf;

use generik_domain::error::GenerikError;

/// Errors originating from the filesystem storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog could not be encoded or its header could not be read.
    #[error("CSV error")]
    Csv(#[from] csv::Error),

    /// A site path tried to leave the web root.
    #[error("site path {0:?} is not relative to the web root")]
    OutsideRoot(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StorageError> for GenerikError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_path_in_io_error() {
        let err = StorageError::io(
            "/config/services.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on /config/services.csv");
    }

    #[test]
    fn should_convert_into_storage_error() {
        let err: GenerikError = StorageError::OutsideRoot("../etc".to_string()).into();
        assert!(matches!(err, GenerikError::Storage(_)));
    }
}
