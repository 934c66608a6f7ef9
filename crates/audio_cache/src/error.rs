//! Cache storage errors

use thiserror::Error;

/// Errors that can occur while reading or writing cached audio
#[derive(Debug, Error)]
pub enum CacheError {
    /// Creating the cache directory failed
    #[error("Failed to create cache directory '{path}': {source}")]
    DirectoryCreation {
        /// Directory that could not be created
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing an artifact failed
    #[error("Failed to write artifact '{path}': {source}")]
    Write {
        /// File that could not be written
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Listing the cache directory during a sweep failed
    #[error("Failed to scan cache directory '{path}': {source}")]
    Scan {
        /// Directory that could not be scanned
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_the_file() {
        let err = CacheError::Write {
            path: "/audio/abc.wav".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/audio/abc.wav"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn directory_error_names_the_directory() {
        let err = CacheError::DirectoryCreation {
            path: "/audio".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.to_string().contains("/audio"));
    }
}
