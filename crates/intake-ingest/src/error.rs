//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// File-level errors. Any of these aborts an upload before rows are processed.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file exceeds the configured size ceiling.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Decoding and Parsing Errors ===
    /// The configured encoding label is not recognized.
    #[error("unknown text encoding '{label}'")]
    UnknownEncoding { label: String },

    /// The tokenizer failed on the decoded text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// No record within the search window matched the expected header.
    #[error("header row not found in the first {searched} rows of {path}")]
    HeaderNotFound { path: PathBuf, searched: usize },

    // === Output Errors ===
    /// The failure log could not be written.
    #[error("failed to write failure log {path}: {message}")]
    FailureLogWrite { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileUnreadable {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileTooLarge {
            path: PathBuf::from("/data/big.csv"),
            size: 200,
            max_size: 100,
        };
        assert_eq!(
            err.to_string(),
            "file /data/big.csv is 200 bytes, exceeding the 100 byte limit"
        );
    }

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::from_io(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileUnreadable { .. }));
    }
}
