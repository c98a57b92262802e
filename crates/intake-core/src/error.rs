//! Error types for upload orchestration and record stores.

use std::path::PathBuf;

use thiserror::Error;

use intake_ingest::IngestError;

use crate::context::StopReason;

/// Errors that stop an upload run without a summary.
#[derive(Debug, Error)]
pub enum UploadError {
    /// File-level ingest failure (size, read, decode, header).
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("unknown source '{name}' (expected one of: ns, sfdc, anrok)")]
    UnknownSource { name: String },

    #[error("unknown report '{report}' for source {source_name}")]
    UnknownReport { source_name: String, report: String },

    /// The run was stopped between rows. Rows already inserted stay inserted.
    #[error("upload {reason} after {processed} rows ({inserted} inserted, {failed} failed)")]
    Cancelled {
        reason: StopReason,
        inserted: usize,
        failed: usize,
        processed: usize,
    },
}

/// Result type for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;

/// Failures reported by a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {table} record: {message}")]
    Serialization { table: &'static str, message: String },

    #[error("record store error: {message}")]
    Backend { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UploadError::UnknownReport {
            source_name: "ns".to_string(),
            report: "Journal".to_string(),
        };
        assert_eq!(err.to_string(), "unknown report 'Journal' for source ns");

        let err = UploadError::Cancelled {
            reason: StopReason::DeadlineExceeded,
            inserted: 3,
            failed: 1,
            processed: 4,
        };
        assert_eq!(
            err.to_string(),
            "upload deadline exceeded after 4 rows (3 inserted, 1 failed)"
        );
    }

    #[test]
    fn test_from_ingest() {
        let err: UploadError = IngestError::UnknownEncoding {
            label: "klingon".to_string(),
        }
        .into();
        assert!(matches!(err, UploadError::Ingest(_)));
    }
}
