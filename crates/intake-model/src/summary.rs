//! Per-run results: failure records, upload summaries, and ledger entries.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rejected data row and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub reason: String,
    pub raw_row: Vec<String>,
}

impl FailureRecord {
    pub fn new(reason: impl Into<String>, raw_row: Vec<String>) -> Self {
        Self {
            reason: reason.into(),
            raw_row,
        }
    }

    /// The failure-log line: reason first, then the original cells.
    pub fn to_log_row(&self) -> Vec<&str> {
        std::iter::once(self.reason.as_str())
            .chain(self.raw_row.iter().map(String::as_str))
            .collect()
    }
}

/// Outcome of one completed upload run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub source: String,
    pub report: String,
    pub file: PathBuf,
    /// Rows persisted.
    pub inserted: usize,
    /// Rows written to the failure log.
    pub failed: usize,
    /// Data rows processed after the header.
    pub total: usize,
    /// Zero-based record index of the header row.
    pub header_row: usize,
    pub failure_log: PathBuf,
    /// Hex SHA-256 of the input bytes.
    pub sha256: String,
}

impl UploadSummary {
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Ledger entry describing this run.
    pub fn log_entry(&self, uploaded_at: DateTime<Utc>) -> UploadLogEntry {
        let file_name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string());
        UploadLogEntry {
            source: self.source.clone(),
            report: self.report.clone(),
            file_name,
            sha256: self.sha256.clone(),
            inserted: self.inserted,
            failed: self.failed,
            total: self.total,
            uploaded_at,
        }
    }
}

/// One row of the upload ledger kept by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLogEntry {
    pub source: String,
    pub report: String,
    pub file_name: String,
    pub sha256: String,
    pub inserted: usize,
    pub failed: usize,
    pub total: usize,
    pub uploaded_at: DateTime<Utc>,
}
