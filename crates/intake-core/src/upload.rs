//! Upload orchestration: read, locate the header, validate and insert every
//! data row, then write the failure log and the ledger entry.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, error, info, info_span, warn};

use intake_ingest::{
    HeaderIndex, IngestError, failure_log_path, find_header_row, read_csv_file, write_failure_log,
};
use intake_model::{FailureRecord, IngestConfig, RowError, UploadSummary};

use crate::context::UploadContext;
use crate::error::{Result, UploadError};
use crate::handler::ReportHandler;
use crate::registry::Source;
use crate::store::RecordStore;

/// One file to upload for a given source and report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub source: Source,
    pub report: String,
    pub path: PathBuf,
}

impl UploadRequest {
    pub fn new(source: Source, report: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            report: report.into(),
            path: path.into(),
        }
    }
}

/// Running tallies for the row loop.
#[derive(Debug, Default)]
struct RowCounts {
    inserted: usize,
    processed: usize,
    failures: Vec<FailureRecord>,
}

impl RowCounts {
    fn fail(&mut self, err: &RowError, row: &[String]) {
        self.failures
            .push(FailureRecord::new(err.to_string(), row.to_vec()));
    }
}

/// Runs one upload.
///
/// Rows are processed strictly in file order. A row that fails validation or
/// insertion is recorded in the failure log and the run continues. The
/// failure log is written even when no row failed.
///
/// # Errors
///
/// File-level problems ([`UploadError::Ingest`]) abort before any row is
/// processed. When `ctx` is cancelled or its deadline passes, the failure log
/// is written for the rows seen so far and [`UploadError::Cancelled`] is
/// returned, even if that log cannot be written. Rows already inserted are
/// not rolled back.
///
/// The summary and ledger entry carry `handler.report_key()`, which wins
/// over `request.report` if the two disagree.
pub fn run_upload(
    request: &UploadRequest,
    handler: &dyn ReportHandler,
    store: &mut dyn RecordStore,
    ctx: &UploadContext,
    config: &IngestConfig,
) -> Result<UploadSummary> {
    let report = handler.report_key();
    let span = info_span!(
        "upload",
        source = %request.source,
        report,
        file = %request.path.display(),
    );
    let _guard = span.enter();

    if request.report != report {
        warn!(
            requested = %request.report,
            "Requested report differs from handler; recording handler key"
        );
    }

    if let Some(reason) = ctx.stop_reason() {
        return Err(UploadError::Cancelled {
            reason,
            inserted: 0,
            failed: 0,
            processed: 0,
        });
    }

    let file = read_csv_file(&request.path, config)?;
    let expected = handler.header();
    let header_row = find_header_row(&file.records, &expected, config.header_search_rows)
        .ok_or_else(|| IngestError::HeaderNotFound {
            path: request.path.clone(),
            searched: file.records.len().min(config.header_search_rows),
        })?;
    let header = HeaderIndex::from_row(&file.records[header_row]);
    let options = config.coercion_options();
    let failure_log = failure_log_path(&request.path, config.failure_dir.as_deref());

    info!(header_row, columns = header.len(), "Header located");

    let mut counts = RowCounts::default();
    for (index, row) in file.records.iter().enumerate().skip(header_row + 1) {
        if let Some(reason) = ctx.stop_reason() {
            warn!(%reason, processed = counts.processed, "Upload stopped early");
            if let Err(err) = write_failure_log(&failure_log, &counts.failures) {
                warn!(error = %err, "Failed to write failure log for stopped upload");
            }
            return Err(UploadError::Cancelled {
                reason,
                inserted: counts.inserted,
                failed: counts.failures.len(),
                processed: counts.processed,
            });
        }

        counts.processed += 1;
        let line = index + 1;
        let outcome = handler
            .build_params(row, &header, &options)
            .and_then(|record| handler.insert(ctx, store, record));

        match outcome {
            Ok(true) => counts.inserted += 1,
            Ok(false) => {
                debug!(line, "Store declined row");
                counts.fail(&RowError::InsertRejected, row);
            }
            Err(err) => {
                if err.is_defect() {
                    error!(line, error = %err, "Handler defect");
                } else {
                    debug!(line, category = err.category(), error = %err, "Row rejected");
                }
                counts.fail(&err, row);
            }
        }
    }

    write_failure_log(&failure_log, &counts.failures)?;

    let summary = UploadSummary {
        source: request.source.to_string(),
        report: report.to_string(),
        file: request.path.clone(),
        inserted: counts.inserted,
        failed: counts.failures.len(),
        total: counts.processed,
        header_row,
        failure_log,
        sha256: file.sha256,
    };

    if let Err(err) = store.record_upload(&summary.log_entry(Utc::now())) {
        warn!(error = %err, "Failed to record upload in ledger");
    }

    info!(
        inserted = summary.inserted,
        failed = summary.failed,
        total = summary.total,
        "Upload complete"
    );

    Ok(summary)
}

/// Runs header discovery only, returning the header row index.
///
/// Only the leading `header_search_rows` records are tokenized.
pub fn check_header(
    path: &Path,
    handler: &dyn ReportHandler,
    config: &IngestConfig,
) -> Result<usize> {
    let header = handler.header();
    Ok(intake_ingest::locate_header_row(path, &header, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::catalog::anrok;
    use crate::context::CancelFlag;
    use crate::store::MemoryStore;

    #[test]
    fn test_cancelled_before_read() {
        let flag = CancelFlag::new();
        flag.cancel();
        let ctx = UploadContext::new().with_cancel_flag(flag);
        let request = UploadRequest::new(Source::Anrok, "Transactions", "/nonexistent.csv");
        let handler = anrok::transactions_handler();
        let mut store = MemoryStore::new();

        let err = run_upload(&request, &handler, &mut store, &ctx, &IngestConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            UploadError::Cancelled {
                processed: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_file_level() {
        let request = UploadRequest::new(Source::Anrok, "Transactions", "/nonexistent.csv");
        let handler = anrok::transactions_handler();
        let mut store = MemoryStore::new();

        let err = run_upload(
            &request,
            &handler,
            &mut store,
            &UploadContext::new(),
            &IngestConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            UploadError::Ingest(IngestError::FileNotFound { .. })
        ));
        assert!(store.uploads.is_empty());
    }

    #[test]
    fn test_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anrok.csv");
        fs::write(&path, anrok::TRANSACTION_SCHEMA.header().join(",")).unwrap();

        let request = UploadRequest::new(Source::Anrok, "Transactions", &path);
        let handler = anrok::transactions_handler();
        let mut store = MemoryStore::new();
        let summary = run_upload(
            &request,
            &handler,
            &mut store,
            &UploadContext::new(),
            &IngestConfig::default(),
        )
        .unwrap();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.header_row, 0);
        assert!(summary.failure_log.exists());
        assert_eq!(fs::read_to_string(&summary.failure_log).unwrap(), "");
        assert_eq!(store.uploads.len(), 1);
    }
}
