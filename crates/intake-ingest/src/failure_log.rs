//! Failure log artifact: one CSV line per rejected row.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use intake_model::FailureRecord;

use crate::error::{IngestError, Result};

const FAILURE_SUFFIX: &str = "-failed.csv";

/// `<dir>/<input stem>-failed.csv`, where `dir` is `failure_dir` or the
/// input file's directory.
pub fn failure_log_path(input: &Path, failure_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let dir = failure_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}{FAILURE_SUFFIX}"))
}

/// Writes the failure log, replacing any previous one.
///
/// Each line is the reason followed by the row's original cells, so rows of
/// different widths are preserved as-is. The file is written even when there
/// are no failures.
pub fn write_failure_log(path: &Path, failures: &[FailureRecord]) -> Result<()> {
    let write_error = |message: String| IngestError::FailureLogWrite {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| write_error(e.to_string()))?;

    for failure in failures {
        writer
            .write_record(failure.to_log_row())
            .map_err(|e| write_error(e.to_string()))?;
    }
    writer.flush().map_err(|e| write_error(e.to_string()))?;

    info!(path = %path.display(), failures = failures.len(), "Wrote failure log");
    Ok(())
}
