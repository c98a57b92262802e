use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, warn};

use intake_cli::config::resolve_config;
use intake_cli::listing::list_reports;
use intake_cli::store::JsonlStore;
use intake_core::{
    MemoryStore, RecordStore, ReportHandler, UploadContext, UploadRequest, check_header,
    resolve_handler, run_upload,
};
use intake_model::UploadSummary;

use crate::cli::{CheckHeaderArgs, ReportsArgs, TargetArgs, UploadArgs};
use crate::summary::apply_table_style;

/// Where the records of a finished run went.
pub enum Destination {
    DryRun { records: usize },
    Jsonl(std::path::PathBuf),
}

pub struct UploadOutcome {
    pub summary: UploadSummary,
    pub destination: Destination,
}

fn handler_for(target: &TargetArgs) -> Result<&'static dyn ReportHandler> {
    resolve_handler(target.source.as_str(), &target.report)
        .with_context(|| format!("resolve report for {}", target.file.display()))
}

pub fn run_upload_command(args: &UploadArgs) -> Result<UploadOutcome> {
    let handler = handler_for(&args.target)?;
    let config = resolve_config(
        args.ingest.config.as_deref(),
        args.ingest.overrides(args.failure_dir.clone()),
    )?;

    let mut ctx = UploadContext::new();
    if let Some(secs) = args.timeout_secs {
        ctx = ctx.with_timeout(Duration::from_secs(secs));
    }
    let request = UploadRequest::new(args.target.source, &args.target.report, &args.target.file);

    if args.dry_run {
        let mut store = MemoryStore::new();
        let summary = upload(&request, handler, &mut store, &ctx, &config)?;
        info!(records = store.record_count(), "Dry run complete, nothing stored");
        return Ok(UploadOutcome {
            summary,
            destination: Destination::DryRun {
                records: store.record_count(),
            },
        });
    }

    let mut store = JsonlStore::open(&args.out_dir)
        .with_context(|| format!("open output directory {}", args.out_dir.display()))?;
    let result = upload(&request, handler, &mut store, &ctx, &config);
    let flushed = store.flush().context("flush output tables");
    Ok(UploadOutcome {
        summary: upload_then_flush(result, flushed)?,
        destination: Destination::Jsonl(store.dir().to_path_buf()),
    })
}

/// The run's own error wins; a flush failure only surfaces after a
/// successful run.
fn upload_then_flush(result: Result<UploadSummary>, flushed: Result<()>) -> Result<UploadSummary> {
    match (result, flushed) {
        (Ok(summary), flushed) => flushed.map(|()| summary),
        (Err(error), Ok(())) => Err(error),
        (Err(error), Err(flush_error)) => {
            warn!(error = %format!("{flush_error:#}"), "Output flush failed after upload error");
            Err(error)
        }
    }
}

fn upload(
    request: &UploadRequest,
    handler: &dyn ReportHandler,
    store: &mut dyn RecordStore,
    ctx: &UploadContext,
    config: &intake_model::IngestConfig,
) -> Result<UploadSummary> {
    run_upload(request, handler, store, ctx, config)
        .with_context(|| format!("upload {}", request.path.display()))
}

pub fn run_reports(args: &ReportsArgs) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Report", "Columns"]);
    apply_table_style(&mut table);
    for listing in list_reports(args.source) {
        table.add_row(vec![
            listing.source.label().to_string(),
            listing.report.to_string(),
            listing.columns.join("\n"),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check_header(args: &CheckHeaderArgs) -> Result<usize> {
    let handler = handler_for(&args.target)?;
    let config = resolve_config(args.ingest.config.as_deref(), args.ingest.overrides(None))?;
    check_header(&args.target.file, handler, &config)
        .with_context(|| format!("check header of {}", args.target.file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use anyhow::anyhow;

    fn summary() -> UploadSummary {
        UploadSummary {
            source: "anrok".to_string(),
            report: "Transactions".to_string(),
            file: PathBuf::from("anrok.csv"),
            inserted: 1,
            failed: 0,
            total: 1,
            header_row: 0,
            failure_log: PathBuf::from("anrok-failed.csv"),
            sha256: String::new(),
        }
    }

    #[test]
    fn test_upload_error_wins_over_flush_error() {
        let err = upload_then_flush(
            Err(anyhow!("header not found")),
            Err(anyhow!("disk full")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "header not found");
    }

    #[test]
    fn test_flush_error_surfaces_after_successful_run() {
        let err = upload_then_flush(Ok(summary()), Err(anyhow!("disk full"))).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_clean_run_returns_summary() {
        let result = upload_then_flush(Ok(summary()), Ok(())).unwrap();
        assert_eq!(result.inserted, 1);
    }
}
