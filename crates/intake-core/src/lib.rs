//! Report catalogs and upload orchestration for ledger exports.
//!
//! # Features
//!
//! - **Catalog**: column schemas and row builders for every supported report
//! - **Records**: typed rows with exact decimal amounts and calendar dates
//! - **Registry**: source and report key lookup of report handlers
//! - **Upload**: row-by-row validation and insertion with a failure log
//!
//! # Example
//!
//! ```ignore
//! use intake_core::{MemoryStore, Source, UploadContext, UploadRequest, resolve_handler, run_upload};
//! use intake_model::IngestConfig;
//!
//! let handler = resolve_handler("ns", "SO_line_item_detail")?;
//! let request = UploadRequest::new(Source::Ns, "SO_line_item_detail", "exports/so_lines.csv");
//! let mut store = MemoryStore::new();
//! let summary = run_upload(&request, handler, &mut store, &UploadContext::new(), &IngestConfig::default())?;
//! println!("{} inserted, {} failed", summary.inserted, summary.failed);
//! ```

pub mod catalog;
mod context;
mod error;
mod handler;
mod records;
mod registry;
mod store;
mod upload;

// === Errors ===
pub use error::{Result, StoreError, UploadError};

// === Run Context ===
pub use context::{CancelFlag, StopReason, UploadContext};

// === Records ===
pub use records::{
    AnrokTransaction, NsInvoiceSalesTax, NsSoLineItem, ReportRecord, SfdcOppLineItem, TypedRecord,
};

// === Handlers ===
pub use handler::{BuildFn, CsvHandler, InsertFn, ReportHandler};
pub use registry::{Registry, Source, SourceHandlers, registry, resolve_handler};

// === Persistence ===
pub use store::{MemoryStore, RecordStore};

// === Upload ===
pub use upload::{UploadRequest, check_header, run_upload};
