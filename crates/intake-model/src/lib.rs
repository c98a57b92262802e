//! Data model shared by the ledger intake crates.
//!
//! - **field**: column specifications ([`FieldSpec`]) and ordered [`Schema`]s
//! - **options**: run tunables ([`IngestConfig`]) and coercion options
//! - **error**: row-level failure categories ([`RowError`])
//! - **redact**: log redaction of cell values
//! - **summary**: per-run results ([`UploadSummary`], [`FailureRecord`])

pub mod error;
pub mod field;
pub mod options;
pub mod redact;
pub mod summary;

pub use error::{ConfigError, RowError};
pub use field::{FieldKind, FieldSpec, Normalizer, Schema};
pub use options::{
    CoercionOptions, DEFAULT_ENCODING, DEFAULT_HEADER_SEARCH_ROWS, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_TWO_DIGIT_YEAR_PIVOT, DateOptions, IngestConfig,
};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
pub use summary::{FailureRecord, UploadLogEntry, UploadSummary};
