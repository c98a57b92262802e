//! CSV ingestion for ledger exports.
//!
//! # Features
//!
//! - **Sanitization**: strip spreadsheet and vendor artifacts from cells
//! - **Reading**: size-checked, encoding-aware, ragged-row tolerant tokenizing
//! - **Header discovery**: find the real header below metadata preamble rows
//! - **Failure logs**: write rejected rows with their reasons
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use intake_ingest::{HeaderIndex, find_header_row, read_csv_file};
//! use intake_model::IngestConfig;
//!
//! let config = IngestConfig::default();
//! let file = read_csv_file(Path::new("exports/so_lines.csv"), &config)?;
//! let header_row = find_header_row(&file.records, &["Document Number", "Date"], 20);
//! ```

mod error;
mod failure_log;
mod header;
mod reader;
mod sanitize;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sanitization ===
pub use sanitize::{clean_cell, clean_header, headers_equal};

// === Reading ===
pub use reader::{
    CsvFile, check_file_size, decode_bytes, parse_records, read_bytes, read_csv_file,
    read_leading_records, sha256_hex,
};

// === Header Discovery ===
pub use header::{HeaderIndex, find_header_row, locate_header_row};

// === Failure Log ===
pub use failure_log::{failure_log_path, write_failure_log};
