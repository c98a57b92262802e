//! Upload tunables and coercion options.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest input file accepted (100 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Leading records scanned when looking for the header row.
pub const DEFAULT_HEADER_SEARCH_ROWS: usize = 20;

/// Years past the reference year that a two-digit year may still land in.
pub const DEFAULT_TWO_DIGIT_YEAR_PIVOT: i32 = 20;

/// Text encoding assumed for input files.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Per-run ingest configuration.
///
/// Every field has a default, so a TOML file only needs the keys it wants to
/// change:
///
/// ```toml
/// max_file_size = 52428800
/// header_search_rows = 30
/// encoding = "windows-1252"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Size ceiling in bytes, checked before the file is read.
    pub max_file_size: u64,
    /// Number of leading records searched for the header.
    pub header_search_rows: usize,
    /// Two-digit year pivot window in years.
    pub two_digit_year_pivot: i32,
    /// Fixed reference year for two-digit years; current year when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
    /// WHATWG encoding label used to decode input bytes.
    pub encoding: String,
    /// Directory for failure logs; the input file's directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_dir: Option<PathBuf>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            header_search_rows: DEFAULT_HEADER_SEARCH_ROWS,
            two_digit_year_pivot: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
            reference_year: None,
            encoding: DEFAULT_ENCODING.to_string(),
            failure_dir: None,
        }
    }
}

impl IngestConfig {
    /// Checks that the tunables describe a usable run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_size == 0 {
            return Err(ConfigError::Zero {
                field: "max_file_size",
            });
        }
        if self.header_search_rows == 0 {
            return Err(ConfigError::Zero {
                field: "header_search_rows",
            });
        }
        if !(0..=99).contains(&self.two_digit_year_pivot) {
            return Err(ConfigError::PivotOutOfRange {
                value: self.two_digit_year_pivot,
            });
        }
        if self.encoding.trim().is_empty() {
            return Err(ConfigError::EmptyEncoding);
        }
        Ok(())
    }

    /// Coercion options derived from this configuration.
    #[must_use]
    pub fn coercion_options(&self) -> CoercionOptions {
        CoercionOptions {
            date: DateOptions {
                pivot_window: self.two_digit_year_pivot,
                reference_year: self.reference_year,
            },
        }
    }
}

/// Two-digit year handling for date parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOptions {
    pub pivot_window: i32,
    pub reference_year: Option<i32>,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            pivot_window: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
            reference_year: None,
        }
    }
}

impl DateOptions {
    /// Options pinned to a reference year.
    #[must_use]
    pub const fn with_reference_year(reference_year: i32) -> Self {
        Self {
            pivot_window: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
            reference_year: Some(reference_year),
        }
    }

    /// The reference year, falling back to the current local year.
    pub fn resolved_reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Expands a two-digit year into a four-digit one.
    ///
    /// `2000 + yy` unless that lands more than `pivot_window` years past the
    /// reference year, in which case `1900 + yy`.
    pub fn expand_two_digit_year(&self, yy: i32) -> i32 {
        let candidate = 2000 + yy;
        if candidate > self.resolved_reference_year() + self.pivot_window {
            1900 + yy
        } else {
            candidate
        }
    }
}

/// Options threaded through the type coercers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionOptions {
    pub date: DateOptions,
}
