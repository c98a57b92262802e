//! Type coercion for ledger CSV cells.
//!
//! Every coercer takes an already-sanitized cell and returns `Option<T>`:
//! `Some` when the value is present and parseable, `None` when it is empty or
//! unparseable. Coercers never panic and never return errors; deciding whether
//! `None` is acceptable is the row validator's job.
//!
//! # Example
//!
//! ```
//! use intake_model::DateOptions;
//! use intake_transform::normalization::{parse_date, parse_numeric};
//!
//! let amount = parse_numeric("($1,234.56)").unwrap();
//! assert_eq!(amount.to_string(), "-1234.56");
//!
//! let date = parse_date("Jan 15, 2024", &DateOptions::default()).unwrap();
//! assert_eq!(date.to_string(), "2024-01-15");
//! ```

mod coerce;

pub mod normalization;

pub use coerce::{coerces, field_accepts};
pub use normalization::{
    normalize_us_state, parse_bool, parse_date, parse_enum, parse_numeric, to_text,
};
