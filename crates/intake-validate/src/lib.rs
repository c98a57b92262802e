//! Schema-driven validation of CSV data rows.
//!
//! [`validate_row`] applies a [`Schema`](intake_model::Schema) to one raw row
//! and produces a [`ValidatedRow`] of cleaned values, or the first
//! [`RowError`](intake_model::RowError) found.

mod row;
mod validator;

pub use row::ValidatedRow;
pub use validator::validate_row;
