//! Validated row values and typed accessors for row builders.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use intake_model::{CoercionOptions, FieldKind, RowError};
use intake_transform::normalization::{parse_bool, parse_date, parse_numeric, to_text};

/// Sanitized, normalized cell values keyed by field name.
///
/// Values are not yet coerced; the typed accessors coerce on read using the
/// options the row was validated with. Every accessor returns `None` for a
/// field that is absent, empty, or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedRow {
    values: HashMap<&'static str, String>,
    options: CoercionOptions,
}

impl ValidatedRow {
    pub fn new(options: CoercionOptions) -> Self {
        Self {
            values: HashMap::new(),
            options,
        }
    }

    pub fn insert(&mut self, field: &'static str, value: String) {
        self.values.insert(field, value);
    }

    /// Raw cleaned value, empty when the field was not captured.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn options(&self) -> &CoercionOptions {
        &self.options
    }

    pub fn text(&self, field: &str) -> Option<String> {
        to_text(self.get(field))
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        parse_date(self.get(field), &self.options.date)
    }

    pub fn numeric(&self, field: &str) -> Option<BigDecimal> {
        parse_numeric(self.get(field))
    }

    pub fn boolean(&self, field: &str) -> Option<bool> {
        parse_bool(self.get(field))
    }

    pub fn require_text(&self, field: &str) -> Result<String, RowError> {
        self.text(field).ok_or_else(|| self.absent(field, FieldKind::Text))
    }

    pub fn require_date(&self, field: &str) -> Result<NaiveDate, RowError> {
        self.date(field).ok_or_else(|| self.absent(field, FieldKind::Date))
    }

    pub fn require_numeric(&self, field: &str) -> Result<BigDecimal, RowError> {
        self.numeric(field).ok_or_else(|| self.absent(field, FieldKind::Numeric))
    }

    pub fn require_bool(&self, field: &str) -> Result<bool, RowError> {
        self.boolean(field).ok_or_else(|| self.absent(field, FieldKind::Bool))
    }

    fn absent(&self, field: &str, kind: FieldKind) -> RowError {
        let value = self.get(field).trim();
        if value.is_empty() {
            RowError::MissingRequiredValue {
                field: field.to_string(),
            }
        } else {
            RowError::UnparseableValue {
                field: field.to_string(),
                value: value.to_string(),
                kind,
            }
        }
    }
}
