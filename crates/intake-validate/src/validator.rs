//! Row validation against a report schema.

use tracing::trace;

use intake_ingest::{HeaderIndex, clean_cell};
use intake_model::{CoercionOptions, FieldKind, RowError, Schema, redact_value};
use intake_transform::field_accepts;

use crate::row::ValidatedRow;

/// Validates one raw data row.
///
/// Fields are checked in schema order and the first failure aborts the row.
/// For each field the cell is located through `header`, sanitized, passed
/// through the field's normalizer, checked for required emptiness, and, for
/// typed kinds, checked to coerce. Short rows read missing cells as empty.
pub fn validate_row<S: AsRef<str>>(
    row: &[S],
    header: &HeaderIndex,
    schema: &Schema,
    options: &CoercionOptions,
) -> Result<ValidatedRow, RowError> {
    let mut validated = ValidatedRow::new(*options);

    for spec in schema.fields {
        let Some(position) = header.position(spec.name) else {
            if spec.required {
                return Err(RowError::MissingRequiredColumn {
                    field: spec.name.to_string(),
                });
            }
            validated.insert(spec.name, String::new());
            continue;
        };

        let raw = row.get(position).map_or("", AsRef::as_ref);
        let cleaned = clean_cell(raw);
        let value = match spec.normalizer {
            Some(normalize) => normalize(&cleaned),
            None => cleaned,
        };

        if value.is_empty() {
            if spec.rejects_empty() {
                return Err(RowError::MissingRequiredValue {
                    field: spec.name.to_string(),
                });
            }
        } else if spec.kind != FieldKind::Text && !field_accepts(spec, &value, options) {
            trace!(
                field = spec.name,
                kind = %spec.kind,
                value = redact_value(&value),
                "Unparseable cell"
            );
            return Err(RowError::UnparseableValue {
                field: spec.name.to_string(),
                value,
                kind: spec.kind,
            });
        }

        validated.insert(spec.name, value);
    }

    Ok(validated)
}
