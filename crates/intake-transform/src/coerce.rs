//! Kind-directed coercion checks used by row validation.

use intake_model::{CoercionOptions, FieldKind, FieldSpec};

use crate::normalization::{is_date, is_numeric, parse_bool, parse_enum};

/// Returns true when a non-empty value parses as `kind`.
///
/// Text always coerces. Empty values never do.
pub fn coerces(
    kind: FieldKind,
    value: &str,
    options: &CoercionOptions,
    enum_values: &[&'static str],
) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    match kind {
        FieldKind::Text => true,
        FieldKind::Date => is_date(value, &options.date),
        FieldKind::Numeric => is_numeric(value),
        FieldKind::Bool => parse_bool(value).is_some(),
        FieldKind::Enum => parse_enum(value, enum_values).is_some(),
    }
}

/// [`coerces`] for a field spec.
pub fn field_accepts(spec: &FieldSpec, value: &str, options: &CoercionOptions) -> bool {
    coerces(spec.kind, value, options, spec.enum_values)
}
