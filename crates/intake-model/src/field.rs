//! Column specifications and report schemas.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Post-sanitization value rewrite applied before type coercion.
pub type Normalizer = fn(&str) -> String;

/// Expected data type of a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Date,
    Numeric,
    Bool,
    Enum,
}

impl FieldKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::Numeric => "numeric",
            FieldKind::Bool => "boolean",
            FieldKind::Enum => "enum",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(FieldKind::Text),
            "date" => Ok(FieldKind::Date),
            "numeric" | "number" => Ok(FieldKind::Numeric),
            "bool" | "boolean" => Ok(FieldKind::Bool),
            "enum" => Ok(FieldKind::Enum),
            other => Err(format!("unknown field kind: {other}")),
        }
    }
}

/// Validation rule for a single CSV column.
///
/// `name` must match the export's header cell once both are cleaned and
/// lower-cased. Specs are built in `const` context so report schemas can be
/// plain statics.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column header name.
    pub name: &'static str,
    /// Expected data type.
    pub kind: FieldKind,
    /// Column must exist in the header and carry a value.
    pub required: bool,
    /// Empty values are accepted even when `required` is set.
    pub allow_empty: bool,
    /// Accepted spellings for [`FieldKind::Enum`] columns.
    pub enum_values: &'static [&'static str],
    /// Optional rewrite applied after sanitization.
    pub normalizer: Option<Normalizer>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            allow_empty: false,
            enum_values: &[],
            normalizer: None,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub const fn numeric(name: &'static str) -> Self {
        Self::new(name, FieldKind::Numeric)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    pub const fn one_of(name: &'static str, values: &'static [&'static str]) -> Self {
        let mut spec = Self::new(name, FieldKind::Enum);
        spec.enum_values = values;
        spec
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    #[must_use]
    pub const fn normalized_by(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Returns true when an empty cell must reject the row.
    pub const fn rejects_empty(&self) -> bool {
        self.required && !self.allow_empty
    }
}

/// Ordered column specifications for one upstream report.
///
/// Declaration order is the canonical column order and drives header
/// discovery.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Field names in declared order.
    pub fn header(&self) -> Vec<&'static str> {
        self.fields.iter().map(|spec| spec.name).collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names declared more than once (compared case-insensitively).
    pub fn duplicate_names(&self) -> Vec<&'static str> {
        let mut seen = BTreeSet::new();
        self.fields
            .iter()
            .filter(|spec| !seen.insert(spec.name.trim().to_lowercase()))
            .map(|spec| spec.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(value: &str) -> String {
        value.to_uppercase()
    }

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::text("Customer").required(),
        FieldSpec::date("Invoice date").required(),
        FieldSpec::numeric("Amount"),
        FieldSpec::text("Region").normalized_by(upper),
        FieldSpec::one_of("Status", &["Open", "Closed"]).required().allow_empty(),
    ];

    static SCHEMA: Schema = Schema::new("test", FIELDS);

    #[test]
    fn header_follows_declaration_order() {
        assert_eq!(
            SCHEMA.header(),
            vec!["Customer", "Invoice date", "Amount", "Region", "Status"]
        );
        assert_eq!(SCHEMA.len(), 5);
    }

    #[test]
    fn builder_flags() {
        let status = SCHEMA.field("Status").unwrap();
        assert!(status.required);
        assert!(status.allow_empty);
        assert!(!status.rejects_empty());
        assert_eq!(status.enum_values, &["Open", "Closed"]);

        let customer = SCHEMA.field("Customer").unwrap();
        assert!(customer.rejects_empty());

        let region = SCHEMA.field("Region").unwrap();
        let normalize = region.normalizer.unwrap();
        assert_eq!(normalize("ca"), "CA");
    }

    #[test]
    fn duplicate_names_detected_case_insensitively() {
        static DUPES: &[FieldSpec] = &[
            FieldSpec::text("Amount"),
            FieldSpec::text("amount "),
            FieldSpec::text("Memo"),
        ];
        let schema = Schema::new("dupes", DUPES);
        assert_eq!(schema.duplicate_names(), vec!["amount "]);
        assert!(SCHEMA.duplicate_names().is_empty());
    }

    #[test]
    fn field_kind_round_trips_through_str() {
        for kind in [
            FieldKind::Text,
            FieldKind::Date,
            FieldKind::Numeric,
            FieldKind::Bool,
            FieldKind::Enum,
        ] {
            assert_eq!(kind.as_str().parse::<FieldKind>(), Ok(kind));
        }
        assert!("money".parse::<FieldKind>().is_err());
    }
}
