//! Row validation over headers as they appear in exported files.

use intake_ingest::HeaderIndex;
use intake_model::{CoercionOptions, FieldKind, FieldSpec, RowError, Schema};
use intake_validate::validate_row;

static FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Transaction ID").required(),
    FieldSpec::one_of("Transaction currency", &["USD", "EUR", "GBP"]).required(),
    FieldSpec::numeric("Tax amount").required(),
    FieldSpec::text("Exempt reasons").required().allow_empty(),
];
static SCHEMA: Schema = Schema::new("transactions", FIELDS);

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| (*cell).to_string()).collect()
}

#[test]
fn header_order_differs_from_schema_order() {
    let header = HeaderIndex::from_row(&row(&[
        " exempt reasons ",
        "TAX AMOUNT",
        "=\"Transaction ID\"",
        "Transaction currency",
    ]));
    let validated = validate_row(
        &row(&["", "(1.50)", "txn_1", "eur"]),
        &header,
        &SCHEMA,
        &CoercionOptions::default(),
    )
    .unwrap();

    assert_eq!(validated.get("Transaction ID"), "txn_1");
    assert_eq!(validated.get("Transaction currency"), "eur");
    assert_eq!(validated.get("Exempt reasons"), "");
    assert_eq!(validated.numeric("Tax amount").unwrap().to_string(), "-1.50");
}

#[test]
fn first_failing_field_wins() {
    let header = HeaderIndex::from_row(&SCHEMA.header());
    let err = validate_row(
        &row(&["", "XYZ", "abc", ""]),
        &header,
        &SCHEMA,
        &CoercionOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        RowError::MissingRequiredValue {
            field: "Transaction ID".to_string()
        }
    );

    let err = validate_row(
        &row(&["txn_2", "XYZ", "abc", ""]),
        &header,
        &SCHEMA,
        &CoercionOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        RowError::UnparseableValue {
            field: "Transaction currency".to_string(),
            value: "XYZ".to_string(),
            kind: FieldKind::Enum,
        }
    );
}

#[test]
fn duplicate_header_uses_last_column() {
    let header = HeaderIndex::from_row(&row(&[
        "Transaction ID",
        "Transaction currency",
        "Tax amount",
        "Exempt reasons",
        "Tax amount",
    ]));
    let validated = validate_row(
        &row(&["txn_3", "USD", "1.00", "", "2.00"]),
        &header,
        &SCHEMA,
        &CoercionOptions::default(),
    )
    .unwrap();
    assert_eq!(validated.get("Tax amount"), "2.00");
}
