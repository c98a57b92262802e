//! Anrok tax engine exports.

use intake_model::{FieldSpec, RowError, Schema};
use intake_transform::normalize_us_state;
use intake_validate::ValidatedRow;

use crate::context::UploadContext;
use crate::error::StoreError;
use crate::handler::CsvHandler;
use crate::records::AnrokTransaction;
use crate::store::RecordStore;

pub const TRANSACTIONS_REPORT: &str = "Transactions";

static TRANSACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Transaction ID").required(),
    FieldSpec::text("Customer ID").required(),
    FieldSpec::text("Customer name").required(),
    FieldSpec::text("Overall VAT ID validation status").required(),
    FieldSpec::text("Valid VAT IDs"),
    FieldSpec::text("Other VAT IDs"),
    FieldSpec::date("Invoice date").required(),
    FieldSpec::date("Tax date").required(),
    FieldSpec::text("Transaction currency").required(),
    FieldSpec::numeric("Sales amount").required(),
    FieldSpec::text("Exempt reasons"),
    FieldSpec::numeric("Tax amount").required(),
    FieldSpec::numeric("Invoice amount").required(),
    FieldSpec::boolean("Void").required(),
    FieldSpec::text("Customer address line 1").required(),
    FieldSpec::text("Customer address city").required(),
    FieldSpec::text("Customer address region")
        .required()
        .normalized_by(normalize_us_state),
    FieldSpec::text("Customer address postal code").required(),
    FieldSpec::text("Customer address country").required(),
    FieldSpec::text("Customer country code").required(),
    FieldSpec::text("Jurisdictions").required(),
    FieldSpec::text("Jurisdictions IDs").required(),
    FieldSpec::text("Return IDs").required(),
];

pub static TRANSACTION_SCHEMA: Schema = Schema::new(TRANSACTIONS_REPORT, TRANSACTION_FIELDS);

fn build_transaction(row: &ValidatedRow) -> Result<AnrokTransaction, RowError> {
    Ok(AnrokTransaction {
        transaction_id: row.require_text("Transaction ID")?,
        customer_id: row.require_text("Customer ID")?,
        customer_name: row.require_text("Customer name")?,
        vat_id_validation_status: row.require_text("Overall VAT ID validation status")?,
        valid_vat_ids: row.text("Valid VAT IDs"),
        other_vat_ids: row.text("Other VAT IDs"),
        invoice_date: row.require_date("Invoice date")?,
        tax_date: row.require_date("Tax date")?,
        currency: row.require_text("Transaction currency")?,
        sales_amount: row.require_numeric("Sales amount")?,
        exempt_reasons: row.text("Exempt reasons"),
        tax_amount: row.require_numeric("Tax amount")?,
        invoice_amount: row.require_numeric("Invoice amount")?,
        void: row.require_bool("Void")?,
        address_line_1: row.require_text("Customer address line 1")?,
        address_city: row.require_text("Customer address city")?,
        address_region: row.require_text("Customer address region")?,
        address_postal_code: row.require_text("Customer address postal code")?,
        address_country: row.require_text("Customer address country")?,
        country_code: row.require_text("Customer country code")?,
        jurisdictions: row.require_text("Jurisdictions")?,
        jurisdiction_ids: row.require_text("Jurisdictions IDs")?,
        return_ids: row.require_text("Return IDs")?,
    })
}

fn insert_transaction(
    ctx: &UploadContext,
    store: &mut dyn RecordStore,
    record: &AnrokTransaction,
) -> Result<bool, StoreError> {
    store.insert_anrok_transaction(ctx, record)
}

pub fn transactions_handler() -> CsvHandler<AnrokTransaction> {
    CsvHandler::new(
        TRANSACTIONS_REPORT,
        &TRANSACTION_SCHEMA,
        build_transaction,
        insert_transaction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_ingest::HeaderIndex;
    use intake_model::CoercionOptions;

    fn row(region: &str, void: &str) -> Vec<String> {
        [
            "txn_001",
            "cus_001",
            "Acme Corp",
            "Valid",
            "",
            "",
            "2024-01-15",
            "2024-01-15",
            "USD",
            "100.00",
            "",
            "7.25",
            "107.25",
            void,
            "1 Main St",
            "Sacramento",
            region,
            "95814",
            "United States",
            "US",
            "California",
            "CA-01",
            "ret_1",
        ]
        .iter()
        .map(|cell| (*cell).to_string())
        .collect()
    }

    fn build(row: &[String]) -> Result<AnrokTransaction, RowError> {
        let header = HeaderIndex::from_row(&TRANSACTION_SCHEMA.header());
        transactions_handler().build(row, &header, &CoercionOptions::default())
    }

    #[test]
    fn test_optional_vat_fields_empty() {
        let record = build(&row("CA", "false")).unwrap();
        assert_eq!(record.valid_vat_ids, None);
        assert_eq!(record.exempt_reasons, None);
        assert!(!record.void);
    }

    #[test]
    fn test_region_normalized() {
        assert_eq!(build(&row(" california ", "no")).unwrap().address_region, "CA");
        assert_eq!(build(&row("Ontario", "no")).unwrap().address_region, "Ontario");
    }

    #[test]
    fn test_invalid_void_flag() {
        assert!(matches!(
            build(&row("CA", "2")),
            Err(RowError::UnparseableValue { .. })
        ));
    }
}
