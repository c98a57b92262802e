//! NetSuite saved-search exports.

use intake_model::{FieldSpec, RowError, Schema};
use intake_transform::normalize_us_state;
use intake_validate::ValidatedRow;

use crate::context::UploadContext;
use crate::error::StoreError;
use crate::handler::CsvHandler;
use crate::records::{NsInvoiceSalesTax, NsSoLineItem};
use crate::store::RecordStore;

pub const SO_LINE_ITEM_REPORT: &str = "SO_line_item_detail";
pub const INVOICE_SALES_TAX_REPORT: &str = "Invoice_line_item_detail-Sales_Tax";

static SO_LINE_ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Salesforce Opportunity Id (IO)").required(),
    FieldSpec::text("Salesforce Opportunity Line Id (IO)").required(),
    FieldSpec::text("Customer/Project").required(),
    FieldSpec::text("Document Number").required(),
    FieldSpec::date("Date").required(),
    FieldSpec::date("Start Date").required(),
    FieldSpec::date("End Date").required(),
    FieldSpec::text("Item: Name").required(),
    FieldSpec::text("Item: Display Name").required(),
    FieldSpec::date("Start Date (Line)").required(),
    FieldSpec::date("End Date (Line Level)").required(),
    FieldSpec::numeric("Quantity").required(),
    FieldSpec::numeric("Contract Quantity").required(),
    FieldSpec::numeric("Unit Price").required(),
    FieldSpec::numeric("Total Amount Due Partner").required(),
    FieldSpec::numeric("Amount (Gross)").required(),
    FieldSpec::numeric("Terms: Days Till Net Due").required(),
];

pub static SO_LINE_ITEM_SCHEMA: Schema = Schema::new(SO_LINE_ITEM_REPORT, SO_LINE_ITEM_FIELDS);

static INVOICE_SALES_TAX_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Type").required(),
    FieldSpec::date("Date").required(),
    FieldSpec::date("Date Due").required(),
    FieldSpec::text("Document Number").required(),
    FieldSpec::text("Name").required(),
    FieldSpec::text("Memo"),
    FieldSpec::text("Item").required(),
    FieldSpec::numeric("Qty").required(),
    FieldSpec::numeric("Contract Quantity").required(),
    FieldSpec::numeric("Unit Price").required(),
    FieldSpec::numeric("Amount").required(),
    FieldSpec::date("Start Date (Line)").required(),
    FieldSpec::date("End Date (Line Level)").required(),
    FieldSpec::text("Account").required(),
    FieldSpec::text("Salesforce Opportunity Id (IO)").required(),
    FieldSpec::text("Salesforce Pricebook Id (IO)").required(),
    FieldSpec::text("Item: Internal ID").required(),
    FieldSpec::text("Entity: Internal ID").required(),
    FieldSpec::text("Address: Shipping Address City").required(),
    FieldSpec::text("Address: Shipping Address State")
        .required()
        .normalized_by(normalize_us_state),
    FieldSpec::text("Address: Shipping Address Country").required(),
];

pub static INVOICE_SALES_TAX_SCHEMA: Schema =
    Schema::new(INVOICE_SALES_TAX_REPORT, INVOICE_SALES_TAX_FIELDS);

fn build_so_line_item(row: &ValidatedRow) -> Result<NsSoLineItem, RowError> {
    Ok(NsSoLineItem {
        sfdc_opportunity_id: row.require_text("Salesforce Opportunity Id (IO)")?,
        sfdc_opportunity_line_id: row.require_text("Salesforce Opportunity Line Id (IO)")?,
        customer_project: row.require_text("Customer/Project")?,
        document_number: row.require_text("Document Number")?,
        date: row.require_date("Date")?,
        start_date: row.require_date("Start Date")?,
        end_date: row.require_date("End Date")?,
        item_name: row.require_text("Item: Name")?,
        item_display_name: row.require_text("Item: Display Name")?,
        line_start_date: row.require_date("Start Date (Line)")?,
        line_end_date: row.require_date("End Date (Line Level)")?,
        quantity: row.require_numeric("Quantity")?,
        contract_quantity: row.require_numeric("Contract Quantity")?,
        unit_price: row.require_numeric("Unit Price")?,
        total_amount_due_partner: row.require_numeric("Total Amount Due Partner")?,
        amount_gross: row.require_numeric("Amount (Gross)")?,
        terms_days_till_net_due: row.require_numeric("Terms: Days Till Net Due")?,
    })
}

fn insert_so_line_item(
    ctx: &UploadContext,
    store: &mut dyn RecordStore,
    record: &NsSoLineItem,
) -> Result<bool, StoreError> {
    store.insert_ns_so_line_item(ctx, record)
}

fn build_invoice_sales_tax(row: &ValidatedRow) -> Result<NsInvoiceSalesTax, RowError> {
    Ok(NsInvoiceSalesTax {
        transaction_type: row.require_text("Type")?,
        date: row.require_date("Date")?,
        date_due: row.require_date("Date Due")?,
        document_number: row.require_text("Document Number")?,
        name: row.require_text("Name")?,
        memo: row.text("Memo"),
        item: row.require_text("Item")?,
        qty: row.require_numeric("Qty")?,
        contract_quantity: row.require_numeric("Contract Quantity")?,
        unit_price: row.require_numeric("Unit Price")?,
        amount: row.require_numeric("Amount")?,
        line_start_date: row.require_date("Start Date (Line)")?,
        line_end_date: row.require_date("End Date (Line Level)")?,
        account: row.require_text("Account")?,
        sfdc_opportunity_id: row.require_text("Salesforce Opportunity Id (IO)")?,
        sfdc_pricebook_id: row.require_text("Salesforce Pricebook Id (IO)")?,
        item_internal_id: row.require_text("Item: Internal ID")?,
        entity_internal_id: row.require_text("Entity: Internal ID")?,
        shipping_city: row.require_text("Address: Shipping Address City")?,
        shipping_state: row.require_text("Address: Shipping Address State")?,
        shipping_country: row.require_text("Address: Shipping Address Country")?,
    })
}

fn insert_invoice_sales_tax(
    ctx: &UploadContext,
    store: &mut dyn RecordStore,
    record: &NsInvoiceSalesTax,
) -> Result<bool, StoreError> {
    store.insert_ns_invoice_sales_tax(ctx, record)
}

pub fn so_line_item_handler() -> CsvHandler<NsSoLineItem> {
    CsvHandler::new(
        SO_LINE_ITEM_REPORT,
        &SO_LINE_ITEM_SCHEMA,
        build_so_line_item,
        insert_so_line_item,
    )
}

pub fn invoice_sales_tax_handler() -> CsvHandler<NsInvoiceSalesTax> {
    CsvHandler::new(
        INVOICE_SALES_TAX_REPORT,
        &INVOICE_SALES_TAX_SCHEMA,
        build_invoice_sales_tax,
        insert_invoice_sales_tax,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_ingest::HeaderIndex;
    use intake_model::CoercionOptions;

    fn so_row() -> Vec<String> {
        [
            "006ABC",
            "00kXYZ",
            "Acme Corp : Project 1",
            "=\"SO-1001\"",
            "01/15/2024",
            "2024-02-01",
            "2025-01-31",
            "PLAT-ENT",
            "Platform Enterprise",
            "2024-02-01",
            "2025-01-31",
            "12",
            "12",
            "$1,000.00",
            "9,600.00",
            "12,000.00",
            "30",
        ]
        .iter()
        .map(|cell| (*cell).to_string())
        .collect()
    }

    #[test]
    fn test_so_line_item_builds() {
        let handler = so_line_item_handler();
        let header = HeaderIndex::from_row(&SO_LINE_ITEM_SCHEMA.header());
        let record = handler
            .build(&so_row(), &header, &CoercionOptions::default())
            .unwrap();
        assert_eq!(record.document_number, "SO-1001");
        assert_eq!(record.unit_price.to_string(), "1000.00");
        assert_eq!(record.date.to_string(), "2024-01-15");
    }

    #[test]
    fn test_so_line_item_rejects_bad_amount() {
        let handler = so_line_item_handler();
        let header = HeaderIndex::from_row(&SO_LINE_ITEM_SCHEMA.header());
        let mut row = so_row();
        row[13] = "one thousand".to_string();
        let err = handler
            .build(&row, &header, &CoercionOptions::default())
            .unwrap_err();
        assert!(matches!(err, RowError::UnparseableValue { ref field, .. } if field == "Unit Price"));
    }

    #[test]
    fn test_invoice_memo_optional_and_state_normalized() {
        let handler = invoice_sales_tax_handler();
        let header = HeaderIndex::from_row(&INVOICE_SALES_TAX_SCHEMA.header());
        let row: Vec<String> = [
            "Invoice",
            "2024-01-15",
            "2024-02-14",
            "INV-77",
            "Acme Corp",
            "",
            "PLAT-ENT",
            "1",
            "1",
            "500",
            "500",
            "2024-01-01",
            "2024-12-31",
            "4000 Revenue",
            "006ABC",
            "01sPB",
            "1234",
            "5678",
            "Sacramento",
            "california",
            "US",
        ]
        .iter()
        .map(|cell| (*cell).to_string())
        .collect();

        let record = handler
            .build(&row, &header, &CoercionOptions::default())
            .unwrap();
        assert_eq!(record.memo, None);
        assert_eq!(record.shipping_state, "CA");
    }
}
