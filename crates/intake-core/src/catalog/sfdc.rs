//! Salesforce report exports.

use intake_model::{FieldSpec, RowError, Schema};
use intake_validate::ValidatedRow;

use crate::context::UploadContext;
use crate::error::StoreError;
use crate::handler::CsvHandler;
use crate::records::SfdcOppLineItem;
use crate::store::RecordStore;

pub const OPP_LINE_ITEM_REPORT: &str = "Closed_Won_Ops-Products_Report";

static OPP_LINE_ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Opportunity ID Casesafe").required(),
    FieldSpec::text("Opportunity Product Casesafe ID").required(),
    FieldSpec::text("Opportunity Name").required(),
    FieldSpec::text("Account Name").required(),
    FieldSpec::date("Close Date").required(),
    FieldSpec::date("Booked Date").required(),
    FieldSpec::text("Fiscal Period").required(),
    FieldSpec::text("Payment Schedule").required(),
    FieldSpec::text("Payment Due").required(),
    FieldSpec::date("Contract Start Date").required(),
    FieldSpec::date("Contract End Date").required(),
    FieldSpec::numeric("Term in Months_deprecated").required(),
    FieldSpec::text("Product Name").required(),
    FieldSpec::text("Deployment Type").required(),
    FieldSpec::numeric("Amount").required(),
    FieldSpec::numeric("Quantity").required(),
    FieldSpec::numeric("List Price").required(),
    FieldSpec::numeric("Sales Price").required(),
    FieldSpec::numeric("Total Price").required(),
    FieldSpec::date("Start Date").required(),
    FieldSpec::date("End Date").required(),
    FieldSpec::numeric("Term in Months").required(),
    FieldSpec::text("Product Code").required(),
    FieldSpec::numeric("Total Amount Due - Customer").required(),
    FieldSpec::numeric("Total Amount Due - Partner").required(),
    FieldSpec::boolean("Active Product").required(),
];

pub static OPP_LINE_ITEM_SCHEMA: Schema = Schema::new(OPP_LINE_ITEM_REPORT, OPP_LINE_ITEM_FIELDS);

fn build_opp_line_item(row: &ValidatedRow) -> Result<SfdcOppLineItem, RowError> {
    Ok(SfdcOppLineItem {
        opportunity_id: row.require_text("Opportunity ID Casesafe")?,
        opportunity_product_id: row.require_text("Opportunity Product Casesafe ID")?,
        opportunity_name: row.require_text("Opportunity Name")?,
        account_name: row.require_text("Account Name")?,
        close_date: row.require_date("Close Date")?,
        booked_date: row.require_date("Booked Date")?,
        fiscal_period: row.require_text("Fiscal Period")?,
        payment_schedule: row.require_text("Payment Schedule")?,
        payment_due: row.require_text("Payment Due")?,
        contract_start_date: row.require_date("Contract Start Date")?,
        contract_end_date: row.require_date("Contract End Date")?,
        term_in_months_deprecated: row.require_numeric("Term in Months_deprecated")?,
        product_name: row.require_text("Product Name")?,
        deployment_type: row.require_text("Deployment Type")?,
        amount: row.require_numeric("Amount")?,
        quantity: row.require_numeric("Quantity")?,
        list_price: row.require_numeric("List Price")?,
        sales_price: row.require_numeric("Sales Price")?,
        total_price: row.require_numeric("Total Price")?,
        start_date: row.require_date("Start Date")?,
        end_date: row.require_date("End Date")?,
        term_in_months: row.require_numeric("Term in Months")?,
        product_code: row.require_text("Product Code")?,
        total_amount_due_customer: row.require_numeric("Total Amount Due - Customer")?,
        total_amount_due_partner: row.require_numeric("Total Amount Due - Partner")?,
        active_product: row.require_bool("Active Product")?,
    })
}

fn insert_opp_line_item(
    ctx: &UploadContext,
    store: &mut dyn RecordStore,
    record: &SfdcOppLineItem,
) -> Result<bool, StoreError> {
    store.insert_sfdc_opp_line_item(ctx, record)
}

pub fn opp_line_item_handler() -> CsvHandler<SfdcOppLineItem> {
    CsvHandler::new(
        OPP_LINE_ITEM_REPORT,
        &OPP_LINE_ITEM_SCHEMA,
        build_opp_line_item,
        insert_opp_line_item,
    )
}
