//! Typed records produced by report row builders.
//!
//! Required columns map to plain values; optional columns map to `Option`.
//! Amounts are exact decimals and serialize as strings.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// NetSuite sales order line (`SO_line_item_detail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsSoLineItem {
    pub sfdc_opportunity_id: String,
    pub sfdc_opportunity_line_id: String,
    pub customer_project: String,
    pub document_number: String,
    pub date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub item_name: String,
    pub item_display_name: String,
    pub line_start_date: NaiveDate,
    pub line_end_date: NaiveDate,
    pub quantity: BigDecimal,
    pub contract_quantity: BigDecimal,
    pub unit_price: BigDecimal,
    pub total_amount_due_partner: BigDecimal,
    pub amount_gross: BigDecimal,
    pub terms_days_till_net_due: BigDecimal,
}

/// NetSuite invoice line with sales tax detail
/// (`Invoice_line_item_detail-Sales_Tax`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsInvoiceSalesTax {
    pub transaction_type: String,
    pub date: NaiveDate,
    pub date_due: NaiveDate,
    pub document_number: String,
    pub name: String,
    pub memo: Option<String>,
    pub item: String,
    pub qty: BigDecimal,
    pub contract_quantity: BigDecimal,
    pub unit_price: BigDecimal,
    pub amount: BigDecimal,
    pub line_start_date: NaiveDate,
    pub line_end_date: NaiveDate,
    pub account: String,
    pub sfdc_opportunity_id: String,
    pub sfdc_pricebook_id: String,
    pub item_internal_id: String,
    pub entity_internal_id: String,
    pub shipping_city: String,
    /// Two-letter code for US states, otherwise as exported.
    pub shipping_state: String,
    pub shipping_country: String,
}

/// Salesforce closed-won opportunity product line
/// (`Closed_Won_Ops-Products_Report`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfdcOppLineItem {
    pub opportunity_id: String,
    pub opportunity_product_id: String,
    pub opportunity_name: String,
    pub account_name: String,
    pub close_date: NaiveDate,
    pub booked_date: NaiveDate,
    pub fiscal_period: String,
    pub payment_schedule: String,
    pub payment_due: String,
    pub contract_start_date: NaiveDate,
    pub contract_end_date: NaiveDate,
    pub term_in_months_deprecated: BigDecimal,
    pub product_name: String,
    pub deployment_type: String,
    pub amount: BigDecimal,
    pub quantity: BigDecimal,
    pub list_price: BigDecimal,
    pub sales_price: BigDecimal,
    pub total_price: BigDecimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub term_in_months: BigDecimal,
    pub product_code: String,
    pub total_amount_due_customer: BigDecimal,
    pub total_amount_due_partner: BigDecimal,
    pub active_product: bool,
}

/// Anrok tax transaction (`Transactions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnrokTransaction {
    pub transaction_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub vat_id_validation_status: String,
    pub valid_vat_ids: Option<String>,
    pub other_vat_ids: Option<String>,
    pub invoice_date: NaiveDate,
    pub tax_date: NaiveDate,
    pub currency: String,
    pub sales_amount: BigDecimal,
    pub exempt_reasons: Option<String>,
    pub tax_amount: BigDecimal,
    pub invoice_amount: BigDecimal,
    pub void: bool,
    pub address_line_1: String,
    pub address_city: String,
    /// Two-letter code for US states, otherwise as exported.
    pub address_region: String,
    pub address_postal_code: String,
    pub address_country: String,
    pub country_code: String,
    pub jurisdictions: String,
    pub jurisdiction_ids: String,
    pub return_ids: String,
}

/// Every record type a handler can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "record")]
pub enum TypedRecord {
    NsSoLineItem(NsSoLineItem),
    NsInvoiceSalesTax(NsInvoiceSalesTax),
    SfdcOppLineItem(SfdcOppLineItem),
    AnrokTransaction(AnrokTransaction),
}

impl TypedRecord {
    /// Variant name, used in mismatch errors and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            TypedRecord::NsSoLineItem(_) => NsSoLineItem::KIND,
            TypedRecord::NsInvoiceSalesTax(_) => NsInvoiceSalesTax::KIND,
            TypedRecord::SfdcOppLineItem(_) => SfdcOppLineItem::KIND,
            TypedRecord::AnrokTransaction(_) => AnrokTransaction::KIND,
        }
    }
}

/// A record type bound to one variant of [`TypedRecord`].
///
/// `TryFrom` hands the record back unchanged when the variant does not match.
pub trait ReportRecord:
    Into<TypedRecord> + TryFrom<TypedRecord, Error = TypedRecord> + Send + Sync + 'static
{
    const KIND: &'static str;
}

impl ReportRecord for NsSoLineItem {
    const KIND: &'static str = "NsSoLineItem";
}

impl ReportRecord for NsInvoiceSalesTax {
    const KIND: &'static str = "NsInvoiceSalesTax";
}

impl ReportRecord for SfdcOppLineItem {
    const KIND: &'static str = "SfdcOppLineItem";
}

impl ReportRecord for AnrokTransaction {
    const KIND: &'static str = "AnrokTransaction";
}

impl From<NsSoLineItem> for TypedRecord {
    fn from(record: NsSoLineItem) -> Self {
        TypedRecord::NsSoLineItem(record)
    }
}

impl From<NsInvoiceSalesTax> for TypedRecord {
    fn from(record: NsInvoiceSalesTax) -> Self {
        TypedRecord::NsInvoiceSalesTax(record)
    }
}

impl From<SfdcOppLineItem> for TypedRecord {
    fn from(record: SfdcOppLineItem) -> Self {
        TypedRecord::SfdcOppLineItem(record)
    }
}

impl From<AnrokTransaction> for TypedRecord {
    fn from(record: AnrokTransaction) -> Self {
        TypedRecord::AnrokTransaction(record)
    }
}

impl TryFrom<TypedRecord> for NsSoLineItem {
    type Error = TypedRecord;

    fn try_from(record: TypedRecord) -> Result<Self, Self::Error> {
        match record {
            TypedRecord::NsSoLineItem(inner) => Ok(inner),
            other => Err(other),
        }
    }
}

impl TryFrom<TypedRecord> for NsInvoiceSalesTax {
    type Error = TypedRecord;

    fn try_from(record: TypedRecord) -> Result<Self, Self::Error> {
        match record {
            TypedRecord::NsInvoiceSalesTax(inner) => Ok(inner),
            other => Err(other),
        }
    }
}

impl TryFrom<TypedRecord> for SfdcOppLineItem {
    type Error = TypedRecord;

    fn try_from(record: TypedRecord) -> Result<Self, Self::Error> {
        match record {
            TypedRecord::SfdcOppLineItem(inner) => Ok(inner),
            other => Err(other),
        }
    }
}

impl TryFrom<TypedRecord> for AnrokTransaction {
    type Error = TypedRecord;

    fn try_from(record: TypedRecord) -> Result<Self, Self::Error> {
        match record {
            TypedRecord::AnrokTransaction(inner) => Ok(inner),
            other => Err(other),
        }
    }
}
