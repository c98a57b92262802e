//! Persistence seam for typed records.

use intake_model::UploadLogEntry;

use crate::context::UploadContext;
use crate::error::StoreError;
use crate::records::{AnrokTransaction, NsInvoiceSalesTax, NsSoLineItem, SfdcOppLineItem};

/// Destination for validated records.
///
/// Each insert returns `Ok(true)` when the record was written and `Ok(false)`
/// when the store declined it without failing (for example a duplicate it
/// skips). Implementations may consult the context's deadline.
pub trait RecordStore {
    fn insert_ns_so_line_item(
        &mut self,
        ctx: &UploadContext,
        record: &NsSoLineItem,
    ) -> Result<bool, StoreError>;

    fn insert_ns_invoice_sales_tax(
        &mut self,
        ctx: &UploadContext,
        record: &NsInvoiceSalesTax,
    ) -> Result<bool, StoreError>;

    fn insert_sfdc_opp_line_item(
        &mut self,
        ctx: &UploadContext,
        record: &SfdcOppLineItem,
    ) -> Result<bool, StoreError>;

    fn insert_anrok_transaction(
        &mut self,
        ctx: &UploadContext,
        record: &AnrokTransaction,
    ) -> Result<bool, StoreError>;

    /// Appends an entry to the upload ledger.
    fn record_upload(&mut self, entry: &UploadLogEntry) -> Result<(), StoreError>;
}

/// In-memory store, used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub ns_so_line_items: Vec<NsSoLineItem>,
    pub ns_invoice_sales_tax: Vec<NsInvoiceSalesTax>,
    pub sfdc_opp_line_items: Vec<SfdcOppLineItem>,
    pub anrok_transactions: Vec<AnrokTransaction>,
    pub uploads: Vec<UploadLogEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records held across all tables, excluding the upload ledger.
    pub fn record_count(&self) -> usize {
        self.ns_so_line_items.len()
            + self.ns_invoice_sales_tax.len()
            + self.sfdc_opp_line_items.len()
            + self.anrok_transactions.len()
    }
}

impl RecordStore for MemoryStore {
    fn insert_ns_so_line_item(
        &mut self,
        _ctx: &UploadContext,
        record: &NsSoLineItem,
    ) -> Result<bool, StoreError> {
        self.ns_so_line_items.push(record.clone());
        Ok(true)
    }

    fn insert_ns_invoice_sales_tax(
        &mut self,
        _ctx: &UploadContext,
        record: &NsInvoiceSalesTax,
    ) -> Result<bool, StoreError> {
        self.ns_invoice_sales_tax.push(record.clone());
        Ok(true)
    }

    fn insert_sfdc_opp_line_item(
        &mut self,
        _ctx: &UploadContext,
        record: &SfdcOppLineItem,
    ) -> Result<bool, StoreError> {
        self.sfdc_opp_line_items.push(record.clone());
        Ok(true)
    }

    fn insert_anrok_transaction(
        &mut self,
        _ctx: &UploadContext,
        record: &AnrokTransaction,
    ) -> Result<bool, StoreError> {
        self.anrok_transactions.push(record.clone());
        Ok(true)
    }

    fn record_upload(&mut self, entry: &UploadLogEntry) -> Result<(), StoreError> {
        self.uploads.push(entry.clone());
        Ok(())
    }
}
