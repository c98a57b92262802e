//! JSON-lines record store: one append-only file per table.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use intake_core::{
    AnrokTransaction, NsInvoiceSalesTax, NsSoLineItem, RecordStore, SfdcOppLineItem, StoreError,
    UploadContext,
};
use intake_model::UploadLogEntry;

pub const NS_SO_LINE_ITEMS: &str = "ns_so_line_items";
pub const NS_INVOICE_SALES_TAX_ITEMS: &str = "ns_invoice_sales_tax_items";
pub const SFDC_OPP_LINE_ITEMS: &str = "sfdc_opp_line_items";
pub const ANROK_TRANSACTIONS: &str = "anrok_transactions";
pub const CSV_UPLOADS: &str = "csv_uploads";

/// Appends records as JSON lines to `<dir>/<table>.jsonl`.
///
/// Files are opened on first write and buffered. Call [`JsonlStore::flush`]
/// before reading them back.
#[derive(Debug)]
pub struct JsonlStore {
    dir: PathBuf,
    writers: HashMap<&'static str, BufWriter<File>>,
}

impl JsonlStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            writers: HashMap::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.jsonl"))
    }

    fn append<T: Serialize>(&mut self, table: &'static str, record: &T) -> Result<(), StoreError> {
        let line = serde_json::to_string(record).map_err(|e| StoreError::Serialization {
            table,
            message: e.to_string(),
        })?;
        let path = self.table_path(table);
        let io_error = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        let writer = match self.writers.entry(table) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(io_error)?;
                debug!(path = %path.display(), "Opened table file");
                entry.insert(BufWriter::new(file))
            }
        };
        writeln!(writer, "{line}").map_err(io_error)
    }

    /// Flushes every open table file.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        for (table, writer) in &mut self.writers {
            writer.flush().map_err(|source| StoreError::Io {
                path: self.dir.join(format!("{table}.jsonl")),
                source,
            })?;
        }
        Ok(())
    }
}

impl RecordStore for JsonlStore {
    fn insert_ns_so_line_item(
        &mut self,
        _ctx: &UploadContext,
        record: &NsSoLineItem,
    ) -> Result<bool, StoreError> {
        self.append(NS_SO_LINE_ITEMS, record).map(|()| true)
    }

    fn insert_ns_invoice_sales_tax(
        &mut self,
        _ctx: &UploadContext,
        record: &NsInvoiceSalesTax,
    ) -> Result<bool, StoreError> {
        self.append(NS_INVOICE_SALES_TAX_ITEMS, record).map(|()| true)
    }

    fn insert_sfdc_opp_line_item(
        &mut self,
        _ctx: &UploadContext,
        record: &SfdcOppLineItem,
    ) -> Result<bool, StoreError> {
        self.append(SFDC_OPP_LINE_ITEMS, record).map(|()| true)
    }

    fn insert_anrok_transaction(
        &mut self,
        _ctx: &UploadContext,
        record: &AnrokTransaction,
    ) -> Result<bool, StoreError> {
        self.append(ANROK_TRANSACTIONS, record).map(|()| true)
    }

    fn record_upload(&mut self, entry: &UploadLogEntry) -> Result<(), StoreError> {
        self.append(CSV_UPLOADS, entry)?;
        self.flush()
    }
}
