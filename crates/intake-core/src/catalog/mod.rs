//! Report schemas, row builders and inserters, one module per source.

pub mod anrok;
pub mod ns;
pub mod sfdc;

pub use anrok::TRANSACTION_SCHEMA;
pub use ns::{INVOICE_SALES_TAX_SCHEMA, SO_LINE_ITEM_SCHEMA};
pub use sfdc::OPP_LINE_ITEM_SCHEMA;
