//! Library side of the `intake` command: configuration, logging, the
//! JSON-lines record store, and the report listing.

pub mod config;
pub mod listing;
pub mod logging;
pub mod store;
