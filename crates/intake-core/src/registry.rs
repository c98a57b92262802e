//! Source and report handler registry.
//!
//! Each [`Source`] owns an immutable map from report key to handler. The maps
//! are built on first access and cached for the process lifetime.
//!
//! # Example
//!
//! ```
//! use intake_core::{Source, resolve_handler};
//!
//! let handler = resolve_handler("NS", "SO_line_item_detail").unwrap();
//! assert_eq!(handler.report_key(), "SO_line_item_detail");
//! assert_eq!(Source::Anrok.handlers().report_keys(), vec!["Transactions"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::catalog::{anrok, ns, sfdc};
use crate::error::{Result, UploadError};
use crate::handler::ReportHandler;

/// Upstream system an export comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    /// NetSuite ERP.
    Ns,
    /// Salesforce CRM.
    Sfdc,
    /// Anrok tax engine.
    Anrok,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Ns, Source::Sfdc, Source::Anrok];

    /// Short identifier used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Source::Ns => "ns",
            Source::Sfdc => "sfdc",
            Source::Anrok => "anrok",
        }
    }

    /// Product name for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Source::Ns => "NetSuite",
            Source::Sfdc => "Salesforce",
            Source::Anrok => "Anrok",
        }
    }

    /// Builds a fresh directory map for this source.
    pub fn build_handlers(self) -> SourceHandlers {
        let mut handlers = SourceHandlers::new(self);
        match self {
            Source::Ns => {
                handlers.register(Box::new(ns::so_line_item_handler()));
                handlers.register(Box::new(ns::invoice_sales_tax_handler()));
            }
            Source::Sfdc => {
                handlers.register(Box::new(sfdc::opp_line_item_handler()));
            }
            Source::Anrok => {
                handlers.register(Box::new(anrok::transactions_handler()));
            }
        }
        handlers
    }

    /// The cached directory map for this source.
    pub fn handlers(self) -> &'static SourceHandlers {
        registry().source(self)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "netsuite" => Ok(Source::Ns),
            "sfdc" | "salesforce" => Ok(Source::Sfdc),
            "anrok" => Ok(Source::Anrok),
            _ => Err(UploadError::UnknownSource {
                name: s.to_string(),
            }),
        }
    }
}

/// Report key to handler map for one source.
pub struct SourceHandlers {
    source: Source,
    handlers: BTreeMap<&'static str, Box<dyn ReportHandler>>,
}

impl SourceHandlers {
    fn new(source: Source) -> Self {
        Self {
            source,
            handlers: BTreeMap::new(),
        }
    }

    fn register(&mut self, handler: Box<dyn ReportHandler>) {
        self.handlers.insert(handler.report_key(), handler);
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Exact, case-sensitive report lookup.
    pub fn get(&self, report: &str) -> Option<&dyn ReportHandler> {
        self.handlers.get(report).map(|h| h.as_ref())
    }

    pub fn report_keys(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn ReportHandler)> + '_ {
        self.handlers
            .iter()
            .map(|(key, handler)| (*key, handler.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Handler maps for every source.
pub struct Registry {
    ns: SourceHandlers,
    sfdc: SourceHandlers,
    anrok: SourceHandlers,
}

impl Registry {
    fn build() -> Self {
        Self {
            ns: Source::Ns.build_handlers(),
            sfdc: Source::Sfdc.build_handlers(),
            anrok: Source::Anrok.build_handlers(),
        }
    }

    pub fn source(&self, source: Source) -> &SourceHandlers {
        match source {
            Source::Ns => &self.ns,
            Source::Sfdc => &self.sfdc,
            Source::Anrok => &self.anrok,
        }
    }

    /// Sources in [`Source::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceHandlers> + '_ {
        Source::ALL.into_iter().map(|source| self.source(source))
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::build)
}

/// Looks up a handler by source name and report key.
pub fn resolve_handler(source: &str, report: &str) -> Result<&'static dyn ReportHandler> {
    let source: Source = source.parse()?;
    source
        .handlers()
        .get(report)
        .ok_or_else(|| UploadError::UnknownReport {
            source_name: source.to_string(),
            report: report.to_string(),
        })
}
