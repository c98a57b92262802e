//! Report handlers: a schema bound to a row builder and an inserter.
//!
//! # Architecture
//!
//! [`CsvHandler<R>`] is fully typed: its builder produces an `R` and its
//! inserter accepts an `R`. The upload loop works with any report through
//! the object-safe [`ReportHandler`] trait, which moves records across as
//! [`TypedRecord`]. Converting back to `R` in [`ReportHandler::insert`] is the
//! only runtime type check in the pipeline.

use intake_ingest::HeaderIndex;
use intake_model::{CoercionOptions, RowError, Schema};
use intake_validate::{ValidatedRow, validate_row};

use crate::context::UploadContext;
use crate::error::StoreError;
use crate::records::{ReportRecord, TypedRecord};
use crate::store::RecordStore;

/// Builds a typed record from a validated row.
pub type BuildFn<R> = fn(&ValidatedRow) -> Result<R, RowError>;

/// Persists a typed record.
pub type InsertFn<R> = fn(&UploadContext, &mut dyn RecordStore, &R) -> Result<bool, StoreError>;

/// Object-safe handler interface used by the upload loop.
pub trait ReportHandler: Send + Sync {
    /// Report identifier within its source, e.g. `SO_line_item_detail`.
    fn report_key(&self) -> &'static str;

    fn schema(&self) -> &'static Schema;

    /// Expected header in declared column order.
    fn header(&self) -> Vec<&'static str> {
        self.schema().header()
    }

    /// Validates a raw row and builds its record.
    fn build_params(
        &self,
        row: &[String],
        header: &HeaderIndex,
        options: &CoercionOptions,
    ) -> Result<TypedRecord, RowError>;

    /// Inserts a record built by this handler.
    ///
    /// # Errors
    ///
    /// [`RowError::RecordTypeMismatch`] when the record came from a different
    /// handler, [`RowError::Persistence`] when the store fails.
    fn insert(
        &self,
        ctx: &UploadContext,
        store: &mut dyn RecordStore,
        record: TypedRecord,
    ) -> Result<bool, RowError>;
}

/// Schema, builder and inserter for one record type.
pub struct CsvHandler<R> {
    report_key: &'static str,
    schema: &'static Schema,
    build: BuildFn<R>,
    insert: InsertFn<R>,
}

impl<R: ReportRecord> CsvHandler<R> {
    pub const fn new(
        report_key: &'static str,
        schema: &'static Schema,
        build: BuildFn<R>,
        insert: InsertFn<R>,
    ) -> Self {
        Self {
            report_key,
            schema,
            build,
            insert,
        }
    }

    /// Validates a raw row and builds a typed record.
    pub fn build<S: AsRef<str>>(
        &self,
        row: &[S],
        header: &HeaderIndex,
        options: &CoercionOptions,
    ) -> Result<R, RowError> {
        let validated = validate_row(row, header, self.schema, options)?;
        (self.build)(&validated)
    }

    /// Inserts a typed record, mapping store failures to row errors.
    pub fn insert_record(
        &self,
        ctx: &UploadContext,
        store: &mut dyn RecordStore,
        record: &R,
    ) -> Result<bool, RowError> {
        (self.insert)(ctx, store, record).map_err(|e| RowError::Persistence {
            message: e.to_string(),
        })
    }
}

impl<R: ReportRecord> ReportHandler for CsvHandler<R> {
    fn report_key(&self) -> &'static str {
        self.report_key
    }

    fn schema(&self) -> &'static Schema {
        self.schema
    }

    fn build_params(
        &self,
        row: &[String],
        header: &HeaderIndex,
        options: &CoercionOptions,
    ) -> Result<TypedRecord, RowError> {
        self.build(row, header, options).map(Into::into)
    }

    fn insert(
        &self,
        ctx: &UploadContext,
        store: &mut dyn RecordStore,
        record: TypedRecord,
    ) -> Result<bool, RowError> {
        let record = R::try_from(record).map_err(|other| RowError::RecordTypeMismatch {
            expected: R::KIND,
            found: other.kind(),
        })?;
        self.insert_record(ctx, store, &record)
    }
}
