//! The table facade: read once, then validate, inspect, or bind.

use std::fmt;
use std::io::Read;
use std::marker::PhantomData;

use crate::bind::bind_rows;
use crate::error::{Result, TableError};
use crate::options::{MarshalConfig, ReadOptions};
use crate::reader::{read_rows, strip_bom};
use crate::resolve::HeaderMap;
use crate::schema::Record;
use crate::validate::validate;

/// Rows read from a CSV source, bound to the record type `T`.
///
/// A table holds the rows of its last read together with the error that
/// read produced, if any. Both persist until the next read replaces them,
/// so a read error is reported by every accessor until then.
///
/// Reads consume the table and return the updated one; there is no way to
/// keep using a handle from before the read.
///
/// ```
/// use rowbind_core::{MarshalConfig, Record, Table};
///
/// #[derive(Debug, Default, Record)]
/// struct Person {
///     #[csv_column_name = "name"]
///     name: String,
///     #[csv_column_name = "lastname"]
///     last_name: String,
/// }
///
/// # fn main() -> rowbind_core::Result<()> {
/// let table = Table::<Person>::new().read("lastname,name\nMontenegro,Lucas\n".as_bytes());
/// let people = table.marshal(&MarshalConfig::default())?;
/// assert_eq!(people[0].name, "Lucas");
/// # Ok(())
/// # }
/// ```
pub struct Table<T> {
    rows: Vec<Vec<String>>,
    error: Option<TableError>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Table<T> {
    /// Creates an empty table. Every accessor reports
    /// [`TableError::UninitializedRecords`] until a read succeeds.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            error: None,
            _record: PhantomData,
        }
    }

    /// Reads `source` as comma-separated text.
    pub fn read<R: Read>(self, source: R) -> Self {
        self.read_with(source, &ReadOptions::default())
    }

    /// Reads `source` with explicit tokenizer options.
    ///
    /// On failure the stored rows are cleared and the error is kept.
    pub fn read_with<R: Read>(mut self, source: R, options: &ReadOptions) -> Self {
        match read_rows(source, options) {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "Read CSV rows");
                self.rows = rows;
                self.error = None;
            }
            Err(err) => {
                tracing::debug!(error = %err, "Failed to read CSV rows");
                self.rows = Vec::new();
                self.error = Some(err);
            }
        }
        self
    }

    /// Replaces the table contents with rows tokenized elsewhere.
    ///
    /// Row widths are not checked here; ragged rows bind as far as their
    /// cells reach.
    pub fn read_rows(mut self, mut rows: Vec<Vec<String>>) -> Self {
        strip_bom(&mut rows);
        tracing::debug!(rows = rows.len(), "Loaded pre-tokenized rows");
        self.rows = rows;
        self.error = None;
        self
    }

    /// Runs the full validation.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&MarshalConfig::default())
    }

    /// Runs validation as configured by `config`.
    pub fn validate_with(&self, config: &MarshalConfig) -> Result<()> {
        validate(&self.rows, self.error.as_ref(), T::schema(), config)
    }

    /// Returns true if [`Table::validate`] succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns every row, header included, after full validation.
    pub fn records(&self) -> Result<&[Vec<String>]> {
        self.validate()?;
        Ok(&self.rows)
    }

    /// Returns the full-validation error, or `None` when the table is valid.
    pub fn error(&self) -> Option<TableError> {
        self.validate().err()
    }

    /// Header row of the last successful read, without validation.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Number of data rows (header excluded) of the last successful read.
    pub fn row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Binds every data row into a `T`.
    ///
    /// Validation runs first and any failure is returned before binding.
    pub fn marshal(&self, config: &MarshalConfig) -> Result<Vec<T>> {
        self.validate_with(config)?;

        let schema = T::schema();
        let (header, data) = self
            .rows
            .split_first()
            .ok_or(TableError::UninitializedRecords)?;
        let map = HeaderMap::resolve(schema, header);

        if config.skip_validation {
            for column in map.unmapped_columns() {
                tracing::warn!(
                    column,
                    header = %header[column],
                    "Header column does not match any field"
                );
            }
        }

        let records = bind_rows(schema, &map, data);
        tracing::debug!(
            records = records.len(),
            mapped_columns = map.mapped_count(),
            "Bound CSV rows"
        );
        Ok(records)
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            error: self.error.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.rows.len())
            .field("error", &self.error)
            .finish()
    }
}
