//! Error types for table reading, validation, and binding.

use thiserror::Error;

/// Errors produced while reading, validating, or binding a table.
///
/// Values are `Clone` so that a read error can be kept on the table and
/// surfaced again by every accessor until the next read replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    // === State Errors ===
    /// No rows have been read into the table yet.
    #[error("uninitialized records")]
    UninitializedRecords,

    // === Row Reader Errors ===
    /// A row has a different number of cells than the first row.
    #[error("record on line {line} has {found} fields, expected {expected}")]
    UnequalLengths {
        line: u64,
        expected: u64,
        found: u64,
    },

    /// The input could not be tokenized (bad quoting, invalid UTF-8).
    #[error("malformed CSV on line {line}: {message}")]
    Malformed { line: u64, message: String },

    /// The underlying reader failed.
    #[error("failed to read CSV input: {message}")]
    Io { message: String },

    // === Schema Errors ===
    /// A declared field has no column tag.
    #[error("missing required tag on field `{field}`")]
    MissingRequiredTag { field: &'static str },

    /// Two or more fields declare the same column tag.
    #[error("duplicated tag '{tag}'")]
    DuplicatedTag { tag: String },

    // === Header Errors ===
    /// The header width does not match the number of declared fields.
    #[error("invalid header size: expected {expected} columns, found {found}")]
    InvalidHeaderSize { expected: usize, found: usize },

    /// One or more declared tags do not appear in the header.
    #[error("invalid header values: missing columns {}", missing.join(", "))]
    InvalidHeaderValues { missing: Vec<String> },
}

impl TableError {
    /// Returns true for errors raised by the row reader rather than by
    /// schema or header validation.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            Self::UnequalLengths { .. } | Self::Malformed { .. } | Self::Io { .. }
        )
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::UnequalLengths {
                line,
                expected: *expected_len,
                found: *len,
            },
            csv::ErrorKind::Io(source) => Self::Io {
                message: source.to_string(),
            },
            _ => Self::Malformed {
                line,
                message: err.to_string(),
            },
        }
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
