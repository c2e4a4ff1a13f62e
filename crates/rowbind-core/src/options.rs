//! Configuration options for reading and binding tables.

use serde::{Deserialize, Serialize};

/// Options controlling [`Table::marshal`](crate::Table::marshal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarshalConfig {
    /// Skip schema and header checks. Read errors and the
    /// uninitialized-table check still apply.
    pub skip_validation: bool,

    /// Require every declared tag to appear in the header.
    /// Default: false (unmatched fields keep their default value).
    pub require_all_columns: bool,
}

impl MarshalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_validation(mut self, skip: bool) -> Self {
        self.skip_validation = skip;
        self
    }

    pub fn with_require_all_columns(mut self, require: bool) -> Self {
        self.require_all_columns = require;
        self
    }
}

/// Options for tokenizing raw CSV input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,

    /// Trim surrounding whitespace from every cell, header included.
    pub trim: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
