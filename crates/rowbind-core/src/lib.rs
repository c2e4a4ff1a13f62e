//! Binding CSV rows to typed records.
//!
//! This crate turns tabular text (first row a header) into instances of a
//! record type whose fields name the column they expect. Columns are matched
//! by name, case-insensitively, so their order in the input does not matter.
//!
//! # Features
//!
//! - **Schemas**: `#[derive(Record)]` with `#[csv_column_name = "..."]`, or a
//!   hand-built [`Schema`] with typed setters
//! - **Validation**: missing tags, duplicated tags, and header width are
//!   checked in a fixed order before any binding happens
//! - **Sticky read errors**: a malformed input is reported by every accessor
//!   until the next read
//!
//! # Example
//!
//! ```
//! use rowbind_core::{MarshalConfig, Record, Table};
//!
//! #[derive(Debug, Default, Record)]
//! struct Person {
//!     #[csv_column_name = "name"]
//!     name: String,
//!     #[csv_column_name = "lastname"]
//!     last_name: String,
//! }
//!
//! # fn main() -> rowbind_core::Result<()> {
//! let input = "name,lastname\nLucas,Montenegro\nVinicius,Vieira\n";
//! let people = Table::<Person>::new()
//!     .read(input.as_bytes())
//!     .marshal(&MarshalConfig::default())?;
//! assert_eq!(people.len(), 2);
//! # Ok(())
//! # }
//! ```

mod bind;
mod error;
mod options;
mod reader;
mod resolve;
mod schema;
mod table;
mod validate;

// === Error Types ===
pub use error::{Result, TableError};

// === Schemas ===
pub use rowbind_derive::Record;
pub use schema::{FieldSpec, Record, Schema, SchemaBuilder, Setter};

// === Configuration ===
pub use options::{MarshalConfig, ReadOptions};

// === Table Facade ===
pub use table::Table;

// === Building Blocks ===
pub use bind::bind_rows;
pub use reader::read_rows;
pub use resolve::HeaderMap;
pub use validate::{
    validate, validate_header_size, validate_header_values, validate_integrity, validate_tags,
};
