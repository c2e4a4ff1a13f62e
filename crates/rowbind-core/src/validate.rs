//! Integrity and schema validation.
//!
//! Checks always run in the same order so every accessor reports the same
//! error for the same state:
//!
//! 1. a stored read error, verbatim
//! 2. [`TableError::UninitializedRecords`] when no rows were read
//! 3. [`TableError::MissingRequiredTag`]
//! 4. [`TableError::DuplicatedTag`]
//! 5. [`TableError::InvalidHeaderSize`]
//! 6. [`TableError::InvalidHeaderValues`] (only with `require_all_columns`)
//!
//! Steps 3 onwards are skipped with `skip_validation`.

use std::collections::HashSet;

use crate::error::{Result, TableError};
use crate::options::MarshalConfig;
use crate::resolve::eq_fold;
use crate::schema::Schema;

/// Runs the integrity check and, unless skipped, the schema checks.
pub fn validate<T>(
    rows: &[Vec<String>],
    read_error: Option<&TableError>,
    schema: &Schema<T>,
    config: &MarshalConfig,
) -> Result<()> {
    validate_integrity(rows, read_error)?;

    if !config.skip_validation {
        validate_tags(schema)?;
        // Integrity guarantees a header row.
        let header = rows.first().map_or(&[][..], Vec::as_slice);
        validate_header_size(schema, header)?;
        if config.require_all_columns {
            validate_header_values(schema, header)?;
        }
    }

    Ok(())
}

/// Fails with the stored read error, or when no rows have been read.
pub fn validate_integrity(rows: &[Vec<String>], read_error: Option<&TableError>) -> Result<()> {
    if let Some(err) = read_error {
        return Err(err.clone());
    }
    if rows.is_empty() {
        return Err(TableError::UninitializedRecords);
    }
    Ok(())
}

/// Every field must carry a tag, and no two fields may share one.
pub fn validate_tags<T>(schema: &Schema<T>) -> Result<()> {
    if let Some(field) = schema.fields().iter().find(|f| f.tag().is_none()) {
        return Err(TableError::MissingRequiredTag {
            field: field.name(),
        });
    }

    let mut seen = HashSet::with_capacity(schema.len());
    for (_, tag) in schema.tags() {
        let tag = tag.unwrap_or_default();
        if !seen.insert(tag) {
            return Err(TableError::DuplicatedTag {
                tag: tag.to_string(),
            });
        }
    }

    Ok(())
}

/// The header must have exactly one column per declared field.
pub fn validate_header_size<T>(schema: &Schema<T>, header: &[String]) -> Result<()> {
    if header.len() != schema.len() {
        return Err(TableError::InvalidHeaderSize {
            expected: schema.len(),
            found: header.len(),
        });
    }
    Ok(())
}

/// Every declared tag must match some header cell.
pub fn validate_header_values<T>(schema: &Schema<T>, header: &[String]) -> Result<()> {
    let missing: Vec<String> = schema
        .tags()
        .filter_map(|(_, tag)| tag)
        .filter(|tag| !header.iter().any(|cell| eq_fold(cell, tag)))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TableError::InvalidHeaderValues { missing })
    }
}
