//! Tokenizing raw CSV input into rows of string cells.

use std::io::Read;

use csv::{ReaderBuilder, Trim};

use crate::error::Result;
use crate::options::ReadOptions;

/// Reads every row of `source`, the header row included.
///
/// Every row must have as many cells as the first one; a ragged row or
/// invalid UTF-8 fails the whole read. Quoting is parsed permissively:
/// text after a closing quote is appended to the cell, and a quote inside
/// an unquoted cell is kept literally. Empty lines are skipped.
pub fn read_rows<R: Read>(source: R, options: &ReadOptions) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .delimiter(options.delimiter)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .from_reader(source);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    strip_bom(&mut rows);
    Ok(rows)
}

/// Removes a UTF-8 byte-order mark from the first header cell.
pub(crate) fn strip_bom(rows: &mut [Vec<String>]) {
    if let Some(first) = rows.first_mut().and_then(|header| header.first_mut())
        && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
        *first = stripped.to_string();
    }
}
