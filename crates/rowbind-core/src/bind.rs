//! Binding data rows into typed records.

use crate::resolve::HeaderMap;
use crate::schema::Schema;

/// Binds each data row into a fresh `T::default()`.
///
/// Cells are copied verbatim into the field their column maps to. Cells in
/// unmapped columns, or past the header width, are ignored; fields with no
/// cell keep their default value. Row order is preserved.
pub fn bind_rows<T: Default>(
    schema: &Schema<T>,
    map: &HeaderMap,
    rows: &[Vec<String>],
) -> Vec<T> {
    rows.iter()
        .enumerate()
        .map(|(row_idx, row)| {
            if row.len() != map.width() {
                tracing::trace!(
                    row = row_idx + 1,
                    cells = row.len(),
                    header_width = map.width(),
                    "Row width differs from header"
                );
            }
            bind_row(schema, map, row)
        })
        .collect()
}

fn bind_row<T: Default>(schema: &Schema<T>, map: &HeaderMap, row: &[String]) -> T {
    let mut record = T::default();
    for (col_idx, cell) in row.iter().enumerate() {
        if let Some(field) = map.field_for(col_idx).and_then(|idx| schema.field(idx)) {
            field.set(&mut record, cell.clone());
        }
    }
    record
}
