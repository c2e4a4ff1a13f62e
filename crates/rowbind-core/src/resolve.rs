//! Header resolution: which column feeds which field.

use crate::schema::Schema;

/// Column-to-field mapping for one header row.
///
/// Dense: slot `i` holds the index (into the schema) of the field fed by
/// header column `i`, or `None` when no field claims that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    slots: Vec<Option<usize>>,
}

impl HeaderMap {
    /// Resolves `header` against `schema`.
    ///
    /// Fields are visited in declaration order and matched against header
    /// cells case-insensitively. If two fields share a tag (possible only
    /// when validation is skipped) the later field claims the column.
    pub fn resolve<T>(schema: &Schema<T>, header: &[String]) -> Self {
        let mut slots = vec![None; header.len()];

        for (field_idx, field) in schema.fields().iter().enumerate() {
            let Some(tag) = field.tag() else {
                continue;
            };
            for (col_idx, cell) in header.iter().enumerate() {
                if eq_fold(cell, tag) {
                    slots[col_idx] = Some(field_idx);
                }
            }
        }

        Self { slots }
    }

    /// Field index fed by `column`, if any. Columns past the header width
    /// are unmapped.
    pub fn field_for(&self, column: usize) -> Option<usize> {
        self.slots.get(column).copied().flatten()
    }

    /// Header width this map was built from.
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Number of columns claimed by some field.
    pub fn mapped_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Indices of header columns no field claims.
    pub fn unmapped_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(idx, _)| idx)
    }
}

/// Case-insensitive string equality using Unicode lowercase mapping.
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
