//! Record schema descriptors.
//!
//! A [`Schema`] is the ordered list of fields a record type declares, each
//! with the column tag it binds to and a typed setter. Schemas are usually
//! generated by `#[derive(Record)]`, but can be assembled by hand with
//! [`SchemaBuilder`] when the tags are only known at runtime.

use std::fmt;

/// Setter writing a raw cell value into one field of a record.
pub type Setter<T> = fn(&mut T, String);

/// A record type that can be bound from table rows.
///
/// `Default` supplies the zero-valued instance each data row starts from.
pub trait Record: Default + 'static {
    /// Returns the schema for this type, built once and cached.
    fn schema() -> &'static Schema<Self>;
}

/// One declared field of a record type.
pub struct FieldSpec<T> {
    name: &'static str,
    tag: Option<String>,
    setter: Setter<T>,
}

impl<T> FieldSpec<T> {
    /// Field name as declared on the record type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Column tag, or `None` when the field declares none.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Writes `value` into this field of `record`.
    pub fn set(&self, record: &mut T, value: String) {
        (self.setter)(record, value);
    }
}

impl<T> Clone for FieldSpec<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            tag: self.tag.clone(),
            setter: self.setter,
        }
    }
}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Ordered field declarations of a record type.
pub struct Schema<T> {
    fields: Vec<FieldSpec<T>>,
}

impl<T> Schema<T> {
    /// Starts an empty schema builder.
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec<T>] {
        &self.fields
    }

    /// Returns the field at `index`.
    pub fn field(&self, index: usize) -> Option<&FieldSpec<T>> {
        self.fields.get(index)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `(field name, column tag)` pairs in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.fields.iter().map(|f| (f.name, f.tag()))
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

/// Builder for [`Schema`]. Fields are kept in the order they are added.
pub struct SchemaBuilder<T> {
    fields: Vec<FieldSpec<T>>,
}

impl<T> SchemaBuilder<T> {
    /// Adds a field bound to the column named `tag`.
    ///
    /// An empty tag is treated the same as no tag.
    pub fn column(
        mut self,
        name: &'static str,
        tag: impl Into<String>,
        setter: Setter<T>,
    ) -> Self {
        let tag = tag.into();
        self.fields.push(FieldSpec {
            name,
            tag: (!tag.is_empty()).then_some(tag),
            setter,
        });
        self
    }

    /// Adds a field that declares no column tag.
    pub fn untagged(mut self, name: &'static str, setter: Setter<T>) -> Self {
        self.fields.push(FieldSpec {
            name,
            tag: None,
            setter,
        });
        self
    }

    pub fn build(self) -> Schema<T> {
        Schema {
            fields: self.fields,
        }
    }
}
