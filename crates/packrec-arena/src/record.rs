//! Borrowed record views with typed field access.
//!
//! [`RecordRef`] and [`RecordMut`] are the resolve results of a
//! [`RecordStore`](crate::RecordStore) lookup: a borrow of one record's
//! bytes paired with its schema. Field access is O(1) — the typed
//! [`Field`] accessor already carries the packed offset, so a get or set
//! is a bounds-checked slice at `base + offset` plus a native-endian
//! decode/encode.

use packrec_core::{Field, FieldValue, Schema};

/// Shared view of one allocated record.
///
/// Created by [`RecordStore::record`](crate::RecordStore::record).
#[derive(Clone, Copy)]
pub struct RecordRef<'a> {
    schema: &'a Schema,
    data: &'a [u8],
}

impl<'a> RecordRef<'a> {
    pub(crate) fn new(schema: &'a Schema, data: &'a [u8]) -> Self {
        Self { schema, data }
    }

    /// Read the field's value.
    ///
    /// # Panics
    ///
    /// Panics if `field` was minted by a different schema than this
    /// record's. Mixing accessors across schemas is a programming error;
    /// correct programs cannot hit this.
    pub fn get<T: FieldValue>(&self, field: Field<T>) -> T {
        check_schema(self.schema, field.schema());
        let start = field.offset() as usize;
        let end = start + T::KIND.size_bytes() as usize;
        T::read(&self.data[start..end])
    }

    /// The schema this record belongs to.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// The record's raw packed bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }
}

/// Mutable view of one allocated record.
///
/// Created by [`RecordStore::record_mut`](crate::RecordStore::record_mut)
/// and passed to [`RecordStore::alloc_with`](crate::RecordStore::alloc_with)
/// initializers.
pub struct RecordMut<'a> {
    schema: &'a Schema,
    data: &'a mut [u8],
}

impl<'a> RecordMut<'a> {
    pub(crate) fn new(schema: &'a Schema, data: &'a mut [u8]) -> Self {
        Self { schema, data }
    }

    /// Read the field's value.
    ///
    /// # Panics
    ///
    /// Panics if `field` was minted by a different schema than this
    /// record's.
    pub fn get<T: FieldValue>(&self, field: Field<T>) -> T {
        check_schema(self.schema, field.schema());
        let start = field.offset() as usize;
        let end = start + T::KIND.size_bytes() as usize;
        T::read(&self.data[start..end])
    }

    /// Write the field's value.
    ///
    /// # Panics
    ///
    /// Panics if `field` was minted by a different schema than this
    /// record's.
    pub fn set<T: FieldValue>(&mut self, field: Field<T>, value: T) {
        check_schema(self.schema, field.schema());
        let start = field.offset() as usize;
        let end = start + T::KIND.size_bytes() as usize;
        value.write(&mut self.data[start..end]);
    }

    /// The schema this record belongs to.
    pub fn schema(&self) -> &Schema {
        self.schema
    }

    /// The record's raw packed bytes.
    pub fn bytes(&self) -> &[u8] {
        self.data
    }
}

fn check_schema(schema: &Schema, accessor: packrec_core::SchemaId) {
    assert_eq!(
        accessor,
        schema.id(),
        "field accessor from another schema used against schema '{}'",
        schema.name(),
    );
}
