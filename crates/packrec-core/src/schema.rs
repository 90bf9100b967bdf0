//! Schema construction, freezing, and typed field accessors.
//!
//! A schema is built in two phases. [`SchemaBuilder`] accumulates field
//! registrations, assigning each field its packed offset as it arrives.
//! [`SchemaBuilder::freeze`] then consumes the builder, materializes the
//! default template (one fully default-initialized byte block), and yields
//! the immutable [`Schema`]. Because `freeze` takes the builder by value,
//! registering a field after the layout is frozen is impossible by
//! construction rather than a runtime error.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::error::SchemaError;
use crate::field::{FieldDef, FieldValue};
use crate::id::{FieldId, SchemaId};

/// Typed accessor for one field of one schema.
///
/// Returned by [`SchemaBuilder::field`] at registration time. It is `Copy`
/// and carries everything needed to resolve the field against a record's
/// bytes in O(1): the owning schema's ID, the field's registration index,
/// and its packed byte offset.
///
/// An accessor is only meaningful against records of the schema that minted
/// it; record views check the schema ID and panic on a mismatch.
pub struct Field<T> {
    schema: SchemaId,
    id: FieldId,
    offset: u32,
    _marker: PhantomData<fn() -> T>,
}

// Manual impls: `Field<T>` is plain-old-data regardless of `T`.
impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> Field<T> {
    /// ID of the schema that minted this accessor.
    pub fn schema(&self) -> SchemaId {
        self.schema
    }

    /// Registration index of the field.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Byte offset of the field from a record's base address.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl<T: FieldValue> Field<T> {
    /// Storage width of the field in bytes.
    pub fn size_bytes(&self) -> u32 {
        T::KIND.size_bytes()
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("schema", &self.schema)
            .field("id", &self.id)
            .field("offset", &self.offset)
            .finish()
    }
}

/// Ordered field registration for one record type.
///
/// Fields are placed back to back in registration order with no padding:
/// each field's offset is the running size at the moment it is registered.
///
/// ```rust
/// use packrec_core::SchemaBuilder;
///
/// let mut b = SchemaBuilder::new("Point");
/// let x = b.field::<i64>("x", 0).unwrap();
/// let y = b.field::<i64>("y", 0).unwrap();
/// let visible = b.field::<bool>("visible", false).unwrap();
/// let point = b.freeze();
///
/// assert_eq!(x.offset(), 0);
/// assert_eq!(y.offset(), 8);
/// assert_eq!(visible.offset(), 16);
/// assert_eq!(point.size_bytes(), 17);
/// ```
pub struct SchemaBuilder {
    id: SchemaId,
    name: String,
    fields: SmallVec<[FieldDef; 8]>,
    /// Field name → registration index. `IndexMap` keeps iteration in
    /// registration order for diagnostics.
    by_name: IndexMap<String, u32>,
    /// Running offset counter; final value is the record size.
    size: u32,
}

impl SchemaBuilder {
    /// Start building a schema with the given type name.
    ///
    /// The builder's [`SchemaId`] is allocated here, so accessors minted
    /// during registration remain valid for the schema `freeze` produces.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SchemaId::next(),
            name: name.into(),
            fields: SmallVec::new(),
            by_name: IndexMap::new(),
            size: 0,
        }
    }

    /// Register a field of scalar type `T` with the given default value.
    ///
    /// Assigns the field the next packed offset (the sum of the sizes of
    /// all previously registered fields) and returns its typed accessor.
    pub fn field<T: FieldValue>(
        &mut self,
        name: &str,
        default: T,
    ) -> Result<Field<T>, SchemaError> {
        if self.by_name.contains_key(name) {
            return Err(SchemaError::DuplicateField {
                schema: self.name.clone(),
                field: name.to_string(),
            });
        }

        let id = FieldId(self.fields.len() as u32);
        let offset = self.size;
        self.size += T::KIND.size_bytes();
        self.fields.push(FieldDef {
            name: name.to_string(),
            kind: T::KIND,
            default: default.into_value(),
            offset,
            id,
        });
        self.by_name.insert(name.to_string(), id.0);

        Ok(Field {
            schema: self.id,
            id,
            offset,
            _marker: PhantomData,
        })
    }

    /// Record size accumulated so far, in bytes.
    pub fn size_bytes(&self) -> u32 {
        self.size
    }

    /// Number of fields registered so far.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Freeze the layout, consuming the builder.
    ///
    /// Materializes the default template: a `size_bytes`-long block with
    /// every field's default written at its offset. The template is built
    /// exactly once per schema and serves as the bulk-copy source for all
    /// subsequent allocations.
    pub fn freeze(self) -> Schema {
        let mut template = vec![0u8; self.size as usize];
        for def in &self.fields {
            let start = def.offset as usize;
            let end = start + def.kind.size_bytes() as usize;
            def.default.write_to(&mut template[start..end]);
        }
        Schema {
            id: self.id,
            name: self.name,
            fields: self.fields,
            by_name: self.by_name,
            size: self.size,
            template: template.into_boxed_slice(),
        }
    }
}

/// Frozen layout of one record type.
///
/// Holds the ordered field definitions, the total packed size, and the
/// immutable default template. Produced by [`SchemaBuilder::freeze`] and
/// never mutated afterwards.
pub struct Schema {
    id: SchemaId,
    name: String,
    fields: SmallVec<[FieldDef; 8]>,
    by_name: IndexMap<String, u32>,
    size: u32,
    /// Default-initialized reference block; copy source for allocations.
    template: Box<[u8]>,
}

impl Schema {
    /// This schema's unique ID.
    pub fn id(&self) -> SchemaId {
        self.id
    }

    /// The record type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total packed record size in bytes (sum of all field sizes).
    pub fn size_bytes(&self) -> u32 {
        self.size
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The default template: `size_bytes` bytes with every field holding
    /// its declared default.
    pub fn template(&self) -> &[u8] {
        &self.template
    }

    /// Look up a field definition by registration index.
    pub fn field(&self, id: FieldId) -> Option<&FieldDef> {
        self.fields.get(id.0 as usize)
    }

    /// Look up a field definition by name.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        let &idx = self.by_name.get(name)?;
        self.fields.get(idx as usize)
    }

    /// Iterate over field definitions in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("size", &self.size)
            .field("fields", &self.fields.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, Value};

    #[test]
    fn offsets_are_prefix_sums_of_sizes() {
        let mut b = SchemaBuilder::new("Mixed");
        let a = b.field::<bool>("a", false).unwrap();
        let c = b.field::<i64>("c", 0).unwrap();
        let d = b.field::<i16>("d", 0).unwrap();
        let e = b.field::<f32>("e", 0.0).unwrap();

        assert_eq!(a.offset(), 0);
        assert_eq!(c.offset(), 1);
        assert_eq!(d.offset(), 9);
        assert_eq!(e.offset(), 11);
        assert_eq!(b.size_bytes(), 15);
    }

    #[test]
    fn freeze_preserves_total_size_and_order() {
        let mut b = SchemaBuilder::new("Mixed");
        b.field::<i32>("first", 0).unwrap();
        b.field::<bool>("second", true).unwrap();
        let schema = b.freeze();

        assert_eq!(schema.size_bytes(), 5);
        let names: Vec<_> = schema.fields().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(schema.field(FieldId(1)).unwrap().kind, FieldKind::Bool);
    }

    #[test]
    fn duplicate_field_name_is_rejected() {
        let mut b = SchemaBuilder::new("Dup");
        b.field::<i64>("x", 0).unwrap();
        let err = b.field::<bool>("x", false).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
        // The failed registration must not have consumed layout space.
        assert_eq!(b.size_bytes(), 8);
        assert_eq!(b.field_count(), 1);
    }

    #[test]
    fn template_holds_every_default_at_its_offset() {
        let mut b = SchemaBuilder::new("Defaults");
        b.field::<i64>("n", -5).unwrap();
        b.field::<bool>("flag", true).unwrap();
        b.field::<f64>("ratio", 0.5).unwrap();
        let schema = b.freeze();

        let t = schema.template();
        assert_eq!(t.len(), 17);
        assert_eq!(i64::read(&t[0..8]), -5);
        assert!(bool::read(&t[8..9]));
        assert_eq!(f64::read(&t[9..17]), 0.5);
    }

    #[test]
    fn field_by_name_finds_registered_fields() {
        let mut b = SchemaBuilder::new("Named");
        b.field::<i32>("hp", 100).unwrap();
        let schema = b.freeze();

        let def = schema.field_by_name("hp").unwrap();
        assert_eq!(def.default, Value::I32(100));
        assert_eq!(def.id, FieldId(0));
        assert!(schema.field_by_name("mp").is_none());
    }

    #[test]
    fn empty_schema_freezes_to_zero_size() {
        let schema = SchemaBuilder::new("Unit").freeze();
        assert_eq!(schema.size_bytes(), 0);
        assert_eq!(schema.field_count(), 0);
        assert!(schema.template().is_empty());
    }

    #[test]
    fn distinct_builders_get_distinct_schema_ids() {
        let a = SchemaBuilder::new("A").freeze();
        let b = SchemaBuilder::new("B").freeze();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn accessor_schema_id_matches_frozen_schema() {
        let mut b = SchemaBuilder::new("Match");
        let f = b.field::<i64>("x", 0).unwrap();
        let schema = b.freeze();
        assert_eq!(f.schema(), schema.id());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_kind() -> impl Strategy<Value = FieldKind> {
            prop_oneof![
                Just(FieldKind::Bool),
                Just(FieldKind::I8),
                Just(FieldKind::I16),
                Just(FieldKind::I32),
                Just(FieldKind::I64),
                Just(FieldKind::F32),
                Just(FieldKind::F64),
            ]
        }

        fn register(b: &mut SchemaBuilder, name: &str, kind: FieldKind) {
            match kind {
                FieldKind::Bool => drop(b.field::<bool>(name, false).unwrap()),
                FieldKind::I8 => drop(b.field::<i8>(name, 0).unwrap()),
                FieldKind::I16 => drop(b.field::<i16>(name, 0).unwrap()),
                FieldKind::I32 => drop(b.field::<i32>(name, 0).unwrap()),
                FieldKind::I64 => drop(b.field::<i64>(name, 0).unwrap()),
                FieldKind::F32 => drop(b.field::<f32>(name, 0.0).unwrap()),
                FieldKind::F64 => drop(b.field::<f64>(name, 0.0).unwrap()),
            }
        }

        proptest! {
            #[test]
            fn offsets_are_prefix_sums(kinds in prop::collection::vec(arb_kind(), 0..24)) {
                let mut b = SchemaBuilder::new("P");
                for (i, kind) in kinds.iter().enumerate() {
                    register(&mut b, &format!("f{i}"), *kind);
                }
                let schema = b.freeze();

                let mut expected_offset = 0u32;
                for (def, kind) in schema.fields().zip(kinds.iter()) {
                    prop_assert_eq!(def.offset, expected_offset);
                    prop_assert_eq!(def.kind, *kind);
                    expected_offset += kind.size_bytes();
                }
                prop_assert_eq!(schema.size_bytes(), expected_offset);
                prop_assert_eq!(schema.template().len(), expected_offset as usize);
            }
        }
    }
}
