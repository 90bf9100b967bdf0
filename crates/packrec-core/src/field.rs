//! Field kinds, typed default values, and the scalar byte codec.
//!
//! Every field of a schema is one fixed-width scalar. The packed layout
//! places fields back to back with no padding, so a kind is fully described
//! by its byte width plus a native-endian encode/decode pair.

use std::fmt;

use crate::id::FieldId;

/// Classification of a field's scalar kind.
///
/// Each kind has a fixed byte width; multi-byte kinds are stored in the
/// host's native byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// One byte, stored as 0/1. Any nonzero byte reads back as `true`.
    Bool,
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
}

impl FieldKind {
    /// Fixed storage width of this kind in bytes.
    pub fn size_bytes(&self) -> u32 {
        match self {
            Self::Bool | Self::I8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 => 8,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

/// A typed default value, one variant per [`FieldKind`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// Boolean default.
    Bool(bool),
    /// `i8` default.
    I8(i8),
    /// `i16` default.
    I16(i16),
    /// `i32` default.
    I32(i32),
    /// `i64` default.
    I64(i64),
    /// `f32` default.
    F32(f32),
    /// `f64` default.
    F64(f64),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Bool(_) => FieldKind::Bool,
            Self::I8(_) => FieldKind::I8,
            Self::I16(_) => FieldKind::I16,
            Self::I32(_) => FieldKind::I32,
            Self::I64(_) => FieldKind::I64,
            Self::F32(_) => FieldKind::F32,
            Self::F64(_) => FieldKind::F64,
        }
    }

    /// Encode this value into `bytes`, which must be exactly
    /// `self.kind().size_bytes()` long.
    pub(crate) fn write_to(&self, bytes: &mut [u8]) {
        match *self {
            Self::Bool(v) => v.write(bytes),
            Self::I8(v) => v.write(bytes),
            Self::I16(v) => v.write(bytes),
            Self::I32(v) => v.write(bytes),
            Self::I64(v) => v.write(bytes),
            Self::F32(v) => v.write(bytes),
            Self::F64(v) => v.write(bytes),
        }
    }
}

/// Native-endian byte codec for one scalar type.
///
/// Implemented for every type with a [`FieldKind`] variant. `read` and
/// `write` operate on exactly `KIND.size_bytes()` bytes; callers slice the
/// record's storage to the field's extent before calling.
pub trait FieldValue: Copy {
    /// The kind tag for this scalar type.
    const KIND: FieldKind;

    /// Decode a value from the field's bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `KIND.size_bytes()`.
    fn read(bytes: &[u8]) -> Self;

    /// Encode `self` into the field's bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `KIND.size_bytes()`.
    fn write(self, bytes: &mut [u8]);

    /// Wrap `self` as a typed [`Value`].
    fn into_value(self) -> Value;
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn read(bytes: &[u8]) -> Self {
        // Tolerant decode: any nonzero encoding is true, not just 1.
        bytes[0] > 0
    }

    fn write(self, bytes: &mut [u8]) {
        bytes[0] = u8::from(self);
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! numeric_field_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                fn read(bytes: &[u8]) -> Self {
                    const N: usize = std::mem::size_of::<$ty>();
                    let mut raw = [0u8; N];
                    raw.copy_from_slice(&bytes[..N]);
                    <$ty>::from_ne_bytes(raw)
                }

                fn write(self, bytes: &mut [u8]) {
                    const N: usize = std::mem::size_of::<$ty>();
                    bytes[..N].copy_from_slice(&self.to_ne_bytes());
                }

                fn into_value(self) -> Value {
                    Value::$kind(self)
                }
            }
        )*
    };
}

numeric_field_value! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

/// Definition of one registered field.
///
/// Created by [`SchemaBuilder`](crate::SchemaBuilder) during registration
/// and immutable thereafter. The offset is assigned exactly once, equal to
/// the sum of the sizes of all previously registered fields.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    /// Field name, unique within its schema.
    pub name: String,
    /// Scalar kind.
    pub kind: FieldKind,
    /// Default value written into the schema's template.
    pub default: Value,
    /// Byte offset from a record's base; prefix sum of earlier sizes.
    pub offset: u32,
    /// Registration index.
    pub id: FieldId,
}
