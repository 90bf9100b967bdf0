//! Strongly-typed identifiers for schemas and their fields.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a field within a schema.
///
/// Fields are registered in order on a [`SchemaBuilder`](crate::SchemaBuilder)
/// and assigned sequential IDs. `FieldId(n)` corresponds to the n-th
/// registered field, which is also the n-th field in the packed layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`SchemaId`] allocation.
static SCHEMA_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a schema.
///
/// Allocated from a monotonic atomic counter via [`SchemaId::next`]. Two
/// distinct schemas always have different IDs, even if they declare
/// identical layouts. Typed field accessors carry their schema's ID so
/// that resolving an accessor against a record of a different schema is
/// detectable rather than a silent misread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(u64);

impl SchemaId {
    /// Allocate a fresh, unique schema ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(SCHEMA_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_ids_are_unique() {
        let a = SchemaId::next();
        let b = SchemaId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn field_id_display_is_bare_index() {
        assert_eq!(FieldId(7).to_string(), "7");
    }

    #[test]
    fn field_id_from_u32() {
        assert_eq!(FieldId::from(3), FieldId(3));
    }
}
