//! Schema and packed-layout engine for packrec records.
//!
//! A [`Schema`] describes one record type as an ordered sequence of
//! fixed-width scalar fields, placed back to back with no padding: the
//! offset of field *i* is the sum of the sizes of fields `0..i-1`, in
//! registration order. Multi-byte fields use the host's native byte order.
//!
//! Construction is build-then-consume: a [`SchemaBuilder`] accumulates
//! registrations (assigning each field its offset exactly once) and
//! [`SchemaBuilder::freeze`] turns it into an immutable [`Schema`],
//! materializing the default template — the one cached, fully
//! default-initialized byte block that record stores bulk-copy on every
//! allocation.
//!
//! This crate is pure layout; allocation lives in `packrec-arena`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod schema;

// Public re-exports for the primary API surface.
pub use error::SchemaError;
pub use field::{FieldDef, FieldKind, FieldValue, Value};
pub use id::{FieldId, SchemaId};
pub use schema::{Field, Schema, SchemaBuilder};
