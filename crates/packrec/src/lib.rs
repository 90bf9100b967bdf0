//! Packrec: flyweight packed off-heap records.
//!
//! A schema describes one record type as an ordered sequence of
//! fixed-width scalar fields placed back to back with no padding. Freezing
//! the schema materializes its default template — one fully
//! default-initialized byte block — and every allocation is then a single
//! bulk copy of that template instead of a per-field write loop.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the packrec sub-crates. For most users, adding `packrec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use packrec::prelude::*;
//!
//! // Define the record type. Offsets accumulate in registration order:
//! // x at 0, y at 8, visible at 16; 17 bytes total, no padding.
//! let mut b = SchemaBuilder::new("Point");
//! let x = b.field::<i64>("x", 0).unwrap();
//! let y = b.field::<i64>("y", 0).unwrap();
//! let visible = b.field::<bool>("visible", false).unwrap();
//! let mut points = RecordStore::new(b.freeze());
//!
//! // A plain allocation reads every field's declared default.
//! let origin = points.alloc().unwrap();
//! assert_eq!(points.record(origin).unwrap().get(x), 0);
//! assert!(!points.record(origin).unwrap().get(visible));
//!
//! // An initializer only sets the fields that differ from the defaults.
//! let three_five = points.alloc_with(|rec| {
//!     rec.set(x, 3);
//!     rec.set(y, 5);
//! }).unwrap();
//! assert_eq!(points.record(three_five).unwrap().get(y), 5);
//!
//! // Freeing bumps the slot generation: the handle goes stale instead of
//! // silently reading recycled memory.
//! points.free(origin).unwrap();
//! assert!(points.record(origin).is_err());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`layout`] | `packrec-core` | Schemas, field kinds, typed accessors, IDs |
//! | [`arena`] | `packrec-arena` | Record stores, handles, the raw `unsafe` surface |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Schema and packed-layout engine (`packrec-core`).
///
/// Contains [`layout::SchemaBuilder`], [`layout::Schema`], the
/// [`layout::FieldValue`] scalar codec trait, and the ID newtypes.
pub use packrec_core as layout;

/// Record stores (`packrec-arena`).
///
/// [`arena::RecordStore`] is the generation-checked allocation surface;
/// [`arena::raw`] preserves the unchecked bare-pointer model behind an
/// explicit `unsafe` boundary.
pub use packrec_arena as arena;

/// Common imports for typical packrec usage.
///
/// ```rust
/// use packrec::prelude::*;
/// ```
pub mod prelude {
    // Schema construction and field access
    pub use packrec_core::{Field, FieldDef, FieldId, FieldKind, FieldValue, Schema, SchemaBuilder, Value};

    // Stores and handles
    pub use packrec_arena::{RecordHandle, RecordMut, RecordRef, RecordStore, StoreConfig};

    // Errors
    pub use packrec_arena::StoreError;
    pub use packrec_core::SchemaError;
}
