//! Benchmark profiles and utilities for packrec.
//!
//! Provides pre-built schema profiles shared by the criterion benches:
//!
//! - [`point_profile`]: the 3-field `Point` schema (x, y, visible)
//! - [`wide_profile`]: a 16-field mixed-kind schema for template-copy cost

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use packrec_core::{Field, Schema, SchemaBuilder};

/// The 17-byte `Point` schema with its typed accessors.
pub fn point_profile() -> (Schema, Field<i64>, Field<i64>, Field<bool>) {
    let mut b = SchemaBuilder::new("Point");
    let x = b.field::<i64>("x", 0).unwrap();
    let y = b.field::<i64>("y", 0).unwrap();
    let visible = b.field::<bool>("visible", false).unwrap();
    (b.freeze(), x, y, visible)
}

/// A 16-field mixed-kind schema (100 bytes packed) to exercise
/// template-copy cost on larger records.
pub fn wide_profile() -> Schema {
    let mut b = SchemaBuilder::new("Wide");
    for i in 0..4 {
        b.field::<i64>(&format!("n{i}"), 0).unwrap();
        b.field::<f64>(&format!("r{i}"), 0.0).unwrap();
        b.field::<i32>(&format!("m{i}"), 0).unwrap();
        b.field::<bool>(&format!("b{i}"), false).unwrap();
    }
    b.freeze()
}
