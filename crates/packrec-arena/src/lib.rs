//! Record stores for packrec schemas.
//!
//! Two allocation surfaces over one schema engine:
//!
//! ```text
//! RecordStore (generation-checked)
//! ├── Slot[] (retained Box<[u8]> blocks, template-copied on alloc)
//! ├── free list (slot recycling; generation bump on free)
//! └── RecordRef / RecordMut (borrowed typed views)
//!
//! raw (unchecked, unsafe boundary)
//! └── alloc_raw / free_raw / get_raw / set_raw over bare NonNull<u8>
//! ```
//!
//! The store turns use-after-free and double-free into reported
//! [`StoreError`]s at the cost of one indirection; the [`raw`] module
//! keeps the original bare-address cost profile and makes its hazards
//! explicit with `unsafe`. This is the only crate in the workspace that
//! may contain `unsafe` code, and only inside `raw.rs`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod raw;
pub mod record;
pub mod store;

// Public re-exports for the primary API surface.
pub use config::StoreConfig;
pub use error::StoreError;
pub use handle::RecordHandle;
pub use record::{RecordMut, RecordRef};
pub use store::RecordStore;
