//! Generation-checked record handles.
//!
//! A [`RecordHandle`] names one allocated record: a slot index plus the
//! slot's generation at allocation time. Freeing a record bumps its slot's
//! generation, so every outstanding handle to the freed record goes stale
//! and resolves to an error instead of reading recycled memory.

use std::fmt;

/// Handle to one allocated record in a [`RecordStore`](crate::RecordStore).
///
/// Handles are `Copy` and carry no lifetime: they are validated at resolve
/// time, not held live by the borrow checker. A stale handle (slot freed,
/// or freed and reused) is a reported error, never an access to another
/// record's data.
///
/// Generations wrap at `u32::MAX`. A stale handle could therefore be
/// wrongly accepted only after the same slot is freed ~4 billion times
/// while the handle is retained; this is accepted as out of scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct RecordHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl RecordHandle {
    /// Create a new handle.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the owning store.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation at allocation time.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordHandle(slot={}, gen={})", self.index, self.generation)
    }
}
