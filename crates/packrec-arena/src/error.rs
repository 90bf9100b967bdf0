//! Store-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during record store operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The store's record cap would be exceeded by this allocation.
    CapacityExceeded {
        /// Number of slots currently allocated.
        slots: usize,
        /// The configured maximum number of records.
        max_records: u32,
    },
    /// A handle whose slot has been freed (or freed and reused) since the
    /// handle was issued. Double frees surface as this error too.
    StaleHandle {
        /// Slot index encoded in the handle.
        index: u32,
        /// Generation encoded in the handle.
        handle_generation: u32,
        /// The slot's current generation.
        slot_generation: u32,
    },
    /// A handle whose slot index was never allocated by this store.
    UnknownRecord {
        /// The out-of-range slot index.
        index: u32,
    },
    /// The memory backend could not satisfy a block request.
    AllocationFailed {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { slots, max_records } => {
                write!(
                    f,
                    "record cap exceeded: {slots} slots allocated, max_records {max_records}"
                )
            }
            Self::StaleHandle {
                index,
                handle_generation,
                slot_generation,
            } => {
                write!(
                    f,
                    "stale handle: slot {index} generation {handle_generation}, current {slot_generation}"
                )
            }
            Self::UnknownRecord { index } => {
                write!(f, "unknown record: slot index {index} was never allocated")
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "memory backend failed to allocate {bytes} bytes")
            }
        }
    }
}

impl Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_generations() {
        let err = StoreError::StaleHandle {
            index: 4,
            handle_generation: 1,
            slot_generation: 2,
        };
        assert_eq!(
            err.to_string(),
            "stale handle: slot 4 generation 1, current 2"
        );
    }

    #[test]
    fn display_carries_cap() {
        let err = StoreError::CapacityExceeded {
            slots: 8,
            max_records: 8,
        };
        assert_eq!(
            err.to_string(),
            "record cap exceeded: 8 slots allocated, max_records 8"
        );
    }
}
