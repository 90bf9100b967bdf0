//! Record store configuration parameters.

/// Configuration for a [`RecordStore`](crate::RecordStore).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Maximum number of record slots the store may hold.
    ///
    /// Freed slots are recycled, so this caps peak live records, not total
    /// allocations. Default: 65_536.
    pub max_records: u32,

    /// Number of slots to pre-reserve in the slot vector at creation.
    ///
    /// Purely a reallocation-avoidance hint; no record blocks are allocated
    /// until `alloc()`. Default: 0.
    pub reserve_records: u32,
}

impl StoreConfig {
    /// Default record cap.
    pub const DEFAULT_MAX_RECORDS: u32 = 65_536;

    /// Create a config with the given record cap and no pre-reservation.
    pub fn new(max_records: u32) -> Self {
        Self {
            max_records,
            reserve_records: 0,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RECORDS)
    }
}
