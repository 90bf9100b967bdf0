//! Generation-checked record store.
//!
//! [`RecordStore`] owns one frozen [`Schema`] and a slot vector. Each
//! allocation copies the schema's default template into a slot's byte
//! block — one bulk copy instead of one typed write per field — and
//! returns a [`RecordHandle`]. Freed slots keep their blocks and go onto a
//! free list for reuse; their generation is bumped so outstanding handles
//! resolve to [`StoreError::StaleHandle`] instead of another record's data.

use packrec_core::Schema;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::handle::RecordHandle;
use crate::record::{RecordMut, RecordRef};

/// One record slot: a generation stamp plus the record's byte block.
///
/// The block is allocated when the slot is first used and retained across
/// free/reuse cycles; its length is always the schema's packed size.
struct Slot {
    /// Bumped on every free; handles stamp the value at allocation time.
    generation: u32,
    /// Whether the slot currently holds a live record.
    live: bool,
    /// Packed record storage.
    data: Box<[u8]>,
}

/// Allocator and resolver for records of one schema.
///
/// ```rust
/// use packrec_core::SchemaBuilder;
/// use packrec_arena::RecordStore;
///
/// let mut b = SchemaBuilder::new("Point");
/// let x = b.field::<i64>("x", 0).unwrap();
/// let y = b.field::<i64>("y", 0).unwrap();
/// let mut store = RecordStore::new(b.freeze());
///
/// let p = store.alloc_with(|rec| {
///     rec.set(x, 3);
///     rec.set(y, 5);
/// }).unwrap();
/// assert_eq!(store.record(p).unwrap().get(x), 3);
///
/// store.free(p).unwrap();
/// assert!(store.record(p).is_err());
/// ```
///
/// The store is single-threaded by design: `&mut self` on every mutating
/// operation is the whole concurrency story, enforced by the borrow
/// checker rather than documentation.
pub struct RecordStore {
    schema: Schema,
    slots: Vec<Slot>,
    /// Indices of freed slots available for reuse.
    free: Vec<u32>,
    live: usize,
    max_records: u32,
}

impl RecordStore {
    /// Create a store for the given schema with default configuration.
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, StoreConfig::default())
    }

    /// Create a store with explicit configuration.
    pub fn with_config(schema: Schema, config: StoreConfig) -> Self {
        let reserve = config.reserve_records.min(config.max_records) as usize;
        Self {
            schema,
            slots: Vec::with_capacity(reserve),
            free: Vec::new(),
            live: 0,
            max_records: config.max_records,
        }
    }

    /// Allocate a default-initialized record.
    ///
    /// Reuses a freed slot when one is available, otherwise grows the slot
    /// vector (up to the configured cap). Either way the schema's template
    /// is copied into the slot, so every field reads its declared default.
    pub fn alloc(&mut self) -> Result<RecordHandle, StoreError> {
        let handle = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.data.copy_from_slice(self.schema.template());
            slot.live = true;
            RecordHandle::new(index, slot.generation)
        } else {
            if self.slots.len() >= self.max_records as usize {
                return Err(StoreError::CapacityExceeded {
                    slots: self.slots.len(),
                    max_records: self.max_records,
                });
            }
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                live: true,
                data: self.schema.template().to_vec().into_boxed_slice(),
            });
            RecordHandle::new(index, 0)
        };
        self.live += 1;
        Ok(handle)
    }

    /// Allocate a record and run an initializer against it.
    ///
    /// The record starts from the default template; the initializer only
    /// needs to set the fields that differ from their defaults.
    pub fn alloc_with(
        &mut self,
        init: impl FnOnce(&mut RecordMut<'_>),
    ) -> Result<RecordHandle, StoreError> {
        let handle = self.alloc()?;
        let slot = &mut self.slots[handle.index as usize];
        let mut rec = RecordMut::new(&self.schema, &mut slot.data);
        init(&mut rec);
        Ok(handle)
    }

    /// Resolve a handle to a shared record view.
    pub fn record(&self, handle: RecordHandle) -> Result<RecordRef<'_>, StoreError> {
        let slot = self.checked_slot(handle)?;
        Ok(RecordRef::new(&self.schema, &slot.data))
    }

    /// Resolve a handle to a mutable record view.
    pub fn record_mut(&mut self, handle: RecordHandle) -> Result<RecordMut<'_>, StoreError> {
        self.checked_slot(handle)?;
        let slot = &mut self.slots[handle.index as usize];
        Ok(RecordMut::new(&self.schema, &mut slot.data))
    }

    /// Free one record.
    ///
    /// The slot's generation is bumped, staling every outstanding handle
    /// to it, and the slot joins the free list for reuse. Freeing an
    /// already-freed handle reports [`StoreError::StaleHandle`].
    pub fn free(&mut self, handle: RecordHandle) -> Result<(), StoreError> {
        self.checked_slot(handle)?;
        let slot = &mut self.slots[handle.index as usize];
        slot.live = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.live -= 1;
        Ok(())
    }

    /// Free several records.
    ///
    /// Handles are freed in order; on the first invalid handle the error
    /// is returned and the remaining handles are left live. Handles freed
    /// before the failure stay freed.
    pub fn free_all(&mut self, handles: &[RecordHandle]) -> Result<(), StoreError> {
        for &handle in handles {
            self.free(handle)?;
        }
        Ok(())
    }

    /// The schema this store allocates.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of live records.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Number of slots ever allocated (live plus recycled).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Total record storage held by this store, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.iter().map(|s| s.data.len()).sum()
    }

    /// Validate a handle against its slot.
    fn checked_slot(&self, handle: RecordHandle) -> Result<&Slot, StoreError> {
        let slot = self
            .slots
            .get(handle.index as usize)
            .ok_or(StoreError::UnknownRecord {
                index: handle.index,
            })?;
        if !slot.live || slot.generation != handle.generation {
            return Err(StoreError::StaleHandle {
                index: handle.index,
                handle_generation: handle.generation,
                slot_generation: slot.generation,
            });
        }
        Ok(slot)
    }
}
