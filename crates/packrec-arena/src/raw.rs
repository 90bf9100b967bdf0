//! Unchecked raw-pointer record surface.
//!
//! The raw model from before generation checking, preserved for callers
//! that want the bare-address cost profile: allocate a block, copy the
//! template in, hand back the pointer; free unconditionally with no
//! liveness, ownership, or double-free checks. Misuse — freeing a dead
//! pointer, accessing after free, mixing schemas — is undefined behavior,
//! which is why everything except allocation is `unsafe`.
//!
//! This is the only module in the crate allowed to contain `unsafe` code;
//! every `unsafe` block carries a `SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

use packrec_core::{Field, FieldValue, Schema};

use crate::error::StoreError;

/// Block layout for one record of `schema`.
///
/// Packed records have no alignment requirement (field access goes through
/// byte-slice codecs), so the alignment is 1. Zero-size schemas are rounded
/// up to one byte so every allocation yields a unique, freeable pointer.
fn record_layout(schema: &Schema) -> Layout {
    let size = (schema.size_bytes() as usize).max(1);
    Layout::from_size_align(size, 1).expect("record size fits isize at align 1")
}

/// Allocate a raw, default-initialized record block.
///
/// The returned pointer owns `schema.size_bytes().max(1)` bytes holding a
/// copy of the schema's template. Release it with [`free_raw`] against the
/// same schema. Backend exhaustion surfaces as
/// [`StoreError::AllocationFailed`].
pub fn alloc_raw(schema: &Schema) -> Result<NonNull<u8>, StoreError> {
    let layout = record_layout(schema);
    // SAFETY: `record_layout` never returns a zero-size layout.
    let ptr = unsafe { alloc(layout) };
    let Some(ptr) = NonNull::new(ptr) else {
        return Err(StoreError::AllocationFailed {
            bytes: layout.size(),
        });
    };
    // SAFETY: `ptr` is valid for `layout.size()` bytes of writes, and the
    // template is at most `layout.size()` bytes long. The regions cannot
    // overlap: one is a fresh allocation, the other lives in the schema.
    unsafe {
        std::ptr::copy_nonoverlapping(
            schema.template().as_ptr(),
            ptr.as_ptr(),
            schema.template().len(),
        );
    }
    Ok(ptr)
}

/// Release a raw record block.
///
/// # Safety
///
/// `ptr` must have been returned by [`alloc_raw`] for a schema with the
/// same `size_bytes` as `schema`, must not have been freed already, and
/// must not be accessed afterwards. None of this is checked.
pub unsafe fn free_raw(schema: &Schema, ptr: NonNull<u8>) {
    // SAFETY: per the caller contract, `ptr` came from `alloc_raw` with
    // this layout and is still live.
    unsafe { dealloc(ptr.as_ptr(), record_layout(schema)) }
}

/// Release several raw record blocks of the same schema.
///
/// # Safety
///
/// The [`free_raw`] contract applies to every pointer in `ptrs`.
pub unsafe fn free_raw_all(schema: &Schema, ptrs: &[NonNull<u8>]) {
    for &ptr in ptrs {
        // SAFETY: forwarded caller contract, per pointer.
        unsafe { free_raw(schema, ptr) }
    }
}

/// Read a field from a raw record block.
///
/// # Safety
///
/// `base` must be a live block allocated by [`alloc_raw`] for the schema
/// that minted `field`. No bounds, liveness, or schema checks are
/// performed.
pub unsafe fn get_raw<T: FieldValue>(base: NonNull<u8>, field: Field<T>) -> T {
    let size = T::KIND.size_bytes() as usize;
    // SAFETY: per the caller contract, `base + offset .. base + offset +
    // size` lies within the live record block.
    let bytes =
        unsafe { std::slice::from_raw_parts(base.as_ptr().add(field.offset() as usize), size) };
    T::read(bytes)
}

/// Write a field into a raw record block.
///
/// # Safety
///
/// Same contract as [`get_raw`], plus `base` must not be aliased by any
/// live reference.
pub unsafe fn set_raw<T: FieldValue>(base: NonNull<u8>, field: Field<T>, value: T) {
    let size = T::KIND.size_bytes() as usize;
    // SAFETY: per the caller contract, the range is in bounds and
    // exclusively ours for the duration of the write.
    let bytes = unsafe {
        std::slice::from_raw_parts_mut(base.as_ptr().add(field.offset() as usize), size)
    };
    value.write(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use packrec_core::SchemaBuilder;

    #[test]
    fn raw_alloc_copies_the_template() {
        let mut b = SchemaBuilder::new("Point");
        let x = b.field::<i64>("x", 0).unwrap();
        let y = b.field::<i64>("y", 7).unwrap();
        let visible = b.field::<bool>("visible", true).unwrap();
        let schema = b.freeze();

        let p = alloc_raw(&schema).unwrap();
        unsafe {
            assert_eq!(get_raw(p, x), 0);
            assert_eq!(get_raw(p, y), 7);
            assert!(get_raw(p, visible));
            free_raw(&schema, p);
        }
    }

    #[test]
    fn raw_set_then_get_round_trips() {
        let mut b = SchemaBuilder::new("P");
        let n = b.field::<i64>("n", 0).unwrap();
        let schema = b.freeze();

        let p = alloc_raw(&schema).unwrap();
        unsafe {
            set_raw(p, n, -3);
            assert_eq!(get_raw(p, n), -3);
            free_raw(&schema, p);
        }
    }

    #[test]
    fn raw_instances_are_independent() {
        let mut b = SchemaBuilder::new("P");
        let n = b.field::<i32>("n", 0).unwrap();
        let schema = b.freeze();

        let a = alloc_raw(&schema).unwrap();
        let c = alloc_raw(&schema).unwrap();
        unsafe {
            set_raw(a, n, 11);
            assert_eq!(get_raw(a, n), 11);
            assert_eq!(get_raw(c, n), 0);
            free_raw_all(&schema, &[a, c]);
        }
    }

    #[test]
    fn zero_field_schema_still_allocates() {
        let schema = SchemaBuilder::new("Unit").freeze();
        let a = alloc_raw(&schema).unwrap();
        let b = alloc_raw(&schema).unwrap();
        assert_ne!(a, b);
        unsafe { free_raw_all(&schema, &[a, b]) }
    }
}
