//! Criterion micro-benchmarks for record allocation, field access, and the
//! raw pointer surface.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use packrec_arena::{raw, RecordStore, StoreConfig};
use packrec_bench::{point_profile, wide_profile};

/// Store alloc/free cycle on the 17-byte Point schema. After warmup every
/// iteration recycles the same slot, so this measures the template copy
/// plus free-list bookkeeping.
fn bench_store_alloc_free(c: &mut Criterion) {
    let (schema, ..) = point_profile();
    let mut store = RecordStore::new(schema);
    c.bench_function("store_alloc_free_point", |b| {
        b.iter(|| {
            let h = store.alloc().unwrap();
            store.free(black_box(h)).unwrap();
        })
    });
}

/// Same cycle on the 100-byte wide schema.
fn bench_store_alloc_free_wide(c: &mut Criterion) {
    let mut store = RecordStore::new(wide_profile());
    c.bench_function("store_alloc_free_wide", |b| {
        b.iter(|| {
            let h = store.alloc().unwrap();
            store.free(black_box(h)).unwrap();
        })
    });
}

/// Initializer allocation: template copy plus two typed writes.
fn bench_store_alloc_with(c: &mut Criterion) {
    let (schema, x, y, _) = point_profile();
    let mut store = RecordStore::with_config(schema, StoreConfig::new(1 << 20));
    c.bench_function("store_alloc_with_point", |b| {
        b.iter(|| {
            let h = store
                .alloc_with(|rec| {
                    rec.set(x, black_box(3));
                    rec.set(y, black_box(5));
                })
                .unwrap();
            store.free(h).unwrap();
        })
    });
}

/// Generation-checked resolve plus one typed read.
fn bench_store_get(c: &mut Criterion) {
    let (schema, x, _, _) = point_profile();
    let mut store = RecordStore::new(schema);
    let h = store.alloc_with(|rec| rec.set(x, 42)).unwrap();
    c.bench_function("store_resolve_get", |b| {
        b.iter(|| {
            let rec = store.record(black_box(h)).unwrap();
            black_box(rec.get(x))
        })
    });
}

/// Raw path alloc/free cycle: global allocator plus template copy, no
/// generation bookkeeping.
fn bench_raw_alloc_free(c: &mut Criterion) {
    let (schema, ..) = point_profile();
    c.bench_function("raw_alloc_free_point", |b| {
        b.iter(|| {
            let p = raw::alloc_raw(&schema).unwrap();
            // SAFETY contract upheld: freshly allocated, freed once.
            unsafe { raw::free_raw(&schema, black_box(p)) }
        })
    });
}

/// Unchecked raw field access.
fn bench_raw_get_set(c: &mut Criterion) {
    let (schema, x, _, _) = point_profile();
    let p = raw::alloc_raw(&schema).unwrap();
    c.bench_function("raw_get_set", |b| {
        b.iter(|| unsafe {
            raw::set_raw(p, x, black_box(9));
            black_box(raw::get_raw(p, x))
        })
    });
    unsafe { raw::free_raw(&schema, p) }
}

criterion_group!(
    benches,
    bench_store_alloc_free,
    bench_store_alloc_free_wide,
    bench_store_alloc_with,
    bench_store_get,
    bench_raw_alloc_free,
    bench_raw_get_set,
);
criterion_main!(benches);
