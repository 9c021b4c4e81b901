//! Criterion micro-benchmarks comparing `DynamicArray` with `Vec`.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vectra_array::DynamicArray;
use vectra_test_utils::ascending;

const N: i32 = 10_000;

fn bench_push_from_empty(c: &mut Criterion) {
    c.bench_function("vec_push_10k", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..N {
                v.push(i);
            }
            black_box(v);
        });
    });

    c.bench_function("array_push_10k", |b| {
        b.iter(|| {
            let mut a = DynamicArray::new();
            for i in 0..N {
                a.push(i);
            }
            black_box(a);
        });
    });
}

fn bench_push_reserved(c: &mut Criterion) {
    c.bench_function("array_push_reserved_10k", |b| {
        b.iter(|| {
            let mut a = DynamicArray::with_capacity(N as usize);
            for i in 0..N {
                a.push(i);
            }
            black_box(a);
        });
    });
}

fn bench_iterate(c: &mut Criterion) {
    let v = ascending(N);
    let a = DynamicArray::from(v.clone());

    c.bench_function("vec_sum_10k", |b| {
        b.iter(|| black_box(v.iter().map(|&x| i64::from(x)).sum::<i64>()));
    });

    c.bench_function("array_sum_10k", |b| {
        b.iter(|| black_box(a.iter().map(|&x| i64::from(x)).sum::<i64>()));
    });

    // Checked element access, one bounds check per read.
    c.bench_function("array_at_10k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..a.len() {
                if let Ok(&x) = a.at(i) {
                    sum += i64::from(x);
                }
            }
            black_box(sum)
        });
    });
}

fn bench_clone(c: &mut Criterion) {
    let strings: Vec<String> = (0..1_000).map(|i| format!("value_{i}")).collect();
    let a = DynamicArray::from(strings.clone());

    c.bench_function("vec_clone_1k_strings", |b| {
        b.iter(|| black_box(strings.clone()));
    });

    c.bench_function("array_clone_1k_strings", |b| {
        b.iter(|| black_box(a.clone()));
    });
}

criterion_group!(
    benches,
    bench_push_from_empty,
    bench_push_reserved,
    bench_iterate,
    bench_clone
);
criterion_main!(benches);
