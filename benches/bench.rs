use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use darray_raw::patterns::{self, int_compare, to_raw, I32_STRIDE};

use rand::prelude::*;

const BENCH_SIZES: [usize; 4] = [16, 100, 1_000, 100_000];

fn bench_sort(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("sort-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || to_raw(&pattern_provider(test_size)),
            |mut raw| {
                darray_raw::sort(
                    black_box(&mut raw),
                    I32_STRIDE,
                    test_size,
                    int_compare,
                )
                .unwrap();
                raw
            },
            batch_size,
        )
    });
}

fn bench_bounds(c: &mut Criterion, test_size: usize) {
    let mut vals = patterns::random(test_size);
    vals.sort();
    let raw = to_raw(&vals);
    let key = vals[test_size / 2].to_ne_bytes();

    c.bench_function(&format!("lower_bound-{test_size}"), |b| {
        b.iter(|| {
            darray_raw::lower_bound(black_box(&raw), I32_STRIDE, test_size, &key, int_compare)
                .unwrap()
        })
    });

    c.bench_function(&format!("upper_bound-{test_size}"), |b| {
        b.iter(|| {
            darray_raw::upper_bound(black_box(&raw), I32_STRIDE, test_size, &key, int_compare)
                .unwrap()
        })
    });
}

fn bench_shuffle(c: &mut Criterion, test_size: usize) {
    let raw = to_raw(&patterns::ascending(test_size));
    let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());

    c.bench_function(&format!("shuffle-{test_size}"), |b| {
        b.iter_batched(
            || raw.clone(),
            |mut raw| {
                darray_raw::shuffle(black_box(&mut raw), I32_STRIDE, test_size, &mut rng).unwrap();
                raw
            },
            BatchSize::LargeInput,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let pattern_providers: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_binary", |size| {
            patterns::random_uniform(size, 0..=1_i32)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for test_size in BENCH_SIZES {
        for (pattern_name, pattern_provider) in &pattern_providers {
            bench_sort(c, test_size, pattern_name, pattern_provider);
        }

        bench_bounds(c, test_size);
        bench_shuffle(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
