//! Benchmark for `Sequence` primitives across containers.
//!
//! Compares `Vec`, `VecDeque` and `LinkedSequence` on positional access,
//! predicate scans, sorting and sorted search.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqlist::container::LinkedSequence;
use seqlist::sequence::Sequence;
use std::collections::VecDeque;
use std::hint::black_box;

/// Produces a deterministic, unordered run of values.
fn scrambled(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// =============================================================================
// add_at Benchmark (insert in the middle)
// =============================================================================

fn benchmark_add_at_middle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add_at_middle");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence: Vec<i32> = Vec::new();
                for index in 0..size {
                    let _ = sequence.add_at(sequence.size() / 2, black_box(index));
                }
                black_box(sequence)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence: VecDeque<i32> = VecDeque::new();
                for index in 0..size {
                    let _ = sequence.add_at(sequence.size() / 2, black_box(index));
                }
                black_box(sequence)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("LinkedSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence: LinkedSequence<i32> = LinkedSequence::new();
                    for index in 0..size {
                        let _ = sequence.add_at(sequence.size() / 2, black_box(index));
                    }
                    black_box(sequence)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// index_of Benchmark (linear scan)
// =============================================================================

fn benchmark_index_of(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_of");

    for size in [100, 1000, 10000] {
        let values = scrambled(size);
        let vector = values.clone();
        let deque: VecDeque<i32> = values.iter().copied().collect();
        let linked: LinkedSequence<i32> = values.iter().copied().collect();
        let missing = size + 1;

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| black_box(vector.index_of(black_box(&missing))));
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, _| {
            bencher.iter(|| black_box(deque.index_of(black_box(&missing))));
        });

        group.bench_with_input(
            BenchmarkId::new("LinkedSequence", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(linked.index_of(black_box(&missing))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// sort + sorted_search Benchmark
// =============================================================================

fn benchmark_sort_then_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_then_search");

    for size in [100, 1000, 10000] {
        let values = scrambled(size);
        let linked: LinkedSequence<i32> = values.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence = values.clone();
                Sequence::sort(&mut sequence);
                black_box(sequence.sorted_search(black_box(&(size / 2))))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("LinkedSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence = linked.clone();
                    Sequence::sort(&mut sequence);
                    black_box(sequence.sorted_search(black_box(&(size / 2))))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_add_at_middle,
    benchmark_index_of,
    benchmark_sort_then_search
);

criterion_main!(benches);
