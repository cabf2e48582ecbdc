//! Benchmark for map/chain pipelines on Optional and Outcome.
//!
//! Measures the cost of long chains on the happy path against the
//! short-circuited path, where every step after the first is skipped.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mapchain::control::{Optional, Outcome};
use std::hint::black_box;

fn step_optional(value: u64) -> Optional<u64> {
    Optional::of(value.wrapping_mul(31).wrapping_add(7))
}

fn step_outcome(value: u64) -> Outcome<u64, &'static str> {
    if value == u64::MAX {
        Outcome::failure("saturated")
    } else {
        Outcome::success(value.wrapping_mul(31).wrapping_add(7))
    }
}

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    for length in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("present", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Optional::of(black_box(1_u64));
                for _ in 0..length {
                    current = current.chain(step_optional);
                }
                black_box(current.get_or_else(0))
            });
        });

        group.bench_with_input(BenchmarkId::new("absent", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current: Optional<u64> = black_box(Optional::absent());
                for _ in 0..length {
                    current = current.chain(step_optional);
                }
                black_box(current.get_or_else(0))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    for length in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("success", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Outcome::success(black_box(1_u64));
                for _ in 0..length {
                    current = current.chain(step_outcome);
                }
                black_box(current.fold(|_| 0, |value| value))
            });
        });

        group.bench_with_input(BenchmarkId::new("failure", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Outcome::success(black_box(u64::MAX)).chain(step_outcome);
                for _ in 0..length {
                    current = current.chain(step_outcome);
                }
                black_box(current.fold(|_| 0, |value| value))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_optional_chain, benchmark_outcome_chain);
criterion_main!(benches);
