//! Benchmark: tracker move throughput.
//!
//! Run with: `cargo bench -p zonesnap-core --bench gesture_bench`
//!
//! Measures the per-event cost of `GestureTracker::move_to` for drags that
//! stay in one half (no classification) and drags that cross the hinge on
//! every step.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use zonesnap_core::geometry::{Position, Viewport};
use zonesnap_core::gesture::GestureTracker;
use zonesnap_core::zone::ZoneGrid;

fn bench_moves(c: &mut Criterion) {
    let grid = ZoneGrid::from_viewport(Viewport::new(1920.0, 1080.0));
    let mut group = c.benchmark_group("gesture/move");

    group.bench_function("same_half", |b| {
        let mut tracker = GestureTracker::default();
        tracker.start(Position::new(10.0, 10.0));
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 7.0) % 1920.0;
            black_box(tracker.move_to(Position::new(x, 100.0), &grid));
        });
    });

    group.bench_function("crossing", |b| {
        let mut tracker = GestureTracker::default();
        tracker.start(Position::new(10.0, 10.0));
        let mut step = 0u32;
        b.iter(|| {
            step = step.wrapping_add(1);
            let y = if step % 2 == 0 { 100.0 } else { 900.0 };
            let x = f64::from(step % 1920);
            black_box(tracker.move_to(Position::new(x, y), &grid));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_moves);
criterion_main!(benches);
