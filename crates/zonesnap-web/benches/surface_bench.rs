//! Benchmarks for surface dispatch and session replay.
//!
//! Run with: cargo bench -p zonesnap-web

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zonesnap_core::event::{InputEvent, InputPhase};
use zonesnap_core::geometry::Viewport;
use zonesnap_web::session_record::{SessionRecorder, replay};
use zonesnap_web::{SnapSurface, SurfaceConfig};

const VP: Viewport = Viewport::new(1920.0, 1080.0);

fn drag_cycle() -> [InputEvent; 5] {
    [
        InputEvent::pointer(InputPhase::Start, 960.0, 200.0),
        InputEvent::pointer(InputPhase::Move, 960.0, 400.0),
        InputEvent::pointer(InputPhase::Move, 100.0, 800.0),
        InputEvent::pointer(InputPhase::Move, 1800.0, 100.0),
        InputEvent::pointer(InputPhase::End, 0.0, 0.0),
    ]
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("web/surface");
    let events = drag_cycle();

    group.bench_function("drag_cycle_with_observer", |b| {
        let config = SurfaceConfig {
            start_on_box_only: false,
            ..SurfaceConfig::default()
        };
        let Ok(mut surface) = SnapSurface::new(VP, config) else {
            return;
        };
        surface.subscribe(|frame| {
            black_box(frame.resolved.rect);
        });
        b.iter(|| {
            for event in &events {
                black_box(surface.handle(event));
            }
        })
    });

    group.bench_function("replay_drag_cycle", |b| {
        let Ok(mut recorder) = SessionRecorder::new(VP, SurfaceConfig::default()) else {
            return;
        };
        for (ts, event) in drag_cycle().into_iter().enumerate() {
            recorder.push_event(ts as u64 * 16, event);
        }
        let trace = recorder.finish();
        b.iter(|| black_box(replay(SurfaceConfig::default(), &trace)))
    });

    group.finish();
}

criterion_group!(benches, bench_handle);
criterion_main!(benches);
