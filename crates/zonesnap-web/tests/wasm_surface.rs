#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use zonesnap_core::event::{InputEvent, InputPhase};
use zonesnap_core::geometry::Viewport;
use zonesnap_core::zone::ZoneState;
use zonesnap_web::session_record::{SessionRecorder, replay};
use zonesnap_web::{SnapSurface, SurfaceConfig};
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn surface_snaps_on_wasm() {
    let mut surface = SnapSurface::new(Viewport::new(800.0, 600.0), SurfaceConfig::default())
        .expect("valid viewport");
    surface.handle(&InputEvent::pointer(InputPhase::Start, 700.0, 100.0));
    surface.handle(&InputEvent::pointer(InputPhase::Move, 700.0, 500.0));
    surface.handle(&InputEvent::pointer(InputPhase::End, 700.0, 500.0));
    assert_eq!(surface.tracker().state(), ZoneState::BotRight);
}

#[wasm_bindgen_test]
fn replay_is_deterministic_on_wasm() {
    let mut recorder = SessionRecorder::new(Viewport::new(800.0, 600.0), SurfaceConfig::default())
        .expect("valid viewport");
    recorder.push_event(0, InputEvent::touch(InputPhase::Start, 100.0, 100.0));
    recorder.push_event(16, InputEvent::touch(InputPhase::Move, 100.0, 400.0));
    recorder.push_event(32, InputEvent::touch_release());
    let trace = recorder.finish();
    let result = replay(SurfaceConfig::default(), &trace).expect("trace has header");
    assert!(result.ok());
    assert_eq!(result.total_frames, 4);
}
