//! End-to-end scenarios: tracker steps resolved into frames.
//!
//! Each scenario drives a `GestureTracker` through a press-move-release
//! sequence on a 1000x800 viewport and checks the resolved rectangle, fill
//! and indicators.

use proptest::prelude::*;
use zonesnap_core::gesture::GestureTracker;
use zonesnap_core::zone::ZoneGrid;
use zonesnap_layout::{
    BoxFill, GeometryResolver, IndicatorVisibility, Position, Rect, ResolvedFrame, Viewport,
    ZoneState, box_size,
};

const VP: Viewport = Viewport::new(1000.0, 800.0);

fn frame(tracker: &GestureTracker) -> ResolvedFrame {
    GeometryResolver::default().resolve_snapshot(&tracker.snapshot(), VP)
}

#[test]
fn drop_in_center_right_hides_box() {
    let grid = ZoneGrid::from_viewport(VP);
    let mut tracker = GestureTracker::default();

    tracker.start(Position::new(500.0, 100.0));
    assert_eq!(tracker.state(), ZoneState::Follow);

    tracker.move_to(Position::new(500.0, 500.0), &grid);
    assert_eq!(tracker.state(), ZoneState::Hidden);

    tracker.end();
    let f = frame(&tracker);
    assert_eq!(f.rect, Rect::new(0.0, 0.0, 1000.0, 800.0));
    assert_eq!(f.fill, BoxFill::White);
    assert_eq!(f.indicators, IndicatorVisibility::default());
}

#[test]
fn drop_in_left_quartile_snaps_bottom_left() {
    let grid = ZoneGrid::from_viewport(VP);
    let mut tracker = GestureTracker::default();

    tracker.start(Position::new(50.0, 100.0));
    tracker.move_to(Position::new(50.0, 500.0), &grid);
    assert_eq!(tracker.state(), ZoneState::BotLeft);

    let dragging = frame(&tracker);
    assert_eq!(dragging.fill, BoxFill::DarkBlue);
    assert_eq!(dragging.indicators.left, 1.0);
    assert_eq!(dragging.indicators.center, 0.4);

    tracker.end();
    let f = frame(&tracker);
    assert_eq!(f.rect, Rect::new(0.0, 400.0, 500.0, 400.0));
    assert_eq!(f.fill, BoxFill::LightBlue);
}

#[test]
fn drag_within_one_half_follows_pointer() {
    let grid = ZoneGrid::from_viewport(VP);
    let mut tracker = GestureTracker::default();

    tracker.start(Position::new(500.0, 100.0));
    for (x, y) in [(520.0, 120.0), (700.0, 300.0), (300.0, 50.0)] {
        tracker.move_to(Position::new(x, y), &grid);
        let f = frame(&tracker);
        assert_eq!(f.state, ZoneState::Follow);
        assert_eq!(f.rect.width, 250.0);
        assert_eq!(f.rect.height, 200.0);
        assert_eq!(f.rect.center(), Position::new(x, y));
    }
}

#[test]
fn frame_serializes_with_snake_case_fill() {
    let f = GeometryResolver::default().resolve(ZoneState::TopLeft, Position::default(), VP, true);
    let json = serde_json::to_value(f).unwrap();
    assert_eq!(json["fill"], "dark_blue");
    assert_eq!(json["rect"]["width"], 500.0);
    let back: ResolvedFrame = serde_json::from_value(json).unwrap();
    assert_eq!(back, f);
}

proptest! {
    #[test]
    fn sizes_are_quarter_half_or_full(
        w in 1.0f64..5000.0,
        h in 1.0f64..5000.0,
        idx in 0usize..ZoneState::ALL.len(),
    ) {
        let vp = Viewport::new(w, h);
        let (bw, bh) = box_size(ZoneState::ALL[idx], vp);
        prop_assert!([w / 4.0, w / 2.0, w].contains(&bw));
        prop_assert!([h / 4.0, h / 2.0, h].contains(&bh));
    }
}
