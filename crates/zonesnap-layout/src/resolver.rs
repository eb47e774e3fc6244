#![forbid(unsafe_code)]

//! Geometry resolver: zone state to box rectangle.
//!
//! Size and origin are resolved independently per axis:
//!
//! | state | width | height | origin |
//! |---|---|---|---|
//! | `Follow` | w/4 | h/4 | centred on pointer |
//! | `Top` | w | h/2 | (0, 0) |
//! | `Bottom` | w | h/2 | (0, h/2) |
//! | `Full`, `Hidden` | w | h | (0, 0) |
//! | `TopLeft` | w/2 | h/2 | (0, 0) |
//! | `TopRight` | w/2 | h/2 | (w/2, 0) |
//! | `BotLeft` | w/2 | h/2 | (0, h/2) |
//! | `BotRight` | w/2 | h/2 | (w/2, h/2) |
//!
//! Nothing is cached: every call reads the viewport it is given.

use serde::{Deserialize, Serialize};
use zonesnap_core::geometry::{Position, Rect, Viewport};
use zonesnap_core::gesture::GestureSnapshot;
use zonesnap_core::zone::ZoneState;

use crate::fill::BoxFill;
use crate::indicator::{IndicatorOpacity, IndicatorVisibility};

/// Box width and height for `state`.
#[must_use]
pub fn box_size(state: ZoneState, viewport: Viewport) -> (f64, f64) {
    let Viewport { width, height } = viewport;
    if !state.is_snapped() {
        return (width / 4.0, height / 4.0);
    }
    if state.is_corner() {
        return (width / 2.0, height / 2.0);
    }
    match state {
        ZoneState::Full | ZoneState::Hidden => (width, height),
        _ => (width, height / 2.0),
    }
}

/// Box rectangle for `state`, centring on `position` unless the state pins
/// the box to a fixed corner.
#[must_use]
pub fn box_rect(state: ZoneState, position: Position, viewport: Viewport) -> Rect {
    let (w, h) = box_size(state, viewport);
    let half_w = viewport.width / 2.0;
    let half_h = viewport.height / 2.0;
    match state {
        ZoneState::Follow => Rect::centered_on(position, w, h),
        ZoneState::Full | ZoneState::Hidden | ZoneState::Top | ZoneState::TopLeft => {
            Rect::new(0.0, 0.0, w, h)
        }
        ZoneState::TopRight => Rect::new(half_w, 0.0, w, h),
        ZoneState::Bottom | ZoneState::BotLeft => Rect::new(0.0, half_h, w, h),
        ZoneState::BotRight => Rect::new(half_w, half_h, w, h),
    }
}

/// Everything the surface needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFrame {
    pub state: ZoneState,
    pub dragging: bool,
    pub rect: Rect,
    pub indicators: IndicatorVisibility,
    pub fill: BoxFill,
}

/// Resolver configured with indicator opacity levels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryResolver {
    opacity: IndicatorOpacity,
}

impl GeometryResolver {
    #[must_use]
    pub const fn new(opacity: IndicatorOpacity) -> Self {
        Self { opacity }
    }

    #[must_use]
    pub const fn opacity(&self) -> &IndicatorOpacity {
        &self.opacity
    }

    /// Resolve a frame from explicit inputs.
    #[must_use]
    pub fn resolve(
        &self,
        state: ZoneState,
        position: Position,
        viewport: Viewport,
        dragging: bool,
    ) -> ResolvedFrame {
        ResolvedFrame {
            state,
            dragging,
            rect: box_rect(state, position, viewport),
            indicators: IndicatorVisibility::for_state(state, dragging, &self.opacity),
            fill: BoxFill::for_state(state, dragging),
        }
    }

    /// Resolve a frame from a tracker snapshot.
    #[must_use]
    pub fn resolve_snapshot(&self, snapshot: &GestureSnapshot, viewport: Viewport) -> ResolvedFrame {
        self.resolve(snapshot.state, snapshot.position, viewport, snapshot.dragging)
    }
}

/// Resolve with the default opacity levels.
#[must_use]
pub fn resolve(
    state: ZoneState,
    position: Position,
    viewport: Viewport,
    dragging: bool,
) -> ResolvedFrame {
    GeometryResolver::default().resolve(state, position, viewport, dragging)
}
