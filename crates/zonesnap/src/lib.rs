#![forbid(unsafe_code)]

//! zonesnap public facade.
//!
//! A draggable box that snaps to one of eight screen zones (or hides) based
//! on where a drag crosses the vertical midline of the viewport.
//!
//! This crate re-exports the stable surface area from the member crates:
//! geometry and gesture tracking from `zonesnap-core`, frame resolution from
//! `zonesnap-layout`, and the host-driven surface from `zonesnap-web`.
//!
//! ```
//! use zonesnap::prelude::*;
//!
//! let mut surface = SnapSurface::new(Viewport::new(1000.0, 800.0), SurfaceConfig::default())?;
//! surface.handle(&InputEvent::pointer(InputPhase::Start, 50.0, 100.0));
//! surface.handle(&InputEvent::pointer(InputPhase::Move, 50.0, 500.0));
//! surface.handle(&InputEvent::pointer(InputPhase::End, 50.0, 500.0));
//! assert_eq!(surface.tracker().state(), ZoneState::BotLeft);
//! # Ok::<(), zonesnap::Error>(())
//! ```

pub mod error;

// --- Core re-exports -------------------------------------------------------

pub use zonesnap_core::event::{InputEvent, InputPhase, PointerEvent, TouchEvent, TouchPoint};
pub use zonesnap_core::geometry::{Bounds, GeometryError, Position, Rect, Viewport};
pub use zonesnap_core::gesture::{
    GestureConfig, GestureDispatch, GestureIgnoredReason, GestureOutcome, GestureSnapshot,
    GestureTracker, ZoneTransition,
};
pub use zonesnap_core::zone::{Crossing, CrossingDirection, ZoneGrid, ZoneState, classify};

// --- Layout re-exports -----------------------------------------------------

pub use zonesnap_layout::{
    BoxFill, FillPalette, GeometryResolver, Indicator, IndicatorOpacity, IndicatorVisibility,
    ResolvedFrame, Rgb, box_rect, box_size, resolve,
};

// --- Surface re-exports ----------------------------------------------------

pub use zonesnap_web::session_record::{SessionRecorder, SessionTrace, replay};
pub use zonesnap_web::{
    ObserverId, SnapSurface, SurfaceConfig, SurfaceDispatch, SurfaceFrame, SurfaceIgnoredReason,
    SurfaceOutcome,
};

#[cfg(feature = "input-parser")]
pub use zonesnap_web::input_parser::parse_encoded_input;

#[cfg(feature = "tracing-json")]
pub use zonesnap_core::logging::init_json;

pub use error::{Error, Result};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, GestureTracker, InputEvent, InputPhase, Position, Rect, Result, SnapSurface,
        SurfaceConfig, SurfaceFrame, Viewport, ZoneGrid, ZoneState,
    };
}

pub use zonesnap_core as core;
pub use zonesnap_layout as layout;
pub use zonesnap_web as web;
