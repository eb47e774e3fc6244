#![forbid(unsafe_code)]

//! Core: geometry, canonical input events, zone classification and gesture
//! tracking.
//!
//! # Role in zonesnap
//! `zonesnap-core` is the input layer. It owns the normalized event types,
//! the hinge/quartile [`zone::ZoneGrid`], and the [`gesture::GestureTracker`]
//! state machine that turns a press-move-release stream into one of nine
//! [`zone::ZoneState`] values.
//!
//! # How it fits in the system
//! `zonesnap-layout` turns a tracker snapshot plus the viewport into the
//! rectangle and indicator opacities to paint. `zonesnap-web` wires host
//! listeners to the tracker and notifies observers every frame.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod zone;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
