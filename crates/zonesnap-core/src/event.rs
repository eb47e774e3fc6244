#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Hosts deliver two input shapes: pointer events carrying `x`/`y` directly,
//! and touch events carrying a list of touch points. Both normalize into a
//! [`GestureInput`] with a single [`Position`].
//!
//! # Design Notes
//!
//! - Only the first touch point is read; multi-touch is not interpreted.
//! - A touch end is a release only when no touch points remain.
//! - Non-finite coordinates make an event malformed; it is discarded.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Position, Viewport};

/// Lifecycle phase shared by pointer and touch events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputPhase {
    /// Press (`mousedown` / `touchstart`).
    Start,
    /// Motion (`mousemove` / `touchmove`).
    Move,
    /// Release (`mouseup` / `touchend`).
    End,
}

/// A mouse or pen event with direct coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointerEvent {
    pub phase: InputPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(phase: InputPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }
}

/// One entry of a touch list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// A touch event with the touch points still in contact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchEvent {
    pub phase: InputPhase,
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    #[must_use]
    pub fn new(phase: InputPhase, touches: Vec<TouchPoint>) -> Self {
        Self { phase, touches }
    }
}

/// Canonical input event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    /// The host viewport changed size.
    Resize(Viewport),
}

impl InputEvent {
    /// Convenience constructor for a pointer event.
    #[must_use]
    pub const fn pointer(phase: InputPhase, x: f64, y: f64) -> Self {
        Self::Pointer(PointerEvent::new(phase, x, y))
    }

    /// Convenience constructor for a single-finger touch event.
    #[must_use]
    pub fn touch(phase: InputPhase, x: f64, y: f64) -> Self {
        Self::Touch(TouchEvent::new(phase, vec![TouchPoint::new(x, y)]))
    }

    /// Convenience constructor for a touch end with no remaining points.
    #[must_use]
    pub fn touch_release() -> Self {
        Self::Touch(TouchEvent::new(InputPhase::End, Vec::new()))
    }

    /// Phase of a pointer or touch event; `None` for resize.
    #[must_use]
    pub fn phase(&self) -> Option<InputPhase> {
        match self {
            Self::Pointer(pointer) => Some(pointer.phase),
            Self::Touch(touch) => Some(touch.phase),
            Self::Resize(_) => None,
        }
    }

    /// Extract a single position from either input shape.
    ///
    /// Returns `None` when no finite coordinate is available.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        let pos = match self {
            Self::Pointer(pointer) => Position::new(pointer.x, pointer.y),
            Self::Touch(touch) => {
                let first = touch.touches.first()?;
                Position::new(first.client_x, first.client_y)
            }
            Self::Resize(_) => return None,
        };
        pos.is_finite().then_some(pos)
    }

    /// Normalize into a gesture input.
    pub fn normalize(&self) -> Result<GestureInput, InputRejection> {
        let phase = self.phase().ok_or(InputRejection::NotAGesture)?;
        match phase {
            InputPhase::Start => self
                .position()
                .map(GestureInput::Start)
                .ok_or(InputRejection::Malformed),
            InputPhase::Move => self
                .position()
                .map(GestureInput::Move)
                .ok_or(InputRejection::Malformed),
            InputPhase::End => match self {
                Self::Touch(touch) if !touch.touches.is_empty() => {
                    Err(InputRejection::TouchesRemaining)
                }
                _ => Ok(GestureInput::End),
            },
        }
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(event: TouchEvent) -> Self {
        Self::Touch(event)
    }
}

/// Normalized gesture step consumed by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    Start(Position),
    Move(Position),
    End,
}

/// Why an [`InputEvent`] produced no [`GestureInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRejection {
    /// No finite position could be resolved.
    Malformed,
    /// Touch end while other fingers are still down.
    TouchesRemaining,
    /// Resize events carry no gesture.
    NotAGesture,
}
