#![forbid(unsafe_code)]

//! JSON input parser for converting host-encoded inputs to
//! [`zonesnap_core::event::InputEvent`] values.
//!
//! Accepted shapes:
//!
//! ```text
//! {"kind":"pointer","phase":"start","x":10,"y":20}
//! {"kind":"touch","phase":"move","touches":[{"x":10,"y":20}]}
//! {"kind":"resize","width":1024,"height":768}
//! ```
//!
//! Phases also accept DOM names (`mousedown`, `touchend`, ...). Unknown kinds
//! return `Ok(None)`; malformed JSON and missing fields return `Err`.

use serde::Deserialize;
use zonesnap_core::event::{InputEvent, InputPhase, TouchEvent, TouchPoint};
use zonesnap_core::geometry::{GeometryError, Viewport};

/// Errors from parsing encoded input JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
    /// Unknown phase value.
    UnknownPhase(String),
    /// Resize with unusable dimensions.
    InvalidViewport(GeometryError),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::UnknownPhase(phase) => write!(f, "unknown phase: {phase}"),
            Self::InvalidViewport(err) => write!(f, "invalid viewport: {err}"),
        }
    }
}

impl std::error::Error for InputParseError {}

#[derive(Debug, Deserialize)]
struct RawTouch {
    #[serde(alias = "clientX")]
    x: f64,
    #[serde(alias = "clientY")]
    y: f64,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    kind: String,
    #[serde(default)]
    phase: Option<String>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    touches: Option<Vec<RawTouch>>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

/// Parse one JSON-encoded host input into an [`InputEvent`].
///
/// Returns `Ok(None)` for kinds with no gesture meaning (keyboard, wheel,
/// anything unknown).
pub fn parse_encoded_input(json: &str) -> Result<Option<InputEvent>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    match raw.kind.as_str() {
        "pointer" | "mouse" => parse_pointer(&raw).map(Some),
        "touch" => parse_touch(raw).map(Some),
        "resize" => parse_resize(&raw).map(Some),
        _ => Ok(None),
    }
}

fn parse_phase(phase: Option<&str>) -> Result<InputPhase, InputParseError> {
    match phase {
        Some("start" | "down" | "mousedown" | "touchstart") => Ok(InputPhase::Start),
        Some("move" | "mousemove" | "touchmove") => Ok(InputPhase::Move),
        Some("end" | "up" | "mouseup" | "touchend") => Ok(InputPhase::End),
        Some(other) => Err(InputParseError::UnknownPhase(other.to_string())),
        None => Err(InputParseError::MissingField("phase")),
    }
}

fn parse_pointer(raw: &RawInput) -> Result<InputEvent, InputParseError> {
    let phase = parse_phase(raw.phase.as_deref())?;
    // Release coordinates are never read.
    let (x, y) = if phase == InputPhase::End {
        (raw.x.unwrap_or(0.0), raw.y.unwrap_or(0.0))
    } else {
        (
            raw.x.ok_or(InputParseError::MissingField("x"))?,
            raw.y.ok_or(InputParseError::MissingField("y"))?,
        )
    };
    Ok(InputEvent::pointer(phase, x, y))
}

fn parse_touch(raw: RawInput) -> Result<InputEvent, InputParseError> {
    let phase = parse_phase(raw.phase.as_deref())?;
    let touches = raw
        .touches
        .unwrap_or_default()
        .into_iter()
        .map(|t| TouchPoint::new(t.x, t.y))
        .collect();
    Ok(InputEvent::Touch(TouchEvent::new(phase, touches)))
}

fn parse_resize(raw: &RawInput) -> Result<InputEvent, InputParseError> {
    let width = raw.width.ok_or(InputParseError::MissingField("width"))?;
    let height = raw.height.ok_or(InputParseError::MissingField("height"))?;
    let viewport = Viewport::try_new(width, height).map_err(InputParseError::InvalidViewport)?;
    Ok(InputEvent::Resize(viewport))
}
