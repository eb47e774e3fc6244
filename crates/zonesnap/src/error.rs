#![forbid(unsafe_code)]

//! zonesnap error model.
//!
//! Interactive input never produces an error: malformed or out-of-order
//! events are reported as ignored reasons on dispatch values. Errors are
//! reserved for setup and tooling paths (viewport construction, JSON
//! decoding, trace replay, logging init).

use std::fmt;

use zonesnap_core::geometry::GeometryError;
use zonesnap_web::session_record::ReplayError;

#[cfg(feature = "input-parser")]
use zonesnap_web::input_parser::InputParseError;

#[cfg(feature = "tracing-json")]
use zonesnap_core::logging::LoggingInitError;

/// Top-level error type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Viewport dimensions were not finite and non-negative.
    Geometry(GeometryError),
    /// A recorded session trace could not be replayed.
    Replay(ReplayError),
    /// Host input JSON could not be decoded.
    #[cfg(feature = "input-parser")]
    InputParse(InputParseError),
    /// The global subscriber could not be installed.
    #[cfg(feature = "tracing-json")]
    Logging(LoggingInitError),
}

/// Standard result type for zonesnap APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "{err}"),
            Self::Replay(err) => write!(f, "{err}"),
            #[cfg(feature = "input-parser")]
            Self::InputParse(err) => write!(f, "{err}"),
            #[cfg(feature = "tracing-json")]
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::Replay(err) => Some(err),
            #[cfg(feature = "input-parser")]
            Self::InputParse(err) => Some(err),
            #[cfg(feature = "tracing-json")]
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

impl From<ReplayError> for Error {
    fn from(err: ReplayError) -> Self {
        Self::Replay(err)
    }
}

#[cfg(feature = "input-parser")]
impl From<InputParseError> for Error {
    fn from(err: InputParseError) -> Self {
        Self::InputParse(err)
    }
}

#[cfg(feature = "tracing-json")]
impl From<LoggingInitError> for Error {
    fn from(err: LoggingInitError) -> Self {
        Self::Logging(err)
    }
}
