#![forbid(unsafe_code)]

//! Logging shims.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported here
//! (and at the crate root). Without it, no-op macros with the same names are
//! exported at the crate root so call sites compile unchanged.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }
}

/// Failure to install the global JSON subscriber.
#[cfg(feature = "tracing-json")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingInitError(pub String);

#[cfg(feature = "tracing-json")]
impl std::fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to install json subscriber: {}", self.0)
    }
}

#[cfg(feature = "tracing-json")]
impl std::error::Error for LoggingInitError {}

/// Install a global JSON `tracing` subscriber filtered by `filter`
/// (`EnvFilter` syntax, e.g. `"zonesnap_core=debug"`).
#[cfg(feature = "tracing-json")]
pub fn init_json(filter: &str) -> Result<(), LoggingInitError> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(filter))
        .try_init()
        .map_err(|err| LoggingInitError(err.to_string()))
}
