#![forbid(unsafe_code)]

//! Deterministic session recording and replay.
//!
//! Provides [`SessionRecorder`] for recording the input events and viewport
//! changes delivered to a [`SnapSurface`], and [`replay`] for feeding them
//! through a fresh surface to verify that frame checksums match exactly.
//!
//! # Trace layout
//!
//! - **Header**: schema version and initial viewport (must be first).
//! - **Input**: timestamped host events.
//! - **Resize**: viewport changes.
//! - **Frame**: checkpoints with FNV-1a checksums and chaining, recorded
//!   after every event that notified observers.
//! - **Summary**: total frames and final checksum chain (must be last).
//!
//! # Determinism contract
//!
//! Given identical recorded inputs and the same [`SurfaceConfig`], replay
//! produces identical frame checksums. The surface has no clock and no
//! hidden inputs: every frame is a pure function of the events applied.

use zonesnap_core::event::InputEvent;
use zonesnap_core::geometry::{GeometryError, Viewport};
use zonesnap_core::{debug, warn};

use crate::{SnapSurface, SurfaceConfig, SurfaceDispatch, SurfaceFrame};

/// Schema version for session traces.
pub const SCHEMA_VERSION: &str = "zonesnap-trace-v1";

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

fn fnv1a64_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn fnv1a64_u64(hash: u64, v: u64) -> u64 {
    fnv1a64_bytes(hash, &v.to_le_bytes())
}

fn fnv1a64_pair(prev: u64, next: u64) -> u64 {
    let hash = FNV_OFFSET_BASIS;
    let hash = fnv1a64_u64(hash, prev);
    fnv1a64_u64(hash, next)
}

/// FNV-1a checksum over everything a host paints for `frame`.
///
/// Floats are hashed by bit pattern, so `-0.0` and `0.0` differ.
#[must_use]
pub fn checksum_frame(frame: &SurfaceFrame) -> u64 {
    let resolved = &frame.resolved;
    let mut hash = fnv1a64_bytes(FNV_OFFSET_BASIS, resolved.state.as_str().as_bytes());
    hash = fnv1a64_bytes(hash, &[u8::from(resolved.dragging)]);
    for v in [
        resolved.rect.x,
        resolved.rect.y,
        resolved.rect.width,
        resolved.rect.height,
    ] {
        hash = fnv1a64_u64(hash, v.to_bits());
    }
    for (_, opacity) in resolved.indicators.iter() {
        hash = fnv1a64_u64(hash, u64::from(opacity.to_bits()));
    }
    fnv1a64_bytes(hash, &[frame.color.r, frame.color.g, frame.color.b])
}

/// A single record in a session trace.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceRecord {
    /// Session header (must be first).
    Header {
        schema: String,
        width: f64,
        height: f64,
    },
    /// A host event at a specific timestamp.
    Input { ts_ns: u64, event: InputEvent },
    /// Viewport change at a specific timestamp.
    Resize { ts_ns: u64, width: f64, height: f64 },
    /// Frame checkpoint with checksum.
    Frame {
        frame_idx: u64,
        ts_ns: u64,
        checksum: u64,
        checksum_chain: u64,
    },
    /// Trace summary (must be last).
    Summary {
        total_frames: u64,
        final_checksum_chain: u64,
    },
}

/// A complete recorded session trace.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTrace {
    pub records: Vec<TraceRecord>,
}

impl SessionTrace {
    /// Number of frame checkpoints in the trace.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.records
            .iter()
            .filter(|r| matches!(r, TraceRecord::Frame { .. }))
            .count() as u64
    }

    /// Extract the final checksum chain from the summary record.
    #[must_use]
    pub fn final_checksum_chain(&self) -> Option<u64> {
        self.records.iter().rev().find_map(|r| match r {
            TraceRecord::Summary {
                final_checksum_chain,
                ..
            } => Some(*final_checksum_chain),
            _ => None,
        })
    }
}

/// Records a surface session for deterministic replay.
///
/// Wraps a [`SnapSurface`] and intercepts every event, recording it as a
/// [`TraceRecord`]. A frame checkpoint follows each event that notified
/// observers.
#[derive(Debug)]
pub struct SessionRecorder {
    surface: SnapSurface,
    records: Vec<TraceRecord>,
    frame_idx: u64,
    checksum_chain: u64,
    current_ts_ns: u64,
}

impl SessionRecorder {
    /// Create a recorder and checkpoint the initial frame.
    pub fn new(viewport: Viewport, config: SurfaceConfig) -> Result<Self, GeometryError> {
        let surface = SnapSurface::new(viewport, config)?;
        let mut recorder = Self {
            records: vec![TraceRecord::Header {
                schema: SCHEMA_VERSION.to_string(),
                width: surface.viewport().width,
                height: surface.viewport().height,
            }],
            surface,
            frame_idx: 0,
            checksum_chain: 0,
            current_ts_ns: 0,
        };
        recorder.record_frame();
        Ok(recorder)
    }

    /// Record a host event at the given timestamp (nanoseconds since start).
    pub fn push_event(&mut self, ts_ns: u64, event: InputEvent) -> SurfaceDispatch {
        self.current_ts_ns = ts_ns;
        let dispatch = self.surface.handle(&event);
        self.records.push(TraceRecord::Input { ts_ns, event });
        if dispatch.notified {
            self.record_frame();
        }
        dispatch
    }

    /// Record a viewport change at the given timestamp.
    pub fn resize(&mut self, ts_ns: u64, viewport: Viewport) -> Result<bool, GeometryError> {
        self.current_ts_ns = ts_ns;
        let changed = self.surface.set_viewport(viewport)?;
        self.records.push(TraceRecord::Resize {
            ts_ns,
            width: viewport.width,
            height: viewport.height,
        });
        if changed {
            self.record_frame();
        }
        Ok(changed)
    }

    /// Finish recording and return the completed trace.
    #[must_use]
    pub fn finish(mut self) -> SessionTrace {
        self.records.push(TraceRecord::Summary {
            total_frames: self.frame_idx,
            final_checksum_chain: self.checksum_chain,
        });
        SessionTrace {
            records: self.records,
        }
    }

    /// Access the underlying surface.
    #[must_use]
    pub fn surface(&self) -> &SnapSurface {
        &self.surface
    }

    fn record_frame(&mut self) {
        let checksum = checksum_frame(&self.surface.frame());
        let chain = fnv1a64_pair(self.checksum_chain, checksum);
        self.records.push(TraceRecord::Frame {
            frame_idx: self.frame_idx,
            ts_ns: self.current_ts_ns,
            checksum,
            checksum_chain: chain,
        });
        self.frame_idx += 1;
        self.checksum_chain = chain;
    }
}

/// Result of replaying a session trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayResult {
    /// Total frames replayed.
    pub total_frames: u64,
    /// Final checksum chain from replay.
    pub final_checksum_chain: u64,
    /// First frame where a checksum mismatch was detected, if any.
    pub first_mismatch: Option<ReplayMismatch>,
}

impl ReplayResult {
    /// Whether the replay produced identical checksums.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// Description of a checksum mismatch during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayMismatch {
    pub frame_idx: u64,
    pub expected: u64,
    pub actual: u64,
}

/// Errors that can occur during replay.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayError {
    /// The trace is missing a header record.
    MissingHeader,
    /// The header names a schema this build cannot replay.
    SchemaMismatch {
        expected: &'static str,
        found: String,
    },
    /// The header or a resize record carries an unusable viewport.
    InvalidViewport(GeometryError),
}

impl core::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "trace missing header record"),
            Self::SchemaMismatch { expected, found } => {
                write!(f, "trace schema {found:?} does not match {expected:?}")
            }
            Self::InvalidViewport(e) => write!(f, "invalid viewport in trace: {e}"),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<GeometryError> for ReplayError {
    fn from(e: GeometryError) -> Self {
        Self::InvalidViewport(e)
    }
}

/// Replay a recorded trace through a fresh surface.
///
/// Input and resize records are applied in order; each frame record
/// checksums the surface's current frame and compares it with the recorded
/// value.
pub fn replay(config: SurfaceConfig, trace: &SessionTrace) -> Result<ReplayResult, ReplayError> {
    let Some(TraceRecord::Header {
        schema,
        width,
        height,
    }) = trace.records.first()
    else {
        return Err(ReplayError::MissingHeader);
    };
    if schema != SCHEMA_VERSION {
        return Err(ReplayError::SchemaMismatch {
            expected: SCHEMA_VERSION,
            found: schema.clone(),
        });
    }
    let viewport = Viewport::new(*width, *height);

    let mut surface = SnapSurface::new(viewport, config)?;
    let mut total_frames: u64 = 0;
    let mut checksum_chain: u64 = 0;
    let mut first_mismatch: Option<ReplayMismatch> = None;

    for record in &trace.records {
        match record {
            TraceRecord::Input { event, .. } => {
                surface.handle(event);
            }
            TraceRecord::Resize { width, height, .. } => {
                surface.set_viewport(Viewport::new(*width, *height))?;
            }
            TraceRecord::Frame {
                frame_idx,
                checksum: expected,
                ..
            } => {
                let actual = checksum_frame(&surface.frame());
                checksum_chain = fnv1a64_pair(checksum_chain, actual);
                if actual != *expected && first_mismatch.is_none() {
                    warn!(frame_idx, expected, actual, "replay checksum mismatch");
                    first_mismatch = Some(ReplayMismatch {
                        frame_idx: *frame_idx,
                        expected: *expected,
                        actual,
                    });
                }
                total_frames += 1;
            }
            TraceRecord::Header { .. } | TraceRecord::Summary { .. } => {}
        }
    }

    debug!(
        total_frames,
        ok = first_mismatch.is_none(),
        "session replay finished"
    );

    Ok(ReplayResult {
        total_frames,
        final_checksum_chain: checksum_chain,
        first_mismatch,
    })
}
