#![forbid(unsafe_code)]

//! Gesture tracking: press-move-release sequences to zone states.
//!
//! [`GestureTracker`] owns the single source of truth for one draggable
//! surface: whether a drag is in progress, the last known pointer position,
//! and the current [`ZoneState`]. Hosts feed it start/move/end steps (or raw
//! [`InputEvent`]s via [`GestureTracker::apply`]) and read the result from the
//! returned [`GestureDispatch`].
//!
//! # State Machine
//!
//! ```text
//!            start                 move (hinge crossed, x in quartile)
//!  resting ────────► FOLLOW ──────────────────────────────► classified
//!     ▲                 │                                       │
//!     │   end (no crossing: release fallback)                   │
//!     └─────────────────┴───────────── end (keep classified) ───┘
//! ```
//!
//! # Invariants
//!
//! 1. Exactly one [`ZoneState`] is current at any time.
//! 2. Moves without an active session change nothing.
//! 3. A duplicate `start` refreshes the position but never resets the state.
//! 4. `end` without an active session is a no-op, so `end` is idempotent.
//! 5. A move that does not cross the hinge leaves the state unchanged.
//!
//! # Failure Modes
//!
//! - Malformed input (non-finite coordinates, empty touch lists) is ignored
//!   and reported as [`GestureIgnoredReason::Malformed`].
//! - A hinge crossing outside every quartile keeps the previous state; the
//!   dispatch carries [`Crossing::Unclassified`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::event::{GestureInput, InputEvent, InputPhase, InputRejection};
use crate::geometry::Position;
use crate::zone::{Crossing, CrossingDirection, ZoneGrid, ZoneState};

#[cfg(feature = "tracing")]
use crate::logging::{debug, trace};
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which states the tracker enters at each lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureConfig {
    /// Resting state before the first drag (default: `Top`).
    pub initial_state: ZoneState,
    /// State entered when a drag starts (default: `Follow`).
    pub drag_state: ZoneState,
    /// State a released session settles into when it never crossed the
    /// hinge into a quartile (default: `Top`).
    pub release_fallback: ZoneState,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            initial_state: ZoneState::Top,
            drag_state: ZoneState::Follow,
            release_fallback: ZoneState::Top,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Mutable record of one continuous press-move-release cycle.
///
/// A session exists only while a drag is active; the tracker drops it on
/// release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    last_position: Position,
    state: ZoneState,
    classified: Option<ZoneState>,
}

impl GestureSession {
    fn open(position: Position, state: ZoneState) -> Self {
        Self {
            last_position: position,
            state,
            classified: None,
        }
    }

    /// Last position seen in this session.
    #[must_use]
    pub const fn last_position(&self) -> Position {
        self.last_position
    }

    /// Current zone state of this session.
    #[must_use]
    pub const fn state(&self) -> ZoneState {
        self.state
    }

    /// Most recent zone reached by a classified hinge crossing.
    #[must_use]
    pub const fn classified(&self) -> Option<ZoneState> {
        self.classified
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Lifecycle step a dispatch was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

impl From<InputPhase> for GesturePhase {
    fn from(phase: InputPhase) -> Self {
        match phase {
            InputPhase::Start => Self::Start,
            InputPhase::Move => Self::Move,
            InputPhase::End => Self::End,
        }
    }
}

/// Why a step left the tracker untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureIgnoredReason {
    /// Move or end without a drag in progress.
    NoActiveSession,
    /// No finite position could be read from the input.
    Malformed,
    /// Touch end while other touch points remain.
    TouchesRemaining,
    /// The input carried no gesture (e.g. resize).
    NotAGesture,
}

impl From<InputRejection> for GestureIgnoredReason {
    fn from(rejection: InputRejection) -> Self {
        match rejection {
            InputRejection::Malformed => Self::Malformed,
            InputRejection::TouchesRemaining => Self::TouchesRemaining,
            InputRejection::NotAGesture => Self::NotAGesture,
        }
    }
}

/// Outcome category for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureOutcome {
    /// A new session was opened.
    Started,
    /// Start while already dragging; position refreshed, state kept.
    Reacquired,
    /// Position updated during a drag.
    Moved,
    /// The session was closed.
    Released,
    Ignored(GestureIgnoredReason),
}

/// A change of zone state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneTransition {
    pub from: ZoneState,
    pub to: ZoneState,
    /// Hinge crossing that caused the change, if any.
    pub direction: Option<CrossingDirection>,
}

/// Read-only view of the tracker after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureSnapshot {
    pub state: ZoneState,
    pub position: Position,
    pub dragging: bool,
}

/// Result of one tracker step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDispatch {
    pub phase: Option<GesturePhase>,
    pub outcome: GestureOutcome,
    /// Hinge inspection result for moves; [`Crossing::None`] otherwise.
    pub crossing: Crossing,
    pub transition: Option<ZoneTransition>,
    pub snapshot: GestureSnapshot,
}

impl GestureDispatch {
    /// The step changed the zone state.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.transition.is_some()
    }

    /// The step was discarded.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.outcome, GestureOutcome::Ignored(_))
    }
}

// ---------------------------------------------------------------------------
// GestureTracker
// ---------------------------------------------------------------------------

/// Owner of the gesture session and the resting zone state.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    config: GestureConfig,
    session: Option<GestureSession>,
    resting: ZoneState,
    position: Position,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureTracker {
    /// Create a tracker resting in `config.initial_state`.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
            resting: config.initial_state,
            position: Position::default(),
        }
    }

    /// Current zone state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> ZoneState {
        self.session.map_or(self.resting, |session| session.state)
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Last known pointer position (kept after release).
    #[inline]
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> GestureSnapshot {
        GestureSnapshot {
            state: self.state(),
            position: self.position,
            dragging: self.is_dragging(),
        }
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration. Takes effect at the next step.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Drop any session and return to `initial_state`.
    pub fn reset(&mut self) {
        self.session = None;
        self.resting = self.config.initial_state;
        self.position = Position::default();
    }

    /// Route a raw host event through normalization.
    pub fn apply(&mut self, event: &InputEvent, grid: &ZoneGrid) -> GestureDispatch {
        match event.normalize() {
            Ok(GestureInput::Start(pos)) => self.start(pos),
            Ok(GestureInput::Move(pos)) => self.move_to(pos, grid),
            Ok(GestureInput::End) => self.end(),
            Err(rejection) => self.ignored(event.phase().map(Into::into), rejection.into()),
        }
    }

    /// Press on the draggable surface.
    pub fn start(&mut self, point: Position) -> GestureDispatch {
        if !point.is_finite() {
            return self.ignored(Some(GesturePhase::Start), GestureIgnoredReason::Malformed);
        }
        self.position = point;

        if let Some(session) = self.session.as_mut() {
            session.last_position = point;
            return self.dispatch(GesturePhase::Start, GestureOutcome::Reacquired, None);
        }

        let from = self.resting;
        let to = self.config.drag_state;
        self.session = Some(GestureSession::open(point, to));
        debug!(x = point.x, y = point.y, state = %to, "gesture session started");
        self.dispatch(
            GesturePhase::Start,
            GestureOutcome::Started,
            transition(from, to, None),
        )
    }

    /// Pointer motion anywhere on the surface area.
    pub fn move_to(&mut self, point: Position, grid: &ZoneGrid) -> GestureDispatch {
        let Some(session) = self.session.as_mut() else {
            return self.ignored(Some(GesturePhase::Move), GestureIgnoredReason::NoActiveSession);
        };
        if !point.is_finite() {
            return self.ignored(Some(GesturePhase::Move), GestureIgnoredReason::Malformed);
        }

        let crossing = grid.classify_move(session.last_position.y, point.x, point.y);
        session.last_position = point;
        self.position = point;

        let mut change = None;
        match crossing {
            Crossing::Classified { direction, state } => {
                let from = session.state;
                session.state = state;
                session.classified = Some(state);
                change = transition(from, state, Some(direction));
                if change.is_some() {
                    debug!(from = %from, to = %state, ?direction, "zone classified");
                }
            }
            Crossing::Unclassified { .. } => {
                trace!(x = point.x, y = point.y, "hinge crossed outside quartiles");
            }
            Crossing::None => {}
        }

        let mut dispatch = self.dispatch(GesturePhase::Move, GestureOutcome::Moved, change);
        dispatch.crossing = crossing;
        dispatch
    }

    /// Release (pointer up, or touch end with no remaining touches).
    pub fn end(&mut self) -> GestureDispatch {
        let Some(session) = self.session.take() else {
            return self.ignored(Some(GesturePhase::End), GestureIgnoredReason::NoActiveSession);
        };
        let settled = session.classified.unwrap_or(self.config.release_fallback);
        self.resting = settled;
        debug!(state = %settled, "gesture session released");
        self.dispatch(
            GesturePhase::End,
            GestureOutcome::Released,
            transition(session.state, settled, None),
        )
    }

    fn dispatch(
        &self,
        phase: GesturePhase,
        outcome: GestureOutcome,
        transition: Option<ZoneTransition>,
    ) -> GestureDispatch {
        GestureDispatch {
            phase: Some(phase),
            outcome,
            crossing: Crossing::None,
            transition,
            snapshot: self.snapshot(),
        }
    }

    fn ignored(
        &self,
        phase: Option<GesturePhase>,
        reason: GestureIgnoredReason,
    ) -> GestureDispatch {
        debug!(?phase, ?reason, "gesture input ignored");
        GestureDispatch {
            phase,
            outcome: GestureOutcome::Ignored(reason),
            crossing: Crossing::None,
            transition: None,
            snapshot: self.snapshot(),
        }
    }
}

fn transition(
    from: ZoneState,
    to: ZoneState,
    direction: Option<CrossingDirection>,
) -> Option<ZoneTransition> {
    (from != to).then_some(ZoneTransition {
        from,
        to,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;

    fn grid() -> ZoneGrid {
        ZoneGrid::from_viewport(Viewport::new(1000.0, 800.0))
    }

    fn p(x: f64, y: f64) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn starts_resting_at_initial_state() {
        let tracker = GestureTracker::default();
        assert_eq!(tracker.state(), ZoneState::Top);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn start_enters_follow() {
        let mut tracker = GestureTracker::default();
        let d = tracker.start(p(500.0, 100.0));
        assert_eq!(d.outcome, GestureOutcome::Started);
        assert_eq!(
            d.transition,
            Some(ZoneTransition {
                from: ZoneState::Top,
                to: ZoneState::Follow,
                direction: None
            })
        );
        assert_eq!(tracker.state(), ZoneState::Follow);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.position(), p(500.0, 100.0));
    }

    #[test]
    fn duplicate_start_keeps_state() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.start(p(50.0, 100.0));
        tracker.move_to(p(50.0, 500.0), &g);
        assert_eq!(tracker.state(), ZoneState::BotLeft);

        let d = tracker.start(p(60.0, 600.0));
        assert_eq!(d.outcome, GestureOutcome::Reacquired);
        assert!(!d.changed());
        assert_eq!(tracker.state(), ZoneState::BotLeft);
        assert_eq!(tracker.session().unwrap().last_position(), p(60.0, 600.0));
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut tracker = GestureTracker::default();
        let d = tracker.move_to(p(500.0, 500.0), &grid());
        assert_eq!(
            d.outcome,
            GestureOutcome::Ignored(GestureIgnoredReason::NoActiveSession)
        );
        assert_eq!(tracker.position(), Position::default());
    }

    #[test]
    fn downward_crossing_in_third_quartile_hides() {
        let mut tracker = GestureTracker::default();
        tracker.start(p(500.0, 100.0));
        let d = tracker.move_to(p(500.0, 500.0), &grid());
        assert_eq!(tracker.state(), ZoneState::Hidden);
        assert_eq!(
            d.transition.map(|t| t.direction),
            Some(Some(CrossingDirection::Down))
        );
    }

    #[test]
    fn upward_crossing_uses_up_table() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.start(p(900.0, 700.0));
        tracker.move_to(p(900.0, 100.0), &g);
        assert_eq!(tracker.state(), ZoneState::TopRight);
        tracker.move_to(p(300.0, 450.0), &g);
        assert_eq!(tracker.state(), ZoneState::Bottom);
        tracker.move_to(p(300.0, 10.0), &g);
        assert_eq!(tracker.state(), ZoneState::Top);
    }

    #[test]
    fn same_half_moves_keep_follow() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.start(p(500.0, 100.0));
        for y in [120.0, 200.0, 399.0, 150.0] {
            let d = tracker.move_to(p(700.0, y), &g);
            assert_eq!(d.crossing, Crossing::None);
            assert!(!d.changed());
        }
        assert_eq!(tracker.state(), ZoneState::Follow);
        assert_eq!(tracker.position(), p(700.0, 150.0));
    }

    #[test]
    fn unclassified_crossing_keeps_state_but_moves() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.start(p(100.0, 100.0));
        let d = tracker.move_to(p(1000.0, 500.0), &g);
        assert_eq!(
            d.crossing,
            Crossing::Unclassified {
                direction: CrossingDirection::Down
            }
        );
        assert_eq!(tracker.state(), ZoneState::Follow);
        assert_eq!(tracker.position(), p(1000.0, 500.0));
    }

    #[test]
    fn release_keeps_classified_state() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.start(p(50.0, 100.0));
        tracker.move_to(p(50.0, 500.0), &g);
        let d = tracker.end();
        assert_eq!(d.outcome, GestureOutcome::Released);
        assert!(!d.changed());
        assert_eq!(tracker.state(), ZoneState::BotLeft);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.position(), p(50.0, 500.0));
    }

    #[test]
    fn release_without_crossing_falls_back() {
        let mut tracker = GestureTracker::default();
        tracker.start(p(500.0, 100.0));
        let d = tracker.end();
        assert_eq!(tracker.state(), ZoneState::Top);
        assert_eq!(
            d.transition,
            Some(ZoneTransition {
                from: ZoneState::Follow,
                to: ZoneState::Top,
                direction: None
            })
        );
    }

    #[test]
    fn fallback_is_top_for_every_new_session() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.start(p(50.0, 100.0));
        tracker.move_to(p(50.0, 500.0), &g);
        tracker.end();
        assert_eq!(tracker.state(), ZoneState::BotLeft);

        tracker.start(p(50.0, 500.0));
        tracker.move_to(p(60.0, 600.0), &g);
        tracker.end();
        assert_eq!(tracker.state(), ZoneState::Top);
    }

    #[test]
    fn end_is_idempotent() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.start(p(900.0, 100.0));
        tracker.move_to(p(900.0, 500.0), &g);
        tracker.end();
        let once = tracker.snapshot();
        let d = tracker.end();
        assert_eq!(
            d.outcome,
            GestureOutcome::Ignored(GestureIgnoredReason::NoActiveSession)
        );
        assert_eq!(tracker.snapshot(), once);
    }

    #[test]
    fn malformed_move_keeps_session() {
        let mut tracker = GestureTracker::default();
        let idle = tracker.move_to(p(f64::NAN, 1.0), &grid());
        assert_eq!(
            idle.outcome,
            GestureOutcome::Ignored(GestureIgnoredReason::NoActiveSession)
        );

        tracker.start(p(500.0, 100.0));
        let d = tracker.move_to(p(f64::INFINITY, 500.0), &grid());
        assert_eq!(
            d.outcome,
            GestureOutcome::Ignored(GestureIgnoredReason::Malformed)
        );
        assert!(tracker.is_dragging());
        assert_eq!(tracker.session().unwrap().last_position(), p(500.0, 100.0));
        assert_eq!(tracker.state(), ZoneState::Follow);
    }

    #[test]
    fn set_config_applies_to_next_release() {
        let mut tracker = GestureTracker::default();
        tracker.start(p(1.0, 1.0));
        tracker.set_config(GestureConfig {
            release_fallback: ZoneState::Bottom,
            ..GestureConfig::default()
        });
        tracker.end();
        assert_eq!(tracker.state(), ZoneState::Bottom);
        assert_eq!(tracker.config().release_fallback, ZoneState::Bottom);
    }

    #[cfg(feature = "tracing")]
    mod logs {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn ignored_input_logs_at_debug() {
            let mut tracker = GestureTracker::default();
            tracker.end();
            assert!(logs_contain("DEBUG"));
            assert!(logs_contain("gesture input ignored"));
            assert!(logs_contain("NoActiveSession"));
        }
    }

    #[test]
    fn malformed_start_is_ignored() {
        let mut tracker = GestureTracker::default();
        let d = tracker.start(p(f64::NAN, 1.0));
        assert!(d.is_ignored());
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn apply_routes_touch_events() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        tracker.apply(&InputEvent::touch(InputPhase::Start, 50.0, 100.0), &g);
        tracker.apply(&InputEvent::touch(InputPhase::Move, 50.0, 500.0), &g);
        let held = tracker.apply(&InputEvent::touch(InputPhase::End, 50.0, 500.0), &g);
        assert_eq!(
            held.outcome,
            GestureOutcome::Ignored(GestureIgnoredReason::TouchesRemaining)
        );
        assert!(tracker.is_dragging());
        tracker.apply(&InputEvent::touch_release(), &g);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.state(), ZoneState::BotLeft);
    }

    #[test]
    fn apply_ignores_resize() {
        let g = grid();
        let mut tracker = GestureTracker::default();
        let d = tracker.apply(&InputEvent::Resize(Viewport::new(1.0, 1.0)), &g);
        assert_eq!(d.phase, None);
        assert_eq!(
            d.outcome,
            GestureOutcome::Ignored(GestureIgnoredReason::NotAGesture)
        );
    }

    #[test]
    fn reset_returns_to_initial() {
        let mut tracker = GestureTracker::default();
        tracker.start(p(1.0, 1.0));
        tracker.reset();
        assert_eq!(tracker.snapshot(), GestureTracker::default().snapshot());
    }

    #[test]
    fn custom_config_changes_fallback() {
        let mut tracker = GestureTracker::new(GestureConfig {
            release_fallback: ZoneState::Full,
            ..GestureConfig::default()
        });
        tracker.start(p(1.0, 1.0));
        tracker.end();
        assert_eq!(tracker.state(), ZoneState::Full);
    }
}
