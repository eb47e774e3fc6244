#![forbid(unsafe_code)]

//! `zonesnap-web` drives a snap surface from a browser host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes input events
//!   and viewport changes; the surface never polls.
//! - **One source of truth**: the [`GestureTracker`] owns the session; frames
//!   are recomputed from it on demand, never stored.
//! - **Scoped listeners**: every viewport snapshot gets its own
//!   [`ListenerSet`], released and reacquired on change.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.

pub mod listeners;
pub mod session_record;

#[cfg(feature = "input-parser")]
pub mod input_parser;

use core::time::Duration;
use std::fmt;

use zonesnap_core::debug;
use zonesnap_core::event::{InputEvent, InputPhase};
use zonesnap_core::geometry::{GeometryError, Viewport};
use zonesnap_core::gesture::{GestureConfig, GestureDispatch, GestureTracker};
use zonesnap_layout::{
    FillPalette, GeometryResolver, IndicatorOpacity, ResolvedFrame, Rgb, box_rect,
};

pub use listeners::{CommandQueue, ListenerCommand, ListenerKind, ListenerSet, ListenerTarget};

/// Transition duration hint for hosts that animate box changes.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(50);

/// Surface configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    pub gesture: GestureConfig,
    pub opacity: IndicatorOpacity,
    pub palette: FillPalette,
    /// Reported on every frame (default: 50ms).
    pub transition: Duration,
    /// If true, a press only starts a drag when it lands on the box, as a
    /// listener on the box element would (default: true).
    pub start_on_box_only: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            opacity: IndicatorOpacity::default(),
            palette: FillPalette::default(),
            transition: DEFAULT_TRANSITION,
            start_on_box_only: true,
        }
    }
}

/// One paintable frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    pub viewport: Viewport,
    pub resolved: ResolvedFrame,
    pub color: Rgb,
    pub transition: Duration,
}

/// Identifier returned by [`SnapSurface::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Why the surface discarded an event before it reached the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceIgnoredReason {
    /// The surface is unmounted; no listeners are attached.
    Unmounted,
    /// A press landed outside the box.
    OutsideBox,
    /// A resize carried an invalid viewport.
    InvalidViewport(GeometryError),
}

/// Outcome category for one surface dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOutcome {
    /// The event reached the tracker.
    Gesture(GestureDispatch),
    /// The viewport changed and listeners were reacquired.
    Resized { from: Viewport, to: Viewport },
    /// A resize to the current viewport.
    Unchanged,
    Ignored(SurfaceIgnoredReason),
}

/// Result of one [`SnapSurface::handle`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDispatch {
    pub outcome: SurfaceOutcome,
    /// Whether observers were notified.
    pub notified: bool,
    pub frame: SurfaceFrame,
}

type Observer = Box<dyn FnMut(&SurfaceFrame)>;

/// Render surface: tracker, resolver, listener scope and observers.
pub struct SnapSurface {
    config: SurfaceConfig,
    tracker: GestureTracker,
    resolver: GeometryResolver,
    viewport: Viewport,
    listeners: Option<ListenerSet>,
    commands: CommandQueue,
    next_generation: u64,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl fmt::Debug for SnapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapSurface")
            .field("viewport", &self.viewport)
            .field("state", &self.tracker.state())
            .field("dragging", &self.tracker.is_dragging())
            .field("generation", &self.generation())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SnapSurface {
    /// Create a mounted surface for `viewport`.
    pub fn new(viewport: Viewport, config: SurfaceConfig) -> Result<Self, GeometryError> {
        let viewport = Viewport::try_new(viewport.width, viewport.height)?;
        let mut surface = Self {
            config,
            tracker: GestureTracker::new(config.gesture),
            resolver: GeometryResolver::new(config.opacity),
            viewport,
            listeners: None,
            commands: CommandQueue::new(),
            next_generation: 1,
            observers: Vec::new(),
            next_observer: 1,
        };
        surface.mount();
        Ok(surface)
    }

    #[must_use]
    pub const fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Replace the configuration. An active drag keeps its session; the new
    /// gesture settings apply from the next step.
    pub fn set_config(&mut self, config: SurfaceConfig) {
        self.config = config;
        self.tracker.set_config(config.gesture);
        self.resolver = GeometryResolver::new(config.opacity);
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub const fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Generation of the attached listener set, if mounted.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        self.listeners.as_ref().map(ListenerSet::generation)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    /// Pending host listener commands, oldest first.
    pub fn drain_commands(&mut self) -> Vec<ListenerCommand> {
        self.commands.drain()
    }

    /// Attach listeners for the current viewport. No-op if already mounted.
    pub fn mount(&mut self) {
        if self.listeners.is_none() {
            self.listeners = Some(self.acquire());
        }
    }

    /// Detach all listeners. The tracker keeps its state.
    pub fn unmount(&mut self) {
        self.listeners = None;
    }

    /// Register a frame observer.
    pub fn subscribe(&mut self, observer: impl FnMut(&SurfaceFrame) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Resolve the current frame.
    #[must_use]
    pub fn frame(&self) -> SurfaceFrame {
        let resolved = self
            .resolver
            .resolve_snapshot(&self.tracker.snapshot(), self.viewport);
        SurfaceFrame {
            viewport: self.viewport,
            resolved,
            color: self.config.palette.color(resolved.fill),
            transition: self.config.transition,
        }
    }

    /// Apply a viewport change, reacquiring listeners if it differs.
    ///
    /// Returns `Ok(true)` when the viewport changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<bool, GeometryError> {
        let viewport = Viewport::try_new(viewport.width, viewport.height)?;
        if viewport == self.viewport {
            return Ok(false);
        }
        self.viewport = viewport;
        if self.listeners.is_some() {
            // Detach commands for the old set precede attach commands for the new one.
            self.listeners = None;
            self.listeners = Some(self.acquire());
        }
        self.notify();
        Ok(true)
    }

    /// Handle one host event.
    pub fn handle(&mut self, event: &InputEvent) -> SurfaceDispatch {
        if let InputEvent::Resize(viewport) = event {
            let from = self.viewport;
            return match self.set_viewport(*viewport) {
                Ok(true) => self.finish(
                    SurfaceOutcome::Resized {
                        from,
                        to: self.viewport,
                    },
                    true,
                ),
                Ok(false) => self.finish(SurfaceOutcome::Unchanged, false),
                Err(err) => self.ignore(SurfaceIgnoredReason::InvalidViewport(err)),
            };
        }

        let Some(grid) = self.listeners.as_ref().map(|set| *set.grid()) else {
            return self.ignore(SurfaceIgnoredReason::Unmounted);
        };

        if self.config.start_on_box_only && !self.tracker.is_dragging() && self.misses_box(event) {
            return self.ignore(SurfaceIgnoredReason::OutsideBox);
        }

        let dispatch = self.tracker.apply(event, &grid);
        let notify = !dispatch.is_ignored();
        if notify {
            self.notify();
        }
        self.finish(SurfaceOutcome::Gesture(dispatch), notify)
    }

    /// A press whose position falls outside the current box.
    fn misses_box(&self, event: &InputEvent) -> bool {
        if event.phase() != Some(InputPhase::Start) {
            return false;
        }
        let Some(pos) = event.position() else {
            return false;
        };
        let current = self.tracker.snapshot();
        !box_rect(current.state, current.position, self.viewport).contains(pos)
    }

    fn acquire(&mut self) -> ListenerSet {
        let generation = self.next_generation;
        self.next_generation += 1;
        ListenerSet::acquire(generation, self.viewport, &self.commands)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let frame = self.frame();
        for (_, observer) in &mut self.observers {
            observer(&frame);
        }
    }

    fn finish(&self, outcome: SurfaceOutcome, notified: bool) -> SurfaceDispatch {
        SurfaceDispatch {
            outcome,
            notified,
            frame: self.frame(),
        }
    }

    fn ignore(&self, reason: SurfaceIgnoredReason) -> SurfaceDispatch {
        debug!(?reason, "surface event ignored");
        self.finish(SurfaceOutcome::Ignored(reason), false)
    }
}
