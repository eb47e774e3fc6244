#![forbid(unsafe_code)]

//! Zone classification: hinge crossings to discrete snap layouts.
//!
//! The viewport is split by a horizontal **hinge** at half its height and
//! into four equal vertical **quartile** columns. A drag that crosses the
//! hinge is classified by the crossing direction and the quartile the
//! pointer lands in:
//!
//! | quartile | 0 | 1 | 2 | 3 |
//! |---|---|---|---|---|
//! | down | `BotLeft` | `Bottom` | `Hidden` | `BotRight` |
//! | up | `TopLeft` | `Top` | `Hidden` | `TopRight` |
//!
//! Quartile 2 maps to [`ZoneState::Hidden`] in both directions; it is the
//! drop-to-hide area of the gesture language.
//!
//! # Invariants
//!
//! 1. Classification never yields [`ZoneState::Follow`] or [`ZoneState::Full`].
//! 2. A move that does not cross the hinge never classifies.
//! 3. Quartile membership is left-closed, right-open; `x == width` lies in no
//!    quartile and classifies to nothing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Viewport};

/// Number of horizontal classification columns.
pub const QUARTILE_COUNT: usize = 4;

/// One of the nine mutually exclusive snap layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ZoneState {
    /// Quarter-size box centred on the pointer.
    Follow,
    Top,
    Bottom,
    TopLeft,
    BotLeft,
    TopRight,
    BotRight,
    /// Fallback for an otherwise unset state.
    #[default]
    Full,
    /// Full-size, drawn as blank.
    Hidden,
}

impl ZoneState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Follow,
        Self::Top,
        Self::Bottom,
        Self::TopLeft,
        Self::BotLeft,
        Self::TopRight,
        Self::BotRight,
        Self::Full,
        Self::Hidden,
    ];

    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Follow => "FOLLOW",
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
            Self::TopLeft => "TOP_LEFT",
            Self::BotLeft => "BOT_LEFT",
            Self::TopRight => "TOP_RIGHT",
            Self::BotRight => "BOT_RIGHT",
            Self::Full => "FULL",
            Self::Hidden => "HIDDEN",
        }
    }

    /// The box is pinned to a fixed origin rather than following the pointer.
    #[must_use]
    pub const fn is_snapped(self) -> bool {
        !matches!(self, Self::Follow)
    }

    /// Quarter-viewport corner layouts.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BotLeft | Self::BotRight
        )
    }
}

impl fmt::Display for ZoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown zone name passed to [`ZoneState::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseZoneStateError(pub String);

impl fmt::Display for ParseZoneStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zone state: {}", self.0)
    }
}

impl std::error::Error for ParseZoneStateError {}

impl FromStr for ZoneState {
    type Err = ParseZoneStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseZoneStateError(s.to_owned()))
    }
}

/// Direction in which the pointer crossed the hinge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CrossingDirection {
    Down,
    Up,
}

impl CrossingDirection {
    /// Detect a hinge crossing between two successive y coordinates.
    ///
    /// Down: `prev < hinge <= next`. Up: `next < hinge <= prev`.
    #[must_use]
    pub fn detect(prev_y: f64, next_y: f64, hinge_y: f64) -> Option<Self> {
        if prev_y < hinge_y && next_y >= hinge_y {
            Some(Self::Down)
        } else if prev_y >= hinge_y && next_y < hinge_y {
            Some(Self::Up)
        } else {
            None
        }
    }

    /// Lookup table for this direction, indexed by quartile.
    #[must_use]
    pub const fn table(self) -> &'static [ZoneState; QUARTILE_COUNT] {
        match self {
            Self::Down => &CROSS_DOWN_STATES,
            Self::Up => &CROSS_UP_STATES,
        }
    }
}

/// States reached by crossing the hinge downward.
pub const CROSS_DOWN_STATES: [ZoneState; QUARTILE_COUNT] = [
    ZoneState::BotLeft,
    ZoneState::Bottom,
    ZoneState::Hidden,
    ZoneState::BotRight,
];

/// States reached by crossing the hinge upward.
pub const CROSS_UP_STATES: [ZoneState; QUARTILE_COUNT] = [
    ZoneState::TopLeft,
    ZoneState::Top,
    ZoneState::Hidden,
    ZoneState::TopRight,
];

/// Map a crossing direction and quartile index to a zone.
///
/// Returns `None` for an index outside `0..QUARTILE_COUNT`.
#[must_use]
pub fn classify(direction: CrossingDirection, quartile: usize) -> Option<ZoneState> {
    direction.table().get(quartile).copied()
}

/// Hinge line and quartile bounds derived from one viewport snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoneGrid {
    pub viewport: Viewport,
    pub hinge_y: f64,
    pub quartiles: [Bounds; QUARTILE_COUNT],
}

impl ZoneGrid {
    /// Compute the grid for `viewport`.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let w = viewport.width;
        Self {
            viewport,
            hinge_y: viewport.hinge_y(),
            quartiles: [
                Bounds::new(0.0, w / 4.0),
                Bounds::new(w / 4.0, w / 2.0),
                Bounds::new(w / 2.0, (3.0 * w) / 4.0),
                Bounds::new((3.0 * w) / 4.0, w),
            ],
        }
    }

    /// Index of the quartile containing `x`.
    ///
    /// Bounds are scanned left to right and the last match wins; with
    /// half-open bounds at most one can match.
    #[must_use]
    pub fn quartile_of(&self, x: f64) -> Option<usize> {
        self.quartiles.iter().rposition(|bounds| bounds.contains(x))
    }

    /// Classify a move from `prev_y` to `(x, next_y)`.
    ///
    /// Returns the crossing direction (if the hinge was crossed) and the new
    /// zone (if `x` also fell inside a quartile).
    #[must_use]
    pub fn classify_move(&self, prev_y: f64, x: f64, next_y: f64) -> Crossing {
        let Some(direction) = CrossingDirection::detect(prev_y, next_y, self.hinge_y) else {
            return Crossing::None;
        };
        match self.quartile_of(x).and_then(|q| classify(direction, q)) {
            Some(state) => Crossing::Classified { direction, state },
            None => Crossing::Unclassified { direction },
        }
    }
}

/// Result of inspecting one move against a [`ZoneGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The hinge was not crossed.
    None,
    /// The hinge was crossed but `x` lies outside every quartile.
    Unclassified { direction: CrossingDirection },
    /// The hinge was crossed into a known zone.
    Classified {
        direction: CrossingDirection,
        state: ZoneState,
    },
}
