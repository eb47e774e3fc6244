#![forbid(unsafe_code)]

//! Box fill colour as a function of `(state, dragging)`.

use std::fmt;

use serde::{Deserialize, Serialize};
use zonesnap_core::zone::ZoneState;

/// Which palette entry the box is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxFill {
    /// The box is hidden; blends with the page.
    White,
    /// A drag is in progress.
    DarkBlue,
    /// At rest.
    LightBlue,
}

impl BoxFill {
    /// `White` when hidden, else `DarkBlue` while dragging, else `LightBlue`.
    #[must_use]
    pub const fn for_state(state: ZoneState, dragging: bool) -> Self {
        match (state, dragging) {
            (ZoneState::Hidden, _) => Self::White,
            (_, true) => Self::DarkBlue,
            (_, false) => Self::LightBlue,
        }
    }
}

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// CSS hex notation, e.g. `#9999ff`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Concrete colours for each [`BoxFill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillPalette {
    pub white: Rgb,
    pub dark_blue: Rgb,
    pub light_blue: Rgb,
}

impl Default for FillPalette {
    fn default() -> Self {
        Self {
            white: Rgb::new(0xff, 0xff, 0xff),
            dark_blue: Rgb::new(0x99, 0x99, 0xff),
            light_blue: Rgb::new(0xbb, 0xbb, 0xff),
        }
    }
}

impl FillPalette {
    #[must_use]
    pub const fn color(&self, fill: BoxFill) -> Rgb {
        match fill {
            BoxFill::White => self.white,
            BoxFill::DarkBlue => self.dark_blue,
            BoxFill::LightBlue => self.light_blue,
        }
    }
}
