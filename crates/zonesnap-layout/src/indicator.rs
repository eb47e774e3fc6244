#![forbid(unsafe_code)]

//! Directional indicators shown while a drag is in progress.
//!
//! Four icons sit side by side, one per quartile column. Each highlights when
//! the current [`ZoneState`] belongs to its set. Icon drawing is left to the
//! host; this module only supplies the opacity and the slot contract
//! (`index` of `count`).

use serde::{Deserialize, Serialize};
use zonesnap_core::geometry::{Rect, Viewport};
use zonesnap_core::zone::{QUARTILE_COUNT, ZoneState};

/// Number of indicators.
pub const INDICATOR_COUNT: usize = QUARTILE_COUNT;

/// One of the four directional indicators, in left-to-right slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Left half (`TopLeft`, `BotLeft`).
    Left,
    /// Full-width half (`Top`, `Bottom`).
    Center,
    /// Drop-to-hide (`Hidden`).
    Hide,
    /// Right half (`TopRight`, `BotRight`).
    Right,
}

impl Indicator {
    pub const ALL: [Self; INDICATOR_COUNT] = [Self::Left, Self::Center, Self::Hide, Self::Right];

    /// Slot index, `0..INDICATOR_COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Hide => 2,
            Self::Right => 3,
        }
    }

    /// Total number of slots.
    #[must_use]
    pub const fn count(self) -> usize {
        INDICATOR_COUNT
    }

    /// Whether `state` is in this indicator's set.
    #[must_use]
    pub const fn selects(self, state: ZoneState) -> bool {
        match self {
            Self::Left => matches!(state, ZoneState::BotLeft | ZoneState::TopLeft),
            Self::Center => matches!(state, ZoneState::Top | ZoneState::Bottom),
            Self::Hide => matches!(state, ZoneState::Hidden),
            Self::Right => matches!(state, ZoneState::BotRight | ZoneState::TopRight),
        }
    }

    /// Column of the viewport this indicator is laid out in.
    #[must_use]
    pub fn slot(self, viewport: Viewport) -> Rect {
        let width = viewport.width / INDICATOR_COUNT as f64;
        Rect::new(width * self.index() as f64, 0.0, width, viewport.height)
    }
}

/// Opacity levels used by [`IndicatorVisibility::for_state`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorOpacity {
    /// Dragging and the state is in the indicator's set (default: 1.0).
    pub selected: f32,
    /// Dragging and the state is not in the set (default: 0.4).
    pub unselected: f32,
    /// No drag in progress (default: 0.0).
    pub inactive: f32,
}

impl Default for IndicatorOpacity {
    fn default() -> Self {
        Self {
            selected: 1.0,
            unselected: 0.4,
            inactive: 0.0,
        }
    }
}

/// Per-indicator opacity for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorVisibility {
    pub left: f32,
    pub center: f32,
    pub hide: f32,
    pub right: f32,
}

impl IndicatorVisibility {
    /// Compute opacities for `state`.
    #[must_use]
    pub fn for_state(state: ZoneState, dragging: bool, levels: &IndicatorOpacity) -> Self {
        let level = |indicator: Indicator| {
            if !dragging {
                levels.inactive
            } else if indicator.selects(state) {
                levels.selected
            } else {
                levels.unselected
            }
        };
        Self {
            left: level(Indicator::Left),
            center: level(Indicator::Center),
            hide: level(Indicator::Hide),
            right: level(Indicator::Right),
        }
    }

    #[must_use]
    pub const fn get(&self, indicator: Indicator) -> f32 {
        match indicator {
            Indicator::Left => self.left,
            Indicator::Center => self.center,
            Indicator::Hide => self.hide,
            Indicator::Right => self.right,
        }
    }

    /// `(indicator, opacity)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, f32)> + '_ {
        Indicator::ALL.into_iter().map(|i| (i, self.get(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_is_all_zero() {
        for state in ZoneState::ALL {
            let vis = IndicatorVisibility::for_state(state, false, &IndicatorOpacity::default());
            assert_eq!(vis, IndicatorVisibility::default());
        }
    }

    #[test]
    fn follow_dims_everything() {
        let vis =
            IndicatorVisibility::for_state(ZoneState::Follow, true, &IndicatorOpacity::default());
        assert!(vis.iter().all(|(_, o)| o == 0.4));
    }

    #[test]
    fn each_set_highlights_its_indicator() {
        let levels = IndicatorOpacity::default();
        let cases = [
            (ZoneState::TopLeft, Indicator::Left),
            (ZoneState::BotLeft, Indicator::Left),
            (ZoneState::Top, Indicator::Center),
            (ZoneState::Bottom, Indicator::Center),
            (ZoneState::Hidden, Indicator::Hide),
            (ZoneState::TopRight, Indicator::Right),
            (ZoneState::BotRight, Indicator::Right),
        ];
        for (state, lit) in cases {
            let vis = IndicatorVisibility::for_state(state, true, &levels);
            for (indicator, opacity) in vis.iter() {
                let expected = if indicator == lit { 1.0 } else { 0.4 };
                assert_eq!(opacity, expected, "{state} / {indicator:?}");
            }
        }
    }

    #[test]
    fn full_selects_nothing() {
        assert!(Indicator::ALL.iter().all(|i| !i.selects(ZoneState::Full)));
    }

    #[test]
    fn slots_tile_the_width() {
        let vp = Viewport::new(1000.0, 800.0);
        assert_eq!(Indicator::Left.slot(vp), Rect::new(0.0, 0.0, 250.0, 800.0));
        assert_eq!(Indicator::Right.slot(vp), Rect::new(750.0, 0.0, 250.0, 800.0));
        for (i, indicator) in Indicator::ALL.into_iter().enumerate() {
            assert_eq!(indicator.index(), i);
            assert_eq!(indicator.count(), 4);
        }
    }
}
