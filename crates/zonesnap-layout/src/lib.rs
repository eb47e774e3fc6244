#![forbid(unsafe_code)]

//! Layout primitives: box geometry, indicators and fill for each zone state.

pub mod fill;
pub mod indicator;
pub mod resolver;

pub use fill::{BoxFill, FillPalette, Rgb};
pub use indicator::{INDICATOR_COUNT, Indicator, IndicatorOpacity, IndicatorVisibility};
pub use resolver::{GeometryResolver, ResolvedFrame, box_rect, box_size, resolve};
pub use zonesnap_core::geometry::{Position, Rect, Viewport};
pub use zonesnap_core::zone::ZoneState;
