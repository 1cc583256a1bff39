/// Drop-shadow styling and per-corner offsets
use serde::{Deserialize, Serialize};

use crate::corner::Corner;

/// RGBA color in float format (0.0 - 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// On-screen translation of a drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    pub dx: f32,
    pub dy: f32,
}

impl ShadowOffset {
    pub const ZERO: ShadowOffset = ShadowOffset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Shadow appearance and offset magnitudes, supplied by the caller and
/// read-only to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyle {
    /// Horizontal offset reached when leaning fully left or right.
    pub max_horizontal_offset: f32,
    /// Vertical offset reached when leaning toward the bottom edge midpoint.
    pub max_vertical_offset: f32,
    /// Vertical offset used at the diagonal and side corners.
    pub corner_vertical_offset: f32,
    /// Vertical offset used when leaning toward the top edge midpoint.
    pub start_vertical_offset: f32,
    /// Vertical offset used at the two top diagonal corners.
    pub start_corner_vertical_median: f32,
    pub blur_radius: f32,
    /// 0.0 - 1.0.
    pub opacity: f32,
    pub color: Color,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            max_horizontal_offset: 20.0,
            max_vertical_offset: 20.0,
            corner_vertical_offset: 12.0,
            start_vertical_offset: 8.0,
            start_corner_vertical_median: 10.0,
            blur_radius: 12.0,
            opacity: 0.5,
            color: Color::BLACK,
        }
    }
}

/// Shadow offset consistent with light arriving from the side opposite
/// the tilt toward `corner`. Total over all eight corners; the left side
/// mirrors the right with the horizontal sign flipped.
pub fn offset_for(corner: Corner, style: &ShadowStyle) -> ShadowOffset {
    let half = style.max_horizontal_offset / 2.0;
    match corner {
        Corner::TopMedium => ShadowOffset::new(0.0, style.start_vertical_offset),
        Corner::TopRight => ShadowOffset::new(half, style.start_corner_vertical_median),
        Corner::MediumRight => {
            ShadowOffset::new(style.max_horizontal_offset, style.corner_vertical_offset)
        }
        Corner::BottomRight => ShadowOffset::new(half, style.corner_vertical_offset),
        Corner::BottomMedium => ShadowOffset::new(0.0, style.max_vertical_offset),
        Corner::BottomLeft => ShadowOffset::new(-half, style.corner_vertical_offset),
        Corner::MediumLeft => {
            ShadowOffset::new(-style.max_horizontal_offset, style.corner_vertical_offset)
        }
        Corner::TopLeft => ShadowOffset::new(-half, style.start_corner_vertical_median),
    }
}
