//! Paint descriptions handed to the render collaborator
//!
//! The control does not draw. It describes what to draw in control
//! coordinates and the toolkit layer turns that into paths and fills.

use crate::color::Rgba;
use crate::geometry::Rect;

/// Inset of the drawn thumb inside its hit frame, in pixels
pub const THUMB_INSET: f64 = 2.0;

/// Darkening overlay drawn over a highlighted (grabbed) thumb
pub const HIGHLIGHT_OVERLAY: Rgba = Rgba::from_white(0.0, 0.1);

/// Track layer: rounded background plus the filled part left of the thumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPaint {
    /// Full track rectangle
    pub frame: Rect,
    pub corner_radius: f64,
    pub color: Rgba,
    /// From the track's left edge to the thumb center
    pub highlight: Rect,
    pub highlight_color: Rgba,
}

/// Thumb layer: rounded square from square (0) to circle (1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPaint {
    pub frame: Rect,
    pub corner_radius: f64,
    pub fill: Rgba,
    pub border: Rgba,
    pub border_width: f64,
    /// Set while the thumb is being dragged
    pub overlay: Option<Rgba>,
}

/// Corner radius for a shape of `height` with the given corner factor
pub(super) fn corner_radius(height: f64, curvaceousness: f64) -> f64 {
    (height * curvaceousness / 2.0).max(0.0)
}
