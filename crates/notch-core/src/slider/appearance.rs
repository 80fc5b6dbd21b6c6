//! Colors and shape parameters of the slider

use crate::color::Rgba;

/// Default track color (light gray)
pub const DEFAULT_TRACK_TINT: Rgba = Rgba::from_white(0.9, 1.0);
/// Default filled-track color (blue)
pub const DEFAULT_TRACK_HIGHLIGHT_TINT: Rgba = Rgba::from_rgb(0.0, 0.45, 0.94);
/// Default thumb fill
pub const DEFAULT_THUMB_TINT: Rgba = Rgba::WHITE;
/// Default thumb outline
pub const DEFAULT_THUMB_BORDER: Rgba = Rgba::from_white(0.5, 1.0);
/// Default thumb outline width in pixels
pub const DEFAULT_THUMB_BORDER_WIDTH: f64 = 0.5;

/// Visual parameters read by the render collaborator
///
/// Fields are private so that `curvaceousness` can only be set through the
/// clamping setter on [`super::SliderControl`].
#[derive(Debug, Clone, PartialEq)]
pub struct SliderAppearance {
    pub(super) track_tint: Rgba,
    pub(super) track_highlight_tint: Rgba,
    pub(super) thumb_tint: Rgba,
    pub(super) thumb_border_color: Rgba,
    pub(super) thumb_border_width: f64,
    /// 0.0 = square corners, 1.0 = fully rounded
    pub(super) curvaceousness: f64,
}

impl Default for SliderAppearance {
    fn default() -> Self {
        Self {
            track_tint: DEFAULT_TRACK_TINT,
            track_highlight_tint: DEFAULT_TRACK_HIGHLIGHT_TINT,
            thumb_tint: DEFAULT_THUMB_TINT,
            thumb_border_color: DEFAULT_THUMB_BORDER,
            thumb_border_width: DEFAULT_THUMB_BORDER_WIDTH,
            curvaceousness: 1.0,
        }
    }
}

impl SliderAppearance {
    pub fn track_tint(&self) -> Rgba {
        self.track_tint
    }

    pub fn track_highlight_tint(&self) -> Rgba {
        self.track_highlight_tint
    }

    pub fn thumb_tint(&self) -> Rgba {
        self.thumb_tint
    }

    pub fn thumb_border_color(&self) -> Rgba {
        self.thumb_border_color
    }

    pub fn thumb_border_width(&self) -> f64 {
        self.thumb_border_width
    }

    pub fn curvaceousness(&self) -> f64 {
        self.curvaceousness
    }
}

/// Clamp a corner factor into `[0, 1]`; NaN falls back to fully rounded
pub(super) fn clamp_curvaceousness(value: f64) -> f64 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_curvaceousness() {
        assert_eq!(clamp_curvaceousness(-0.5), 0.0);
        assert_eq!(clamp_curvaceousness(0.25), 0.25);
        assert_eq!(clamp_curvaceousness(3.0), 1.0);
        assert_eq!(clamp_curvaceousness(f64::NAN), 1.0);
    }
}
