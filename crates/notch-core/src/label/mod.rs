//! Title and value label placement around a slider
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Title                                        │  title line + spacing (only if non-empty)
//! │              300                             │  value line + spacing
//! │ ════════════(●)═════════════════════════════ │  thumb size
//! └──────────────────────────────────────────────┘
//! ```
//!
//! In [`LabelStyle::Follow`] the value label is centered over the thumb; in
//! [`LabelStyle::Sticky`] it sits at the right end of the track.

mod measure;
mod view;

pub use measure::{ApproximateMeasure, TextMeasure};
pub use view::SliderView;

use crate::error::{require_non_negative, require_positive, SliderResult};
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Default vertical spacing between rows, in pixels
pub const DEFAULT_SPACING: f64 = 4.0;
/// Default thumb width and height, in pixels
pub const DEFAULT_THUMB_SIZE: f64 = 32.0;

/// Value label placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Pinned to the right end of the track
    Sticky,
    /// Centered over the thumb
    #[default]
    Follow,
}

/// Font sizes used for layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFonts {
    /// Title font size (rendered bold)
    pub title_size: f64,
    /// Value label font size
    pub value_size: f64,
    /// Line height as a multiple of font size
    pub line_height_factor: f64,
}

impl Default for LabelFonts {
    fn default() -> Self {
        Self {
            title_size: 16.0,
            value_size: 14.0,
            line_height_factor: 1.2,
        }
    }
}

impl LabelFonts {
    pub fn title_line_height(&self) -> f64 {
        self.title_size * self.line_height_factor
    }

    pub fn value_line_height(&self) -> f64 {
        self.value_size * self.line_height_factor
    }
}

/// Computed frames, all relative to the view's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelFrames {
    /// `None` when the title is empty
    pub title: Option<Rect>,
    pub value: Rect,
    pub slider: Rect,
}

/// Layout parameters of a labeled slider
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    style: LabelStyle,
    spacing: f64,
    thumb_size: f64,
    fonts: LabelFonts,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            style: LabelStyle::default(),
            spacing: DEFAULT_SPACING,
            thumb_size: DEFAULT_THUMB_SIZE,
            fonts: LabelFonts::default(),
        }
    }
}

impl LabelLayout {
    pub fn style(&self) -> LabelStyle {
        self.style
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn thumb_size(&self) -> f64 {
        self.thumb_size
    }

    pub fn fonts(&self) -> LabelFonts {
        self.fonts
    }

    pub fn set_style(&mut self, style: LabelStyle) {
        self.style = style;
    }

    /// Spacing must not be negative
    pub fn set_spacing(&mut self, spacing: f64) -> SliderResult<()> {
        self.spacing = require_non_negative("spacing", spacing)?;
        Ok(())
    }

    /// Thumb size must be strictly positive
    pub fn set_thumb_size(&mut self, thumb_size: f64) -> SliderResult<()> {
        self.thumb_size = require_positive("thumb size", thumb_size)?;
        Ok(())
    }

    pub fn set_fonts(&mut self, fonts: LabelFonts) {
        self.fonts = fonts;
    }

    fn title_block_height(&self, has_title: bool) -> f64 {
        if has_title {
            self.fonts.title_line_height() + self.spacing
        } else {
            0.0
        }
    }

    fn value_block_height(&self) -> f64 {
        self.fonts.value_line_height() + self.spacing
    }

    /// Frame of the slider control inside a view of `width`
    pub fn slider_frame(&self, width: f64, has_title: bool) -> Rect {
        Rect::new(
            0.0,
            self.title_block_height(has_title) + self.value_block_height(),
            width,
            self.thumb_size,
        )
    }

    /// Place title, value label and slider
    ///
    /// `thumb_mid_x` is the thumb center in slider coordinates, only used by
    /// [`LabelStyle::Follow`].
    pub fn layout(
        &self,
        width: f64,
        title: &str,
        value_text: &str,
        thumb_mid_x: f64,
        measure: &dyn TextMeasure,
    ) -> LabelFrames {
        let has_title = !title.is_empty();
        let title_frame =
            has_title.then(|| Rect::new(0.0, 0.0, width, self.title_block_height(true)));
        let title_max_y = title_frame.map_or(0.0, |frame| frame.max_y());

        let slider = self.slider_frame(width, has_title);

        let value_width = measure
            .text_width(value_text, self.fonts.value_size)
            .min(width.max(0.0));
        let value_x = match self.style {
            LabelStyle::Follow => slider.x + thumb_mid_x - value_width / 2.0,
            LabelStyle::Sticky => slider.max_x() - self.thumb_size + self.spacing,
        };

        LabelFrames {
            title: title_frame,
            value: Rect::new(value_x, title_max_y, value_width, self.value_block_height()),
            slider,
        }
    }

    /// Height needed to show everything at `width`
    pub fn size_that_fits(&self, width: f64, has_title: bool) -> Size {
        Size::new(
            width,
            self.title_block_height(has_title) + self.value_block_height() + self.thumb_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10px wide regardless of font size
    struct FixedWidth;

    impl TextMeasure for FixedWidth {
        fn text_width(&self, text: &str, _font_size: f64) -> f64 {
            text.chars().count() as f64 * 10.0
        }
    }

    fn layout(style: LabelStyle) -> LabelLayout {
        let mut layout = LabelLayout::default();
        layout.set_style(style);
        layout.set_fonts(LabelFonts {
            title_size: 10.0,
            value_size: 10.0,
            line_height_factor: 1.0,
        });
        layout
    }

    #[test]
    fn test_follow_centers_over_thumb() {
        let frames = layout(LabelStyle::Follow).layout(300.0, "Budget", "300", 100.0, &FixedWidth);

        assert_eq!(frames.title, Some(Rect::new(0.0, 0.0, 300.0, 14.0)));
        assert_eq!(frames.value, Rect::new(85.0, 14.0, 30.0, 14.0));
        assert_eq!(frames.slider, Rect::new(0.0, 28.0, 300.0, 32.0));
    }

    #[test]
    fn test_sticky_pins_to_track_end() {
        let frames = layout(LabelStyle::Sticky).layout(300.0, "", "300", 100.0, &FixedWidth);

        assert_eq!(frames.title, None);
        assert_eq!(frames.value, Rect::new(272.0, 0.0, 30.0, 14.0));
        assert_eq!(frames.slider, Rect::new(0.0, 14.0, 300.0, 32.0));
    }

    #[test]
    fn test_size_that_fits() {
        let layout = layout(LabelStyle::Follow);
        assert_eq!(layout.size_that_fits(200.0, true), Size::new(200.0, 60.0));
        assert_eq!(layout.size_that_fits(200.0, false), Size::new(200.0, 46.0));
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let mut layout = LabelLayout::default();
        assert!(layout.set_thumb_size(0.0).is_err());
        assert!(layout.set_spacing(-1.0).is_err());
        assert_eq!(layout.thumb_size(), DEFAULT_THUMB_SIZE);
        assert_eq!(layout.spacing(), DEFAULT_SPACING);
    }

    #[test]
    fn test_label_style_yaml() {
        let style: LabelStyle = serde_yaml::from_str("sticky").unwrap();
        assert_eq!(style, LabelStyle::Sticky);
        assert_eq!(serde_yaml::to_string(&LabelStyle::Follow).unwrap().trim(), "follow");
    }
}
