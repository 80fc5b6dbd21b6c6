//! Slider with title and value labels
//!
//! Owns a [`SliderControl`] and keeps the value label text and frames in sync
//! with it. Pointer methods take view coordinates and return the control's
//! value-changed notification after refreshing the label.

use super::measure::{ApproximateMeasure, TextMeasure};
use super::{LabelFrames, LabelLayout, LabelStyle};
use crate::color::Rgba;
use crate::error::SliderResult;
use crate::format::ValueFormat;
use crate::geometry::{Point, Size};
use crate::slider::{SliderControl, SliderRange};

/// Default view width, in pixels
pub const DEFAULT_VIEW_WIDTH: f64 = 320.0;

/// Labeled slider
#[derive(Debug, Clone)]
pub struct SliderView {
    control: SliderControl,
    title: String,
    format: ValueFormat,
    layout: LabelLayout,
    measure: ApproximateMeasure,
    width: f64,
    value_text: String,
    frames: LabelFrames,
}

impl Default for SliderView {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_WIDTH)
    }
}

impl SliderView {
    /// View of the given width with range `0..1000` and value `0`
    pub fn new(width: f64) -> Self {
        let mut control = SliderControl::new();
        let range = SliderRange::new(0.0, 1000.0).unwrap_or_default();
        control.set_range(range);
        control.set_value(range.minimum());

        let mut view = Self {
            control,
            title: String::new(),
            format: ValueFormat::default(),
            layout: LabelLayout::default(),
            measure: ApproximateMeasure::default(),
            width: width.max(0.0),
            value_text: String::new(),
            frames: LabelFrames::default(),
        };
        view.relayout();
        view
    }

    pub fn control(&self) -> &SliderControl {
        &self.control
    }

    /// Mutable access for the render collaborator (taking redraw flags)
    pub fn control_mut(&mut self) -> &mut SliderControl {
        &mut self.control
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    pub fn frames(&self) -> LabelFrames {
        self.frames
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    pub fn format(&self) -> &ValueFormat {
        &self.format
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn value(&self) -> f64 {
        self.control.value()
    }

    /// Preferred size at the current width
    pub fn size_that_fits(&self) -> Size {
        self.layout.size_that_fits(self.width, !self.title.is_empty())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.relayout();
    }

    pub fn set_format(&mut self, format: ValueFormat) {
        self.format = format;
        self.relayout();
    }

    pub fn set_label_style(&mut self, style: LabelStyle) {
        self.layout.set_style(style);
        self.relayout();
    }

    pub fn set_spacing(&mut self, spacing: f64) -> SliderResult<()> {
        self.layout.set_spacing(spacing)?;
        self.relayout();
        Ok(())
    }

    pub fn set_thumb_size(&mut self, thumb_size: f64) -> SliderResult<()> {
        self.layout.set_thumb_size(thumb_size)?;
        self.relayout();
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
        self.relayout();
    }

    pub fn set_minimum_value(&mut self, minimum: f64) -> SliderResult<()> {
        self.control.set_minimum_value(minimum)?;
        self.relayout();
        Ok(())
    }

    pub fn set_maximum_value(&mut self, maximum: f64) -> SliderResult<()> {
        self.control.set_maximum_value(maximum)?;
        self.relayout();
        Ok(())
    }

    pub fn set_range(&mut self, range: SliderRange) {
        self.control.set_range(range);
        self.relayout();
    }

    /// Set the value without notifying; the label follows
    pub fn set_value(&mut self, value: f64) {
        self.control.set_value(value);
        self.relayout();
    }

    pub fn set_step(&mut self, step: Option<f64>) {
        self.control.set_step(step);
    }

    pub fn set_track_tint(&mut self, color: Rgba) {
        self.control.set_track_tint(color);
    }

    pub fn set_track_highlight_tint(&mut self, color: Rgba) {
        self.control.set_track_highlight_tint(color);
    }

    pub fn set_thumb_tint(&mut self, color: Rgba) {
        self.control.set_thumb_tint(color);
    }

    pub fn set_thumb_border_color(&mut self, color: Rgba) {
        self.control.set_thumb_border_color(color);
    }

    pub fn set_thumb_border_width(&mut self, width: f64) -> SliderResult<()> {
        self.control.set_thumb_border_width(width)
    }

    pub fn set_curvaceousness(&mut self, curvaceousness: f64) {
        self.control.set_curvaceousness(curvaceousness);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pointer input (view coordinates)
    // ─────────────────────────────────────────────────────────────────────

    fn to_slider(&self, location: Point) -> Point {
        location.relative_to(self.frames.slider.origin())
    }

    /// Pointer down; returns whether the thumb was grabbed
    pub fn pointer_pressed(&mut self, location: Point) -> bool {
        let local = self.to_slider(location);
        self.control.begin_tracking(local)
    }

    /// Pointer moved; returns the value-changed notification, if any
    pub fn pointer_moved(&mut self, location: Point) -> Option<f64> {
        let local = self.to_slider(location);
        let notification = self.control.continue_tracking(local);
        self.after_notification(notification)
    }

    /// Pointer released; returns the value-changed notification, if any
    pub fn pointer_released(&mut self) -> Option<f64> {
        let notification = self.control.end_tracking();
        self.after_notification(notification)
    }

    /// Platform cancelled the gesture
    pub fn pointer_cancelled(&mut self) -> Option<f64> {
        let notification = self.control.cancel_tracking();
        self.after_notification(notification)
    }

    fn after_notification(&mut self, notification: Option<f64>) -> Option<f64> {
        if let Some(value) = notification {
            log::debug!("slider '{}' value changed to {}", self.title, value);
            self.relayout();
        }
        notification
    }

    /// Recompute the label text and all frames
    fn relayout(&mut self) {
        let has_title = !self.title.is_empty();
        let slider_frame = self.layout.slider_frame(self.width, has_title);
        self.control.set_bounds(slider_frame.size());

        self.value_text = self.format.format(self.control.value());
        let thumb_mid_x = self.control.thumb_frame().mid_x();
        self.frames = self.layout.layout(
            self.width,
            &self.title,
            &self.value_text,
            thumb_mid_x,
            &self.measure as &dyn TextMeasure,
        );
    }
}
