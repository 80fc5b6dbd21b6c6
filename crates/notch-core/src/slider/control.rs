//! The slider control
//!
//! Owns the value engine, the touch tracker, appearance and bounds. Every
//! setter runs the same explicit sequence: validate, clamp, mark the affected
//! layers dirty. Setters never emit value-changed notifications; only the
//! tracking methods do.

use super::appearance::{clamp_curvaceousness, SliderAppearance};
use super::engine::{TrackGeometry, ValueEngine};
use super::paint::{corner_radius, ThumbPaint, TrackPaint, HIGHLIGHT_OVERLAY, THUMB_INSET};
use super::range::SliderRange;
use super::redraw::Redraw;
use super::tracking::TouchTracker;
use crate::color::Rgba;
use crate::error::{require_non_negative, SliderResult};
use crate::geometry::{Point, Rect, Size};

/// Single-thumb slider control
#[derive(Debug, Clone, Default)]
pub struct SliderControl {
    engine: ValueEngine,
    tracker: TouchTracker,
    appearance: SliderAppearance,
    bounds: Size,
    pending: Redraw,
}

impl SliderControl {
    /// Control with range `0..100`, value `100` and zero bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Control with the given range; the value starts at `minimum`
    pub fn with_range(minimum: f64, maximum: f64) -> SliderResult<Self> {
        let range = SliderRange::new(minimum, maximum)?;
        Ok(Self {
            engine: ValueEngine::new(range, minimum),
            ..Self::default()
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Value configuration
    // ─────────────────────────────────────────────────────────────────────

    pub fn engine(&self) -> &ValueEngine {
        &self.engine
    }

    pub fn minimum_value(&self) -> f64 {
        self.engine.minimum()
    }

    pub fn maximum_value(&self) -> f64 {
        self.engine.maximum()
    }

    pub fn value(&self) -> f64 {
        self.engine.value()
    }

    pub fn step(&self) -> Option<f64> {
        self.engine.step()
    }

    /// Set the minimum; fails unless it stays below the maximum
    pub fn set_minimum_value(&mut self, minimum: f64) -> SliderResult<()> {
        self.engine.set_minimum(minimum)?;
        self.request_redraw(Redraw::ALL);
        Ok(())
    }

    /// Set the maximum; fails unless it stays above the minimum
    pub fn set_maximum_value(&mut self, maximum: f64) -> SliderResult<()> {
        self.engine.set_maximum(maximum)?;
        self.request_redraw(Redraw::ALL);
        Ok(())
    }

    /// Replace both bounds at once
    ///
    /// Useful when moving the range past the current one, where setting the
    /// bounds one by one would transiently invert it.
    pub fn set_range(&mut self, range: SliderRange) {
        self.engine.set_range(range);
        self.request_redraw(Redraw::ALL);
    }

    /// Set the value (clamped), without notifying observers
    ///
    /// Returns true if the stored value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let changed = self.engine.set_value(value);
        if changed {
            self.request_redraw(Redraw::ALL);
        }
        changed
    }

    /// Set or clear the snapping step; non-positive steps clear it
    pub fn set_step(&mut self, step: Option<f64>) {
        self.engine.set_step(step);
        self.request_redraw(Redraw::ALL);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────────────────

    pub fn appearance(&self) -> &SliderAppearance {
        &self.appearance
    }

    pub fn set_track_tint(&mut self, color: Rgba) {
        self.appearance.track_tint = color;
        self.request_redraw(Redraw::TRACK);
    }

    pub fn set_track_highlight_tint(&mut self, color: Rgba) {
        self.appearance.track_highlight_tint = color;
        self.request_redraw(Redraw::TRACK);
    }

    pub fn set_thumb_tint(&mut self, color: Rgba) {
        self.appearance.thumb_tint = color;
        self.request_redraw(Redraw::THUMB);
    }

    pub fn set_thumb_border_color(&mut self, color: Rgba) {
        self.appearance.thumb_border_color = color;
        self.request_redraw(Redraw::THUMB);
    }

    /// Set the thumb outline width; negative widths are rejected
    pub fn set_thumb_border_width(&mut self, width: f64) -> SliderResult<()> {
        self.appearance.thumb_border_width = require_non_negative("thumb border width", width)?;
        self.request_redraw(Redraw::THUMB);
        Ok(())
    }

    /// Set the corner factor, silently clamped to `[0, 1]`
    pub fn set_curvaceousness(&mut self, curvaceousness: f64) {
        self.appearance.curvaceousness = clamp_curvaceousness(curvaceousness);
        self.request_redraw(Redraw::ALL);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Resize the control; the thumb diameter follows the height
    pub fn set_bounds(&mut self, bounds: Size) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.request_redraw(Redraw::ALL);
        }
    }

    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::from_bounds(self.bounds)
    }

    pub fn thumb_diameter(&self) -> f64 {
        self.bounds.height
    }

    /// Thumb center x for `value` in the current bounds
    pub fn position_for_value(&self, value: f64) -> f64 {
        self.engine.position_for_value(value, self.geometry())
    }

    /// Hit frame of the thumb at the current value
    pub fn thumb_frame(&self) -> Rect {
        let diameter = self.thumb_diameter();
        let center = self.position_for_value(self.value());
        Rect::new(center - diameter / 2.0, 0.0, diameter, diameter)
    }

    /// Track rectangle: full width, middle third of the height
    pub fn track_frame(&self) -> Rect {
        Rect::from_size(self.bounds).inset(0.0, self.bounds.height / 3.0)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Touch tracking
    // ─────────────────────────────────────────────────────────────────────

    /// Whether a gesture currently holds the thumb
    pub fn is_highlighted(&self) -> bool {
        self.tracker.is_highlighted()
    }

    /// Pointer down at `location` (control coordinates)
    ///
    /// Returns whether the gesture grabbed the thumb. The host should ignore
    /// the rest of the gesture when it didn't.
    pub fn begin_tracking(&mut self, location: Point) -> bool {
        let thumb_frame = self.thumb_frame();
        let tracking = self.tracker.begin(location, thumb_frame);
        if tracking {
            self.request_redraw(Redraw::THUMB);
        }
        tracking
    }

    /// Pointer moved; returns a value-changed notification if one is due
    pub fn continue_tracking(&mut self, location: Point) -> Option<f64> {
        let geometry = self.geometry();
        let before = self.engine.value();
        let notification = self
            .tracker
            .continue_tracking(location, &mut self.engine, geometry);
        if self.engine.value() != before {
            self.request_redraw(Redraw::ALL);
        }
        notification
    }

    /// Pointer released; returns the final notification when a step is set
    pub fn end_tracking(&mut self) -> Option<f64> {
        let was_highlighted = self.tracker.is_highlighted();
        let before = self.engine.value();
        let notification = self.tracker.end(&mut self.engine);
        if self.engine.value() != before {
            self.request_redraw(Redraw::ALL);
        } else if was_highlighted {
            self.request_redraw(Redraw::THUMB);
        }
        notification
    }

    /// Pointer cancelled by the platform; same as a release
    pub fn cancel_tracking(&mut self) -> Option<f64> {
        self.end_tracking()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    fn request_redraw(&mut self, layers: Redraw) {
        self.pending |= layers;
    }

    /// Layers requested since the last call; clears the request
    pub fn take_redraw(&mut self) -> Redraw {
        std::mem::take(&mut self.pending)
    }

    /// Peek at pending layers without clearing them
    pub fn pending_redraw(&self) -> Redraw {
        self.pending
    }

    pub fn track_paint(&self) -> TrackPaint {
        let frame = self.track_frame();
        TrackPaint {
            frame,
            corner_radius: corner_radius(frame.height, self.appearance.curvaceousness),
            color: self.appearance.track_tint,
            highlight: Rect::new(
                frame.x,
                frame.y,
                self.position_for_value(self.value()).max(0.0),
                frame.height,
            ),
            highlight_color: self.appearance.track_highlight_tint,
        }
    }

    pub fn thumb_paint(&self) -> ThumbPaint {
        let frame = self.thumb_frame().inset(THUMB_INSET, THUMB_INSET);
        ThumbPaint {
            frame,
            corner_radius: corner_radius(frame.height, self.appearance.curvaceousness),
            fill: self.appearance.thumb_tint,
            border: self.appearance.thumb_border_color,
            border_width: self.appearance.thumb_border_width,
            overlay: self.is_highlighted().then_some(HIGHLIGHT_OVERLAY),
        }
    }
}
