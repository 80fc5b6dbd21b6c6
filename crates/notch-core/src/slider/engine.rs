//! Value/geometry engine
//!
//! Holds range, current value and optional step, and converts between value
//! space and pixel space for a given [`TrackGeometry`]. Pure state: it never
//! requests redraws or emits notifications, the owning control does that.

use super::range::SliderRange;
use crate::error::SliderResult;
use crate::geometry::Size;

/// Pixel geometry of the track, derived from control bounds at query time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    /// Full width of the control in pixels
    pub track_width: f64,
    /// Thumb width and height in pixels (= control height)
    pub thumb_diameter: f64,
}

impl TrackGeometry {
    pub const fn new(track_width: f64, thumb_diameter: f64) -> Self {
        Self {
            track_width,
            thumb_diameter,
        }
    }

    /// Geometry of a control with the given bounds (thumb is as tall as the control)
    pub fn from_bounds(bounds: Size) -> Self {
        Self::new(bounds.width, bounds.height)
    }

    /// Distance the thumb center can travel
    pub fn travel(&self) -> f64 {
        self.track_width - self.thumb_diameter
    }
}

/// Range + value + step
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEngine {
    range: SliderRange,
    value: f64,
    step: Option<f64>,
}

impl Default for ValueEngine {
    fn default() -> Self {
        let range = SliderRange::default();
        Self::new(range, range.maximum())
    }
}

impl ValueEngine {
    /// Create an engine; `value` is clamped into `range`
    pub fn new(range: SliderRange, value: f64) -> Self {
        Self {
            range,
            value: range.clamp(value),
            step: None,
        }
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    pub fn minimum(&self) -> f64 {
        self.range.minimum()
    }

    pub fn maximum(&self) -> f64 {
        self.range.maximum()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Replace the range and re-clamp the value
    ///
    /// Returns true if the value moved as a result.
    pub fn set_range(&mut self, range: SliderRange) -> bool {
        self.range = range;
        self.reclamp()
    }

    /// Replace the minimum, keeping the current maximum
    ///
    /// Fails without touching anything unless `minimum < maximum`.
    pub fn set_minimum(&mut self, minimum: f64) -> SliderResult<bool> {
        let range = self.range.with_minimum(minimum)?;
        Ok(self.set_range(range))
    }

    /// Replace the maximum, keeping the current minimum
    ///
    /// Fails without touching anything unless `minimum < maximum`.
    pub fn set_maximum(&mut self, maximum: f64) -> SliderResult<bool> {
        let range = self.range.with_maximum(maximum)?;
        Ok(self.set_range(range))
    }

    /// Store `value` clamped into range
    ///
    /// Returns true if the stored value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let clamped = self.range.clamp(value);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Set or clear the step
    ///
    /// Anything that is not a finite positive number clears the step instead
    /// of failing.
    pub fn set_step(&mut self, step: Option<f64>) {
        self.step = match step {
            Some(s) if s > 0.0 && s.is_finite() => Some(s),
            Some(s) => {
                log::debug!("set_step: ignoring non-positive step {}, clearing", s);
                None
            }
            None => None,
        };
    }

    fn reclamp(&mut self) -> bool {
        self.set_value(self.value)
    }

    /// Thumb center x for `value`
    ///
    /// Maps `[minimum, maximum]` linearly onto
    /// `[thumb/2, track_width - thumb/2]`.
    pub fn position_for_value(&self, value: f64, geometry: TrackGeometry) -> f64 {
        let span = self.range.span();
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        geometry.travel() * (value - self.minimum()) / span + geometry.thumb_diameter / 2.0
    }

    /// Value change produced by dragging `pixel_delta_x` pixels
    ///
    /// Zero when the track is exactly as wide as the thumb (no travel).
    pub fn value_for_delta(&self, pixel_delta_x: f64, geometry: TrackGeometry) -> f64 {
        let travel = geometry.travel();
        if travel == 0.0 {
            return 0.0;
        }
        let delta = self.range.span() * pixel_delta_x / travel;
        if delta.is_finite() {
            delta
        } else {
            0.0
        }
    }

    /// Nearest multiple of the step, or `value` unchanged without one
    ///
    /// Not clamped; [`ValueEngine::set_value`] clamps when the result is stored.
    pub fn snap_to_step(&self, value: f64) -> f64 {
        match self.step {
            Some(step) => (value / step).round() * step,
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine(min: f64, max: f64) -> ValueEngine {
        ValueEngine::new(SliderRange::new(min, max).unwrap(), min)
    }

    const GEOMETRY: TrackGeometry = TrackGeometry::new(300.0, 30.0);

    #[test]
    fn test_default_matches_control_defaults() {
        let engine = ValueEngine::default();
        assert_eq!(engine.minimum(), 0.0);
        assert_eq!(engine.maximum(), 100.0);
        assert_eq!(engine.value(), 100.0);
        assert_eq!(engine.step(), None);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut engine = engine(0.0, 1000.0);
        assert!(engine.set_value(1500.0));
        assert_eq!(engine.value(), 1000.0);
        assert!(engine.set_value(-3.0));
        assert_eq!(engine.value(), 0.0);
        assert!(!engine.set_value(-10.0));
    }

    #[test]
    fn test_set_range_reclamps() {
        let mut engine = engine(0.0, 1000.0);
        engine.set_value(800.0);
        assert!(engine.set_maximum(500.0).unwrap());
        assert_eq!(engine.value(), 500.0);
        assert!(!engine.set_minimum(100.0).unwrap());
        assert_eq!(engine.value(), 500.0);
    }

    #[test]
    fn test_invalid_bounds_leave_state_untouched() {
        let mut engine = engine(0.0, 1000.0);
        engine.set_value(250.0);
        assert!(engine.set_minimum(1000.0).is_err());
        assert!(engine.set_minimum(2000.0).is_err());
        assert!(engine.set_maximum(0.0).is_err());
        assert_eq!(engine.minimum(), 0.0);
        assert_eq!(engine.maximum(), 1000.0);
        assert_eq!(engine.value(), 250.0);
    }

    #[test]
    fn test_set_step_is_permissive() {
        let mut engine = engine(0.0, 1000.0);
        engine.set_step(Some(25.0));
        assert_eq!(engine.step(), Some(25.0));
        engine.set_step(Some(0.0));
        assert_eq!(engine.step(), None);
        engine.set_step(Some(25.0));
        engine.set_step(Some(-5.0));
        assert_eq!(engine.step(), None);
        engine.set_step(Some(f64::NAN));
        assert_eq!(engine.step(), None);
    }

    #[test]
    fn test_position_endpoints() {
        let engine = engine(0.0, 1000.0);
        assert_eq!(engine.position_for_value(0.0, GEOMETRY), 15.0);
        assert_eq!(engine.position_for_value(1000.0, GEOMETRY), 285.0);
        assert_eq!(engine.position_for_value(500.0, GEOMETRY), 150.0);
    }

    #[test]
    fn test_value_for_delta() {
        let engine = engine(0.0, 1000.0);
        let geometry = TrackGeometry::new(1032.0, 32.0);
        assert_eq!(engine.value_for_delta(312.0, geometry), 312.0);
        assert_eq!(engine.value_for_delta(-12.0, geometry), -12.0);
    }

    #[test]
    fn test_value_for_delta_degenerate_track() {
        let engine = engine(0.0, 1000.0);
        let geometry = TrackGeometry::new(32.0, 32.0);
        for dx in [-1000.0, -1.0, 0.0, 1.0, 1e9] {
            assert_eq!(engine.value_for_delta(dx, geometry), 0.0);
        }
        // zero-sized bounds during construction
        assert_eq!(engine.value_for_delta(10.0, TrackGeometry::default()), 0.0);
    }

    #[test]
    fn test_snap_to_step() {
        let mut engine = engine(0.0, 1000.0);
        assert_eq!(engine.snap_to_step(312.0), 312.0);
        engine.set_step(Some(25.0));
        assert_eq!(engine.snap_to_step(312.0), 300.0);
        assert_eq!(engine.snap_to_step(312.5), 325.0);
        assert_eq!(engine.snap_to_step(318.0), 325.0);
        assert_eq!(engine.snap_to_step(0.0), 0.0);
    }

    #[test]
    fn test_snap_past_maximum_is_clamped_on_store() {
        let mut engine = engine(0.0, 990.0);
        engine.set_step(Some(25.0));
        engine.set_value(990.0);
        let snapped = engine.snap_to_step(engine.value());
        assert_eq!(snapped, 1000.0);
        engine.set_value(snapped);
        assert_eq!(engine.value(), 990.0);
    }

    proptest! {
        #[test]
        fn prop_position_is_monotonic(a in 0.0..1000.0f64, b in 0.0..1000.0f64) {
            let engine = engine(0.0, 1000.0);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                engine.position_for_value(lo, GEOMETRY) <= engine.position_for_value(hi, GEOMETRY)
            );
        }

        #[test]
        fn prop_position_stays_on_track(
            min in -1e4..1e4f64,
            span in 1e-3..1e4f64,
            t in 0.0..=1.0f64,
            width in 40.0..2000.0f64,
            thumb in 1.0..40.0f64,
        ) {
            let engine = engine(min, min + span);
            let geometry = TrackGeometry::new(width, thumb);
            let pos = engine.position_for_value(min + t * span, geometry);
            prop_assert!(pos >= thumb / 2.0 - 1e-6);
            prop_assert!(pos <= width - thumb / 2.0 + 1e-6);
        }

        #[test]
        fn prop_snap_is_idempotent(v in -1e6..1e6f64, step in 1e-3..1e3f64) {
            let mut engine = engine(-1e6, 1e6);
            engine.set_step(Some(step));
            let once = engine.snap_to_step(v);
            prop_assert_eq!(engine.snap_to_step(once), once);
        }

        #[test]
        fn prop_value_always_in_range(v in proptest::num::f64::ANY) {
            let mut engine = engine(-5.0, 5.0);
            engine.set_value(v);
            prop_assert!(engine.value() >= -5.0 && engine.value() <= 5.0);
        }
    }
}
