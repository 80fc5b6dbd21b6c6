//! Validated slider range

use crate::error::{SliderError, SliderResult};

/// A `[minimum, maximum]` interval with `minimum < maximum`
///
/// The only way to build one is through [`SliderRange::new`] (or the
/// `with_*` helpers), so every range in circulation satisfies the invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    minimum: f64,
    maximum: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 100.0,
        }
    }
}

impl SliderRange {
    /// Create a range, failing unless `minimum < maximum`
    ///
    /// NaN on either side fails as well, and so does a span too wide to
    /// represent (e.g. `f64::MIN..f64::MAX`), which could not be mapped
    /// onto the track.
    pub fn new(minimum: f64, maximum: f64) -> SliderResult<Self> {
        if minimum < maximum && (maximum - minimum).is_finite() {
            Ok(Self { minimum, maximum })
        } else {
            Err(SliderError::InvalidRange { minimum, maximum })
        }
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// `maximum - minimum`
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Same maximum, new minimum
    pub fn with_minimum(&self, minimum: f64) -> SliderResult<Self> {
        Self::new(minimum, self.maximum)
    }

    /// Same minimum, new maximum
    pub fn with_maximum(&self, maximum: f64) -> SliderResult<Self> {
        Self::new(self.minimum, maximum)
    }

    /// Clamp `value` into the range; NaN maps to the minimum
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.minimum
        } else {
            value.clamp(self.minimum, self.maximum)
        }
    }
}
