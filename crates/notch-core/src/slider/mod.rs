//! Slider value model and touch tracking
//!
//! - [`SliderRange`]: validated `minimum < maximum` pair
//! - [`ValueEngine`]: clamping, step snapping, value ↔ position conversion
//! - [`TouchTracker`]: Begin → Continue* → End gesture state machine
//! - [`SliderControl`]: the control itself, owning the above plus appearance,
//!   bounds and pending redraw flags

mod appearance;
mod control;
mod engine;
mod paint;
mod range;
mod redraw;
mod tracking;

pub use appearance::{
    SliderAppearance, DEFAULT_THUMB_BORDER, DEFAULT_THUMB_BORDER_WIDTH, DEFAULT_THUMB_TINT,
    DEFAULT_TRACK_HIGHLIGHT_TINT, DEFAULT_TRACK_TINT,
};
pub use control::SliderControl;
pub use engine::{TrackGeometry, ValueEngine};
pub use paint::{ThumbPaint, TrackPaint, HIGHLIGHT_OVERLAY, THUMB_INSET};
pub use range::SliderRange;
pub use redraw::Redraw;
pub use tracking::{TouchSession, TouchTracker, TrackingState};
