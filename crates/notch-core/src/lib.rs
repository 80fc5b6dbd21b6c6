//! Core model for the notch labeled slider
//!
//! Everything in this crate is GUI-toolkit agnostic. A host (see
//! `notch-widgets` for the iced one) feeds pointer events and layout bounds in,
//! and reads paint descriptions and label frames back out.
//!
//! ## Layers
//!
//! - **Engine** ([`slider::ValueEngine`]): range, clamping, step snapping and
//!   value ↔ position conversion
//! - **Tracker** ([`slider::TouchTracker`]): pointer down/move/up state machine
//!   deciding when a value-changed notification is emitted
//! - **Control** ([`slider::SliderControl`]): owns both, plus appearance,
//!   bounds and coalesced redraw requests
//! - **Label layout** ([`label::SliderView`]): title and value label placement
//!   around a control
//!
//! ```text
//! pointer events ─▶ TouchTracker ─▶ ValueEngine (clamp / snap)
//!                                        │
//!                          value changed ▼
//!                   SliderView label ◀── SliderControl ──▶ redraw flags
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod label;
pub mod slider;

pub use color::Rgba;
pub use config::{SliderColors, SliderConfig};
pub use error::{SliderError, SliderResult};
pub use format::{RoundingMode, ValueFormat};
pub use geometry::{Point, Rect, Size};
pub use label::{LabelFrames, LabelLayout, LabelStyle, SliderView};
pub use slider::{
    Redraw, SliderAppearance, SliderControl, SliderRange, ThumbPaint, TouchTracker, TrackGeometry,
    TrackPaint, ValueEngine,
};
