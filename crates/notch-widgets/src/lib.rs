//! iced widgets for the notch labeled slider
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State struct** (`SliderState`): owns the core `SliderView` plus one
//!   canvas cache per layer
//! - **View function** (`labeled_slider`): takes state + a callback closure,
//!   returns `Element<Message>`
//! - **Canvas Program**: paints track and thumb, translates mouse and touch
//!   input into `SliderEvent`s
//!
//! ```ignore
//! // view
//! labeled_slider(&self.slider, Message::Slider)
//!
//! // update
//! Message::Slider(event) => {
//!     if let Some(value) = self.slider.handle_event(event) {
//!         // value changed
//!     }
//! }
//! ```

pub mod slider;
pub mod theme;

pub use slider::{labeled_slider, SliderEvent, SliderInteraction, SliderState};
