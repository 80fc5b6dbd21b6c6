//! Labeled slider widget
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ Title                              │  text (bold)
//! │        300                         │  text, offset by the layout
//! │ ══════(●)═══════════════════════   │  canvas: track + thumb layers
//! └────────────────────────────────────┘
//! ```

mod canvas;
mod message;
mod state;
mod view;

pub use canvas::SliderInteraction;
pub use message::SliderEvent;
pub use state::SliderState;
pub use view::labeled_slider;
