//! Events emitted by the slider canvas

use iced::Point;

/// Pointer input from the slider canvas
///
/// Positions are relative to the slider's top-left corner. Pass these to
/// [`super::SliderState::handle_event`] from your update function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Mouse button or finger went down on the thumb
    Pressed(Point),
    /// Pointer moved while the thumb is held
    Moved(Point),
    /// Mouse button or finger released
    Released,
    /// Touch lost by the platform
    Cancelled,
}
