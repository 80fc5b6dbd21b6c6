//! Widget state: the core view plus per-layer canvas caches

use super::message::SliderEvent;
use crate::theme::from_point;
use iced::widget::canvas;
use notch_core::SliderView;

/// State for one labeled slider
///
/// Keep one of these in your application state. The caches are only cleared
/// for the layers the control reports dirty, so a burst of changes between
/// two frames repaints each layer at most once.
pub struct SliderState {
    view: SliderView,
    track_cache: canvas::Cache,
    thumb_cache: canvas::Cache,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(SliderView::default())
    }
}

impl SliderState {
    pub fn new(view: SliderView) -> Self {
        let mut state = Self {
            view,
            track_cache: canvas::Cache::new(),
            thumb_cache: canvas::Cache::new(),
        };
        state.flush_redraw();
        state
    }

    pub fn view(&self) -> &SliderView {
        &self.view
    }

    /// Mutate the view (e.g. set a value from outside) and pick up redraws
    pub fn update_view<R>(&mut self, f: impl FnOnce(&mut SliderView) -> R) -> R {
        let result = f(&mut self.view);
        self.flush_redraw();
        result
    }

    /// Apply a canvas event
    ///
    /// Returns `Some(value)` when observers should be notified of a new value.
    pub fn handle_event(&mut self, event: SliderEvent) -> Option<f64> {
        let origin = self.view.frames().slider.origin();
        let to_view = |position: iced::Point| {
            let local = from_point(position);
            notch_core::Point::new(local.x + origin.x, local.y + origin.y)
        };

        let notification = match event {
            SliderEvent::Pressed(position) => {
                if !self.view.pointer_pressed(to_view(position)) {
                    log::trace!("SliderState: press missed the thumb");
                }
                None
            }
            SliderEvent::Moved(position) => self.view.pointer_moved(to_view(position)),
            SliderEvent::Released => self.view.pointer_released(),
            SliderEvent::Cancelled => self.view.pointer_cancelled(),
        };

        self.flush_redraw();
        notification
    }

    fn flush_redraw(&mut self) {
        let redraw = self.view.control_mut().take_redraw();
        if redraw.track {
            self.track_cache.clear();
        }
        if redraw.thumb {
            self.thumb_cache.clear();
        }
    }

    pub(super) fn track_cache(&self) -> &canvas::Cache {
        &self.track_cache
    }

    pub(super) fn thumb_cache(&self) -> &canvas::Cache {
        &self.thumb_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn state() -> SliderState {
        // 1 pixel of drag = 1 unit of value
        SliderState::new(SliderView::new(1032.0))
    }

    #[test]
    fn test_drag_notifies_per_move() {
        let mut state = state();
        assert_eq!(state.handle_event(SliderEvent::Pressed(Point::new(16.0, 16.0))), None);
        assert!(state.view().control().is_highlighted());

        assert_eq!(
            state.handle_event(SliderEvent::Moved(Point::new(116.0, 16.0))),
            Some(100.0)
        );
        assert_eq!(
            state.handle_event(SliderEvent::Moved(Point::new(66.0, 40.0))),
            Some(50.0)
        );
        assert_eq!(state.handle_event(SliderEvent::Released), None);
        assert!(!state.view().control().is_highlighted());
        assert_eq!(state.view().value_text(), "50");
    }

    #[test]
    fn test_stepped_drag_notifies_on_release() {
        let mut state = state();
        state.update_view(|view| view.set_step(Some(25.0)));

        state.handle_event(SliderEvent::Pressed(Point::new(16.0, 16.0)));
        assert_eq!(state.handle_event(SliderEvent::Moved(Point::new(331.0, 16.0))), None);
        assert_eq!(state.handle_event(SliderEvent::Cancelled), Some(325.0));
    }

    #[test]
    fn test_redraw_flags_are_consumed() {
        let mut state = state();
        state.update_view(|view| view.set_value(400.0));
        assert!(state.view().control().pending_redraw().is_empty());
    }
}
