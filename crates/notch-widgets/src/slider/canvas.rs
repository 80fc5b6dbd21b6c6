//! Canvas Program for the slider track and thumb
//!
//! Draws the paint descriptions produced by `SliderControl` and turns mouse
//! and touch input into [`SliderEvent`]s through the `on_event` closure.

use super::message::SliderEvent;
use super::state::SliderState;
use crate::theme::{from_point, to_color, to_point, to_size};
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, touch, Point, Rectangle, Theme};
use notch_core::{Rect, ThumbPaint, TrackPaint};

/// Canvas state tracking which pointer holds the thumb
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderInteraction {
    /// Left mouse button went down on the thumb
    pub mouse_tracking: bool,
    /// Finger that went down on the thumb
    pub finger: Option<touch::Finger>,
}

impl SliderInteraction {
    pub fn is_tracking(&self) -> bool {
        self.mouse_tracking || self.finger.is_some()
    }
}

pub(super) struct SliderCanvas<'a, Message, F>
where
    F: Fn(SliderEvent) -> Message,
{
    pub state: &'a SliderState,
    pub on_event: F,
}

impl<'a, Message, F> SliderCanvas<'a, Message, F>
where
    F: Fn(SliderEvent) -> Message,
{
    fn hits_thumb(&self, local: Point) -> bool {
        self.state
            .view()
            .control()
            .thumb_frame()
            .contains(from_point(local))
    }

    /// Translate raw input into a slider event, updating which pointer
    /// holds the thumb
    fn pointer_event(
        &self,
        interaction: &mut SliderInteraction,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<SliderEvent> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if !interaction.is_tracking() =>
            {
                let position = cursor.position_in(bounds)?;
                if self.hits_thumb(position) {
                    interaction.mouse_tracking = true;
                    return Some(SliderEvent::Pressed(position));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if interaction.mouse_tracking => {
                // keep following the cursor outside the canvas while held
                let position = cursor.position_from(bounds.position())?;
                return Some(SliderEvent::Moved(position));
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if interaction.mouse_tracking =>
            {
                interaction.mouse_tracking = false;
                return Some(SliderEvent::Released);
            }
            Event::Touch(touch::Event::FingerPressed { id, position })
                if !interaction.is_tracking() && bounds.contains(*position) =>
            {
                let local = relative(*position, bounds);
                if self.hits_thumb(local) {
                    interaction.finger = Some(*id);
                    return Some(SliderEvent::Pressed(local));
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position })
                if interaction.finger == Some(*id) =>
            {
                return Some(SliderEvent::Moved(relative(*position, bounds)));
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) if interaction.finger == Some(*id) => {
                interaction.finger = None;
                return Some(SliderEvent::Released);
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) if interaction.finger == Some(*id) => {
                interaction.finger = None;
                return Some(SliderEvent::Cancelled);
            }
            _ => {}
        }

        None
    }
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl<'a, Message, F> Program<Message> for SliderCanvas<'a, Message, F>
where
    F: Fn(SliderEvent) -> Message,
{
    type State = SliderInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        self.pointer_event(interaction, event, bounds, cursor)
            .map(|event| canvas::Action::publish((self.on_event)(event)))
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.is_tracking() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.hits_thumb(position) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let control = self.state.view().control();

        let track = self
            .state
            .track_cache()
            .draw(renderer, bounds.size(), |frame| {
                draw_track(frame, &control.track_paint())
            });
        let thumb = self
            .state
            .thumb_cache()
            .draw(renderer, bounds.size(), |frame| {
                draw_thumb(frame, &control.thumb_paint())
            });

        vec![track, thumb]
    }
}

fn rounded(rect: Rect, radius: f64) -> Option<Path> {
    // zero-sized bounds while the layout settles
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    Some(Path::rounded_rectangle(
        to_point(rect.origin()),
        to_size(rect.size()),
        (radius as f32).into(),
    ))
}

fn draw_track(frame: &mut Frame, paint: &TrackPaint) {
    let Some(track) = rounded(paint.frame, paint.corner_radius) else {
        return;
    };
    frame.fill(&track, to_color(paint.color));

    if paint.highlight.width > 0.0 {
        frame.fill_rectangle(
            to_point(paint.highlight.origin()),
            to_size(paint.highlight.size()),
            to_color(paint.highlight_color),
        );
    }
}

fn draw_thumb(frame: &mut Frame, paint: &ThumbPaint) {
    let Some(thumb) = rounded(paint.frame, paint.corner_radius) else {
        return;
    };
    frame.fill(&thumb, to_color(paint.fill));

    if paint.border_width > 0.0 {
        frame.stroke(
            &thumb,
            Stroke::default()
                .with_color(to_color(paint.border))
                .with_width(paint.border_width as f32),
        );
    }

    if let Some(overlay) = paint.overlay {
        frame.fill(&thumb, to_color(overlay));
    }
}
