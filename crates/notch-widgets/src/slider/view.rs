//! View function composing title, value label and slider canvas

use super::canvas::SliderCanvas;
use super::message::SliderEvent;
use super::state::SliderState;
use crate::theme::{TITLE_TEXT_COLOR, VALUE_TEXT_COLOR};
use iced::font::Weight;
use iced::widget::{container, row, text, Canvas, Column, Space};
use iced::{Element, Font, Length};

/// Create a labeled slider element
///
/// # Arguments
///
/// * `state` - Slider state owned by the application
/// * `on_event` - Maps canvas input to your message; feed it back into
///   [`SliderState::handle_event`]
///
/// # Example
///
/// ```ignore
/// labeled_slider(&self.slider, Message::Slider)
/// ```
pub fn labeled_slider<'a, Message>(
    state: &'a SliderState,
    on_event: impl Fn(SliderEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let view = state.view();
    let frames = view.frames();
    let fonts = view.layout().fonts();
    let width = view.width() as f32;

    let mut content = Column::new().width(Length::Fixed(width));

    if let Some(title_frame) = frames.title {
        let bold = Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        };
        content = content.push(
            container(
                text(view.title())
                    .size(fonts.title_size as f32)
                    .font(bold)
                    .color(TITLE_TEXT_COLOR),
            )
            .width(Length::Fill)
            .height(Length::Fixed(title_frame.height as f32)),
        );
    }

    // Follow mode can push the label past either edge near the bounds
    let max_x = (view.width() - frames.value.width).max(0.0);
    let value_x = frames.value.x.clamp(0.0, max_x) as f32;
    content = content.push(
        row![
            Space::new().width(Length::Fixed(value_x)),
            text(view.value_text())
                .size(fonts.value_size as f32)
                .color(VALUE_TEXT_COLOR),
        ]
        .height(Length::Fixed(frames.value.height as f32)),
    );

    content = content.push(
        Canvas::new(SliderCanvas { state, on_event })
            .width(Length::Fixed(frames.slider.width as f32))
            .height(Length::Fixed(frames.slider.height as f32)),
    );

    content.into()
}
