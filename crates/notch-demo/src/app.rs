//! Demo application state, messages and view

use iced::widget::{column, container, text};
use iced::{Color, Element, Length, Task};
use notch_core::SliderView;
use notch_widgets::{labeled_slider, SliderEvent, SliderState};

#[derive(Debug, Clone)]
pub enum Message {
    Slider(SliderEvent),
}

pub struct DemoApp {
    slider: SliderState,
    padding: f32,
    /// Last value-changed notification received from the slider
    last_value: Option<f64>,
}

impl DemoApp {
    pub fn new(view: SliderView, padding: f32) -> Self {
        Self {
            slider: SliderState::new(view),
            padding,
            last_value: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(event) => {
                if let Some(value) = self.slider.handle_event(event) {
                    log::info!("value changed: {}", value);
                    self.last_value = Some(value);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let status = match self.last_value {
            Some(value) => format!("Last notification: {}", value),
            None => "Drag the thumb".to_string(),
        };

        let content = column![
            labeled_slider(&self.slider, Message::Slider),
            text(status)
                .size(12)
                .color(Color::from_rgb(0.5, 0.5, 0.5)),
        ]
        .spacing(16);

        container(content)
            .padding(self.padding)
            .width(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
