// SPDX-License-Identifier: GPL-3.0-only

//! Capture button widget implementation

use crate::app::state::{AppModel, CameraScreen, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the capture button widget
    ///
    /// A white circle that presses down (smaller, gray) while a capture is
    /// in flight. Wrapped in a fixed-size container so the layout does not
    /// shift when the button shrinks.
    pub fn build_capture_button<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        let capture_button_color = if camera.is_capturing {
            Color::from_rgb(0.7, 0.7, 0.7)
        } else {
            Color::WHITE
        };

        let (inner_size, outer_size) = if camera.is_capturing {
            (
                ui::CAPTURE_BUTTON_INNER * 0.85,
                ui::CAPTURE_BUTTON_OUTER * 0.85,
            )
        } else {
            (ui::CAPTURE_BUTTON_INNER, ui::CAPTURE_BUTTON_OUTER)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(capture_button_color)),
            border: cosmic::iced::Border {
                radius: [ui::CAPTURE_BUTTON_RADIUS * (inner_size / ui::CAPTURE_BUTTON_INNER); 4]
                    .into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let button = widget::button::custom(button_inner)
            .on_press(Message::Capture)
            .padding(0)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size));

        let button_wrapper = widget::container(button)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center_x(ui::CAPTURE_BUTTON_OUTER)
            .center_y(ui::CAPTURE_BUTTON_OUTER);

        widget::container(button_wrapper)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([spacing.space_xs, 0])
            .into()
    }
}
