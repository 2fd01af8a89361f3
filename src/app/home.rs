// SPDX-License-Identifier: GPL-3.0-only

//! Home screen view

use crate::app::state::{AppModel, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Home screen: a single navigation affordance, centered
    pub fn home_view(&self) -> Element<'_, Message> {
        widget::container(
            widget::button::text(fl!("open-camera"))
                .on_press(Message::OpenCamera)
                .class(cosmic::theme::Button::Suggested),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
    }
}
