// SPDX-License-Identifier: GPL-3.0-only

//! Facing switcher button widget implementation

use crate::app::state::{AppModel, CameraScreen, Message};
use crate::app::view::overlay_container_style;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

/// Camera switch icon SVG (camera with circular arrows)
const FACING_SWITCH_ICON: &[u8] =
    include_bytes!("../../../resources/button_icons/facing-switch.svg");

impl AppModel {
    /// Build the facing switcher button widget
    ///
    /// Shown whenever camera access is granted; with a single camera the
    /// facing state still toggles while the preview stays on that device.
    /// An invisible placeholder keeps the layout stable otherwise.
    pub fn build_facing_switcher<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        if !camera.camera_granted() || camera.devices.is_empty() {
            return widget::Space::new(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH), Length::Shrink)
                .into();
        }

        let switch_icon = widget::icon::from_svg_bytes(FACING_SWITCH_ICON).symbolic(true);
        let icon_widget = widget::icon(switch_icon).size(32);

        let icon_content = widget::container(icon_widget)
            .width(Length::Fixed(52.0))
            .height(Length::Fixed(52.0))
            .center(Length::Fixed(52.0));

        let btn = widget::button::custom(icon_content)
            .padding(0)
            .class(cosmic::theme::Button::Text)
            .on_press(Message::FlipFacing);

        widget::container(btn).style(overlay_container_style).into()
    }
}
