// SPDX-License-Identifier: GPL-3.0-only

//! Bottom bar module
//!
//! This module handles the bottom control bar UI components:
//! - Gallery button (with thumbnail)
//! - Mode switcher (Photo/Video toggle)
//! - Facing switcher (flip cameras)

mod facing_switcher;
mod gallery_button;
mod mode_switcher;

use crate::app::state::{AppModel, CameraScreen, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the complete bottom bar widget
    ///
    /// Assembles gallery button, mode switcher, and facing switcher into a
    /// three-column layout so the mode switcher is truly centered under the
    /// capture button regardless of asymmetric button widths.
    pub fn build_bottom_bar<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        // Left section: Fill space + gallery button (right-aligned within the fill)
        let left_section = widget::row()
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(self.build_gallery_button(camera))
            .push(widget::horizontal_space().width(spacing.space_m))
            .align_y(Alignment::Center);

        // Center section: mode switcher
        let center_section = self.build_mode_switcher(camera);

        // Right section: facing switcher + Fill space (left-aligned within the fill)
        let right_section = widget::row()
            .push(widget::horizontal_space().width(spacing.space_m))
            .push(self.build_facing_switcher(camera))
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .align_y(Alignment::Center);

        let bottom_row = widget::row()
            .push(left_section)
            .push(center_section)
            .push(right_section)
            .padding(spacing.space_xs)
            .align_y(Alignment::Center);

        widget::container(bottom_row)
            .width(Length::Fill)
            .height(Length::Fixed(ui::BOTTOM_BAR_HEIGHT))
            .center_y(ui::BOTTOM_BAR_HEIGHT)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::TRANSPARENT)),
                ..Default::default()
            })
            .into()
    }
}
