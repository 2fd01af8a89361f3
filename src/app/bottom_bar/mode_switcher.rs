// SPDX-License-Identifier: GPL-3.0-only

//! Mode switcher widget implementation (Photo/Video toggle)

use crate::app::state::{AppModel, CameraScreen, CaptureMode, Message};
use crate::fl;
use cosmic::Element;
use cosmic::widget;

impl AppModel {
    /// Build the mode switcher widget
    ///
    /// Shows buttons for Photo and Video modes with the active one
    /// highlighted. Selecting the already-active mode re-applies the same
    /// value; the selector drives no capture behavior.
    pub fn build_mode_switcher<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        let video_button = widget::button::text(fl!("mode-video"))
            .on_press(Message::SetCaptureMode(CaptureMode::Video))
            .class(if camera.capture_mode == CaptureMode::Video {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            });

        let photo_button = widget::button::text(fl!("mode-photo"))
            .on_press(Message::SetCaptureMode(CaptureMode::Photo))
            .class(if camera.capture_mode == CaptureMode::Photo {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            });

        widget::row()
            .push(video_button)
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(photo_button)
            .spacing(spacing.space_xxs)
            .into()
    }
}
