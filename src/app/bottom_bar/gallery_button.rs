// SPDX-License-Identifier: GPL-3.0-only

//! Gallery button widget implementation

use crate::app::state::{AppModel, CameraScreen, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the gallery button widget
    ///
    /// Shows the most recent photo as a thumbnail if resolved, otherwise a
    /// folder icon placeholder. Pressing it opens the image picker.
    pub fn build_gallery_button<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        let button_content: Element<'_, Message> =
            if let Some(thumbnail) = &camera.recent_thumbnail {
                let image = widget::image::Image::new(thumbnail.handle.clone())
                    .content_fit(cosmic::iced::ContentFit::Cover)
                    .width(Length::Fixed(ui::GALLERY_THUMB_SIZE - 2.0))
                    .height(Length::Fixed(ui::GALLERY_THUMB_SIZE - 2.0));

                widget::container(image)
                    .width(Length::Fixed(ui::GALLERY_THUMB_SIZE))
                    .height(Length::Fixed(ui::GALLERY_THUMB_SIZE))
                    .into()
            } else {
                widget::container(icon::from_name("folder-pictures-symbolic").size(24))
                    .width(Length::Fixed(ui::GALLERY_THUMB_SIZE))
                    .height(Length::Fixed(ui::GALLERY_THUMB_SIZE))
                    .center(ui::GALLERY_THUMB_SIZE)
                    .into()
            };

        widget::button::custom(button_content)
            .padding(0)
            .width(Length::Fixed(ui::GALLERY_THUMB_SIZE))
            .height(Length::Fixed(ui::GALLERY_THUMB_SIZE))
            .class(cosmic::theme::Button::Image)
            .on_press(Message::OpenGallery)
            .into()
    }
}
