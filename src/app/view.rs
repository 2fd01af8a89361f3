// SPDX-License-Identifier: GPL-3.0-only

//! Camera screen view
//!
//! Renders the permission gate, the live preview with overlaid controls, the
//! flash overlay, and the failure notice banner.

use crate::app::state::{AppModel, CameraScreen, Message, PermissionStatus, Screen};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Color, Length};
use cosmic::widget::{self, icon};

/// Flash icon SVG (lightning bolt)
const FLASH_ICON: &[u8] = include_bytes!("../../resources/button_icons/flash.svg");
/// Flash off icon SVG (lightning bolt with strike-through)
const FLASH_OFF_ICON: &[u8] = include_bytes!("../../resources/button_icons/flash-off.svg");

/// Shared translucent style for controls overlaid on the preview
pub(crate) fn overlay_container_style(theme: &cosmic::Theme) -> widget::container::Style {
    let cosmic = theme.cosmic();
    widget::container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.35))),
        border: Border {
            radius: cosmic.corner_radii.radius_m.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppModel {
    /// Build the main application view, dispatching on the active screen
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.screen {
            Screen::Home => self.home_view(),
            Screen::Camera => match &self.camera {
                Some(camera) => self.camera_view(camera),
                None => self.home_view(),
            },
        };

        // Black background everywhere, matching the preview letterboxing
        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }

    /// Camera screen: permission gate first, live view once granted
    fn camera_view<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        match camera.camera_access {
            PermissionStatus::Unknown => self.camera_pending_view(),
            PermissionStatus::Denied => self.camera_denied_view(camera),
            PermissionStatus::Granted => self.camera_live_view(camera),
        }
    }

    /// Loading placeholder shown while camera access is unresolved
    fn camera_pending_view(&self) -> Element<'_, Message> {
        let placeholder = widget::container(widget::text(fl!("requesting-camera-access")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill);

        cosmic::iced::widget::stack![placeholder, self.build_back_bar()]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Terminal denied state: explanation plus a manual re-request control
    fn camera_denied_view<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        let mut column = widget::column()
            .push(icon::from_name("camera-disabled-symbolic").size(48))
            .push(widget::text::title3(fl!("camera-access-denied")))
            .push(widget::text(fl!("camera-access-denied-hint")))
            .spacing(spacing.space_s)
            .align_x(Alignment::Center);

        if let Some(reason) = &camera.camera_denied_reason {
            column = column.push(widget::text::caption(reason.clone()));
        }

        column = column.push(
            widget::button::suggested(fl!("try-again")).on_press(Message::RequestCameraAccess),
        );

        let body = widget::container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill);

        cosmic::iced::widget::stack![body, self.build_back_bar()]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Live preview with overlay controls
    fn camera_live_view<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        let preview: Element<'_, Message> = if let Some(handle) = &camera.preview {
            widget::image::Image::new(handle.clone())
                .content_fit(cosmic::iced::ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            widget::Space::new(Length::Fill, Length::Fill).into()
        };

        // Flash firing: only the preview with a white overlay, no controls
        if camera.flash_overlay {
            let flash_overlay = widget::container(widget::Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| widget::container::Style {
                    background: Some(Background::Color(Color::WHITE)),
                    ..Default::default()
                });

            return cosmic::iced::widget::stack![preview, flash_overlay]
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        }

        let mut overlay = widget::column().push(self.build_camera_top_bar(camera));
        if let Some(notice) = &camera.notice {
            overlay = overlay.push(
                widget::container(self.build_notice_banner(notice))
                    .width(Length::Fill)
                    .center_x(Length::Fill),
            );
        }

        let preview_stack = cosmic::iced::widget::stack![
            preview,
            widget::container(overlay)
                .width(Length::Fill)
                .align_y(cosmic::iced::alignment::Vertical::Top)
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        widget::column()
            .push(preview_stack)
            .push(self.build_capture_button(camera))
            .push(self.build_bottom_bar(camera))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Top bar for the gate screens: just the back button
    fn build_back_bar(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let row = widget::row()
            .padding(spacing.space_xs)
            .push(
                widget::button::icon(icon::from_name("go-previous-symbolic"))
                    .on_press(Message::CloseCamera)
                    .class(cosmic::theme::Button::Standard),
            )
            .push(widget::Space::new(Length::Fill, Length::Shrink));

        widget::container(row)
            .width(Length::Fill)
            .align_y(cosmic::iced::alignment::Vertical::Top)
            .into()
    }

    /// Top bar for the live view: back button left, flash toggle right
    fn build_camera_top_bar<'a>(&'a self, camera: &'a CameraScreen) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        let mut row = widget::row()
            .padding(spacing.space_xs)
            .align_y(Alignment::Center)
            .push(
                widget::button::icon(icon::from_name("go-previous-symbolic"))
                    .on_press(Message::CloseCamera)
                    .class(cosmic::theme::Button::Standard),
            )
            .push(widget::Space::new(Length::Fill, Length::Shrink));

        let flash_icon_bytes = if camera.flash.is_on() {
            FLASH_ICON
        } else {
            FLASH_OFF_ICON
        };
        let flash_icon = widget::icon::from_svg_bytes(flash_icon_bytes).symbolic(true);

        row = row.push(
            widget::button::icon(flash_icon)
                .on_press(Message::ToggleFlash)
                .class(if camera.flash.is_on() {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Standard
                }),
        );

        widget::container(row).width(Length::Fill).into()
    }

    /// Dismissible banner for non-fatal failures
    fn build_notice_banner<'a>(&'a self, notice: &'a str) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        let row = widget::row()
            .push(icon::from_name("dialog-warning-symbolic").size(16))
            .push(widget::text(notice))
            .push(
                widget::button::icon(icon::from_name("window-close-symbolic"))
                    .on_press(Message::DismissNotice)
                    .class(cosmic::theme::Button::Text),
            )
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        widget::container(row)
            .padding([spacing.space_xxs, spacing.space_xs])
            .style(overlay_container_style)
            .into()
    }
}
