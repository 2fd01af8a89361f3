// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::AppTheme;
use crate::constants::app_info;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let theme_index = match self.config.app_theme {
            AppTheme::System => 0,
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
        };
        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(theme_index),
            Message::SetAppTheme,
        );

        let mirror_toggle =
            widget::toggler(self.config.mirror_preview).on_toggle(Message::SetMirrorPreview);

        let open_folder_button =
            widget::button::standard(fl!("open-photos-folder")).on_press(Message::OpenPhotoFolder);

        let version_info = if app_info::is_flatpak() {
            format!("Version {} (Flatpak)", app_info::version())
        } else {
            format!("Version {}", app_info::version())
        };

        let settings_column: Element<'_, Message> = widget::column()
            .push(widget::text(fl!("theme")).size(16).font(cosmic::font::bold()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(
                        widget::text(fl!("mirror-preview"))
                            .size(16)
                            .font(cosmic::font::bold()),
                    )
                    .push(widget::horizontal_space().width(Length::Fill))
                    .push(mirror_toggle)
                    .align_y(Alignment::Center),
            )
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("photos"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(open_folder_button)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(version_info)
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
