// SPDX-License-Identifier: GPL-3.0-only

//! Main application module
//!
//! This module contains the application state, message handling, and UI
//! rendering for the two screens.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, CameraScreen, Message, ...)
//! - `handlers`: Message handlers grouped by functional domain
//! - `home`: Home screen view
//! - `view`: Camera screen view and permission gate
//! - `controls`: Capture button
//! - `bottom_bar`: Gallery button, mode switcher, facing switcher
//! - `settings`: Settings drawer
//! - `update`: Message dispatch

mod bottom_bar;
mod controls;
mod handlers;
mod home;
mod settings;
mod state;
mod update;
mod view;

use crate::backends::camera::{CameraFrame, Facing};
use crate::config::Config;
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tracing::{error, info};

pub use state::{
    AppModel, CameraScreen, CaptureMode, ContextPage, Message, PermissionStatus, Screen,
};

const REPOSITORY: &str = "https://github.com/pocketcam/pocketcam";
const APP_ICON: &[u8] =
    include_bytes!("../../resources/icons/hicolor/scalable/apps/io.github.pocketcam.pocketcam.svg");

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.pocketcam.pocketcam";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // Flash LEDs are optional phone/tablet hardware; a quick sysfs scan
        let flash_leds = crate::flash::FlashDevice::discover();

        let theme_dropdown_options = vec![
            fl!("theme-system"),
            fl!("theme-dark"),
            fl!("theme-light"),
        ];

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            screen: Screen::Home,
            camera: None,
            flash_leds,
            theme_dropdown_options,
        };

        // The home screen starts no work; the camera screen's probes run
        // when it is opened
        (app, Task::none())
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        Subscription::batch([config_sub, self.preview_subscription()])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

impl AppModel {
    /// Preview frame subscription.
    ///
    /// Runs while the camera screen is open with camera access granted, and
    /// restarts whenever the active device or the mirror setting changes
    /// (the subscription id includes both). The blocking V4L2 loop feeds a
    /// bounded channel; dropping the receiver stops it.
    fn preview_subscription(&self) -> Subscription<Message> {
        let Some(camera) = &self.camera else {
            return Subscription::none();
        };
        if !camera.camera_granted() {
            return Subscription::none();
        }
        let Some(device) = camera.active_device() else {
            return Subscription::none();
        };

        let device = device.clone();
        let mirror = self.config.mirror_preview && device.facing == Facing::Front;

        Subscription::run_with_id(
            ("preview", device.path.clone(), mirror),
            cosmic::iced::stream::channel(16, move |mut output| async move {
                info!(path = %device.path, "Preview subscription started");

                loop {
                    let (tx, mut rx) = futures::channel::mpsc::channel::<CameraFrame>(4);
                    let path = device.path.clone();
                    let worker = tokio::task::spawn_blocking(move || {
                        crate::backends::camera::v4l2::preview_loop(&path, mirror, tx)
                    });

                    let mut cancelled = false;
                    while let Some(frame) = rx.next().await {
                        if output
                            .send(Message::PreviewFrame(Arc::new(frame)))
                            .await
                            .is_err()
                        {
                            cancelled = true;
                            break;
                        }
                    }
                    // Closing the receiver is what stops the blocking loop
                    drop(rx);

                    match worker.await {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => error!(error = %e, "Preview stream failed"),
                        Err(e) => error!(error = %e, "Preview worker panicked"),
                    }

                    if cancelled || output.is_closed() {
                        break;
                    }

                    // Device failed underneath us; retry after a pause
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                    if output.is_closed() {
                        break;
                    }
                }

                info!("Preview subscription ended");
            }),
        )
    }
}
