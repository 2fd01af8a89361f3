// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles photo capture, flash, the cosmetic capture-mode selector, and the
//! failure notice banner.

use crate::app::state::{AppModel, CaptureMode, Message};
use crate::constants::ui;
use crate::fl;
use crate::storage;
use cosmic::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

impl AppModel {
    // =========================================================================
    // Capture Operations Handlers
    // =========================================================================

    /// Create a delayed task that sends a message after the specified milliseconds
    pub(crate) fn delay_task(millis: u64, message: Message) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(millis)).await;
                message
            },
            cosmic::Action::App,
        )
    }

    pub(crate) fn handle_capture(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };
        if !camera.camera_granted() {
            warn!("Capture requested without camera access");
            return Task::none();
        }

        // Flash flow: fire the flash first, capture on FlashComplete
        if camera.flash.is_on() && !camera.flash_overlay {
            info!("Flash enabled - firing flash before capture");
            camera.flash_overlay = true;
            crate::flash::all_on(&self.flash_leds);
            return Self::delay_task(ui::FLASH_DURATION_MS, Message::FlashComplete);
        }

        self.capture_photo()
    }

    pub(crate) fn handle_flash_complete(&mut self) -> Task<cosmic::Action<Message>> {
        crate::flash::all_off(&self.flash_leds);

        let Some(camera) = &mut self.camera else {
            return Task::none();
        };
        camera.flash_overlay = false;
        self.capture_photo()
    }

    /// Encode the current preview frame and persist it into the library.
    ///
    /// Concurrent captures are not deduplicated; each runs to completion and
    /// the last resolved one wins the thumbnail.
    fn capture_photo(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };
        let Some(frame) = &camera.current_frame else {
            info!("No frame available to capture");
            return Task::none();
        };

        info!("Capturing photo...");
        camera.is_capturing = true;

        let frame = Arc::clone(frame);
        let save_dir = storage::photo_directory(&self.config.save_folder_name);

        let save_task = Task::perform(
            async move {
                storage::save_photo(frame, save_dir)
                    .await
                    .map_err(|e| e.to_string())
            },
            |result| cosmic::Action::App(Message::PhotoSaved(result)),
        );
        let animation_task =
            Self::delay_task(ui::CAPTURE_ANIMATION_MS, Message::ClearCaptureAnimation);
        Task::batch([save_task, animation_task])
    }

    pub(crate) fn handle_photo_saved(
        &mut self,
        result: Result<PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };
        camera.is_capturing = false;

        match result {
            Ok(path) => {
                info!(path = %path.display(), "Photo saved successfully");
                Task::perform(
                    async move { storage::load_thumbnail(path).await },
                    |thumbnail| cosmic::Action::App(Message::ThumbnailLoaded(thumbnail)),
                )
            }
            Err(err) => {
                // Local recovery: surface a notice, keep prior state
                error!(error = %err, "Failed to save photo");
                camera.notice = Some(fl!("capture-failed"));
                Task::none()
            }
        }
    }

    pub(crate) fn handle_clear_capture_animation(&mut self) -> Task<cosmic::Action<Message>> {
        if let Some(camera) = &mut self.camera {
            camera.is_capturing = false;
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_flash(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };
        if !camera.camera_granted() {
            return Task::none();
        }

        camera.toggle_flash();
        info!(flash = ?camera.flash, "Flash toggled");
        Task::none()
    }

    pub(crate) fn handle_set_capture_mode(
        &mut self,
        mode: CaptureMode,
    ) -> Task<cosmic::Action<Message>> {
        if let Some(camera) = &mut self.camera {
            camera.set_capture_mode(mode);
        }
        Task::none()
    }

    pub(crate) fn handle_dismiss_notice(&mut self) -> Task<cosmic::Action<Message>> {
        if let Some(camera) = &mut self.camera {
            camera.notice = None;
        }
        Task::none()
    }
}
