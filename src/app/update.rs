// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, routing messages to
//! focused handler methods implemented in the `handlers` submodules.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: Context drawers, URLs, settings changes
//! - `handlers::camera`: Screen lifecycle, access probing, frames, facing
//! - `handlers::capture`: Photo capture, flash, capture mode, notices
//! - `handlers::library`: Library access, thumbnails, image picker

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== Navigation =====
            Message::OpenCamera => self.handle_open_camera(),
            Message::CloseCamera => self.handle_close_camera(),
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Permission Gate =====
            Message::CameraAccessResolved(result) => self.handle_camera_access_resolved(result),
            Message::RequestCameraAccess => self.handle_request_camera_access(),
            Message::LibraryAccessResolved(granted) => {
                self.handle_library_access_resolved(granted)
            }

            // ===== Preview =====
            Message::PreviewFrame(frame) => self.handle_preview_frame(frame),

            // ===== Capture =====
            Message::Capture => self.handle_capture(),
            Message::FlashComplete => self.handle_flash_complete(),
            Message::PhotoSaved(result) => self.handle_photo_saved(result),
            Message::ClearCaptureAnimation => self.handle_clear_capture_animation(),
            Message::ToggleFlash => self.handle_toggle_flash(),
            Message::FlipFacing => self.handle_flip_facing(),
            Message::SetCaptureMode(mode) => self.handle_set_capture_mode(mode),
            Message::DismissNotice => self.handle_dismiss_notice(),

            // ===== Gallery =====
            Message::OpenGallery => self.handle_open_gallery(),
            Message::GalleryPicked(path) => self.handle_gallery_picked(path),
            Message::ThumbnailLoaded(thumbnail) => self.handle_thumbnail_loaded(thumbnail),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SetMirrorPreview(enabled) => self.handle_set_mirror_preview(enabled),
            Message::OpenPhotoFolder => self.handle_open_photo_folder(),
        }
    }
}
