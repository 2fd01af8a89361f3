// SPDX-License-Identifier: GPL-3.0-only

//! Photo library handlers
//!
//! Handles library access resolution, thumbnail loading, the image picker,
//! and revealing the photo directory.

use crate::app::state::{AppModel, Message};
use crate::fl;
use crate::storage::{self, RecentThumbnail};
use cosmic::Task;
use std::path::PathBuf;
use tracing::{debug, error, info};

impl AppModel {
    // =========================================================================
    // Library Access Handlers
    // =========================================================================

    pub(crate) fn handle_library_access_resolved(
        &mut self,
        granted: bool,
    ) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };

        if camera.resolve_library_access(granted) {
            info!("Library access granted, resolving latest photo");
            let dir = storage::photo_directory(&self.config.save_folder_name);
            return Task::perform(
                async move { storage::load_latest_thumbnail(dir).await },
                |thumbnail| cosmic::Action::App(Message::ThumbnailLoaded(thumbnail)),
            );
        }

        // Denied: thumbnail stays absent, no retry, no error surface
        info!("Library access denied, gallery thumbnail disabled");
        Task::none()
    }

    pub(crate) fn handle_thumbnail_loaded(
        &mut self,
        thumbnail: Option<RecentThumbnail>,
    ) -> Task<cosmic::Action<Message>> {
        if let Some(camera) = &mut self.camera {
            camera.apply_thumbnail(thumbnail);
        }
        Task::none()
    }

    // =========================================================================
    // Image Picker Handlers
    // =========================================================================

    pub(crate) fn handle_open_gallery(&self) -> Task<cosmic::Action<Message>> {
        info!("Opening image picker");
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title(fl!("pick-image"))
                    .add_filter(fl!("image-files"), &["jpg", "jpeg", "png", "webp"])
                    .pick_file()
                    .await
                    .map(|file| file.path().to_path_buf())
            },
            |path| cosmic::Action::App(Message::GalleryPicked(path)),
        )
    }

    pub(crate) fn handle_gallery_picked(
        &mut self,
        path: Option<PathBuf>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(path) = path else {
            debug!("Image picker cancelled");
            return Task::none();
        };

        info!(path = %path.display(), "Image picked");
        Task::perform(
            async move { storage::load_thumbnail(path).await },
            |thumbnail| cosmic::Action::App(Message::ThumbnailLoaded(thumbnail)),
        )
    }

    pub(crate) fn handle_open_photo_folder(&self) -> Task<cosmic::Action<Message>> {
        let dir = storage::photo_directory(&self.config.save_folder_name);
        info!(path = %dir.display(), "Opening photos folder");

        if let Err(e) = open::that_detached(&dir) {
            error!(error = %e, path = %dir.display(), "Failed to open photos folder");
        }
        Task::none()
    }
}
