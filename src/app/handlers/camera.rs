// SPDX-License-Identifier: GPL-3.0-only

//! Camera screen lifecycle and camera control handlers
//!
//! Handles entering/leaving the camera screen, access probing, preview
//! frames, and facing flips.

use crate::app::state::{AppModel, CameraScreen, Message, PermissionStatus, Screen};
use crate::backends::camera::{CameraDevice, CameraFrame, v4l2};
use crate::storage;
use cosmic::Task;
use std::sync::Arc;
use tracing::{info, warn};

impl AppModel {
    // =========================================================================
    // Screen Lifecycle Handlers
    // =========================================================================

    /// Enter the camera screen and kick off both access probes.
    ///
    /// The screen state is created fresh here; everything it held last time
    /// was discarded when the screen was left.
    pub(crate) fn handle_open_camera(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Opening camera screen");
        self.screen = Screen::Camera;
        self.camera = Some(CameraScreen::new());

        let dir = storage::photo_directory(&self.config.save_folder_name);
        let library_task = Task::perform(
            async move { storage::request_access(dir).await },
            |granted| cosmic::Action::App(Message::LibraryAccessResolved(granted)),
        );

        Task::batch([library_task, Self::probe_camera_task()])
    }

    pub(crate) fn handle_close_camera(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Leaving camera screen");
        self.screen = Screen::Home;
        self.camera = None;
        Task::none()
    }

    // =========================================================================
    // Permission Gate Handlers
    // =========================================================================

    fn probe_camera_task() -> Task<cosmic::Action<Message>> {
        Task::perform(async { v4l2::probe_access().await }, |result| {
            cosmic::Action::App(Message::CameraAccessResolved(result))
        })
    }

    pub(crate) fn handle_camera_access_resolved(
        &mut self,
        result: Result<Vec<CameraDevice>, String>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };

        match &result {
            Ok(devices) => info!(count = devices.len(), "Camera access granted"),
            Err(reason) => warn!(reason = %reason, "Camera access denied"),
        }
        camera.resolve_camera_access(result);
        Task::none()
    }

    /// Manual re-request from the denied gate screen: reset to unresolved
    /// and probe again.
    pub(crate) fn handle_request_camera_access(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };

        info!("Re-requesting camera access");
        camera.camera_access = PermissionStatus::Unknown;
        camera.camera_denied_reason = None;
        Self::probe_camera_task()
    }

    // =========================================================================
    // Preview and Facing Handlers
    // =========================================================================

    pub(crate) fn handle_preview_frame(
        &mut self,
        frame: Arc<CameraFrame>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };

        camera.preview = Some(cosmic::widget::image::Handle::from_rgba(
            frame.width,
            frame.height,
            frame.data.clone(),
        ));
        camera.current_frame = Some(frame);
        Task::none()
    }

    pub(crate) fn handle_flip_facing(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };
        if !camera.camera_granted() {
            warn!("Facing flip requested without camera access");
            return Task::none();
        }

        camera.flip_facing();
        info!(facing = %camera.facing, "Facing flipped");
        // The preview subscription restarts on its own: its id contains the
        // active device path, which follows the facing
        Task::none()
    }
}
