// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::{CameraDevice, CameraFrame, Facing};
use crate::config::Config;
use crate::flash::{FlashDevice, FlashMode};
use crate::storage::RecentThumbnail;
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use std::path::PathBuf;
use std::sync::Arc;

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Home screen with the "Open Camera" button
    #[default]
    Home,
    /// Camera screen with preview and controls
    Camera,
}

/// Resolution state of a platform permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Not yet resolved
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// The capture mode selector shown in the bottom bar.
///
/// Purely visual: the capture path never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    #[default]
    Photo,
    Video,
}

/// Camera screen state
///
/// Created when the camera screen is entered and dropped when it is left;
/// nothing in here survives navigation. Messages for async work that
/// completes after the screen was left find this struct gone and are dropped.
#[derive(Debug, Default)]
pub struct CameraScreen {
    /// Which physical camera is active
    pub facing: Facing,
    /// Flash behavior on capture
    pub flash: FlashMode,
    /// Cosmetic Photo/Video selector
    pub capture_mode: CaptureMode,
    /// Most recent photo, shown on the gallery button
    pub recent_thumbnail: Option<RecentThumbnail>,
    /// Camera permission resolution
    pub camera_access: PermissionStatus,
    /// Why camera access was denied, shown on the gate screen
    pub camera_denied_reason: Option<String>,
    /// Photo library permission resolution
    pub library_access: PermissionStatus,
    /// Enumerated camera devices (camera access granted)
    pub devices: Vec<CameraDevice>,
    /// Latest raw frame, the capture source
    pub current_frame: Option<Arc<CameraFrame>>,
    /// Latest frame as a renderable handle
    pub preview: Option<cosmic::widget::image::Handle>,
    /// Whether a photo capture is in progress (press animation)
    pub is_capturing: bool,
    /// Flash is currently firing (white overlay shown)
    pub flash_overlay: bool,
    /// Non-fatal user-visible notice (e.g. a failed capture)
    pub notice: Option<String>,
}

impl CameraScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the active camera facing
    pub fn flip_facing(&mut self) {
        self.facing = self.facing.toggled();
    }

    /// Toggle flash on/off
    pub fn toggle_flash(&mut self) {
        self.flash = self.flash.toggled();
    }

    /// Select a capture mode; re-selecting the active one is a no-op in effect
    pub fn set_capture_mode(&mut self, mode: CaptureMode) {
        self.capture_mode = mode;
    }

    pub fn camera_granted(&self) -> bool {
        self.camera_access.is_granted()
    }

    pub fn library_granted(&self) -> bool {
        self.library_access.is_granted()
    }

    /// The device the preview should use for the current facing.
    ///
    /// Falls back to the first device when none matches, so facing keeps
    /// toggling cleanly on single-camera machines.
    pub fn active_device(&self) -> Option<&CameraDevice> {
        self.devices
            .iter()
            .find(|dev| dev.facing == self.facing)
            .or_else(|| self.devices.first())
    }

    /// Apply the result of the camera access probe
    pub fn resolve_camera_access(&mut self, result: Result<Vec<CameraDevice>, String>) {
        match result {
            Ok(devices) => {
                self.devices = devices;
                self.camera_access = PermissionStatus::Granted;
                self.camera_denied_reason = None;
            }
            Err(reason) => {
                self.devices.clear();
                self.preview = None;
                self.current_frame = None;
                self.camera_access = PermissionStatus::Denied;
                self.camera_denied_reason = Some(reason);
            }
        }
    }

    /// Apply the result of the library access probe.
    ///
    /// Returns true when access is granted and the caller should resolve the
    /// latest photo as a thumbnail.
    pub fn resolve_library_access(&mut self, granted: bool) -> bool {
        self.library_access = if granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        };
        granted
    }

    /// Install a resolved thumbnail.
    ///
    /// `None` results (empty library, decode failure) leave the current
    /// reference untouched; the thumbnail only ever moves forward to a
    /// successfully resolved photo.
    pub fn apply_thumbnail(&mut self, thumbnail: Option<RecentThumbnail>) {
        if let Some(thumbnail) = thumbnail {
            self.recent_thumbnail = Some(thumbnail);
        }
    }
}

/// The application model stores app-specific state used to describe its
/// interface and drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Which screen is currently shown
    pub screen: Screen,
    /// Camera screen state; `Some` only while that screen is open
    pub camera: Option<CameraScreen>,
    /// Hardware flash LEDs discovered at startup
    pub flash_leds: Vec<FlashDevice>,
    /// Cached dropdown labels for the theme setting
    pub theme_dropdown_options: Vec<String>,
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **Navigation**: Screen changes, context drawers, external URLs
/// - **Permission Gate**: Camera and library access resolution
/// - **Preview**: Frames arriving from the camera subscription
/// - **Capture**: Photo capture, flash, capture-mode selection
/// - **Gallery**: Image picker and thumbnail resolution
/// - **Settings**: Configuration changes
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Navigation =====
    /// Navigate from the home screen to the camera screen
    OpenCamera,
    /// Navigate back from the camera screen
    CloseCamera,
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Permission Gate =====
    /// Camera access probe finished
    CameraAccessResolved(Result<Vec<CameraDevice>, String>),
    /// Manual re-request from the denied gate screen
    RequestCameraAccess,
    /// Library access probe finished
    LibraryAccessResolved(bool),

    // ===== Preview =====
    /// New frame received from the camera stream
    PreviewFrame(Arc<CameraFrame>),

    // ===== Capture =====
    /// Capture photo
    Capture,
    /// Flash duration complete, now capture the photo
    FlashComplete,
    /// Photo was persisted (or failed) with the given file path
    PhotoSaved(Result<PathBuf, String>),
    /// Clear capture animation after brief delay
    ClearCaptureAnimation,
    /// Toggle flash for photo capture
    ToggleFlash,
    /// Switch between front and back camera
    FlipFacing,
    /// Select the (cosmetic) capture mode
    SetCaptureMode(CaptureMode),
    /// Dismiss the notice banner
    DismissNotice,

    // ===== Gallery =====
    /// Open the image picker
    OpenGallery,
    /// Image picker finished; `None` when cancelled
    GalleryPicked(Option<PathBuf>),
    /// Thumbnail resolution finished
    ThumbnailLoaded(Option<RecentThumbnail>),

    // ===== Settings =====
    /// Configuration updated
    UpdateConfig(Config),
    /// Select app theme from the settings dropdown
    SetAppTheme(usize),
    /// Toggle mirrored front-camera preview
    SetMirrorPreview(bool),
    /// Reveal the photo directory in the file manager
    OpenPhotoFolder,
}
