// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// UI dimensions and timings
pub mod ui {
    /// Outer diameter of the capture button
    pub const CAPTURE_BUTTON_OUTER: f32 = 72.0;
    /// Inner circle diameter of the capture button
    pub const CAPTURE_BUTTON_INNER: f32 = 60.0;
    /// Corner radius of the capture button inner circle
    pub const CAPTURE_BUTTON_RADIUS: f32 = 30.0;
    /// Width of the invisible placeholder that stands in for hidden icon buttons
    pub const PLACEHOLDER_BUTTON_WIDTH: f32 = 52.0;
    /// Fixed height of the bottom control bar
    pub const BOTTOM_BAR_HEIGHT: f32 = 68.0;
    /// Side length of the gallery thumbnail button
    pub const GALLERY_THUMB_SIZE: f32 = 40.0;
    /// How long the white flash overlay is shown before the capture fires
    pub const FLASH_DURATION_MS: u64 = 1000;
    /// How long the capture button stays pressed-down after a capture
    pub const CAPTURE_ANIMATION_MS: u64 = 150;
}

/// Application metadata helpers
pub mod app_info {
    /// Version string embedded at build time (git describe)
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Whether the app is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        std::path::Path::new("/.flatpak-info").exists()
    }
}
