// SPDX-License-Identifier: GPL-3.0-only

//! PocketCam - a minimal camera application for the COSMIC desktop environment
//!
//! Two screens: a home screen with a single navigation button, and a camera
//! screen with live preview, photo capture, facing and flash toggles, and a
//! gallery thumbnail that opens the system image picker.
//!
//! # Architecture
//!
//! - [`app`]: Application model, messages, handlers, and UI
//! - [`backends`]: Camera device abstraction (V4L2)
//! - [`storage`]: Photo library access (pictures directory)
//! - [`flash`]: Hardware flash LED control
//! - [`config`]: User configuration handling

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flash;
pub mod i18n;
pub mod storage;

// Re-export commonly used types
pub use app::{AppModel, CameraScreen, CaptureMode, Message, PermissionStatus, Screen};
pub use backends::camera::{CameraDevice, CameraFrame, Facing};
pub use config::Config;
pub use flash::FlashMode;
pub use storage::RecentThumbnail;
