// SPDX-License-Identifier: GPL-3.0-only

//! Camera device abstraction
//!
//! The camera is an external capability provider: the app asks it to
//! enumerate devices, probe access, and stream preview frames. The concrete
//! implementation uses V4L2 mmap streaming.

pub mod convert;
pub mod types;
pub mod v4l2;

pub use types::{CameraDevice, CameraFrame, Facing};
