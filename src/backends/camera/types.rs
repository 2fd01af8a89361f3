// SPDX-License-Identifier: GPL-3.0-only

//! Shared camera types

use std::time::Instant;

/// Which physical camera is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Rear / world-facing camera
    #[default]
    Back,
    /// Front / user-facing camera
    Front,
}

impl Facing {
    /// The opposite facing: Back <-> Front
    pub fn toggled(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Back => write!(f, "back"),
            Facing::Front => write!(f, "front"),
        }
    }
}

/// Represents a camera device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Human-readable device name (V4L2 card)
    pub name: String,
    /// Device node path (e.g. /dev/video0)
    pub path: String,
    /// Which way the camera points
    pub facing: Facing,
}

impl CameraDevice {
    /// Classify a device's facing from its name.
    ///
    /// V4L2 devices rarely report a location, so "front" in the card name is
    /// the only reliable signal; everything else counts as back-facing.
    pub fn classify_facing(name: &str) -> Facing {
        if name.to_ascii_lowercase().contains("front") {
            Facing::Front
        } else {
            Facing::Back
        }
    }
}

/// A single decoded preview frame (RGBA)
#[derive(Clone)]
pub struct CameraFrame {
    /// RGBA pixel data, `width * height * 4` bytes
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// When the frame left the device
    pub captured_at: Instant,
}

impl CameraFrame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            captured_at: Instant::now(),
        }
    }
}

impl std::fmt::Debug for CameraFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CameraFrame({}x{}, {} bytes)",
            self.width,
            self.height,
            self.data.len()
        )
    }
}
