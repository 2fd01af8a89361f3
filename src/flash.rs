// SPDX-License-Identifier: GPL-3.0-only

//! Hardware flash LED control via Linux sysfs
//!
//! Discovers and controls flash LEDs exposed at `/sys/class/leds/*:flash`.
//! Uses the brightness file (torch interface), which is group-writable by
//! `feedbackd`, avoiding the root-only `flash_strobe` interface.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Flash behavior on capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    /// Flash does not fire
    #[default]
    Off,
    /// Flash fires during photo capture
    On,
}

impl FlashMode {
    /// The other mode: Off <-> On
    pub fn toggled(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == FlashMode::On
    }
}

/// A flash LED device discovered via sysfs
#[derive(Debug, Clone)]
pub struct FlashDevice {
    /// Sysfs path, e.g. `/sys/class/leds/white:flash`
    path: PathBuf,
    /// Maximum brightness value (from `max_brightness` file)
    max_brightness: u32,
    /// Human-readable name (directory basename)
    name: String,
}

impl FlashDevice {
    /// Scan `/sys/class/leds/` for entries matching `*:flash` and return
    /// all devices that we can write to.
    pub fn discover() -> Vec<FlashDevice> {
        let leds_dir = Path::new("/sys/class/leds");
        let Ok(entries) = std::fs::read_dir(leds_dir) else {
            return Vec::new();
        };

        let mut devices = Vec::new();

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name_str) = name.to_str() else {
                continue;
            };

            // Match entries like "white:flash", "yellow:flash"
            if !name_str.ends_with(":flash") {
                continue;
            }

            let led_path = entry.path();
            let brightness_path = led_path.join("brightness");
            let max_brightness_path = led_path.join("max_brightness");

            let max_brightness = match std::fs::read_to_string(&max_brightness_path) {
                Ok(s) => match s.trim().parse::<u32>() {
                    Ok(v) if v > 0 => v,
                    _ => {
                        warn!(
                            path = %max_brightness_path.display(),
                            "Invalid max_brightness value"
                        );
                        continue;
                    }
                },
                Err(e) => {
                    warn!(
                        path = %max_brightness_path.display(),
                        error = %e,
                        "Cannot read max_brightness"
                    );
                    continue;
                }
            };

            // Verify we can write to brightness
            match std::fs::OpenOptions::new()
                .write(true)
                .open(&brightness_path)
            {
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        path = %brightness_path.display(),
                        error = %e,
                        "Cannot write brightness — user may need to be in 'feedbackd' group"
                    );
                    continue;
                }
            }

            info!(name = name_str, max_brightness, "Discovered flash LED");

            devices.push(FlashDevice {
                path: led_path,
                max_brightness,
                name: name_str.to_string(),
            });
        }

        // Sort by name for deterministic ordering (white before yellow)
        devices.sort_by(|a, b| a.name.cmp(&b.name));
        devices
    }

    /// Get the device name (e.g. "white:flash")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set raw brightness value (0 = off, max_brightness = full)
    pub fn set_brightness(&self, value: u32) -> io::Result<()> {
        let clamped = value.min(self.max_brightness);
        std::fs::write(self.path.join("brightness"), clamped.to_string())
    }

    /// Turn off the LED
    pub fn off(&self) -> io::Result<()> {
        self.set_brightness(0)
    }

    /// Turn on at a fraction of max brightness (0.0 = off, 1.0 = full)
    pub fn torch(&self, intensity: f32) -> io::Result<()> {
        let clamped = intensity.clamp(0.0, 1.0);
        let value = (clamped * self.max_brightness as f32).round() as u32;
        self.set_brightness(value)
    }
}

/// Turn on all discovered flash devices at full brightness
pub fn all_on(devices: &[FlashDevice]) {
    for dev in devices {
        if let Err(e) = dev.torch(1.0) {
            warn!(device = %dev.name, error = %e, "Failed to turn on flash LED");
        }
    }
}

/// Turn off all discovered flash devices
pub fn all_off(devices: &[FlashDevice]) {
    for dev in devices {
        if let Err(e) = dev.off() {
            warn!(device = %dev.name, error = %e, "Failed to turn off flash LED");
        }
    }
}
