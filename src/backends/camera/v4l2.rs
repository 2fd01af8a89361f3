// SPDX-License-Identifier: GPL-3.0-only

//! V4L2 camera backend
//!
//! Enumeration and access probing run once per permission request; the
//! preview loop is a blocking mmap capture loop feeding decoded RGBA frames
//! into a bounded channel, and exits when the receiving side goes away.

use crate::backends::camera::convert;
use crate::backends::camera::types::{CameraDevice, CameraFrame};
use crate::errors::CameraError;
use futures::channel::mpsc;
use tracing::{debug, info, warn};
use v4l::FourCC;
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;

/// Preferred MJPEG preview resolution
const PREFERRED_WIDTH: u32 = 1280;
const PREFERRED_HEIGHT: u32 = 720;

/// Fallback YUYV resolution (uncompressed, keep the bus traffic low)
const FALLBACK_WIDTH: u32 = 640;
const FALLBACK_HEIGHT: u32 = 480;

/// Number of mmap buffers for the capture stream
const BUFFER_COUNT: u32 = 4;

/// Probe camera access: enumerate capture devices and report them, or the
/// reason access is unavailable.
///
/// This is the camera side of the permission gate; an `Err` resolves the
/// permission to denied with a user-presentable reason.
pub async fn probe_access() -> Result<Vec<CameraDevice>, String> {
    tokio::task::spawn_blocking(enumerate)
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

/// Enumerate V4L2 video-capture devices.
///
/// Nodes that cannot be opened or that lack the capture capability are
/// skipped; if nothing usable remains, the most relevant error is reported.
fn enumerate() -> Result<Vec<CameraDevice>, CameraError> {
    let mut devices = Vec::new();
    let mut last_error: Option<std::io::Error> = None;

    for node in v4l::context::enum_devices() {
        let path = node.path().to_string_lossy().to_string();

        let dev = match v4l::Device::with_path(&path) {
            Ok(dev) => dev,
            Err(e) => {
                debug!(path = %path, error = %e, "Skipping unopenable video node");
                last_error = Some(e);
                continue;
            }
        };

        let caps = match dev.query_caps() {
            Ok(caps) => caps,
            Err(e) => {
                debug!(path = %path, error = %e, "Skipping node without capabilities");
                last_error = Some(e);
                continue;
            }
        };

        if !caps.capabilities.contains(v4l::capability::Flags::VIDEO_CAPTURE) {
            continue;
        }

        let name = node.name().unwrap_or_else(|| caps.card.clone());
        let facing = CameraDevice::classify_facing(&name);
        info!(name = %name, path = %path, facing = %facing, "Found camera");

        devices.push(CameraDevice { name, path, facing });
    }

    if devices.is_empty() {
        return Err(match last_error {
            Some(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                CameraError::AccessDenied(e.to_string())
            }
            Some(e) => CameraError::InitializationFailed(e.to_string()),
            None => CameraError::NoCameraFound,
        });
    }

    devices.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(devices)
}

/// Blocking preview loop: stream frames from the device into `tx` until the
/// channel is closed or the device fails.
pub fn preview_loop(
    path: &str,
    mirror: bool,
    mut tx: mpsc::Sender<CameraFrame>,
) -> Result<(), CameraError> {
    let dev = v4l::Device::with_path(path)
        .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

    let fmt = negotiate_format(&dev)?;
    info!(
        path,
        width = fmt.width,
        height = fmt.height,
        fourcc = %fmt.fourcc,
        "Preview stream starting"
    );

    let mut stream = Stream::with_buffers(&dev, Type::VideoCapture, BUFFER_COUNT)
        .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

    loop {
        if tx.is_closed() {
            info!(path, "Preview channel closed, stopping stream");
            return Ok(());
        }

        let (buf, meta) = stream
            .next()
            .map_err(|e| CameraError::StreamError(e.to_string()))?;

        let used = meta.bytesused as usize;
        let bytes = if used > 0 && used <= buf.len() {
            &buf[..used]
        } else {
            buf
        };

        let Some((mut rgba, width, height)) = decode_frame(bytes, &fmt) else {
            warn!(path, "Dropping frame that failed to decode");
            continue;
        };

        if mirror {
            convert::mirror_rows(&mut rgba, width);
        }

        match tx.try_send(CameraFrame::new(rgba, width, height)) {
            Ok(()) => {}
            Err(e) if e.is_disconnected() => return Ok(()),
            // Channel full: drop the frame, the preview only wants the latest
            Err(_) => {}
        }
    }
}

/// Negotiate a pixel format the converter understands: MJPEG preferred,
/// YUYV as fallback.
fn negotiate_format(dev: &v4l::Device) -> Result<v4l::Format, CameraError> {
    let mut fmt = dev
        .format()
        .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

    fmt.width = PREFERRED_WIDTH;
    fmt.height = PREFERRED_HEIGHT;
    fmt.fourcc = FourCC::new(b"MJPG");
    let fmt = dev
        .set_format(&fmt)
        .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;
    if fmt.fourcc == FourCC::new(b"MJPG") {
        return Ok(fmt);
    }

    let mut fallback = fmt;
    fallback.width = FALLBACK_WIDTH;
    fallback.height = FALLBACK_HEIGHT;
    fallback.fourcc = FourCC::new(b"YUYV");
    let fmt = dev
        .set_format(&fallback)
        .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;
    if fmt.fourcc == FourCC::new(b"YUYV") {
        return Ok(fmt);
    }

    Err(CameraError::UnsupportedFormat(fmt.fourcc.to_string()))
}

fn decode_frame(bytes: &[u8], fmt: &v4l::Format) -> Option<(Vec<u8>, u32, u32)> {
    if fmt.fourcc == FourCC::new(b"MJPG") {
        convert::mjpeg_to_rgba(bytes)
    } else {
        let expected = (fmt.width * fmt.height * 2) as usize;
        if bytes.len() < expected {
            return None;
        }
        Some((
            convert::yuyv_to_rgba(&bytes[..expected], fmt.width, fmt.height),
            fmt.width,
            fmt.height,
        ))
    }
}
