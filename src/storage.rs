// SPDX-License-Identifier: GPL-3.0-only

//! Photo library access
//!
//! The pictures directory is the source of truth for captured photos. This
//! module probes write access, finds the most recent photo, loads thumbnail
//! handles for the gallery button, and persists captured frames as JPEG.

use crate::backends::camera::CameraFrame;
use crate::errors::PhotoError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// JPEG quality used when persisting captured frames
const JPEG_QUALITY: u8 = 90;

/// A resolved reference to the most recent photo, shown on the gallery button
#[derive(Debug, Clone)]
pub struct RecentThumbnail {
    /// Local file reference of the photo
    pub path: PathBuf,
    /// Decoded image handle for rendering
    pub handle: cosmic::widget::image::Handle,
}

/// Get the photo save directory (`<pictures>/<folder_name>`)
pub fn photo_directory(folder_name: &str) -> PathBuf {
    let pictures = dirs::picture_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home).join("Pictures")
    });
    pictures.join(folder_name)
}

/// Probe library access: the directory must exist (or be creatable) and be writable.
pub async fn request_access(dir: PathBuf) -> bool {
    tokio::task::spawn_blocking(move || ensure_writable(&dir))
        .await
        .unwrap_or(false)
}

fn ensure_writable(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    std::fs::metadata(dir)
        .map(|meta| meta.is_dir() && !meta.permissions().readonly())
        .unwrap_or(false)
}

/// Find the most recently modified photo in the library directory.
///
/// Only JPEG and PNG files are considered. Returns `None` for an empty or
/// unreadable directory.
pub fn latest_photo(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;

    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension() else {
            continue;
        };
        let ext = ext.to_string_lossy();
        if !(ext.eq_ignore_ascii_case("jpg")
            || ext.eq_ignore_ascii_case("jpeg")
            || ext.eq_ignore_ascii_case("png"))
        {
            continue;
        }

        let Ok(modified) = entry.metadata().and_then(|meta| meta.modified()) else {
            continue;
        };
        match &newest {
            Some((time, _)) if modified <= *time => {}
            _ => newest = Some((modified, path)),
        }
    }

    newest.map(|(_, path)| path)
}

/// Load the latest photo in the library as a gallery thumbnail
pub async fn load_latest_thumbnail(dir: PathBuf) -> Option<RecentThumbnail> {
    let path = tokio::task::spawn_blocking(move || latest_photo(&dir))
        .await
        .ok()??;
    load_thumbnail(path).await
}

/// Load a specific image file as a gallery thumbnail
///
/// Files the image decoder cannot parse resolve to `None`.
pub async fn load_thumbnail(path: PathBuf) -> Option<RecentThumbnail> {
    debug!(path = ?path, "Loading thumbnail");

    let bytes = tokio::fs::read(&path).await.ok()?;
    let bytes = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes).ok().map(|_| bytes)
    })
    .await
    .ok()??;

    let handle = cosmic::widget::image::Handle::from_bytes(bytes);
    Some(RecentThumbnail { path, handle })
}

/// Persist a captured frame into the library as a timestamped JPEG
pub async fn save_photo(frame: Arc<CameraFrame>, dir: PathBuf) -> Result<PathBuf, PhotoError> {
    tokio::task::spawn_blocking(move || {
        std::fs::create_dir_all(&dir)?;

        let name = format!(
            "photo_{}.jpg",
            chrono::Local::now().format("%Y%m%d_%H%M%S_%3f")
        );
        let path = dir.join(name);

        let rgba = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| {
                PhotoError::EncodingFailed("frame buffer does not match its dimensions".into())
            })?;
        let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

        let file = std::fs::File::create(&path)?;
        let mut writer = std::io::BufWriter::new(file);
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
        rgb.write_with_encoder(encoder)
            .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;

        info!(path = %path.display(), "Photo saved");
        Ok(path)
    })
    .await
    .map_err(|e| PhotoError::SaveFailed(e.to_string()))?
}
