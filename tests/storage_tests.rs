// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the photo library module

use image::GenericImageView;
use pocketcam::CameraFrame;
use pocketcam::storage;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

/// A small solid-color RGBA frame
fn test_frame(width: u32, height: u32) -> CameraFrame {
    CameraFrame::new(vec![200u8; (width * height * 4) as usize], width, height)
}

fn backdate(path: &Path, seconds: u64) {
    let file = std::fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(seconds))
        .unwrap();
}

#[test]
fn test_latest_photo_empty_dir() {
    let dir = tempdir().unwrap();
    assert!(storage::latest_photo(dir.path()).is_none());
}

#[test]
fn test_latest_photo_missing_dir() {
    assert!(storage::latest_photo(Path::new("/nonexistent/pocketcam-test")).is_none());
}

#[test]
fn test_latest_photo_picks_newest_image() {
    let dir = tempdir().unwrap();

    let older = dir.path().join("older.jpg");
    let newer = dir.path().join("newer.png");
    let ignored = dir.path().join("notes.txt");
    std::fs::write(&older, b"jpeg bytes").unwrap();
    std::fs::write(&newer, b"png bytes").unwrap();
    std::fs::write(&ignored, b"not a photo").unwrap();
    backdate(&older, 60);

    assert_eq!(storage::latest_photo(dir.path()), Some(newer));
}

#[test]
fn test_latest_photo_ignores_non_image_extensions() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("movie.mp4"), b"video").unwrap();
    std::fs::write(dir.path().join("readme.md"), b"text").unwrap();

    assert!(storage::latest_photo(dir.path()).is_none());
}

#[tokio::test]
async fn test_request_access_grants_creatable_dir() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("photos").join("pocketcam");

    assert!(storage::request_access(nested.clone()).await);
    assert!(nested.is_dir());
}

#[tokio::test]
async fn test_request_access_denies_file_path() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("occupied");
    std::fs::write(&file, b"something").unwrap();

    assert!(!storage::request_access(file).await);
}

#[tokio::test]
async fn test_save_photo_writes_decodable_jpeg() {
    let dir = tempdir().unwrap();

    let path = storage::save_photo(Arc::new(test_frame(4, 4)), dir.path().to_path_buf())
        .await
        .unwrap();

    assert_eq!(path.extension().unwrap(), "jpg");
    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.dimensions(), (4, 4));
}

#[tokio::test]
async fn test_save_photo_rejects_mismatched_buffer() {
    let dir = tempdir().unwrap();
    // Buffer is one pixel short of the declared 2x2 size
    let frame = CameraFrame::new(vec![0u8; 12], 2, 2);

    let result = storage::save_photo(Arc::new(frame), dir.path().to_path_buf()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_capture_then_latest_resolves_new_photo() {
    let dir = tempdir().unwrap();

    // Pre-existing library content, backdated so the capture is newest
    let existing = dir.path().join("existing.jpg");
    std::fs::write(&existing, b"old").unwrap();
    backdate(&existing, 60);

    let saved = storage::save_photo(Arc::new(test_frame(2, 2)), dir.path().to_path_buf())
        .await
        .unwrap();

    let thumbnail = storage::load_latest_thumbnail(dir.path().to_path_buf())
        .await
        .expect("freshly captured photo should resolve");
    assert_eq!(thumbnail.path, saved);
}

#[tokio::test]
async fn test_load_latest_thumbnail_resolves_existing_photo() {
    let dir = tempdir().unwrap();

    // A real decodable photo already in the library at mount time
    let path = dir.path().join("existing.png");
    image::RgbaImage::from_pixel(3, 3, image::Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();

    let thumbnail = storage::load_latest_thumbnail(dir.path().to_path_buf())
        .await
        .expect("existing photo should resolve");
    assert_eq!(thumbnail.path, path);
}

#[tokio::test]
async fn test_load_thumbnail_rejects_non_image() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    assert!(storage::load_thumbnail(path).await.is_none());
}
