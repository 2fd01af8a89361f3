// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the camera screen state machine

use pocketcam::storage::RecentThumbnail;
use pocketcam::{CameraDevice, CameraScreen, CaptureMode, Facing, FlashMode, PermissionStatus};
use std::path::PathBuf;

fn thumbnail(path: &str) -> RecentThumbnail {
    RecentThumbnail {
        path: PathBuf::from(path),
        handle: cosmic::widget::image::Handle::from_rgba(1, 1, vec![0u8; 4]),
    }
}

fn device(path: &str, facing: Facing) -> CameraDevice {
    CameraDevice {
        name: format!("Camera {path}"),
        path: path.to_string(),
        facing,
    }
}

#[test]
fn test_facing_starts_at_back() {
    let screen = CameraScreen::new();
    assert_eq!(screen.facing, Facing::Back);
}

#[test]
fn test_facing_toggle_parity() {
    let mut screen = CameraScreen::new();

    for n in 1..=8 {
        screen.flip_facing();
        let expected = if n % 2 == 0 { Facing::Back } else { Facing::Front };
        assert_eq!(screen.facing, expected, "After {n} flips");
    }
}

#[test]
fn test_flash_starts_off() {
    let screen = CameraScreen::new();
    assert_eq!(screen.flash, FlashMode::Off);
}

#[test]
fn test_flash_toggle_parity() {
    let mut screen = CameraScreen::new();

    for n in 1..=7 {
        screen.toggle_flash();
        let expected = if n % 2 == 0 {
            FlashMode::Off
        } else {
            FlashMode::On
        };
        assert_eq!(screen.flash, expected, "After {n} toggles");
    }
}

#[test]
fn test_capture_mode_selection_is_idempotent() {
    let mut screen = CameraScreen::new();
    assert_eq!(screen.capture_mode, CaptureMode::Photo);

    screen.set_capture_mode(CaptureMode::Video);
    screen.set_capture_mode(CaptureMode::Video);
    assert_eq!(screen.capture_mode, CaptureMode::Video);

    screen.set_capture_mode(CaptureMode::Photo);
    assert_eq!(screen.capture_mode, CaptureMode::Photo);
}

#[test]
fn test_permissions_start_unknown() {
    let screen = CameraScreen::new();
    assert_eq!(screen.camera_access, PermissionStatus::Unknown);
    assert_eq!(screen.library_access, PermissionStatus::Unknown);
    assert!(!screen.camera_granted());
    assert!(!screen.library_granted());
}

#[test]
fn test_library_denied_leaves_thumbnail_absent() {
    let mut screen = CameraScreen::new();

    let should_fetch = screen.resolve_library_access(false);

    assert!(!should_fetch, "Denial must not trigger a thumbnail fetch");
    assert_eq!(screen.library_access, PermissionStatus::Denied);
    assert!(screen.recent_thumbnail.is_none());
}

#[test]
fn test_library_granted_triggers_thumbnail_fetch() {
    let mut screen = CameraScreen::new();

    let should_fetch = screen.resolve_library_access(true);

    assert!(should_fetch);
    assert!(screen.library_granted());
}

#[test]
fn test_camera_access_grant_and_denial() {
    let mut screen = CameraScreen::new();

    screen.resolve_camera_access(Ok(vec![device("/dev/video0", Facing::Back)]));
    assert!(screen.camera_granted());
    assert_eq!(screen.devices.len(), 1);
    assert!(screen.camera_denied_reason.is_none());

    // A later failed re-probe flips the gate back to denied with a reason
    screen.resolve_camera_access(Err("device unplugged".to_string()));
    assert_eq!(screen.camera_access, PermissionStatus::Denied);
    assert!(screen.devices.is_empty());
    assert_eq!(
        screen.camera_denied_reason.as_deref(),
        Some("device unplugged")
    );
}

#[test]
fn test_active_device_follows_facing() {
    let mut screen = CameraScreen::new();
    screen.resolve_camera_access(Ok(vec![
        device("/dev/video0", Facing::Back),
        device("/dev/video2", Facing::Front),
    ]));

    assert_eq!(screen.active_device().unwrap().path, "/dev/video0");

    screen.flip_facing();
    assert_eq!(screen.active_device().unwrap().path, "/dev/video2");
}

#[test]
fn test_active_device_falls_back_to_sole_camera() {
    let mut screen = CameraScreen::new();
    screen.resolve_camera_access(Ok(vec![device("/dev/video0", Facing::Back)]));

    screen.flip_facing();

    // Facing toggles, but the only device keeps serving the preview
    assert_eq!(screen.facing, Facing::Front);
    assert_eq!(screen.active_device().unwrap().path, "/dev/video0");
}

#[test]
fn test_thumbnail_absent_until_resolved() {
    let screen = CameraScreen::new();
    assert!(screen.recent_thumbnail.is_none());
}

#[test]
fn test_unresolved_thumbnail_keeps_previous_reference() {
    let mut screen = CameraScreen::new();

    screen.apply_thumbnail(Some(thumbnail("/photos/a.jpg")));
    assert_eq!(
        screen.recent_thumbnail.as_ref().unwrap().path,
        PathBuf::from("/photos/a.jpg")
    );

    // A None resolution (picker cancelled upstream, decode failure, empty
    // library) must not clear the reference
    screen.apply_thumbnail(None);
    assert_eq!(
        screen.recent_thumbnail.as_ref().unwrap().path,
        PathBuf::from("/photos/a.jpg")
    );

    screen.apply_thumbnail(Some(thumbnail("/photos/b.jpg")));
    assert_eq!(
        screen.recent_thumbnail.as_ref().unwrap().path,
        PathBuf::from("/photos/b.jpg")
    );
}

#[test]
fn test_flip_and_flash_do_not_touch_thumbnail() {
    let mut screen = CameraScreen::new();
    screen.apply_thumbnail(Some(thumbnail("/photos/a.jpg")));

    screen.flip_facing();
    screen.toggle_flash();
    screen.set_capture_mode(CaptureMode::Video);

    assert!(screen.recent_thumbnail.is_some());
}
