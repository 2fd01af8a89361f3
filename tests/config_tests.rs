// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use pocketcam::Config;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(
        config.mirror_preview,
        "Mirror preview should be enabled by default"
    );
    assert!(
        !config.save_folder_name.is_empty(),
        "Save folder name should not be empty"
    );
}

#[test]
fn test_config_save_folder_is_relative() {
    // The folder name nests under the pictures directory, so it must not be
    // an absolute path
    let config = Config::default();
    assert!(!config.save_folder_name.starts_with('/'));
}
