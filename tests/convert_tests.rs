// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for pixel format conversion

use pocketcam::backends::camera::convert;

#[test]
fn test_yuyv_gray_converts_to_gray() {
    // Y=128, U=V=128 is mid-gray in BT.601
    let yuyv = [128u8, 128, 128, 128];
    let rgba = convert::yuyv_to_rgba(&yuyv, 2, 1);

    assert_eq!(rgba.len(), 8);
    for pixel in rgba.chunks_exact(4) {
        assert_eq!(pixel[0], 128);
        assert_eq!(pixel[1], 128);
        assert_eq!(pixel[2], 128);
        assert_eq!(pixel[3], 255);
    }
}

#[test]
fn test_yuyv_output_is_opaque_and_sized() {
    let width = 4u32;
    let height = 2u32;
    let yuyv = vec![90u8; (width * height * 2) as usize];

    let rgba = convert::yuyv_to_rgba(&yuyv, width, height);

    assert_eq!(rgba.len(), (width * height * 4) as usize);
    assert!(rgba.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn test_mjpeg_roundtrip_preserves_dimensions() {
    // Encode a known image to JPEG, then decode through the converter
    let src = image::RgbImage::from_pixel(6, 4, image::Rgb([255, 0, 0]));
    let mut jpeg = Vec::new();
    src.write_with_encoder(image::codecs::jpeg::JpegEncoder::new_with_quality(
        &mut std::io::Cursor::new(&mut jpeg),
        90,
    ))
    .unwrap();

    let (rgba, width, height) = convert::mjpeg_to_rgba(&jpeg).expect("valid JPEG should decode");
    assert_eq!((width, height), (6, 4));
    assert_eq!(rgba.len(), 6 * 4 * 4);
}

#[test]
fn test_mjpeg_rejects_garbage() {
    assert!(convert::mjpeg_to_rgba(b"not a jpeg frame").is_none());
}

#[test]
fn test_mirror_rows_swaps_pixels() {
    // Two pixels per row: red, blue
    #[rustfmt::skip]
    let mut data = vec![
        255, 0, 0, 255,   0, 0, 255, 255,
        255, 0, 0, 255,   0, 0, 255, 255,
    ];

    convert::mirror_rows(&mut data, 2);

    assert_eq!(&data[0..4], &[0, 0, 255, 255]);
    assert_eq!(&data[4..8], &[255, 0, 0, 255]);
    assert_eq!(&data[8..12], &[0, 0, 255, 255]);
}

#[test]
fn test_mirror_rows_twice_is_identity() {
    let original: Vec<u8> = (0u8..48).collect();
    let mut data = original.clone();

    convert::mirror_rows(&mut data, 3);
    convert::mirror_rows(&mut data, 3);

    assert_eq!(data, original);
}
