// SPDX-License-Identifier: GPL-3.0-only

//! Pixel format conversion for preview frames

/// Decode an MJPEG frame to RGBA. Returns `None` for frames the decoder
/// rejects (truncated buffers are common on some webcams).
pub fn mjpeg_to_rgba(data: &[u8]) -> Option<(Vec<u8>, u32, u32)> {
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Jpeg).ok()?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some((rgba.into_raw(), width, height))
}

/// Convert YUYV (YUV 4:2:2) to RGBA
///
/// YUYV format: Y0 U Y1 V - each 4-byte group encodes 2 pixels.
/// Uses BT.601 coefficients for YUV to RGB conversion.
pub fn yuyv_to_rgba(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    let pixel_count = (width * height) as usize;
    let mut rgba = Vec::with_capacity(pixel_count * 4);

    for chunk in data.chunks_exact(4) {
        let y0 = chunk[0] as f32;
        let u = chunk[1] as f32 - 128.0;
        let y1 = chunk[2] as f32;
        let v = chunk[3] as f32 - 128.0;

        for y in [y0, y1] {
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;

            rgba.push(r);
            rgba.push(g);
            rgba.push(b);
            rgba.push(255);

            if rgba.len() >= pixel_count * 4 {
                break;
            }
        }
    }

    rgba
}

/// Mirror an RGBA buffer horizontally in place (selfie preview)
pub fn mirror_rows(data: &mut [u8], width: u32) {
    let pixels_per_row = width as usize;
    let stride = pixels_per_row * 4;

    for row in data.chunks_exact_mut(stride) {
        for i in 0..pixels_per_row / 2 {
            let j = pixels_per_row - 1 - i;
            for byte in 0..4 {
                row.swap(i * 4 + byte, j * 4 + byte);
            }
        }
    }
}
