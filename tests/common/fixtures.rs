use filterlab::Frame;
use image::{GrayImage, Luma};
use tempfile::NamedTempFile;

/// Grayscale frame where every pixel holds `value`.
pub fn uniform_frame(width: u32, height: u32, value: u8) -> Frame {
    Frame::filled(width, height, 1, value).expect("valid frame")
}

/// Grayscale frame whose intensity is `f(x, y)`.
pub fn frame_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Frame {
    Frame::from_gray(GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)])))
}

/// Intensity rises by `step` per column, constant down each column.
pub fn horizontal_ramp(width: u32, height: u32, step: u32) -> Frame {
    frame_from_fn(width, height, |x, _| (x * step).min(255) as u8)
}

/// Black frame with a white axis-aligned square in the middle third.
pub fn white_square(size: u32) -> Frame {
    let (lo, hi) = (size / 3, 2 * size / 3);
    frame_from_fn(size, size, |x, y| {
        if (lo..hi).contains(&x) && (lo..hi).contains(&y) { 255 } else { 0 }
    })
}

/// Black image with a filled white disk.
pub fn white_disk(size: u32, cx: f32, cy: f32, radius: f32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as f32 - cx, y as f32 - cy);
        if dx * dx + dy * dy <= radius * radius { Luma([255]) } else { Luma([0]) }
    })
}

/// Writes a 100x100 red PNG and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = image::RgbImage::from_fn(100, 100, |_, _| image::Rgb([255u8, 0, 0]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Samples of the pixels at least `margin` away from every edge.
pub fn interior(frame: &Frame, margin: u32) -> Vec<u8> {
    let mut out = Vec::new();
    for row in margin..frame.height().saturating_sub(margin) {
        for col in margin..frame.width().saturating_sub(margin) {
            out.push(frame.sample(row, col, 0).expect("in bounds"));
        }
    }
    out
}

/// Samples on the outermost 1-pixel ring.
pub fn border(frame: &Frame) -> Vec<u8> {
    let (w, h) = frame.dimensions();
    let mut out = Vec::new();
    for row in 0..h {
        for col in 0..w {
            if row == 0 || col == 0 || row == h - 1 || col == w - 1 {
                out.push(frame.sample(row, col, 0).expect("in bounds"));
            }
        }
    }
    out
}
