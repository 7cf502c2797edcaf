use image::GrayImage;
use imageproc::filter::box_filter;

use crate::error::Result;
use crate::frame::Frame;

/// Single-channel working copy of a frame.
pub fn to_grayscale(frame: &Frame) -> Result<GrayImage> {
    frame.to_gray_image()
}

/// Grayscale copy scaled by `factor` with linear interpolation.
pub fn downscale(frame: &Frame, factor: f64) -> Result<GrayImage> {
    frame.to_gray()?.resize_by_scale(factor)?.to_gray_image()
}

/// Mean over a `(2 * radius + 1)` square window.
pub fn apply_box_blur(img: &GrayImage, radius: u32) -> GrayImage {
    box_filter(img, radius, radius)
}
