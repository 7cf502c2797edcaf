use imageproc::edges::canny;

use super::preprocessing;
use crate::error::Result;
use crate::frame::Frame;

pub const CANNY_LOW_THRESHOLD: f32 = 50.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 150.0;

/// Binary edge map (0 or 255) of the full-resolution input.
pub fn detect_edges(frame: &Frame) -> Result<Frame> {
    let gray = preprocessing::to_grayscale(frame)?;
    let edges = canny(&gray, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);
    Ok(Frame::from_gray(edges))
}
