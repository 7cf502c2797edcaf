pub mod circles;
pub mod corners;
pub mod drawing;
pub mod edges;
pub mod preprocessing;
pub mod steps;

pub use circles::{Circle, HoughParams, detect_circles, find_circles};
pub use corners::detect_corners;
pub use edges::detect_edges;

use crate::error::Result;
use crate::frame::Frame;
use crate::models::Detector;

/// Run one detector. Detectors are pure: the input is never modified.
pub fn detect(detector: Detector, frame: &Frame) -> Result<Frame> {
    match detector {
        Detector::Edge => detect_edges(frame),
        Detector::Corner => detect_corners(frame),
        Detector::Circle => detect_circles(frame),
    }
}
