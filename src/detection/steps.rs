use crate::convolution;
use crate::detection;
use crate::error::Result;
use crate::frame::Frame;
use crate::models::{Detector, Kernel, Strategy};
use crate::pipeline::PipelineStep;

/// Canny edge map
pub struct EdgeDetectionStep;

impl PipelineStep for EdgeDetectionStep {
    fn process(&self, frame: &Frame) -> Result<Frame> {
        detection::detect(Detector::Edge, frame)
    }

    fn name(&self) -> &str {
        "Edge Detection"
    }
}

/// Harris cornerness map with marked corners
pub struct CornerDetectionStep;

impl PipelineStep for CornerDetectionStep {
    fn process(&self, frame: &Frame) -> Result<Frame> {
        detection::detect(Detector::Corner, frame)
    }

    fn name(&self) -> &str {
        "Corner Detection"
    }
}

/// Hough circles drawn onto the blurred half-size image
pub struct CircleDetectionStep;

impl PipelineStep for CircleDetectionStep {
    fn process(&self, frame: &Frame) -> Result<Frame> {
        detection::detect(Detector::Circle, frame)
    }

    fn name(&self) -> &str {
        "Circle Detection"
    }
}

/// Convolve with a fixed kernel using one of the two strategies
pub struct KernelFilterStep {
    pub strategy: Strategy,
    pub kernel: Kernel,
}

impl PipelineStep for KernelFilterStep {
    fn process(&self, frame: &Frame) -> Result<Frame> {
        convolution::for_strategy(self.strategy).apply(frame, &self.kernel)
    }

    fn name(&self) -> &str {
        match self.strategy {
            Strategy::Direct => "Direct Convolution",
            Strategy::Filter2d => "Filter2D Convolution",
        }
    }
}
