use std::fmt;
use std::time::Instant;

use tracing::{debug, info};

use crate::detection::steps::{
    CircleDetectionStep, CornerDetectionStep, EdgeDetectionStep, KernelFilterStep,
};
use crate::error::Result;
use crate::frame::Frame;
use crate::kernels;
use crate::models::{Axis, Detector, FilterFamily, Strategy};

/// Trait that all processing steps implement
pub trait PipelineStep: Send + Sync {
    /// Produce a new frame from `frame`; the input is left untouched.
    fn process(&self, frame: &Frame) -> Result<Frame>;

    /// Human-readable name for this step (used in logs and debug output)
    fn name(&self) -> &str;
}

/// A terminal configuration: everything needed to pick one transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Detector(Detector),
    Kernel {
        family: FilterFamily,
        axis: Axis,
        strategy: Strategy,
    },
}

impl Selection {
    /// Compose the step this selection stands for.
    pub fn build(&self) -> Result<Box<dyn PipelineStep>> {
        let step: Box<dyn PipelineStep> = match *self {
            Selection::Detector(Detector::Edge) => Box::new(EdgeDetectionStep),
            Selection::Detector(Detector::Corner) => Box::new(CornerDetectionStep),
            Selection::Detector(Detector::Circle) => Box::new(CircleDetectionStep),
            Selection::Kernel {
                family,
                axis,
                strategy,
            } => Box::new(KernelFilterStep {
                strategy,
                kernel: kernels::get_kernel(Some(family), axis)?,
            }),
        };
        Ok(step)
    }

    /// Build the step and run it on `frame`.
    pub fn run(&self, frame: &Frame) -> Result<Frame> {
        let step = self.build()?;
        debug!(step = step.name(), width = frame.width(), height = frame.height(), "running step");

        let started = Instant::now();
        let output = step.process(frame)?;
        info!(
            step = step.name(),
            width = output.width(),
            height = output.height(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "step finished"
        );
        Ok(output)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Detector(detector) => write!(f, "{detector}"),
            Selection::Kernel {
                family: FilterFamily::Laplacian,
                strategy,
                ..
            } => write!(f, "Laplacian ({strategy})"),
            Selection::Kernel {
                family,
                axis,
                strategy,
            } => write!(f, "{family} {axis} ({strategy})"),
        }
    }
}
