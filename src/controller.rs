use std::fmt;

use tracing::{debug, warn};

use crate::capture::CaptureSource;
use crate::error::{LabError, Result};
use crate::frame::Frame;
use crate::models::{Axis, Detector, FilterFamily, Strategy};
use crate::pipeline::Selection;

/// Where the user is in the capture → configure → result workflow.
///
/// Choices made so far travel inside the variants. The kernel family is
/// chosen while in `CaptureReady`, alongside the detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingCapture,
    CaptureReady,
    ChoosingAxis { family: FilterFamily },
    ChoosingStrategy { family: FilterFamily, axis: Axis },
    ResultShown { selection: Selection },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::AwaitingCapture => f.write_str("awaiting capture"),
            Stage::CaptureReady => f.write_str("capture ready"),
            Stage::ChoosingAxis { family } => write!(f, "choosing axis for {family}"),
            Stage::ChoosingStrategy { family, axis } => {
                write!(f, "choosing strategy for {family} {axis}")
            }
            Stage::ResultShown { selection } => write!(f, "showing {selection}"),
        }
    }
}

/// Commands accepted by the controller.
#[derive(Debug, Clone)]
pub enum Event {
    Capture(Frame),
    ChooseDetector(Detector),
    ChooseKernelFamily(FilterFamily),
    ChooseAxis(Axis),
    ChooseStrategy(Strategy),
    Back,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Capture(_) => "capture",
            Event::ChooseDetector(_) => "chooseDetector",
            Event::ChooseKernelFamily(_) => "chooseKernelFamily",
            Event::ChooseAxis(_) => "chooseAxis",
            Event::ChooseStrategy(_) => "chooseStrategy",
            Event::Back => "back",
        }
    }
}

/// Owns the captured frame and the frame currently on display, and moves
/// between stages only through [`PipelineController::handle`].
#[derive(Debug)]
pub struct PipelineController {
    stage: Stage,
    current: Option<Frame>,
    original: Option<Frame>,
}

impl PipelineController {
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitingCapture,
            current: None,
            original: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current_image(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn original_image(&self) -> Option<&Frame> {
        self.original.as_ref()
    }

    /// Independent copy of the current frame, for display.
    pub fn snapshot(&self) -> Option<Frame> {
        self.current.clone()
    }

    pub fn selected_family(&self) -> Option<FilterFamily> {
        match self.stage {
            Stage::ChoosingAxis { family } | Stage::ChoosingStrategy { family, .. } => Some(family),
            Stage::ResultShown {
                selection: Selection::Kernel { family, .. },
            } => Some(family),
            _ => None,
        }
    }

    pub fn selected_axis(&self) -> Option<Axis> {
        match self.stage {
            Stage::ChoosingStrategy { axis, .. } => Some(axis),
            Stage::ResultShown {
                selection: Selection::Kernel { axis, .. },
            } => Some(axis),
            _ => None,
        }
    }

    /// Apply one event. A rejected event or a failing transform leaves the
    /// controller unchanged.
    pub fn handle(&mut self, event: Event) -> Result<()> {
        let from = self.stage;
        let name = event.name();

        match (from, event) {
            (Stage::AwaitingCapture, Event::Capture(frame)) => {
                let frame = if frame.channels() == 1 {
                    frame
                } else {
                    frame.to_gray()?
                };
                self.original = Some(frame.clone());
                self.current = Some(frame);
                self.stage = Stage::CaptureReady;
            }
            (Stage::CaptureReady, Event::ChooseDetector(detector)) => {
                self.finish(Selection::Detector(detector))?;
            }
            (Stage::CaptureReady, Event::ChooseKernelFamily(family)) => {
                self.stage = if family.needs_axis() {
                    Stage::ChoosingAxis { family }
                } else {
                    Stage::ChoosingStrategy {
                        family,
                        axis: Axis::NotApplicable,
                    }
                };
            }
            (Stage::ChoosingAxis { family }, Event::ChooseAxis(axis))
                if axis != Axis::NotApplicable =>
            {
                self.stage = Stage::ChoosingStrategy { family, axis };
            }
            (Stage::ChoosingStrategy { family, axis }, Event::ChooseStrategy(strategy)) => {
                self.finish(Selection::Kernel {
                    family,
                    axis,
                    strategy,
                })?;
            }
            (Stage::AwaitingCapture, Event::Back) => return Err(self.reject(name)),
            (Stage::CaptureReady, Event::Back) => {
                self.current = None;
                self.original = None;
                self.stage = Stage::AwaitingCapture;
            }
            (_, Event::Back) => {
                self.current = self.original.clone();
                self.stage = Stage::CaptureReady;
            }
            _ => return Err(self.reject(name)),
        }

        debug!(from = %from, to = %self.stage, event = name, "transition");
        Ok(())
    }

    pub fn capture(&mut self, frame: Frame) -> Result<()> {
        self.handle(Event::Capture(frame))
    }

    pub fn choose_detector(&mut self, detector: Detector) -> Result<()> {
        self.handle(Event::ChooseDetector(detector))
    }

    pub fn choose_kernel_family(&mut self, family: FilterFamily) -> Result<()> {
        self.handle(Event::ChooseKernelFamily(family))
    }

    /// Requires a directional family to have been chosen.
    pub fn choose_axis(&mut self, axis: Axis) -> Result<()> {
        self.handle(Event::ChooseAxis(axis))
    }

    pub fn choose_strategy(&mut self, strategy: Strategy) -> Result<()> {
        self.handle(Event::ChooseStrategy(strategy))
    }

    pub fn back(&mut self) -> Result<()> {
        self.handle(Event::Back)
    }

    /// Acquire a frame from `source` and fire `capture` with it.
    pub async fn capture_from<S: CaptureSource>(&mut self, source: &mut S) -> anyhow::Result<()> {
        if self.stage != Stage::AwaitingCapture {
            return Err(self.reject("capture").into());
        }
        let frame = source.capture().await?;
        self.capture(frame)?;
        Ok(())
    }

    fn finish(&mut self, selection: Selection) -> Result<()> {
        let current = self.current.as_ref().ok_or_else(|| {
            LabError::InvalidConfiguration("no frame has been captured".to_string())
        })?;
        let output = selection.run(current)?;
        self.current = Some(output);
        self.stage = Stage::ResultShown { selection };
        Ok(())
    }

    fn reject(&self, event: &str) -> LabError {
        warn!(stage = %self.stage, event, "transition rejected");
        LabError::InvalidConfiguration(format!("{event} is not valid while {}", self.stage))
    }
}

impl Default for PipelineController {
    fn default() -> Self {
        Self::new()
    }
}
