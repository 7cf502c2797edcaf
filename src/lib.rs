pub mod capture;
pub mod controller;
pub mod convolution;
pub mod detection;
pub mod error;
pub mod frame;
pub mod kernels;
pub mod models;
pub mod pipeline;

pub use capture::{CaptureSource, FileCapture, StillCapture};
pub use controller::{Event, PipelineController, Stage};
pub use convolution::{Convolution, DirectConvolution, Filter2dConvolution};
pub use error::{LabError, Result};
pub use frame::Frame;
pub use kernels::get_kernel;
pub use models::{Axis, Detector, FilterFamily, Kernel, Strategy};
pub use pipeline::{PipelineStep, Selection};
