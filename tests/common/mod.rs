#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from filterlab for tests
pub use filterlab::{
    Axis, Detector, FilterFamily, Frame, Kernel, LabError, PipelineController, Stage, Strategy,
};
