use thiserror::Error;

/// Errors raised by the processing core.
///
/// "No features found" is never an error: detectors return their
/// (possibly unannotated) output image instead.
#[derive(Debug, Error)]
pub enum LabError {
    /// Sample access outside the frame bounds.
    #[error(
        "sample ({row}, {col}, {channel}) out of range for {width}x{height}x{channels} frame"
    )]
    IndexOutOfRange {
        row: u32,
        col: u32,
        channel: u8,
        width: u32,
        height: u32,
        channels: u8,
    },

    /// Caller misuse: undefined kernel combination, bad scale factor or a
    /// controller transition whose preconditions do not hold.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(u8),

    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, LabError>;
