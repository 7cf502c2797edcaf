//! Two independent 3x3 convolution algorithms behind one interface.
//!
//! They differ in resize behaviour, border policy and output size and are
//! not expected to agree pixel-for-pixel.

mod direct;
mod filter2d;

pub use direct::{DIRECT_SCALE, DirectConvolution};
pub use filter2d::Filter2dConvolution;

use crate::error::Result;
use crate::frame::Frame;
use crate::models::{Kernel, Strategy};

/// A way of applying a 3x3 kernel to a frame.
pub trait Convolution: Send + Sync {
    fn apply(&self, frame: &Frame, kernel: &Kernel) -> Result<Frame>;
}

/// The implementation behind a strategy choice.
pub fn for_strategy(strategy: Strategy) -> &'static dyn Convolution {
    match strategy {
        Strategy::Direct => &DirectConvolution,
        Strategy::Filter2d => &Filter2dConvolution,
    }
}

/// Round half to even and clamp into the 8-bit range.
pub(crate) fn saturate_u8(value: f32) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
