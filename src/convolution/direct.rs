use tracing::debug;

use super::{Convolution, saturate_u8};
use crate::error::Result;
use crate::frame::Frame;
use crate::models::Kernel;

/// The direct strategy works on a copy scaled to 15% of each side.
pub const DIRECT_SCALE: f64 = 0.15;

/// Textbook nested-loop convolution.
///
/// Runs on a downscaled grayscale copy of the input and only visits pixels
/// whose whole 3x3 neighbourhood lies inside it. The outer 1-pixel ring
/// stays at zero. After the pass the magnitude of each signed sum is
/// saturated into `[0, 255]`, so falling and rising edges both show.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectConvolution;

impl Convolution for DirectConvolution {
    fn apply(&self, frame: &Frame, kernel: &Kernel) -> Result<Frame> {
        let resized = frame.to_gray()?.resize_by_scale(DIRECT_SCALE)?;
        let (width, height) = resized.dimensions();
        debug!(width, height, "direct convolution on downscaled frame");

        let mut sums = vec![0.0f32; width as usize * height as usize];
        if width >= 3 && height >= 3 {
            for i in 1..height - 1 {
                for j in 1..width - 1 {
                    let mut sum = 0.0f32;
                    for m in 0..3u32 {
                        for n in 0..3u32 {
                            let pixel = resized.sample(i + m - 1, j + n - 1, 0)?;
                            sum += pixel as f32 * kernel.get(m as usize, n as usize);
                        }
                    }
                    sums[i as usize * width as usize + j as usize] = sum;
                }
            }
        }

        let data = sums.into_iter().map(|sum| saturate_u8(sum.abs())).collect();
        Frame::from_raw(width, height, 1, data)
    }
}
