use super::{Convolution, saturate_u8};
use crate::error::Result;
use crate::frame::Frame;
use crate::models::Kernel;

/// Full-resolution correlation with zero padding.
///
/// Every pixel is computed, neighbours outside the frame count as 0.
/// Each channel is filtered independently and the output keeps the input's
/// size, channel count and 8-bit depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filter2dConvolution;

impl Convolution for Filter2dConvolution {
    fn apply(&self, frame: &Frame, kernel: &Kernel) -> Result<Frame> {
        let (width, height) = frame.dimensions();
        let channels = frame.channels();
        let mut output = Frame::new(width, height, channels)?;

        for row in 0..height {
            for col in 0..width {
                for channel in 0..channels {
                    let mut sum = 0.0f32;
                    for (m, kernel_row) in kernel.coefficients().iter().enumerate() {
                        let Some(y) = (row + m as u32).checked_sub(1).filter(|&y| y < height)
                        else {
                            continue;
                        };
                        for (n, &coeff) in kernel_row.iter().enumerate() {
                            let Some(x) = (col + n as u32).checked_sub(1).filter(|&x| x < width)
                            else {
                                continue;
                            };
                            sum += frame.sample(y, x, channel)? as f32 * coeff;
                        }
                    }
                    output.set_sample(row, col, channel, saturate_u8(sum))?;
                }
            }
        }

        Ok(output)
    }
}
