use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbImage};

use crate::error::{LabError, Result};

/// Owned 8-bit pixel matrix, row-major, one sample per channel per pixel.
///
/// Single-channel frames hold intensity; three-channel frames hold BGR.
/// `data.len() == width * height * channels` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl Frame {
    /// Create a zero-filled frame.
    pub fn new(width: u32, height: u32, channels: u8) -> Result<Self> {
        check_channels(channels)?;
        let len = width as usize * height as usize * channels as usize;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0; len],
        })
    }

    /// Create a frame where every sample holds `value`.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Result<Self> {
        let mut frame = Self::new(width, height, channels)?;
        frame.data.fill(value);
        Ok(frame)
    }

    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        check_channels(channels)?;
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(LabError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn from_gray(image: GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: 1,
            data: image.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn sample(&self, row: u32, col: u32, channel: u8) -> Result<u8> {
        let idx = self.index(row, col, channel)?;
        Ok(self.data[idx])
    }

    pub fn set_sample(&mut self, row: u32, col: u32, channel: u8, value: u8) -> Result<()> {
        let idx = self.index(row, col, channel)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Resample to `round(width * factor) x round(height * factor)` using
    /// linear interpolation. Each dimension is at least 1.
    pub fn resize_by_scale(&self, factor: f64) -> Result<Frame> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(LabError::InvalidConfiguration(format!(
                "scale factor must be finite and positive, got {factor}"
            )));
        }
        let new_width = scaled_dimension(self.width, factor);
        let new_height = scaled_dimension(self.height, factor);
        if (new_width, new_height) == (self.width, self.height) {
            return Ok(self.clone());
        }

        let data = match self.channels {
            1 => {
                let src = GrayImage::from_raw(self.width, self.height, self.data.clone())
                    .ok_or_else(|| self.size_mismatch())?;
                imageops::resize(&src, new_width, new_height, FilterType::Triangle).into_raw()
            }
            3 => {
                let src = RgbImage::from_raw(self.width, self.height, self.data.clone())
                    .ok_or_else(|| self.size_mismatch())?;
                imageops::resize(&src, new_width, new_height, FilterType::Triangle).into_raw()
            }
            other => return Err(LabError::UnsupportedChannels(other)),
        };

        Frame::from_raw(new_width, new_height, self.channels, data)
    }

    /// Copy out the `width x height` area whose top-left pixel is `(x, y)`.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Frame> {
        let fits = x.checked_add(width).is_some_and(|r| r <= self.width)
            && y.checked_add(height).is_some_and(|b| b <= self.height);
        if !fits {
            return Err(LabError::IndexOutOfRange {
                row: y.saturating_add(height),
                col: x.saturating_add(width),
                channel: 0,
                width: self.width,
                height: self.height,
                channels: self.channels,
            });
        }

        let stride = self.width as usize * self.channels as usize;
        let span = width as usize * self.channels as usize;
        let mut data = Vec::with_capacity(span * height as usize);
        for row in y..y + height {
            let start = row as usize * stride + x as usize * self.channels as usize;
            data.extend_from_slice(&self.data[start..start + span]);
        }
        Frame::from_raw(width, height, self.channels, data)
    }

    /// Single-channel luminance copy of this frame.
    pub fn to_gray(&self) -> Result<Frame> {
        Ok(Frame::from_gray(self.to_gray_image()?))
    }

    pub fn to_gray_image(&self) -> Result<GrayImage> {
        match self.channels {
            1 => GrayImage::from_raw(self.width, self.height, self.data.clone())
                .ok_or_else(|| self.size_mismatch()),
            3 => Ok(DynamicImage::ImageRgb8(self.to_rgb_image()?).to_luma8()),
            other => Err(LabError::UnsupportedChannels(other)),
        }
    }

    /// Convert for display or encoding; BGR frames become RGB.
    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        match self.channels {
            1 => Ok(DynamicImage::ImageLuma8(self.to_gray_image()?)),
            3 => Ok(DynamicImage::ImageRgb8(self.to_rgb_image()?)),
            other => Err(LabError::UnsupportedChannels(other)),
        }
    }

    fn to_rgb_image(&self) -> Result<RgbImage> {
        let mut rgb = self.data.clone();
        for px in rgb.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        RgbImage::from_raw(self.width, self.height, rgb).ok_or_else(|| self.size_mismatch())
    }

    fn index(&self, row: u32, col: u32, channel: u8) -> Result<usize> {
        if row >= self.height || col >= self.width || channel >= self.channels {
            return Err(LabError::IndexOutOfRange {
                row,
                col,
                channel,
                width: self.width,
                height: self.height,
                channels: self.channels,
            });
        }
        Ok((row as usize * self.width as usize + col as usize) * self.channels as usize
            + channel as usize)
    }

    fn size_mismatch(&self) -> LabError {
        LabError::BufferSizeMismatch {
            expected: self.width as usize * self.height as usize * self.channels as usize,
            actual: self.data.len(),
        }
    }
}

fn check_channels(channels: u8) -> Result<()> {
    match channels {
        1 | 3 => Ok(()),
        other => Err(LabError::UnsupportedChannels(other)),
    }
}

fn scaled_dimension(dim: u32, factor: f64) -> u32 {
    ((dim as f64 * factor).round() as u32).max(1)
}
