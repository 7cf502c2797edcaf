// Harris corner map.
//
//   1. 5x5 Sobel derivatives Ix, Iy (reflect-101 borders)
//   2. Structure tensor sums of Ix², Ix·Iy, Iy² over a 2x2 block
//   3. R = det(M) - k·trace(M)²
//   4. Min-max normalise R into [0, 255] and mark strong responses

use image::{GrayImage, Luma};
use tracing::debug;

use super::drawing::draw_circle_outline_mut;
use super::preprocessing;
use crate::convolution::saturate_u8;
use crate::error::Result;
use crate::frame::Frame;

/// Input is downscaled to a quarter of each side before analysis.
pub const CORNER_SCALE: f64 = 0.25;
pub const HARRIS_BLOCK_SIZE: usize = 2;
pub const HARRIS_APERTURE: usize = 5;
pub const HARRIS_K: f32 = 0.04;
/// Normalised responses above this value get a marker.
pub const CORNER_THRESHOLD: f32 = 140.0;
pub const CORNER_MARK_RADIUS: i32 = 5;
pub const CORNER_MARK_THICKNESS: i32 = 2;
pub const CORNER_MARK_VALUE: u8 = 255;

const SMOOTH_5: [f32; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];
const DERIV_5: [f32; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];

/// Annotated, normalised cornerness map of the quarter-scale input.
///
/// A flat input has a constant response, which normalises to all zeros
/// and gets no markers.
pub fn detect_corners(frame: &Frame) -> Result<Frame> {
    let scaled = preprocessing::downscale(frame, CORNER_SCALE)?;
    let (width, height) = scaled.dimensions();

    let response = harris_response(&scaled, HARRIS_BLOCK_SIZE, HARRIS_K);
    let normalized = normalize_min_max(&response, 255.0);

    let mut map = GrayImage::from_fn(width, height, |x, y| {
        Luma([saturate_u8(normalized[(y * width + x) as usize].abs())])
    });

    let mut marked = 0usize;
    for y in 0..height {
        for x in 0..width {
            if normalized[(y * width + x) as usize] > CORNER_THRESHOLD {
                draw_circle_outline_mut(
                    &mut map,
                    (x as i32, y as i32),
                    CORNER_MARK_RADIUS,
                    CORNER_MARK_THICKNESS,
                    CORNER_MARK_VALUE,
                );
                marked += 1;
            }
        }
    }
    debug!(width, height, marked, "harris corners marked");

    Ok(Frame::from_gray(map))
}

/// Per-pixel Harris response, row-major, same size as `image`.
pub fn harris_response(image: &GrayImage, block_size: usize, k: f32) -> Vec<f32> {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let src: Vec<f32> = image.as_raw().iter().map(|&v| v as f32).collect();

    let scale = 1.0 / ((1usize << (HARRIS_APERTURE - 1)) as f32 * block_size as f32 * 255.0);
    let ix = separable_5(&src, w, h, &DERIV_5, &SMOOTH_5);
    let iy = separable_5(&src, w, h, &SMOOTH_5, &DERIV_5);

    let mut xx = Vec::with_capacity(w * h);
    let mut xy = Vec::with_capacity(w * h);
    let mut yy = Vec::with_capacity(w * h);
    for (&dx, &dy) in ix.iter().zip(&iy) {
        let (dx, dy) = (dx * scale, dy * scale);
        xx.push(dx * dx);
        xy.push(dx * dy);
        yy.push(dy * dy);
    }

    let a = block_sum(&xx, w, h, block_size);
    let b = block_sum(&xy, w, h, block_size);
    let c = block_sum(&yy, w, h, block_size);

    a.iter()
        .zip(&b)
        .zip(&c)
        .map(|((&a, &b), &c)| {
            let trace = a + c;
            a * c - b * b - k * trace * trace
        })
        .collect()
}

/// Linear rescale so the minimum maps to 0 and the maximum to `upper`.
/// A constant input maps to all zeros.
pub fn normalize_min_max(values: &[f32], upper: f32) -> Vec<f32> {
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    let scale = if range > f32::EPSILON { upper / range } else { 0.0 };
    values.iter().map(|&v| (v - min) * scale).collect()
}

/// Correlate with `row_kernel` horizontally, then `col_kernel` vertically.
fn separable_5(
    src: &[f32],
    w: usize,
    h: usize,
    row_kernel: &[f32; 5],
    col_kernel: &[f32; 5],
) -> Vec<f32> {
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            tmp[y * w + x] = row_kernel
                .iter()
                .enumerate()
                .map(|(i, &kv)| kv * src[y * w + reflect101(x as isize + i as isize - 2, w)])
                .sum();
        }
    }

    let mut out = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            out[y * w + x] = col_kernel
                .iter()
                .enumerate()
                .map(|(i, &kv)| kv * tmp[reflect101(y as isize + i as isize - 2, h) * w + x])
                .sum();
        }
    }
    out
}

/// Unnormalised box sum over a `block` square anchored at `block / 2`.
fn block_sum(src: &[f32], w: usize, h: usize, block: usize) -> Vec<f32> {
    let anchor = (block / 2) as isize;
    let mut out = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0;
            for dy in 0..block as isize {
                let sy = reflect101(y as isize + dy - anchor, h);
                for dx in 0..block as isize {
                    sum += src[sy * w + reflect101(x as isize + dx - anchor, w)];
                }
            }
            out[y * w + x] = sum;
        }
    }
    out
}

/// Mirror an out-of-range index without repeating the edge sample.
fn reflect101(i: isize, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let last = n as isize - 1;
    let mut i = i;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect101_mirrors_without_edge_repeat() {
        assert_eq!(reflect101(-1, 5), 1);
        assert_eq!(reflect101(-2, 5), 2);
        assert_eq!(reflect101(5, 5), 3);
        assert_eq!(reflect101(6, 5), 2);
        assert_eq!(reflect101(-3, 2), 1);
        assert_eq!(reflect101(7, 1), 0);
    }

    #[test]
    fn normalize_constant_input_is_zero() {
        let out = normalize_min_max(&[3.5; 6], 255.0);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn normalize_spans_full_range() {
        let out = normalize_min_max(&[-2.0, 0.0, 2.0], 255.0);
        assert_eq!(out, vec![0.0, 127.5, 255.0]);
    }
}
