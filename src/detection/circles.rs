use image::GrayImage;
use imageproc::edges::canny;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};
use tracing::debug;

use super::drawing::draw_circle_outline_mut;
use super::preprocessing;
use crate::error::Result;
use crate::frame::Frame;

/// Radius of the box blur applied first (a 3x3 window).
pub const CIRCLE_BLUR_RADIUS: u32 = 1;
pub const CIRCLE_SCALE: f64 = 0.5;
pub const CIRCLE_MARK_THICKNESS: i32 = 6;
pub const CIRCLE_MARK_VALUE: u8 = 255;

/// Tuning of the gradient Hough transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoughParams {
    /// Inverse accumulator resolution (1 = image resolution).
    pub dp: f32,
    /// Minimum centre distance is `image height / min_dist_divisor`.
    pub min_dist_divisor: f32,
    /// High Canny threshold; the low one is half of it.
    pub canny_high: f32,
    /// Votes a centre and its radius need to be accepted.
    pub acc_threshold: u32,
    pub min_radius: u32,
    /// 0 means unbounded (the larger image side).
    pub max_radius: u32,
}

impl HoughParams {
    /// Values used by the circle detector.
    pub const DETECTOR: HoughParams = HoughParams {
        dp: 1.0,
        min_dist_divisor: 15.0,
        canny_high: 200.0,
        acc_threshold: 100,
        min_radius: 0,
        max_radius: 0,
    };
}

impl Default for HoughParams {
    fn default() -> Self {
        Self::DETECTOR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Accumulator votes in the 3x3 neighbourhood of the centre.
    pub votes: u32,
}

/// Blur, downscale to half size and outline every detected circle.
///
/// Finding no circles is a normal outcome: the blurred, scaled image is
/// returned without annotations.
pub fn detect_circles(frame: &Frame) -> Result<Frame> {
    let gray = preprocessing::to_grayscale(frame)?;
    let blurred = Frame::from_gray(preprocessing::apply_box_blur(&gray, CIRCLE_BLUR_RADIUS));
    let mut canvas = preprocessing::downscale(&blurred, CIRCLE_SCALE)?;

    let circles = find_circles(&canvas, &HoughParams::DETECTOR);
    debug!(count = circles.len(), "hough circles found");

    for circle in &circles {
        draw_circle_outline_mut(
            &mut canvas,
            (circle.x.round() as i32, circle.y.round() as i32),
            circle.radius.round() as i32,
            CIRCLE_MARK_THICKNESS,
            CIRCLE_MARK_VALUE,
        );
    }

    Ok(Frame::from_gray(canvas))
}

/// Gradient Hough circle transform.
///
/// Every edge pixel votes for centres along its gradient line in both
/// directions. A vote lands in one accumulator cell, but a centre is scored
/// by the votes in its 3x3 neighbourhood, so lines passing a little off
/// the true centre still count. Local maxima of that score above the
/// threshold become candidates, strongest first; each candidate keeps the
/// radius with the highest density of supporting edge pixels if that
/// support also clears the threshold.
pub fn find_circles(image: &GrayImage, params: &HoughParams) -> Vec<Circle> {
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 || params.dp <= 0.0 {
        return Vec::new();
    }

    let edges = canny(image, params.canny_high / 2.0, params.canny_high);
    let gx = horizontal_sobel(image);
    let gy = vertical_sobel(image);

    let idp = 1.0 / params.dp;
    let min_radius = params.min_radius as f32;
    let max_radius = if params.max_radius == 0 {
        width.max(height) as f32
    } else {
        params.max_radius as f32
    };
    let min_dist = (height as f32 / params.min_dist_divisor).max(params.dp);

    // One-cell zero border so every image position can be a local maximum.
    let acc_w = (width as f32 * idp).ceil() as usize + 2;
    let acc_h = (height as f32 * idp).ceil() as usize + 2;
    let mut acc = vec![0u32; acc_w * acc_h];
    let mut edge_points = Vec::new();

    for (x, y, px) in edges.enumerate_pixels() {
        if px[0] == 0 {
            continue;
        }
        let dx = gx.get_pixel(x, y)[0] as f32;
        let dy = gy.get_pixel(x, y)[0] as f32;
        let mag = (dx * dx + dy * dy).sqrt();
        if mag <= f32::EPSILON {
            continue;
        }
        edge_points.push((x as f32, y as f32));

        let (ux, uy) = (dx / mag, dy / mag);
        for sign in [1.0f32, -1.0] {
            let mut r = min_radius.max(1.0);
            while r <= max_radius {
                let ax = ((x as f32 + sign * r * ux) * idp).round() + 1.0;
                let ay = ((y as f32 + sign * r * uy) * idp).round() + 1.0;
                if ax < 1.0 || ay < 1.0 || ax >= (acc_w - 1) as f32 || ay >= (acc_h - 1) as f32 {
                    break;
                }
                acc[ay as usize * acc_w + ax as usize] += 1;
                r += 1.0;
            }
        }
    }

    let score = neighbourhood_sums(&acc, acc_w, acc_h);
    let mut candidates = Vec::new();
    for ay in 1..acc_h - 1 {
        for ax in 1..acc_w - 1 {
            let idx = ay * acc_w + ax;
            let v = score[idx];
            if v > params.acc_threshold
                && v > score[idx - 1]
                && v >= score[idx + 1]
                && v > score[idx - acc_w]
                && v >= score[idx + acc_w]
            {
                candidates.push((ax, ay, v));
            }
        }
    }
    candidates.sort_by(|a, b| b.2.cmp(&a.2));

    let mut circles: Vec<Circle> = Vec::new();
    let mut distances = Vec::with_capacity(edge_points.len());
    for (ax, ay, votes) in candidates {
        let (cx, cy) = vote_centroid(&acc, acc_w, ax, ay, params.dp);
        let too_close = circles.iter().any(|c| {
            let (dx, dy) = (c.x - cx, c.y - cy);
            dx * dx + dy * dy < min_dist * min_dist
        });
        if too_close {
            continue;
        }

        distances.clear();
        distances.extend(edge_points.iter().filter_map(|&(px, py)| {
            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
            (d >= min_radius.max(1.0) && d <= max_radius).then_some(d)
        }));

        if let Some((radius, support)) = best_radius(&distances, params.dp) {
            if support > params.acc_threshold as usize {
                circles.push(Circle {
                    x: cx,
                    y: cy,
                    radius,
                    votes,
                });
            }
        }
    }

    circles
}

/// Sum of each interior cell and its eight neighbours. Border cells stay 0.
fn neighbourhood_sums(acc: &[u32], w: usize, h: usize) -> Vec<u32> {
    let mut out = vec![0u32; acc.len()];
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            out[y * w + x] = (y - 1..=y + 1)
                .flat_map(|ny| (x - 1..=x + 1).map(move |nx| ny * w + nx))
                .map(|i| acc[i])
                .sum();
        }
    }
    out
}

/// Vote-weighted centre of the 3x3 cells around `(ax, ay)`, in image
/// coordinates.
fn vote_centroid(acc: &[u32], w: usize, ax: usize, ay: usize, dp: f32) -> (f32, f32) {
    let (mut sx, mut sy, mut total) = (0.0f32, 0.0f32, 0.0f32);
    for ny in ay - 1..=ay + 1 {
        for nx in ax - 1..=ax + 1 {
            let v = acc[ny * w + nx] as f32;
            sx += (nx - 1) as f32 * v;
            sy += (ny - 1) as f32 * v;
            total += v;
        }
    }
    if total == 0.0 {
        return ((ax - 1) as f32 * dp, (ay - 1) as f32 * dp);
    }
    (sx / total * dp, sy / total * dp)
}

/// Bin distances `bin` wide and score each bin together with its two
/// neighbours. Picks the bin with the most supporting points per unit
/// radius and returns the mean distance of those points and their count.
fn best_radius(distances: &[f32], bin: f32) -> Option<(f32, usize)> {
    let max = distances.iter().copied().fold(0.0f32, f32::max);
    if distances.is_empty() || bin <= 0.0 {
        return None;
    }
    let bins = (max / bin).round() as usize + 2;
    let mut counts = vec![0usize; bins];
    let mut sums = vec![0.0f32; bins];
    for &d in distances {
        let b = (d / bin).round() as usize;
        counts[b] += 1;
        sums[b] += d;
    }

    let mut best: Option<(f32, usize)> = None;
    for b in 1..bins - 1 {
        let count = counts[b - 1] + counts[b] + counts[b + 1];
        if count == 0 {
            continue;
        }
        let radius = (sums[b - 1] + sums[b] + sums[b + 1]) / count as f32;
        let better = match best {
            None => true,
            Some((best_r, best_count)) => count as f32 * best_r > best_count as f32 * radius,
        };
        if better {
            best = Some((radius, count));
        }
    }
    best
}
