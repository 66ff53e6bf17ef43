//! Canny edge detection on the luminance frame
//!
//! Unsmoothed 3x3 Sobel gradients with an L1 magnitude (`|gx| + |gy|`),
//! non-maximum suppression along the quantized gradient direction and
//! 8-connected hysteresis between the two thresholds.

use image::{GrayImage, Luma};
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

/// Canny low (weak edge) threshold
pub const LOW_THRESHOLD: i32 = 100;
/// Canny high (strong edge) threshold
pub const HIGH_THRESHOLD: i32 = 200;

/// Value marking an edge pixel in the mask
pub const EDGE: u8 = 255;

/// tan(22.5 deg) in 15-bit fixed point
const TAN_22_5: i32 = 13573;
/// tan(67.5 deg) = tan(22.5 deg) + 2, in 15-bit fixed point
const TAN_67_5: i32 = TAN_22_5 + (1 << 16);
const SHIFT: u32 = 15;

/// Binary edge mask and its population
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMap {
    /// 255 for edge pixels, 0 otherwise
    pub mask: GrayImage,
    /// Number of edge pixels
    pub count: u32,
}

/// Run the two-threshold Canny detector with the fixed calibration thresholds
pub fn detect_edges(gray: &GrayImage) -> EdgeMap {
    let (width, height) = gray.dimensions();
    let gx = horizontal_sobel(gray);
    let gy = vertical_sobel(gray);

    let magnitude: Vec<i32> = gx
        .pixels()
        .zip(gy.pixels())
        .map(|(x, y)| (x.0[0] as i32).abs() + (y.0[0] as i32).abs())
        .collect();
    let mag = |x: i64, y: i64| -> i32 {
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
            0
        } else {
            magnitude[(y as usize) * width as usize + x as usize]
        }
    };

    // Non-maximum suppression; keep candidates above the low threshold
    let mut candidate = vec![false; magnitude.len()];
    let mut stack = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize;
            let m = magnitude[idx];
            if m <= LOW_THRESHOLD {
                continue;
            }
            let xs = gx.get_pixel(x, y).0[0] as i32;
            let ys = gy.get_pixel(x, y).0[0] as i32;
            let (ax, ay) = (xs.abs(), ys.abs() << SHIFT);
            let (xi, yi) = (x as i64, y as i64);

            let is_max = if ay < ax * TAN_22_5 {
                m > mag(xi - 1, yi) && m >= mag(xi + 1, yi)
            } else if ay > ax * TAN_67_5 {
                m > mag(xi, yi - 1) && m >= mag(xi, yi + 1)
            } else {
                let s = if (xs ^ ys) < 0 { -1 } else { 1 };
                m > mag(xi - s, yi - 1) && m > mag(xi + s, yi + 1)
            };

            if is_max {
                candidate[idx] = true;
                if m > HIGH_THRESHOLD {
                    stack.push((x, y));
                }
            }
        }
    }

    // Hysteresis: grow strong edges through connected candidates
    let mut mask = GrayImage::new(width, height);
    let mut count = 0u32;
    for &(x, y) in &stack {
        if mask.get_pixel(x, y).0[0] != EDGE {
            mask.put_pixel(x, y, Luma([EDGE]));
            count += 1;
        }
    }
    while let Some((x, y)) = stack.pop() {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as u32, ny as u32);
                let idx = (ny * width + nx) as usize;
                if candidate[idx] && mask.get_pixel(nx, ny).0[0] != EDGE {
                    mask.put_pixel(nx, ny, Luma([EDGE]));
                    count += 1;
                    stack.push((nx, ny));
                }
            }
        }
    }

    EdgeMap { mask, count }
}
