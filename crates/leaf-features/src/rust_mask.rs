//! Rust-colored pixel mask
//!
//! A pixel counts as rust when its red intensity exceeds both green and
//! blue by more than [`RUST_MARGIN`] absolute units.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Red dominance margin over green and blue (0-255 scale)
pub const RUST_MARGIN: i16 = 50;

/// Whether a single pixel is rust-colored
pub fn is_rust_pixel(pixel: &Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0.map(i16::from);
    r > g + RUST_MARGIN && r > b + RUST_MARGIN
}

/// Rust pixel mask over a frame
#[derive(Debug, Clone, PartialEq)]
pub struct RustMask {
    /// 255 for rust pixels, 0 otherwise
    pub mask: GrayImage,
    /// Number of rust pixels
    pub count: u32,
    /// Number of pixels examined
    pub total: u32,
}

impl RustMask {
    /// Classify every pixel of the frame
    pub fn compute(frame: &RgbImage) -> Self {
        let mut count = 0u32;
        let mask = GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
            if is_rust_pixel(frame.get_pixel(x, y)) {
                count += 1;
                Luma([255])
            } else {
                Luma([0])
            }
        });
        Self {
            mask,
            count,
            total: frame.width() * frame.height(),
        }
    }

    /// Fraction of rust pixels in [0, 1]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count as f64 / self.total as f64
    }
}
