//! Leaf image type, decoding and canonical resampling

use crate::FrameError;
use image::imageops::FilterType;
use image::{GrayImage, Luma, RgbImage};
use tracing::debug;

/// Side length of the canonical frame all features are computed on
pub const CANONICAL_SIZE: u32 = 128;

/// Interpolation used for the canonical resample
pub const CANONICAL_FILTER: FilterType = FilterType::Triangle;

/// Decoded RGB leaf photograph
///
/// Always non-empty. Feature extraction only ever borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafImage {
    pixels: RgbImage,
}

impl LeafImage {
    /// Decode an encoded image (PNG, JPEG, BMP, ...) into RGB pixels
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        let decoded = image::load_from_memory(bytes)?;
        debug!(
            "Decoded {}x{} image ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Self::from_rgb(decoded.to_rgb8())
    }

    /// Wrap an already decoded RGB buffer
    pub fn from_rgb(pixels: RgbImage) -> Result<Self, FrameError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(FrameError::Empty);
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Resample to the canonical 128x128 frame using bilinear interpolation
    pub fn canonical_frame(&self) -> RgbImage {
        image::imageops::resize(&self.pixels, CANONICAL_SIZE, CANONICAL_SIZE, CANONICAL_FILTER)
    }
}

/// Convert an RGB frame to luminance
pub fn to_grayscale(frame: &RgbImage) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        let [r, g, b] = frame.get_pixel(x, y).0;
        // Luminance formula: 0.299*R + 0.587*G + 0.114*B
        let luma = r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114;
        Luma([luma.round().clamp(0.0, 255.0) as u8])
    })
}
