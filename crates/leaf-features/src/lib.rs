//! Leaf Feature Engine
//!
//! Turns a decoded leaf photograph into a fixed set of features:
//! - Canonical 128x128 frame (bilinear resample)
//! - Per-channel color mean and standard deviation
//! - Canny edge count on the luminance image
//! - Fraction of rust-colored pixels

pub mod edges;
mod features;
pub mod frame;
pub mod rust_mask;
mod statistics;

pub use edges::{detect_edges, EdgeMap};
pub use features::{Extraction, FeatureExtractor, FeatureRecord};
pub use frame::{to_grayscale, LeafImage, CANONICAL_SIZE};
pub use rust_mask::{is_rust_pixel, RustMask};
pub use statistics::{ChannelStatistics, ChannelTriple};

use thiserror::Error;

/// Number of pixels in the canonical frame
pub const CANONICAL_PIXELS: u32 = CANONICAL_SIZE * CANONICAL_SIZE;

/// Errors while turning bytes or decoded buffers into a [`LeafImage`]
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels")]
    Empty,
}
