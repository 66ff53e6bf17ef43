//! Feature Record Assembly

use crate::edges::{detect_edges, EdgeMap};
use crate::frame::{to_grayscale, LeafImage, CANONICAL_SIZE};
use crate::rust_mask::RustMask;
use crate::statistics::{ChannelStatistics, ChannelTriple};
use image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Features of one leaf image, computed on the canonical frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Per-channel mean intensity
    pub color_mean: ChannelTriple,
    /// Per-channel population standard deviation
    pub color_std_dev: ChannelTriple,
    /// Number of Canny edge pixels
    pub edge_count: u32,
    /// Number of rust-colored pixels
    pub rust_pixel_count: u32,
    /// rust_pixel_count / total pixels, in [0, 1]
    pub rust_ratio: f64,
}

/// Everything produced by one extraction
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Feature summary
    pub features: FeatureRecord,
    /// Canonical 128x128 color frame
    pub resized: RgbImage,
    /// Binary Canny edge mask of the canonical frame
    pub edges: GrayImage,
    /// Binary rust mask of the canonical frame
    pub rust: GrayImage,
}

/// Feature extractor for leaf images
///
/// Stateless; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract features from a decoded image
    pub fn extract(&self, image: &LeafImage) -> Extraction {
        debug!(
            "Extracting features from {}x{} image",
            image.width(),
            image.height()
        );
        self.extract_canonical(image.canonical_frame())
    }

    fn extract_canonical(&self, frame: RgbImage) -> Extraction {
        debug_assert_eq!(frame.dimensions(), (CANONICAL_SIZE, CANONICAL_SIZE));
        let gray = to_grayscale(&frame);
        let stats = ChannelStatistics::compute(&frame);
        let EdgeMap { mask: edges, count: edge_count } = detect_edges(&gray);
        let rust = RustMask::compute(&frame);

        let features = FeatureRecord {
            color_mean: stats.mean,
            color_std_dev: stats.std_dev,
            edge_count,
            rust_pixel_count: rust.count,
            rust_ratio: rust.ratio(),
        };

        debug!(
            mean = ?features.color_mean.to_array(),
            std_dev = ?features.color_std_dev.to_array(),
            edge_count,
            rust_ratio = features.rust_ratio,
            "Features extracted"
        );

        Extraction {
            features,
            resized: frame,
            edges,
            rust: rust.mask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CANONICAL_PIXELS;
    use image::Rgb;
    use proptest::prelude::*;

    /// Leaf-like picture: green disc with a rust spot on a pale background
    fn leaf_scene(size: u32) -> LeafImage {
        let s = size as f64;
        let frame = RgbImage::from_fn(size, size, |x, y| {
            let u = (x as f64 + 0.5) / s;
            let v = (y as f64 + 0.5) / s;
            let leaf = (u - 0.5).powi(2) + (v - 0.5).powi(2) < 0.35f64.powi(2);
            let spot = (u - 0.6).powi(2) + (v - 0.45).powi(2) < 0.08f64.powi(2);
            if spot {
                Rgb([190, 70, 40])
            } else if leaf {
                Rgb([40, (120.0 + 80.0 * v) as u8, 50])
            } else {
                Rgb([250, 250, 245])
            }
        });
        LeafImage::from_rgb(frame).unwrap()
    }

    fn green_stripes() -> LeafImage {
        let frame = RgbImage::from_fn(128, 128, |x, _| {
            if (x / 8) % 2 == 0 {
                Rgb([60, 240, 60])
            } else {
                Rgb([0, 60, 0])
            }
        });
        LeafImage::from_rgb(frame).unwrap()
    }

    #[test]
    fn test_outputs_are_canonical() {
        let extraction = FeatureExtractor::new().extract(&leaf_scene(300));
        assert_eq!(extraction.resized.dimensions(), (128, 128));
        assert_eq!(extraction.edges.dimensions(), (128, 128));
        assert_eq!(extraction.rust.dimensions(), (128, 128));
    }

    #[test]
    fn test_uniform_green() {
        let image = LeafImage::from_rgb(RgbImage::from_pixel(128, 128, Rgb([50, 180, 50]))).unwrap();
        let features = FeatureExtractor::new().extract(&image).features;
        assert_eq!(features.color_mean, ChannelTriple::new(50.0, 180.0, 50.0));
        assert_eq!(features.color_std_dev, ChannelTriple::default());
        assert_eq!(features.edge_count, 0);
        assert_eq!(features.rust_ratio, 0.0);
    }

    #[test]
    fn test_striped_green_has_texture() {
        let features = FeatureExtractor::new().extract(&green_stripes()).features;
        assert_eq!(features.color_mean, ChannelTriple::new(30.0, 150.0, 30.0));
        assert!(features.edge_count > 500, "edge_count = {}", features.edge_count);
        assert_eq!(features.rust_pixel_count, 0);
    }

    #[test]
    fn test_rust_ratio_is_exact() {
        // 32 of 128 columns are rust
        let frame = RgbImage::from_fn(128, 128, |x, _| {
            if x < 32 {
                Rgb([200, 60, 40])
            } else {
                Rgb([60, 160, 60])
            }
        });
        let features = FeatureExtractor::new()
            .extract(&LeafImage::from_rgb(frame).unwrap())
            .features;
        assert_eq!(features.rust_pixel_count, 32 * 128);
        assert_eq!(features.rust_ratio, (32 * 128) as f64 / 16384.0);
        assert_eq!(features.rust_ratio, 0.25);
    }

    #[test]
    fn test_small_source_ratio_uses_canonical_frame() {
        let frame = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                Rgb([220, 40, 40])
            } else {
                Rgb([40, 160, 40])
            }
        });
        let features = FeatureExtractor::new()
            .extract(&LeafImage::from_rgb(frame).unwrap())
            .features;
        assert_eq!(
            features.rust_ratio,
            features.rust_pixel_count as f64 / CANONICAL_PIXELS as f64
        );
        assert!((features.rust_ratio - 0.5).abs() < 0.1);
        assert!(features.rust_pixel_count > 50);
    }

    #[test]
    fn test_moderate_green_bands_have_texture() {
        // Luminance step of 53 between bands; no smoothing before the gradient
        let frame = RgbImage::from_fn(128, 128, |x, _| {
            if (x / 8) % 2 == 0 {
                Rgb([40, 230, 40])
            } else {
                Rgb([40, 140, 40])
            }
        });
        let features = FeatureExtractor::new()
            .extract(&LeafImage::from_rgb(frame).unwrap())
            .features;
        assert_eq!(features.color_mean, ChannelTriple::new(40.0, 185.0, 40.0));
        assert_eq!(features.edge_count, 15 * 128);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let image = leaf_scene(200);
        let extractor = FeatureExtractor::new();
        let first = extractor.extract(&image);
        let second = extractor.extract(&image);
        assert_eq!(first.features, second.features);
        assert_eq!(first.edges, second.edges);
        assert_eq!(first.resized, second.resized);
    }

    #[test]
    fn test_resize_invariance() {
        let extractor = FeatureExtractor::new();
        let small = extractor.extract(&leaf_scene(256)).features;
        let large = extractor.extract(&leaf_scene(512)).features;

        for (a, b) in small
            .color_mean
            .to_array()
            .iter()
            .zip(large.color_mean.to_array().iter())
        {
            assert!((a - b).abs() < 1.5, "mean {a} vs {b}");
        }
        for (a, b) in small
            .color_std_dev
            .to_array()
            .iter()
            .zip(large.color_std_dev.to_array().iter())
        {
            assert!((a - b).abs() < 2.0, "std dev {a} vs {b}");
        }
        assert!((small.rust_ratio - large.rust_ratio).abs() < 0.01);

        let edge_diff = (small.edge_count as i64 - large.edge_count as i64).abs();
        let edge_tolerance = (small.edge_count.max(large.edge_count) as i64 / 5).max(25);
        assert!(
            edge_diff <= edge_tolerance,
            "edges {} vs {}",
            small.edge_count,
            large.edge_count
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_features_within_bounds(
            width in 1u32..64,
            height in 1u32..64,
            seed in any::<u64>(),
        ) {
            let mut state = seed | 1;
            let frame = RgbImage::from_fn(width, height, |_, _| {
                // xorshift noise
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let [r, g, b, ..] = state.to_le_bytes();
                Rgb([r, g, b])
            });
            let image = LeafImage::from_rgb(frame).unwrap();
            let features = FeatureExtractor::new().extract(&image).features;

            prop_assert!((0.0..=1.0).contains(&features.rust_ratio));
            prop_assert_eq!(
                features.rust_ratio,
                features.rust_pixel_count as f64 / CANONICAL_PIXELS as f64
            );
            prop_assert!(features.edge_count <= CANONICAL_PIXELS);
            for v in features.color_mean.to_array() {
                prop_assert!((0.0..=255.0).contains(&v));
            }
            for v in features.color_std_dev.to_array() {
                prop_assert!((0.0..=255.0).contains(&v));
            }
        }
    }
}
