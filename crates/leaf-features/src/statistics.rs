//! Per-channel color statistics

use image::RgbImage;
use serde::{Deserialize, Serialize};

/// One value per color channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelTriple {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelTriple {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Values in R, G, B order
    pub fn to_array(self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[f64; 3]> for ChannelTriple {
    fn from([red, green, blue]: [f64; 3]) -> Self {
        Self { red, green, blue }
    }
}

/// Mean and population standard deviation of each channel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelStatistics {
    /// Mean intensity
    pub mean: ChannelTriple,
    /// Population standard deviation
    pub std_dev: ChannelTriple,
}

impl ChannelStatistics {
    /// Compute statistics over every pixel of the frame
    pub fn compute(frame: &RgbImage) -> Self {
        let n = (frame.width() as u64 * frame.height() as u64) as f64;
        if n == 0.0 {
            return Self::default();
        }

        // Mean
        let mut sums = [0u64; 3];
        for pixel in frame.pixels() {
            for (sum, &v) in sums.iter_mut().zip(pixel.0.iter()) {
                *sum += v as u64;
            }
        }
        let mean = sums.map(|s| s as f64 / n);

        // Variance (second pass around the mean)
        let mut m2 = [0.0f64; 3];
        for pixel in frame.pixels() {
            for c in 0..3 {
                let d = pixel.0[c] as f64 - mean[c];
                m2[c] += d * d;
            }
        }
        let std_dev = m2.map(|m| (m / n).sqrt());

        Self {
            mean: mean.into(),
            std_dev: std_dev.into(),
        }
    }
}
