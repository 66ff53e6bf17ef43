//! Health labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse leaf health label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthLabel {
    #[serde(rename = "Healthy (Green Leaf)")]
    Healthy,
    #[serde(rename = "Unhealthy (Rusty Leaf)")]
    Rusty,
    #[serde(rename = "Unhealthy (Brown/Rusty Leaf)")]
    Brown,
    #[serde(rename = "Unhealthy (Damaged Leaf)")]
    Damaged,
    #[serde(rename = "Unknown Condition")]
    Unknown,
}

impl HealthLabel {
    /// Every label, in rule order
    pub const ALL: [HealthLabel; 5] = [
        HealthLabel::Rusty,
        HealthLabel::Healthy,
        HealthLabel::Brown,
        HealthLabel::Damaged,
        HealthLabel::Unknown,
    ];

    /// Fixed user-facing text
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Healthy => "Healthy (Green Leaf)",
            HealthLabel::Rusty => "Unhealthy (Rusty Leaf)",
            HealthLabel::Brown => "Unhealthy (Brown/Rusty Leaf)",
            HealthLabel::Damaged => "Unhealthy (Damaged Leaf)",
            HealthLabel::Unknown => "Unknown Condition",
        }
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
