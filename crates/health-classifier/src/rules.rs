//! Ordered classification rules

use crate::HealthLabel;
use leaf_features::FeatureRecord;
use tracing::debug;

/// Fraction of rust pixels above which a leaf is rusty
pub const RUST_RATIO_THRESHOLD: f64 = 0.15;
/// Minimum mean green intensity for a healthy leaf
pub const GREEN_MIN: f64 = 120.0;
/// Margin of mean green over mean red for a healthy leaf
pub const GREEN_OVER_RED_MARGIN: f64 = 30.0;
/// Edge count above which a green leaf has enough texture to be healthy
pub const HEALTHY_MIN_EDGES: u32 = 500;
/// Margin of mean red over green and blue for a brown leaf
pub const RED_DOMINANCE_MARGIN: f64 = 50.0;
/// Edge count below which a leaf is considered damaged
pub const DAMAGED_MAX_EDGES: u32 = 300;

/// Name reported when no rule matches
pub const FALLBACK_RULE: &str = "fallback";

/// A single (predicate, label) pair of the cascade
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short identifier, used in logs and reports
    pub name: &'static str,
    /// Label emitted when the predicate holds
    pub label: HealthLabel,
    predicate: fn(&FeatureRecord) -> bool,
}

impl Rule {
    pub fn matches(&self, features: &FeatureRecord) -> bool {
        (self.predicate)(features)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish()
    }
}

/// Rules in priority order; the first match wins.
pub const RULES: [Rule; 4] = [
    Rule {
        name: "rust_coverage",
        label: HealthLabel::Rusty,
        predicate: |f| f.rust_ratio > RUST_RATIO_THRESHOLD,
    },
    Rule {
        name: "green_dominance",
        label: HealthLabel::Healthy,
        predicate: |f| {
            let mean = &f.color_mean;
            mean.green > GREEN_MIN
                && mean.green > mean.red + GREEN_OVER_RED_MARGIN
                && f.edge_count > HEALTHY_MIN_EDGES
        },
    },
    Rule {
        name: "red_dominance",
        label: HealthLabel::Brown,
        predicate: |f| {
            let mean = &f.color_mean;
            mean.red > mean.blue + RED_DOMINANCE_MARGIN
                && mean.red > mean.green + RED_DOMINANCE_MARGIN
        },
    },
    Rule {
        name: "low_texture",
        label: HealthLabel::Damaged,
        predicate: |f| f.edge_count < DAMAGED_MAX_EDGES,
    },
];

/// Leaf health classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthClassifier;

impl HealthClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a feature record
    pub fn classify(&self, features: &FeatureRecord) -> HealthLabel {
        self.classify_with_rule(features).0
    }

    /// Classify and report which rule decided
    pub fn classify_with_rule(&self, features: &FeatureRecord) -> (HealthLabel, &'static str) {
        let (label, rule) = RULES
            .iter()
            .find(|rule| rule.matches(features))
            .map(|rule| (rule.label, rule.name))
            .unwrap_or((HealthLabel::Unknown, FALLBACK_RULE));

        debug!(rule, label = %label, "Leaf classified");
        (label, rule)
    }
}
