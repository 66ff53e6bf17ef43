//! Rule-Based Leaf Health Classifier
//!
//! Maps a [`leaf_features::FeatureRecord`] to one of five fixed health labels
//! through an ordered, first-match-wins rule table.

mod label;
mod rules;

pub use label::HealthLabel;
pub use rules::{HealthClassifier, Rule, RULES};
