//! Decode, extract and classify one leaf image

use crate::present::ResultPresenter;
use crate::source::ImageSource;
use crate::DiagnoseError;
use health_classifier::{HealthClassifier, HealthLabel};
use leaf_features::{Extraction, FeatureExtractor, FeatureRecord, LeafImage};
use serde::Serialize;
use tracing::info;

/// Outcome of one diagnosis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    /// Source image width before resampling
    pub source_width: u32,
    /// Source image height before resampling
    pub source_height: u32,
    /// Extracted features
    pub features: FeatureRecord,
    /// Health label
    pub label: HealthLabel,
    /// Name of the rule that decided the label
    pub rule: &'static str,
}

/// Leaf diagnostics module
#[derive(Debug, Clone, Copy, Default)]
pub struct LeafDiagnostics {
    extractor: FeatureExtractor,
    classifier: HealthClassifier,
}

impl LeafDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze a decoded image. Never fails.
    pub fn analyze(&self, image: &LeafImage) -> (Diagnosis, Extraction) {
        let extraction = self.extractor.extract(image);
        let (label, rule) = self.classifier.classify_with_rule(&extraction.features);

        let diagnosis = Diagnosis {
            source_width: image.width(),
            source_height: image.height(),
            features: extraction.features,
            label,
            rule,
        };
        (diagnosis, extraction)
    }

    /// Decode encoded bytes, then analyze them
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<(Diagnosis, Extraction), DiagnoseError> {
        let image = LeafImage::decode(bytes)?;
        Ok(self.analyze(&image))
    }

    /// Acquire one image, diagnose it and hand the result to the presenter
    ///
    /// Nothing reaches the presenter unless a label was produced.
    pub fn run(
        &self,
        source: &mut dyn ImageSource,
        presenter: &mut dyn ResultPresenter,
    ) -> Result<Diagnosis, DiagnoseError> {
        let bytes = source.acquire()?.ok_or(DiagnoseError::NoInputSelected)?;
        let (diagnosis, extraction) = self.analyze_bytes(&bytes)?;

        info!(
            "Plant health status: {} (rule: {})",
            diagnosis.label, diagnosis.rule
        );

        presenter.present(&diagnosis, &extraction)?;
        Ok(diagnosis)
    }
}
