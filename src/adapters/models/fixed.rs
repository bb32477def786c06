//! Fixed-output classifiers and a static model provider.
//!
//! Useful for tests and for running the service without trained artifacts.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::clinical::ClinicalFeatureVector;
use crate::domain::imaging::NormalizedImageTensor;
use crate::ports::{
    ClassifierError, ClinicalClassifier, ImageClassifier, ModelProvider, ModelState, ModelStatus,
    ProvisioningError,
};

/// Clinical classifier that returns the same probabilities for every input.
#[derive(Debug)]
pub struct FixedClinicalClassifier {
    probabilities: [f64; 2],
    rejection: Option<String>,
    calls: AtomicUsize,
}

impl FixedClinicalClassifier {
    pub fn new(probabilities: [f64; 2]) -> Self {
        Self {
            probabilities,
            rejection: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A classifier that rejects every vector with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            probabilities: [0.0, 0.0],
            rejection: Some(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ClinicalClassifier for FixedClinicalClassifier {
    fn predict_proba(&self, _features: &ClinicalFeatureVector) -> Result<[f64; 2], ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.rejection {
            Some(reason) => Err(ClassifierError::RejectedInput(reason.clone())),
            None => Ok(self.probabilities),
        }
    }
}

/// Image classifier that returns the same score for every image.
#[derive(Debug)]
pub struct FixedImageClassifier {
    score: f64,
    calls: AtomicUsize,
}

impl FixedImageClassifier {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for FixedImageClassifier {
    fn score(&self, _tensor: &NormalizedImageTensor) -> Result<f64, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.score)
    }
}

/// Provider over pre-built classifiers. `None` slots report as unavailable.
#[derive(Clone)]
pub struct StaticModelProvider {
    clinical: Option<Arc<dyn ClinicalClassifier>>,
    image: Result<Arc<dyn ImageClassifier>, ProvisioningError>,
}

impl StaticModelProvider {
    pub fn new(
        clinical: Option<Arc<dyn ClinicalClassifier>>,
        image: Option<Arc<dyn ImageClassifier>>,
    ) -> Self {
        Self {
            clinical,
            image: image.ok_or_else(|| {
                ProvisioningError::Io("no image model is configured".to_string())
            }),
        }
    }

    /// Provider with no models at all.
    pub fn empty() -> Self {
        Self::new(None, None)
    }

    /// Makes every image model request fail with `err`.
    pub fn with_image_failure(mut self, err: ProvisioningError) -> Self {
        self.image = Err(err);
        self
    }
}

#[async_trait]
impl ModelProvider for StaticModelProvider {
    fn clinical_classifier(&self) -> Option<Arc<dyn ClinicalClassifier>> {
        self.clinical.clone()
    }

    async fn image_classifier(&self) -> Result<Arc<dyn ImageClassifier>, ProvisioningError> {
        self.image.clone()
    }

    fn status(&self) -> ModelStatus {
        ModelStatus {
            clinical: ModelState::from_loaded(self.clinical.is_some()),
            imaging: ModelState::from_loaded(self.image.is_ok()),
        }
    }
}
