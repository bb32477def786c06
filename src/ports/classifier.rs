//! Classifier Ports - Capabilities of the two trained models.
//!
//! Both classifiers are synchronous: clinical inference is a handful of
//! arithmetic operations and image inference is driven from the blocking
//! thread pool by the application layer.

use crate::domain::clinical::ClinicalFeatureVector;
use crate::domain::imaging::NormalizedImageTensor;

/// Errors raised by a loaded classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// The model refused the input, e.g. an undefined feature it cannot impute.
    #[error("Input rejected by model: {0}")]
    RejectedInput(String),

    /// The model produced something outside its output contract.
    #[error("Model produced invalid output: {0}")]
    InvalidOutput(String),

    /// The runtime failed while evaluating the model.
    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Probabilistic binary classifier over clinical measurements.
pub trait ClinicalClassifier: Send + Sync {
    /// Returns `[p_negative, p_positive]` for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::RejectedInput` when the vector cannot be
    /// evaluated by this model.
    fn predict_proba(&self, features: &ClinicalFeatureVector) -> Result<[f64; 2], ClassifierError>;
}

/// Scalar-output classifier over a normalized ultrasound image.
pub trait ImageClassifier: Send + Sync {
    /// Returns the raw score for one image.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::InvalidOutput` if the score is not a finite
    /// value in [0, 1].
    fn score(&self, tensor: &NormalizedImageTensor) -> Result<f64, ClassifierError>;
}
