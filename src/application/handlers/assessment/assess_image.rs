//! AssessImageHandler - Preprocesses an ultrasound image, scores it with the
//! image classifier and applies the threshold decision.
//!
//! Decoding and inference are CPU-bound and run on the blocking pool.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{AssessmentError, AssessmentId, ModelKind};
use crate::domain::imaging::{
    ConfidenceThreshold, ImageConfidenceScore, ImagingAssessment, ImagingReport, ImagingResult,
    NormalizedImageTensor,
};
use crate::ports::{ClassifierError, ModelProvider, ProvisioningError};

/// Pixels to classify.
#[derive(Debug, Clone)]
pub enum ImageInput {
    /// Encoded file bytes (PNG, JPEG, ...).
    Encoded(Vec<u8>),
    /// Already decoded and normalized pixels.
    Normalized(NormalizedImageTensor),
}

/// Command to classify one image.
#[derive(Debug, Clone)]
pub struct AssessImageCommand {
    pub image: ImageInput,
    pub threshold: ConfidenceThreshold,
    pub patient_name: Option<String>,
}

/// Result of a successful imaging assessment.
pub type AssessImageResult = ImagingAssessment;

/// Handler for imaging assessments.
pub struct AssessImageHandler {
    models: Arc<dyn ModelProvider>,
    side: u32,
}

impl AssessImageHandler {
    /// `side` is the square resolution the image model expects.
    pub fn new(models: Arc<dyn ModelProvider>, side: u32) -> Self {
        Self { models, side }
    }

    pub async fn handle(&self, cmd: AssessImageCommand) -> Result<AssessImageResult, AssessmentError> {
        let side = self.side;
        let tensor = tokio::task::spawn_blocking(move || match cmd.image {
            ImageInput::Encoded(bytes) => NormalizedImageTensor::from_encoded(&bytes, side),
            ImageInput::Normalized(tensor) => Ok(tensor),
        })
        .await
        .map_err(|e| AssessmentError::InvalidImage(format!("preprocessing task failed: {}", e)))?
        .map_err(|e| {
            warn!(error = %e, "Rejected image");
            e
        })?;

        let classifier = self
            .models
            .image_classifier()
            .await
            .map_err(map_provisioning_error)?;

        let raw = tokio::task::spawn_blocking(move || classifier.score(&tensor))
            .await
            .map_err(|e| {
                AssessmentError::model_unavailable(ModelKind::Imaging, format!("inference task failed: {}", e))
            })?
            .map_err(map_classifier_error)?;

        let score = ImageConfidenceScore::new(raw).map_err(|_| {
            AssessmentError::model_unavailable(
                ModelKind::Imaging,
                format!("the model returned an out-of-range score {}", raw),
            )
        })?;
        let result = ImagingResult::decide(score, cmd.threshold);

        info!(label = result.label.as_str(), "Imaging assessment completed");

        let report = ImagingReport::new(AssessmentId::new(), cmd.patient_name.as_deref(), result);
        Ok(ImagingAssessment::new(report))
    }
}

fn map_provisioning_error(err: ProvisioningError) -> AssessmentError {
    if err.is_remote() {
        AssessmentError::ProvisioningFailure(err.to_string())
    } else {
        AssessmentError::model_unavailable(ModelKind::Imaging, err.to_string())
    }
}

fn map_classifier_error(err: ClassifierError) -> AssessmentError {
    match err {
        ClassifierError::RejectedInput(reason) => {
            warn!(reason = %reason, "Image model rejected input");
            AssessmentError::InvalidImage(reason)
        }
        other => AssessmentError::model_unavailable(ModelKind::Imaging, other.to_string()),
    }
}
