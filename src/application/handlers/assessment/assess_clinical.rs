//! AssessClinicalHandler - Runs the clinical classifier and applies the
//! likelihood decision.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::clinical::{
    ClassProbabilities, ClinicalAssessment, ClinicalFeatureVector, ClinicalIntake,
    LikelihoodResult,
};
use crate::domain::foundation::{AssessmentError, ModelKind};
use crate::ports::{ClassifierError, ModelProvider};

/// Command to assess one set of clinical measurements.
#[derive(Debug, Clone)]
pub struct AssessClinicalCommand {
    pub features: ClinicalFeatureVector,
    pub intake: ClinicalIntake,
}

/// Result of a successful clinical assessment.
pub type AssessClinicalResult = ClinicalAssessment;

/// Handler for clinical assessments.
pub struct AssessClinicalHandler {
    models: Arc<dyn ModelProvider>,
}

impl AssessClinicalHandler {
    pub fn new(models: Arc<dyn ModelProvider>) -> Self {
        Self { models }
    }

    pub fn handle(&self, cmd: AssessClinicalCommand) -> Result<AssessClinicalResult, AssessmentError> {
        let classifier = self.models.clinical_classifier().ok_or_else(|| {
            AssessmentError::model_unavailable(
                ModelKind::Clinical,
                "the model artifact could not be loaded",
            )
        })?;

        let [negative, positive] = classifier
            .predict_proba(&cmd.features)
            .map_err(map_classifier_error)?;

        let probabilities = ClassProbabilities::try_new(negative, positive).map_err(|e| {
            AssessmentError::model_unavailable(
                ModelKind::Clinical,
                format!("the model returned unusable probabilities: {}", e),
            )
        })?;
        let result = LikelihoodResult::from_probabilities(probabilities)?;

        info!(diagnosis = result.diagnosis.label(), "Clinical assessment completed");
        Ok(ClinicalAssessment::new(result, &cmd.features, cmd.intake))
    }
}

fn map_classifier_error(err: ClassifierError) -> AssessmentError {
    match err {
        ClassifierError::RejectedInput(reason) => {
            warn!(reason = %reason, "Clinical model rejected input");
            AssessmentError::InvalidFeatureVector(reason)
        }
        other => AssessmentError::model_unavailable(ModelKind::Clinical, other.to_string()),
    }
}
