//! AssessSymptomsHandler - Scores a questionnaire submission.

use tracing::{info, warn};

use crate::domain::foundation::AssessmentError;
use crate::domain::symptoms::{SymptomAssessment, SymptomResponseVector, SymptomRuleEngine};

/// Command carrying the raw yes/no answers in question order.
#[derive(Debug, Clone)]
pub struct AssessSymptomsCommand {
    pub answers: Vec<bool>,
}

/// Result of a successful symptom assessment.
pub type AssessSymptomsResult = SymptomAssessment;

/// Handler for symptom assessments. Needs no models.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessSymptomsHandler;

impl AssessSymptomsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: AssessSymptomsCommand) -> Result<AssessSymptomsResult, AssessmentError> {
        let responses = SymptomResponseVector::from_slice(&cmd.answers).map_err(|e| {
            warn!(error = %e, "Rejected symptom responses");
            e
        })?;

        let assessment = SymptomRuleEngine::assess(&responses);
        info!(
            risk_level = assessment.risk_level.label(),
            positive_answers = responses.positive_count(),
            criteria_count = assessment.criteria_count,
            "Symptom assessment completed"
        );
        Ok(assessment)
    }
}
