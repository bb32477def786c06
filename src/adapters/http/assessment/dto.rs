//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::clinical::{ClinicalAssessment, ClinicalIntake, ClinicalMeasurements, Diagnosis};
use crate::domain::foundation::{AssessmentError, AssessmentId, DisplayTag};
use crate::domain::imaging::{ImagingAssessment, ImagingLabel};
use crate::domain::symptoms::{SymptomAssessment, SymptomQuestion};
use crate::ports::ModelStatus;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for a symptom assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomAssessmentRequest {
    pub answers: Vec<bool>,
}

/// Request body for a clinical assessment.
///
/// Exactly one of `measurements` (typed, with weight and height) or
/// `features` (artifact column name to value, with BMI precomputed) must be
/// present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicalAssessmentRequest {
    pub measurements: Option<ClinicalMeasurements>,
    pub features: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub intake: ClinicalIntake,
}

/// Query parameters for an imaging assessment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagingAssessmentQuery {
    pub threshold: Option<f64>,
    pub patient_name: Option<String>,
}

/// Request body for exporting an imaging summary.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagingReportRequest {
    pub patient_name: Option<String>,
    pub score: f64,
    pub threshold: Option<f64>,
    #[serde(default)]
    pub save: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness plus model availability.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models: ModelStatus,
}

/// The questionnaire in canonical order.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub count: usize,
    pub questions: Vec<SymptomQuestion>,
}

/// Symptom assessment outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomAssessmentResponse {
    pub assessment_id: AssessmentId,
    pub risk_label: &'static str,
    pub color: String,
    #[serde(flatten)]
    pub assessment: SymptomAssessment,
}

impl From<SymptomAssessment> for SymptomAssessmentResponse {
    fn from(assessment: SymptomAssessment) -> Self {
        Self {
            assessment_id: AssessmentId::new(),
            risk_label: assessment.risk_level.label(),
            color: assessment.color().to_string(),
            assessment,
        }
    }
}

/// Clinical assessment outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicalAssessmentResponse {
    pub assessment_id: AssessmentId,
    pub diagnosis: Diagnosis,
    pub label: &'static str,
    pub likelihood_percentage: f64,
    pub body_mass_index: Option<f64>,
    pub intake: ClinicalIntake,
    pub display: DisplayTag,
}

impl From<ClinicalAssessment> for ClinicalAssessmentResponse {
    fn from(assessment: ClinicalAssessment) -> Self {
        Self {
            assessment_id: AssessmentId::new(),
            diagnosis: assessment.result.diagnosis,
            label: assessment.result.diagnosis.label(),
            likelihood_percentage: assessment.result.likelihood_percentage(),
            body_mass_index: assessment.body_mass_index,
            intake: assessment.intake,
            display: assessment.display,
        }
    }
}

/// Imaging assessment outcome with the rendered summary.
#[derive(Debug, Clone, Serialize)]
pub struct ImagingAssessmentResponse {
    pub assessment_id: AssessmentId,
    pub label: ImagingLabel,
    pub score: f64,
    pub threshold: f64,
    pub confidence_percentage: f64,
    pub insights: Vec<&'static str>,
    pub display: DisplayTag,
    pub report_file_name: String,
    pub report_text: String,
}

impl From<ImagingAssessment> for ImagingAssessmentResponse {
    fn from(assessment: ImagingAssessment) -> Self {
        let result = assessment.result;
        Self {
            assessment_id: assessment.report.assessment_id,
            label: result.label,
            score: result.score.value(),
            threshold: result.threshold.value(),
            confidence_percentage: assessment.confidence_percentage,
            insights: result.label.insights().to_vec(),
            display: assessment.display,
            report_file_name: assessment.report.file_name(),
            report_text: assessment.report.render(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            code: "PAYLOAD_TOO_LARGE".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_assessment(error: &AssessmentError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}
