//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    AssessClinicalCommand, AssessClinicalHandler, AssessImageCommand, AssessImageHandler,
    AssessSymptomsCommand, AssessSymptomsHandler, ExportImagingReportCommand,
    ExportImagingReportHandler, ImageInput,
};
use crate::domain::clinical::ClinicalFeatureVector;
use crate::domain::foundation::{AssessmentError, ErrorCode};
use crate::domain::imaging::ConfidenceThreshold;
use crate::domain::symptoms::SYMPTOM_QUESTIONS;
use crate::ports::{ModelProvider, ResultStore};

use super::dto::{
    ClinicalAssessmentRequest, ClinicalAssessmentResponse, ErrorResponse, HealthResponse,
    ImagingAssessmentQuery, ImagingAssessmentResponse, ImagingReportRequest, QuestionsResponse,
    SymptomAssessmentRequest, SymptomAssessmentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error that converts to HTTP responses.
#[derive(Debug)]
pub enum AssessmentApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Internal(String),
    Assessment(AssessmentError),
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AssessmentApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AssessmentApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorResponse::payload_too_large(msg))
            }
            AssessmentApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
            AssessmentApiError::Assessment(err) => {
                (status_for(err.code()), ErrorResponse::from_assessment(&err))
            }
        };
        (status, Json(error)).into_response()
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ModelUnavailable | ErrorCode::ProvisioningFailure => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ErrorCode::ExportFailed => StatusCode::INTERNAL_SERVER_ERROR,
        code if code.is_input_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<AssessmentError> for AssessmentApiError {
    fn from(error: AssessmentError) -> Self {
        AssessmentApiError::Assessment(error)
    }
}

impl From<JsonRejection> for AssessmentApiError {
    fn from(rejection: JsonRejection) -> Self {
        AssessmentApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AssessmentApiError {
    fn from(rejection: QueryRejection) -> Self {
        AssessmentApiError::BadRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for AssessmentApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AssessmentApiError::PayloadTooLarge(rejection.body_text())
        } else {
            AssessmentApiError::BadRequest(rejection.body_text())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing assessment dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub models: Arc<dyn ModelProvider>,
    pub result_store: Arc<dyn ResultStore>,
    pub default_threshold: ConfidenceThreshold,
    pub image_side: u32,
    pub max_image_bytes: usize,
}

impl AssessmentAppState {
    pub fn assess_symptoms_handler(&self) -> AssessSymptomsHandler {
        AssessSymptomsHandler::new()
    }

    pub fn assess_clinical_handler(&self) -> AssessClinicalHandler {
        AssessClinicalHandler::new(self.models.clone())
    }

    pub fn assess_image_handler(&self) -> AssessImageHandler {
        AssessImageHandler::new(self.models.clone(), self.image_side)
    }

    pub fn export_imaging_report_handler(&self) -> ExportImagingReportHandler {
        ExportImagingReportHandler::new(self.result_store.clone())
    }

    fn threshold_or_default(&self, threshold: Option<f64>) -> Result<ConfidenceThreshold, AssessmentError> {
        threshold
            .map(ConfidenceThreshold::new)
            .unwrap_or(Ok(self.default_threshold))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(state): State<AssessmentAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        models: state.models.status(),
    })
}

/// GET /api/symptoms/questions
pub async fn list_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        count: SYMPTOM_QUESTIONS.len(),
        questions: SYMPTOM_QUESTIONS.to_vec(),
    })
}

/// POST /api/assessments/symptoms
pub async fn assess_symptoms(
    State(state): State<AssessmentAppState>,
    payload: Result<Json<SymptomAssessmentRequest>, JsonRejection>,
) -> Result<Json<SymptomAssessmentResponse>, AssessmentApiError> {
    let Json(request) = payload?;
    let assessment = state
        .assess_symptoms_handler()
        .handle(AssessSymptomsCommand {
            answers: request.answers,
        })?;
    Ok(Json(assessment.into()))
}

/// POST /api/assessments/clinical
pub async fn assess_clinical(
    State(state): State<AssessmentAppState>,
    payload: Result<Json<ClinicalAssessmentRequest>, JsonRejection>,
) -> Result<Json<ClinicalAssessmentResponse>, AssessmentApiError> {
    let Json(request) = payload?;
    let features = match (&request.measurements, &request.features) {
        (Some(measurements), None) => ClinicalFeatureVector::from_measurements(measurements),
        (None, Some(named)) => ClinicalFeatureVector::from_named(named),
        _ => {
            return Err(AssessmentApiError::BadRequest(
                "provide exactly one of 'measurements' or 'features'".to_string(),
            ))
        }
    }
    .map_err(AssessmentError::from)?;

    let handler = state.assess_clinical_handler();
    let command = AssessClinicalCommand {
        features,
        intake: request.intake,
    };
    // First use may read the artifact from disk.
    let assessment = tokio::task::spawn_blocking(move || handler.handle(command))
        .await
        .map_err(|e| AssessmentApiError::Internal(format!("assessment task failed: {}", e)))??;

    Ok(Json(assessment.into()))
}

/// POST /api/assessments/imaging?threshold=&patient_name=
///
/// The request body is the raw encoded image.
pub async fn assess_imaging(
    State(state): State<AssessmentAppState>,
    query: Result<Query<ImagingAssessmentQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ImagingAssessmentResponse>, AssessmentApiError> {
    let Query(query) = query?;
    let body = body?;
    if body.len() > state.max_image_bytes {
        return Err(AssessmentApiError::PayloadTooLarge(format!(
            "image exceeds {} bytes",
            state.max_image_bytes
        )));
    }

    let threshold = state.threshold_or_default(query.threshold)?;
    let assessment = state
        .assess_image_handler()
        .handle(AssessImageCommand {
            image: ImageInput::Encoded(body.to_vec()),
            threshold,
            patient_name: query.patient_name,
        })
        .await?;

    Ok(Json(assessment.into()))
}

/// POST /api/reports/imaging
///
/// Responds with the summary as a plain-text attachment.
pub async fn export_imaging_report(
    State(state): State<AssessmentAppState>,
    payload: Result<Json<ImagingReportRequest>, JsonRejection>,
) -> Result<Response, AssessmentApiError> {
    let Json(request) = payload?;
    let threshold = state.threshold_or_default(request.threshold)?;

    let exported = state
        .export_imaging_report_handler()
        .handle(ExportImagingReportCommand {
            patient_name: request.patient_name,
            score: request.score,
            threshold: threshold.value(),
            save: request.save,
        })
        .await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        exported.file_name
    ))
    .map_err(|e| AssessmentApiError::Internal(e.to_string()))?;

    let mut response = (
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
        exported.text,
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_DISPOSITION, disposition);
    Ok(response)
}
