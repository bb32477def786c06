//! Axum router configuration for assessment endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers::{
    assess_clinical, assess_imaging, assess_symptoms, export_imaging_report, health,
    list_questions, AssessmentAppState,
};

/// Create the assessment API router.
///
/// # Routes
///
/// - `GET /health` - Liveness and model availability
/// - `GET /api/symptoms/questions` - Questionnaire in canonical order
/// - `POST /api/assessments/symptoms` - Score questionnaire answers
/// - `POST /api/assessments/clinical` - Clinical likelihood
/// - `POST /api/assessments/imaging` - Classify an ultrasound image (raw body)
/// - `POST /api/reports/imaging` - Download (and optionally save) a summary
pub fn assessment_router(state: AssessmentAppState) -> Router {
    let image_limit = state.max_image_bytes;

    Router::new()
        .route("/health", get(health))
        .route("/api/symptoms/questions", get(list_questions))
        .route("/api/assessments/symptoms", post(assess_symptoms))
        .route("/api/assessments/clinical", post(assess_clinical))
        .route(
            "/api/assessments/imaging",
            post(assess_imaging).layer(DefaultBodyLimit::max(image_limit)),
        )
        .route("/api/reports/imaging", post(export_imaging_report))
        .with_state(state)
}
