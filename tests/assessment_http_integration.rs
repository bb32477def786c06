//! Integration tests for the assessment HTTP endpoints.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, using
//! fixed-output classifiers and an in-memory result store.

use std::io::Cursor;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use serde_json::{json, Value};
use tower::ServiceExt;

use pcos_assess::adapters::http::{assessment_router, AssessmentAppState};
use pcos_assess::adapters::models::{
    FixedClinicalClassifier, FixedImageClassifier, StaticModelProvider,
};
use pcos_assess::adapters::storage::InMemoryResultStore;
use pcos_assess::domain::imaging::ConfidenceThreshold;
use pcos_assess::ports::{ClinicalClassifier, ImageClassifier, ProvisioningError};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    store: InMemoryResultStore,
}

fn app_with(clinical: Option<[f64; 2]>, image_score: Option<f64>) -> TestApp {
    let clinical = clinical
        .map(|p| Arc::new(FixedClinicalClassifier::new(p)) as Arc<dyn ClinicalClassifier>);
    let image =
        image_score.map(|s| Arc::new(FixedImageClassifier::new(s)) as Arc<dyn ImageClassifier>);
    let store = InMemoryResultStore::new();

    let state = AssessmentAppState {
        models: Arc::new(StaticModelProvider::new(clinical, image)),
        result_store: Arc::new(store.clone()),
        default_threshold: ConfidenceThreshold::DEFAULT,
        image_side: 32,
        max_image_bytes: 64 * 1024,
    };
    TestApp {
        router: assessment_router(state),
        store,
    }
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([90, 140, 60]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageOutputFormat::Png)
        .unwrap();
    out.into_inner()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn image_request(uri: &str, bytes: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "image/png")
        .body(Body::from(bytes))
        .unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn measurements() -> Value {
    json!({
        "age": 28.0,
        "weight_kg": 70.0,
        "height_cm": 175.0,
        "fasting_glucose": 92.0,
        "fasting_insulin": 14.0,
        "lh_fsh_ratio": 2.6,
        "amh": 7.2,
        "dheas": 320.0,
        "prolactin": 14.0,
        "tsh": 2.0,
        "free_testosterone": 3.4,
        "blood_sugar": 104.0,
        "symptom_score": 8.0
    })
}

// =============================================================================
// Health and Catalog
// =============================================================================

#[tokio::test]
async fn health_reports_model_availability() {
    let app = app_with(Some([0.5, 0.5]), None);
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["models"]["clinical"], "loaded");
    assert_eq!(body["models"]["imaging"], "not_loaded");
}

#[tokio::test]
async fn questions_are_served_in_canonical_order() {
    let app = app_with(None, None);
    let request = Request::builder()
        .uri("/api/symptoms/questions")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 11);
    assert_eq!(body["questions"][0]["band"], "ovulatory_dysfunction");
    assert_eq!(body["questions"][10]["band"], "informational");
}

// =============================================================================
// Symptoms
// =============================================================================

#[tokio::test]
async fn symptoms_two_bands_is_high_risk() {
    let app = app_with(None, None);
    let mut answers = vec![false; 11];
    answers[1] = true;
    answers[4] = true;

    let (status, body) = send(
        app.router,
        json_request("/api/assessments/symptoms", json!({ "answers": answers })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "high");
    assert_eq!(body["risk_label"], "High Risk");
    assert_eq!(body["color"], "#F44336");
    assert_eq!(body["criteria_count"], 2);
}

#[tokio::test]
async fn symptoms_informational_answers_only_is_low_risk() {
    let app = app_with(None, None);
    let mut answers = vec![false; 11];
    answers[8] = true;
    answers[9] = true;
    answers[10] = true;

    let (status, body) = send(
        app.router,
        json_request("/api/assessments/symptoms", json!({ "answers": answers })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "low");
}

#[tokio::test]
async fn symptoms_wrong_length_is_bad_request() {
    let app = app_with(None, None);
    let (status, body) = send(
        app.router,
        json_request("/api/assessments/symptoms", json!({ "answers": [true, false] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SYMPTOM_RESPONSES");
}

#[tokio::test]
async fn malformed_json_is_bad_request_with_error_body() {
    let app = app_with(None, None);
    let request = Request::builder()
        .method("POST")
        .uri("/api/assessments/symptoms")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Clinical
// =============================================================================

#[tokio::test]
async fn clinical_assessment_from_measurements() {
    let app = app_with(Some([0.1269, 0.8731]), None);
    let (status, body) = send(
        app.router,
        json_request(
            "/api/assessments/clinical",
            json!({
                "measurements": measurements(),
                "intake": { "patient_name": "Jane", "notes": "Irregular cycles" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["diagnosis"], "likely");
    assert_eq!(body["label"], "PCOS Likely");
    assert_eq!(body["likelihood_percentage"], 87.31);
    assert_eq!(body["body_mass_index"], 22.86);
    assert_eq!(body["display"]["explanation"][0], "Prediction for Jane: PCOS Likely");
}

#[tokio::test]
async fn clinical_assessment_from_named_features() {
    let app = app_with(Some([0.5, 0.5]), None);
    let features = json!({
        "Age": 31, "BMI": null, "FastingGlucose": 88, "FastingInsulin": 9,
        "LH_FSH_Ratio": 1.2, "AMH": 3.1, "DHEAS": 210, "Prolactin": 11,
        "TSH": 1.7, "FreeTestosterone": 1.9, "BloodSugar": 97, "Score": 2
    });

    let (status, body) = send(
        app.router,
        json_request("/api/assessments/clinical", json!({ "features": features })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["diagnosis"], "unlikely");
    assert!(body["body_mass_index"].is_null());
}

#[tokio::test]
async fn clinical_non_numeric_feature_is_bad_request() {
    let app = app_with(Some([0.5, 0.5]), None);
    let features = json!({
        "Age": "thirty", "FastingGlucose": 88, "FastingInsulin": 9,
        "LH_FSH_Ratio": 1.2, "AMH": 3.1, "DHEAS": 210, "Prolactin": 11,
        "TSH": 1.7, "FreeTestosterone": 1.9, "BloodSugar": 97, "Score": 2
    });

    let (status, body) = send(
        app.router,
        json_request("/api/assessments/clinical", json!({ "features": features })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FEATURE_VECTOR");
}

#[tokio::test]
async fn clinical_without_model_is_service_unavailable() {
    let app = app_with(None, None);
    let (status, body) = send(
        app.router,
        json_request("/api/assessments/clinical", json!({ "measurements": measurements() })),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn clinical_requires_exactly_one_input_form() {
    let app = app_with(Some([0.5, 0.5]), None);
    let (status, body) = send(
        app.router,
        json_request("/api/assessments/clinical", json!({ "intake": {} })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Imaging
// =============================================================================

#[tokio::test]
async fn imaging_assessment_uses_default_threshold() {
    let app = app_with(None, Some(0.62));
    let (status, body) = send(
        app.router,
        image_request("/api/assessments/imaging?patient_name=Jane", png_bytes(40, 30)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Noninfected");
    assert_eq!(body["threshold"], 0.5);
    assert_eq!(body["confidence_percentage"], 62.0);
    assert_eq!(body["report_file_name"], "Jane_PCOS_Result.txt");
    assert!(body["report_text"]
        .as_str()
        .unwrap()
        .starts_with("Result: Noninfected\nPrediction Confidence: 62.0%"));
}

#[tokio::test]
async fn imaging_threshold_from_query_changes_label() {
    let app = app_with(None, Some(0.62));
    let (status, body) = send(
        app.router,
        image_request("/api/assessments/imaging?threshold=0.8", png_bytes(16, 16)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Infected");
    assert_eq!(body["confidence_percentage"], 62.0);
    assert_eq!(body["insights"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn imaging_out_of_range_threshold_is_bad_request() {
    let app = app_with(None, Some(0.62));
    let (status, body) = send(
        app.router,
        image_request("/api/assessments/imaging?threshold=1.5", png_bytes(16, 16)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_THRESHOLD");
}

#[tokio::test]
async fn imaging_undecodable_body_is_bad_request() {
    let app = app_with(None, Some(0.62));
    let (status, body) = send(
        app.router,
        image_request("/api/assessments/imaging", b"definitely not a png".to_vec()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_IMAGE");
}

#[tokio::test]
async fn imaging_without_model_is_service_unavailable() {
    let app = app_with(None, None);
    let (status, body) = send(
        app.router,
        image_request("/api/assessments/imaging", png_bytes(16, 16)),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn imaging_failed_download_is_provisioning_failure() {
    let provider = StaticModelProvider::empty()
        .with_image_failure(ProvisioningError::Fetch("HTTP 502 Bad Gateway".to_string()));
    let state = AssessmentAppState {
        models: Arc::new(provider),
        result_store: Arc::new(InMemoryResultStore::new()),
        default_threshold: ConfidenceThreshold::DEFAULT,
        image_side: 32,
        max_image_bytes: 64 * 1024,
    };
    let (status, body) = send(
        assessment_router(state),
        image_request("/api/assessments/imaging", png_bytes(16, 16)),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "PROVISIONING_FAILURE");
}

#[tokio::test]
async fn imaging_oversized_body_is_rejected() {
    let app = app_with(None, Some(0.62));
    let (status, body) = send(
        app.router,
        image_request("/api/assessments/imaging", vec![0u8; 128 * 1024]),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
}

// =============================================================================
// Report Export
// =============================================================================

#[tokio::test]
async fn report_download_is_plain_text_attachment() {
    let app = app_with(None, None);
    let response = app
        .router
        .oneshot(json_request(
            "/api/reports/imaging",
            json!({ "patient_name": "Jane Doe", "score": 0.3, "threshold": 0.5 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Jane_Doe_PCOS_Result.txt\""
    );
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("Result: Infected\nPrediction Confidence: 30.0%\n\nClinical Insights:\n- "));
    assert_eq!(app.store.report_count().await, 0);
}

#[tokio::test]
async fn report_is_persisted_when_requested() {
    let app = app_with(None, None);
    let response = app
        .router
        .oneshot(json_request(
            "/api/reports/imaging",
            json!({ "score": 0.9, "save": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let saved = app.store.get("Patient_PCOS_Result.txt").await.unwrap();
    assert!(saved.starts_with("Result: Noninfected\nPrediction Confidence: 90.0%"));
}
