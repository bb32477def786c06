//! Assessment HTTP adapter - REST API over the three assessment pipelines.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
