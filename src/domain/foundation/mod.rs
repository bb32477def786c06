//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! shared by the three assessment pipelines.

mod errors;
mod ids;
mod model_kind;
mod percentage;
mod severity;
mod timestamp;

pub use errors::{AssessmentError, ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use model_kind::ModelKind;
pub use percentage::{round_to, Percentage};
pub use severity::{DisplayTag, Severity};
pub use timestamp::Timestamp;
