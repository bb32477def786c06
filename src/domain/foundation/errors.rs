//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::ModelKind;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable, machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    InvalidSymptomResponses,
    InvalidFeatureVector,
    InvalidImage,
    InvalidThreshold,

    // Model errors
    ModelUnavailable,
    ProvisioningFailure,

    // Infrastructure errors
    ExportFailed,
}

impl ErrorCode {
    /// Returns true if the caller can fix the error by correcting input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::InvalidSymptomResponses
                | ErrorCode::InvalidFeatureVector
                | ErrorCode::InvalidImage
                | ErrorCode::InvalidThreshold
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidSymptomResponses => "INVALID_SYMPTOM_RESPONSES",
            ErrorCode::InvalidFeatureVector => "INVALID_FEATURE_VECTOR",
            ErrorCode::InvalidImage => "INVALID_IMAGE",
            ErrorCode::InvalidThreshold => "INVALID_THRESHOLD",
            ErrorCode::ModelUnavailable => "MODEL_UNAVAILABLE",
            ErrorCode::ProvisioningFailure => "PROVISIONING_FAILURE",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Failures surfaced by the assessment pipelines.
///
/// None of these are fatal: every variant degrades to a user-visible message
/// and the other pipelines stay usable.
#[derive(Debug, Clone, Error)]
pub enum AssessmentError {
    #[error("The {model} model is not available: {reason}")]
    ModelUnavailable { model: ModelKind, reason: String },

    #[error("Invalid clinical measurements: {0}")]
    InvalidFeatureVector(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Expected {expected} symptom answers, got {actual}")]
    InvalidSymptomResponses { expected: usize, actual: usize },

    #[error("Confidence threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error("Model provisioning failed: {0}")]
    ProvisioningFailure(String),

    #[error("Result export failed: {0}")]
    Export(String),
}

impl AssessmentError {
    /// Creates a model unavailable error.
    pub fn model_unavailable(model: ModelKind, reason: impl Into<String>) -> Self {
        AssessmentError::ModelUnavailable {
            model,
            reason: reason.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::ModelUnavailable { .. } => ErrorCode::ModelUnavailable,
            AssessmentError::InvalidFeatureVector(_) => ErrorCode::InvalidFeatureVector,
            AssessmentError::InvalidImage(_) => ErrorCode::InvalidImage,
            AssessmentError::InvalidSymptomResponses { .. } => ErrorCode::InvalidSymptomResponses,
            AssessmentError::InvalidThreshold(_) => ErrorCode::InvalidThreshold,
            AssessmentError::ProvisioningFailure(_) => ErrorCode::ProvisioningFailure,
            AssessmentError::Export(_) => ErrorCode::ExportFailed,
        }
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::InvalidFeatureVector(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_missing_field_displays_correctly() {
        let err = ValidationError::missing_field("FastingGlucose");
        assert_eq!(format!("{}", err), "Field 'FastingGlucose' is required");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("threshold", 0.0, 1.0, 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'threshold' must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("AMH", "expected a number");
        assert_eq!(
            format!("{}", err),
            "Field 'AMH' has invalid format: expected a number"
        );
    }

    #[test]
    fn assessment_error_maps_to_codes() {
        assert_eq!(
            AssessmentError::model_unavailable(ModelKind::Clinical, "missing").code(),
            ErrorCode::ModelUnavailable
        );
        assert_eq!(
            AssessmentError::InvalidSymptomResponses { expected: 11, actual: 3 }.code(),
            ErrorCode::InvalidSymptomResponses
        );
        assert_eq!(
            AssessmentError::InvalidThreshold(2.0).code(),
            ErrorCode::InvalidThreshold
        );
    }

    #[test]
    fn model_unavailable_message_names_the_model() {
        let err = AssessmentError::model_unavailable(ModelKind::Imaging, "download failed");
        assert_eq!(
            err.to_string(),
            "The imaging model is not available: download failed"
        );
    }

    #[test]
    fn validation_errors_become_feature_vector_errors() {
        let err: AssessmentError = ValidationError::missing_field("TSH").into();
        assert_eq!(err.code(), ErrorCode::InvalidFeatureVector);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ModelUnavailable), "MODEL_UNAVAILABLE");
        assert_eq!(format!("{}", ErrorCode::InvalidImage), "INVALID_IMAGE");
    }

    #[test]
    fn input_errors_are_distinguished_from_model_errors() {
        assert!(ErrorCode::InvalidImage.is_input_error());
        assert!(!ErrorCode::ModelUnavailable.is_input_error());
        assert!(!ErrorCode::ProvisioningFailure.is_input_error());
    }
}
