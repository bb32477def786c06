//! ConfidenceThreshold - caller-supplied cutoff for the image score.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AssessmentError;

/// A cutoff in [0, 1]. Scores at or above it are Noninfected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceThreshold(f64);

impl ConfidenceThreshold {
    /// Threshold used when the caller does not choose one.
    pub const DEFAULT: Self = Self(0.5);

    /// Creates a threshold, rejecting values outside [0, 1].
    pub fn new(value: f64) -> Result<Self, AssessmentError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(AssessmentError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for ConfidenceThreshold {
    type Error = AssessmentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfidenceThreshold> for f64 {
    fn from(threshold: ConfidenceThreshold) -> Self {
        threshold.0
    }
}
