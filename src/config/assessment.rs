//! Assessment behavior configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Per-request assessment defaults and export location
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Threshold used when an imaging request does not supply one
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,

    /// Directory that saved imaging summaries are written into
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Largest accepted image upload in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

impl AssessmentConfig {
    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.default_threshold) {
            return Err(ValidationError::InvalidThreshold);
        }
        if self.max_image_bytes == 0 {
            return Err(ValidationError::InvalidMaxImageSize);
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            export_dir: default_export_dir(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

fn default_threshold() -> f64 {
    0.5
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_max_image_bytes() -> usize {
    10 * 1024 * 1024
}
