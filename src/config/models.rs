//! Model artifact configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on fetch retries
const MAX_FETCH_RETRIES: u32 = 5;

/// Where the two model artifacts live and how the image model is fetched
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    /// JSON logistic pipeline for the clinical classifier
    #[serde(default = "default_clinical_model_path")]
    pub clinical_model_path: PathBuf,

    /// ONNX artifact for the image classifier
    #[serde(default = "default_image_model_path")]
    pub image_model_path: PathBuf,

    /// Remote location of the image artifact, used when the local file is absent
    pub image_model_url: Option<String>,

    /// Expected lowercase hex SHA-256 of the downloaded image artifact
    pub image_model_sha256: Option<String>,

    /// Per-attempt download timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Retries after the first failed download attempt
    #[serde(default = "default_fetch_max_retries")]
    pub fetch_max_retries: u32,

    /// Base delay for exponential backoff between attempts
    #[serde(default = "default_fetch_backoff_ms")]
    pub fetch_backoff_ms: u64,

    /// Side length of the square input the image model expects
    #[serde(default = "default_image_resolution")]
    pub image_resolution: u32,
}

impl ModelsConfig {
    /// Per-attempt fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Base backoff as a Duration
    pub fn fetch_backoff(&self) -> Duration {
        Duration::from_millis(self.fetch_backoff_ms)
    }

    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ValidationError::InvalidFetchTimeout);
        }
        if self.fetch_max_retries > MAX_FETCH_RETRIES {
            return Err(ValidationError::TooManyRetries);
        }
        if self.image_resolution == 0 {
            return Err(ValidationError::InvalidImageResolution);
        }
        if let Some(url) = &self.image_model_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidModelUrl);
            }
        }
        if let Some(sha) = &self.image_model_sha256 {
            if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ValidationError::InvalidModelChecksum);
            }
        }
        Ok(())
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            clinical_model_path: default_clinical_model_path(),
            image_model_path: default_image_model_path(),
            image_model_url: None,
            image_model_sha256: None,
            fetch_timeout_secs: default_fetch_timeout(),
            fetch_max_retries: default_fetch_max_retries(),
            fetch_backoff_ms: default_fetch_backoff_ms(),
            image_resolution: default_image_resolution(),
        }
    }
}

fn default_clinical_model_path() -> PathBuf {
    PathBuf::from("pcos_diagnosis_pipeline.json")
}

fn default_image_model_path() -> PathBuf {
    PathBuf::from("pcos_scan_model.onnx")
}

fn default_fetch_timeout() -> u64 {
    60
}

fn default_fetch_max_retries() -> u32 {
    1
}

fn default_fetch_backoff_ms() -> u64 {
    1000
}

fn default_image_resolution() -> u32 {
    256
}
