//! Model Loader Ports - Turning an artifact on disk into a classifier.

use std::path::Path;
use std::sync::Arc;

use super::{ClinicalClassifier, ImageClassifier};

/// Errors that can occur while provisioning a model artifact.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProvisioningError {
    #[error("Artifact download failed: {0}")]
    Fetch(String),

    #[error("Artifact download timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Artifact checksum mismatch: expected {expected}, got {actual}")]
    Checksum { expected: String, actual: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("Artifact does not match the expected contract: {0}")]
    Contract(String),
}

impl ProvisioningError {
    /// Whether another attempt could succeed without operator action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProvisioningError::Fetch(_) | ProvisioningError::Timeout { .. })
    }

    /// Whether the failure happened while obtaining the artifact remotely.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ProvisioningError::Fetch(_)
                | ProvisioningError::Timeout { .. }
                | ProvisioningError::Checksum { .. }
        )
    }
}

/// Port for loading the clinical classifier artifact.
pub trait ClinicalModelLoader: Send + Sync {
    /// Loads and validates the artifact at `path`.
    fn load(&self, path: &Path) -> Result<Arc<dyn ClinicalClassifier>, ProvisioningError>;
}

/// Port for loading the image classifier artifact.
pub trait ImageModelLoader: Send + Sync {
    /// Loads the artifact at `path`. May block for a noticeable time.
    fn load(&self, path: &Path) -> Result<Arc<dyn ImageClassifier>, ProvisioningError>;
}
