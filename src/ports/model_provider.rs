//! Model Provider Port - Lazily provisioned classifier singletons.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use super::{ClinicalClassifier, ImageClassifier, ProvisioningError};

/// Whether a model has been provisioned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelState {
    Loaded,
    NotLoaded,
}

impl ModelState {
    pub fn from_loaded(loaded: bool) -> Self {
        if loaded {
            ModelState::Loaded
        } else {
            ModelState::NotLoaded
        }
    }
}

/// Snapshot of both model slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelStatus {
    pub clinical: ModelState,
    pub imaging: ModelState,
}

/// Port for obtaining the classifier singletons.
///
/// A `None` or `Err` means the model cannot be provided right now. Failures
/// are not remembered, so a later call tries again.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Returns the clinical classifier, loading it on first use.
    fn clinical_classifier(&self) -> Option<Arc<dyn ClinicalClassifier>>;

    /// Returns the image classifier, fetching and loading it on first use.
    ///
    /// The error says why the artifact could not be provided, so callers can
    /// tell a failed download from a missing or unloadable file.
    async fn image_classifier(&self) -> Result<Arc<dyn ImageClassifier>, ProvisioningError>;

    /// Reports which models are currently loaded without triggering a load.
    fn status(&self) -> ModelStatus;
}
