//! Model Registry - Process-wide, lazily provisioned classifier singletons.
//!
//! Each slot is initialized at most once. Concurrent first callers wait on
//! the one in-flight load. Failed loads are logged and not remembered, so the
//! next call tries again.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ModelsConfig;
use crate::domain::foundation::ModelKind;
use crate::ports::{
    ArtifactFetcher, ClinicalClassifier, ClinicalModelLoader, ImageClassifier, ImageModelLoader,
    ModelProvider, ModelState, ModelStatus, ProvisioningError,
};

/// Where the artifacts live and where the image artifact can be fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSources {
    pub clinical_path: PathBuf,
    pub image_path: PathBuf,
    pub image_url: Option<String>,
    pub image_sha256: Option<String>,
}

impl From<&ModelsConfig> for ModelSources {
    fn from(config: &ModelsConfig) -> Self {
        Self {
            clinical_path: config.clinical_model_path.clone(),
            image_path: config.image_model_path.clone(),
            image_url: config.image_model_url.clone(),
            image_sha256: config.image_model_sha256.clone(),
        }
    }
}

/// Registry holding both classifier slots.
pub struct ModelRegistry {
    sources: ModelSources,
    clinical_loader: Arc<dyn ClinicalModelLoader>,
    image_loader: Arc<dyn ImageModelLoader>,
    fetcher: Arc<dyn ArtifactFetcher>,
    clinical: once_cell::sync::OnceCell<Arc<dyn ClinicalClassifier>>,
    image: Arc<tokio::sync::OnceCell<Arc<dyn ImageClassifier>>>,
}

impl ModelRegistry {
    pub fn new(
        sources: ModelSources,
        clinical_loader: Arc<dyn ClinicalModelLoader>,
        image_loader: Arc<dyn ImageModelLoader>,
        fetcher: Arc<dyn ArtifactFetcher>,
    ) -> Self {
        Self {
            sources,
            clinical_loader,
            image_loader,
            fetcher,
            clinical: once_cell::sync::OnceCell::new(),
            image: Arc::new(tokio::sync::OnceCell::new()),
        }
    }

    fn load_clinical(&self) -> Result<Arc<dyn ClinicalClassifier>, ProvisioningError> {
        debug!(path = %self.sources.clinical_path.display(), "Loading clinical model");
        self.clinical_loader.load(&self.sources.clinical_path)
    }

    fn image_provisioning(&self) -> ImageProvisioning {
        ImageProvisioning {
            path: self.sources.image_path.clone(),
            url: self.sources.image_url.clone(),
            sha256: self.sources.image_sha256.clone(),
            loader: Arc::clone(&self.image_loader),
            fetcher: Arc::clone(&self.fetcher),
            slot: Arc::clone(&self.image),
        }
    }
}

/// One owned attempt at filling the image slot.
///
/// Runs as its own task so a caller that goes away (request timeout, client
/// disconnect) does not abort a download other callers are waiting on.
struct ImageProvisioning {
    path: PathBuf,
    url: Option<String>,
    sha256: Option<String>,
    loader: Arc<dyn ImageModelLoader>,
    fetcher: Arc<dyn ArtifactFetcher>,
    slot: Arc<tokio::sync::OnceCell<Arc<dyn ImageClassifier>>>,
}

impl ImageProvisioning {
    async fn run(self) -> Result<Arc<dyn ImageClassifier>, ProvisioningError> {
        let classifier = self.slot.get_or_try_init(|| self.provision()).await?;
        Ok(Arc::clone(classifier))
    }

    async fn provision(&self) -> Result<Arc<dyn ImageClassifier>, ProvisioningError> {
        let present = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| ProvisioningError::Io(e.to_string()))?;

        if !present {
            let url = self.url.as_deref().ok_or_else(|| {
                ProvisioningError::Io(format!(
                    "{}: not found and no download URL is configured",
                    self.path.display()
                ))
            })?;
            debug!(url, path = %self.path.display(), "Fetching image model");
            self.fetcher
                .fetch(url, &self.path, self.sha256.as_deref())
                .await?;
        }

        let loader = Arc::clone(&self.loader);
        let path = self.path.clone();
        let classifier = tokio::task::spawn_blocking(move || loader.load(&path))
            .await
            .map_err(|e| ProvisioningError::Load(format!("load task failed: {}", e)))??;

        info!(model = %ModelKind::Imaging, "Model ready");
        Ok(classifier)
    }
}

#[async_trait]
impl ModelProvider for ModelRegistry {
    fn clinical_classifier(&self) -> Option<Arc<dyn ClinicalClassifier>> {
        match self.clinical.get_or_try_init(|| self.load_clinical()) {
            Ok(classifier) => Some(Arc::clone(classifier)),
            Err(e) => {
                warn!(model = %ModelKind::Clinical, error = %e, "Model unavailable");
                None
            }
        }
    }

    async fn image_classifier(&self) -> Result<Arc<dyn ImageClassifier>, ProvisioningError> {
        if let Some(classifier) = self.image.get() {
            return Ok(Arc::clone(classifier));
        }

        let outcome = tokio::spawn(self.image_provisioning().run())
            .await
            .map_err(|e| ProvisioningError::Load(format!("provisioning task failed: {}", e)))
            .and_then(|result| result);

        if let Err(e) = &outcome {
            warn!(model = %ModelKind::Imaging, error = %e, "Model unavailable");
        }
        outcome
    }

    fn status(&self) -> ModelStatus {
        ModelStatus {
            clinical: ModelState::from_loaded(self.clinical.get().is_some()),
            imaging: ModelState::from_loaded(self.image.initialized()),
        }
    }
}
