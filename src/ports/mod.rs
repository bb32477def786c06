//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Model Ports
//!
//! - `ClinicalClassifier` / `ImageClassifier` - Loaded model capabilities
//! - `ClinicalModelLoader` / `ImageModelLoader` - Artifact to classifier
//! - `ArtifactFetcher` - Remote artifact download
//! - `ModelProvider` - Process-wide lazily provisioned singletons
//!
//! ## Export Ports
//!
//! - `ResultStore` - Persistence of rendered imaging summaries

mod artifact_fetcher;
mod classifier;
mod model_loader;
mod model_provider;
mod result_store;

pub use artifact_fetcher::ArtifactFetcher;
pub use classifier::{ClassifierError, ClinicalClassifier, ImageClassifier};
pub use model_loader::{ClinicalModelLoader, ImageModelLoader, ProvisioningError};
pub use model_provider::{ModelProvider, ModelState, ModelStatus};
pub use result_store::{ResultStore, ResultStoreError};
