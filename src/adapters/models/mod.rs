//! Model adapters - Classifier implementations and the provisioning registry.

mod fixed;
mod logistic_pipeline;
mod onnx_image_classifier;
mod registry;

pub use fixed::{FixedClinicalClassifier, FixedImageClassifier, StaticModelProvider};
pub use logistic_pipeline::{JsonPipelineLoader, LogisticPipeline, LogisticPipelineArtifact};
pub use onnx_image_classifier::{OnnxImageClassifier, OnnxModelLoader};
pub use registry::{ModelRegistry, ModelSources};
