//! ONNX Runtime image classifier.
//!
//! Runs a single-output model over a `[1, side, side, 3]` f32 tensor and
//! reads the first element of the first output as the score.

use std::path::Path;
use std::sync::{Arc, Mutex};

use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use crate::domain::imaging::NormalizedImageTensor;
use crate::ports::{ClassifierError, ImageClassifier, ImageModelLoader, ProvisioningError};

/// Image classifier backed by an ort `Session`.
pub struct OnnxImageClassifier {
    /// `run` needs `&mut Session`.
    session: Mutex<Session>,
    side: u32,
}

impl OnnxImageClassifier {
    /// Loads an ONNX model expecting `side`x`side` RGB input.
    ///
    /// # Errors
    ///
    /// Returns `ProvisioningError::Io` if the file does not exist and
    /// `ProvisioningError::Load` if ONNX Runtime rejects it.
    pub fn load(path: &Path, side: u32) -> Result<Self, ProvisioningError> {
        if !path.exists() {
            return Err(ProvisioningError::Io(format!(
                "{}: model file not found",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| ProvisioningError::Load(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| ProvisioningError::Load(e.to_string()))?
            .commit_from_file(path)
            .map_err(|e| ProvisioningError::Load(e.to_string()))?;

        debug!(path = %path.display(), side, "ONNX image model loaded");

        Ok(Self {
            session: Mutex::new(session),
            side,
        })
    }
}

impl ImageClassifier for OnnxImageClassifier {
    fn score(&self, tensor: &NormalizedImageTensor) -> Result<f64, ClassifierError> {
        if tensor.side() != self.side {
            return Err(ClassifierError::RejectedInput(format!(
                "model expects {}x{} input, got {}x{}",
                self.side,
                self.side,
                tensor.side(),
                tensor.side()
            )));
        }

        let input = Tensor::from_array((tensor.shape().to_vec(), tensor.as_slice().to_vec()))
            .map_err(|e| ClassifierError::Inference(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ClassifierError::Inference(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| ClassifierError::InvalidOutput("no output tensor".to_string()))?;

        let (_shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::InvalidOutput(format!("tensor extraction failed: {e}")))?;

        let score = data
            .first()
            .copied()
            .map(f64::from)
            .ok_or_else(|| ClassifierError::InvalidOutput("empty output tensor".to_string()))?;

        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ClassifierError::InvalidOutput(format!(
                "score {} is outside [0, 1]",
                score
            )));
        }
        Ok(score)
    }
}

/// Loads `OnnxImageClassifier` instances at a fixed input resolution.
#[derive(Debug, Clone, Copy)]
pub struct OnnxModelLoader {
    side: u32,
}

impl OnnxModelLoader {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl ImageModelLoader for OnnxModelLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn ImageClassifier>, ProvisioningError> {
        Ok(Arc::new(OnnxImageClassifier::load(path, self.side)?))
    }
}
