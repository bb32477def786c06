//! JSON Logistic Pipeline - Clinical classifier artifact.
//!
//! The artifact is a standardize-then-logistic-regression pipeline stored as
//! JSON:
//!
//! ```json
//! {
//!   "features": ["Age", "BMI", "..."],
//!   "imputation": { "BMI": 24.5 },
//!   "scaler_mean": [31.2, 24.5],
//!   "scaler_scale": [6.1, 4.3],
//!   "coefficients": [0.12, 0.85],
//!   "intercept": -1.7
//! }
//! ```
//!
//! Columns may appear in any order but must be exactly the twelve canonical
//! clinical columns.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::domain::clinical::{ClinicalFeatureVector, ClinicalField, CLINICAL_FIELD_COUNT};
use crate::ports::{ClassifierError, ClinicalClassifier, ClinicalModelLoader, ProvisioningError};

/// On-disk representation of the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticPipelineArtifact {
    pub features: Vec<String>,
    #[serde(default)]
    pub imputation: HashMap<String, f64>,
    pub scaler_mean: Vec<f64>,
    pub scaler_scale: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Column {
    fill: Option<f64>,
    mean: f64,
    scale: f64,
    coefficient: f64,
}

/// Validated pipeline with columns resolved into canonical field order.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticPipeline {
    columns: [Column; CLINICAL_FIELD_COUNT],
    intercept: f64,
}

impl LogisticPipeline {
    /// Validates an artifact and resolves its column order.
    ///
    /// # Errors
    ///
    /// Returns `ProvisioningError::Contract` if the column set, vector lengths
    /// or scale values do not form a usable pipeline.
    pub fn from_artifact(artifact: LogisticPipelineArtifact) -> Result<Self, ProvisioningError> {
        let n = artifact.features.len();
        if n != CLINICAL_FIELD_COUNT {
            return Err(ProvisioningError::Contract(format!(
                "expected {} feature columns, found {}",
                CLINICAL_FIELD_COUNT, n
            )));
        }
        for (name, len) in [
            ("scaler_mean", artifact.scaler_mean.len()),
            ("scaler_scale", artifact.scaler_scale.len()),
            ("coefficients", artifact.coefficients.len()),
        ] {
            if len != n {
                return Err(ProvisioningError::Contract(format!(
                    "{} has {} entries, expected {}",
                    name, len, n
                )));
            }
        }
        if !artifact.intercept.is_finite() {
            return Err(ProvisioningError::Contract("intercept is not finite".to_string()));
        }

        let mut slots: [Option<Column>; CLINICAL_FIELD_COUNT] = [None; CLINICAL_FIELD_COUNT];
        for (i, name) in artifact.features.iter().enumerate() {
            let field = ClinicalField::from_column_name(name).ok_or_else(|| {
                ProvisioningError::Contract(format!("unknown feature column '{}'", name))
            })?;
            if slots[field.index()].is_some() {
                return Err(ProvisioningError::Contract(format!(
                    "duplicate feature column '{}'",
                    name
                )));
            }

            let column = Column {
                fill: artifact.imputation.get(name).copied(),
                mean: artifact.scaler_mean[i],
                scale: artifact.scaler_scale[i],
                coefficient: artifact.coefficients[i],
            };
            if !column.mean.is_finite()
                || !column.coefficient.is_finite()
                || !column.scale.is_finite()
                || column.scale == 0.0
                || column.fill.map_or(false, |f| !f.is_finite())
            {
                return Err(ProvisioningError::Contract(format!(
                    "column '{}' has a non-finite or zero-scale parameter",
                    name
                )));
            }
            slots[field.index()] = Some(column);
        }

        let declared: HashSet<&str> = artifact.imputation.keys().map(String::as_str).collect();
        if let Some(stray) = declared
            .iter()
            .find(|k| !artifact.features.iter().any(|f| f == *k))
        {
            return Err(ProvisioningError::Contract(format!(
                "imputation references unknown column '{}'",
                stray
            )));
        }

        let mut columns = [Column {
            fill: None,
            mean: 0.0,
            scale: 1.0,
            coefficient: 0.0,
        }; CLINICAL_FIELD_COUNT];
        for (slot, column) in slots.iter().zip(columns.iter_mut()) {
            // Twelve distinct known names fill all twelve slots.
            *column = slot.ok_or_else(|| {
                ProvisioningError::Contract("feature columns do not cover every field".to_string())
            })?;
        }

        Ok(Self {
            columns,
            intercept: artifact.intercept,
        })
    }

    /// Parses and validates a JSON artifact.
    pub fn from_json(json: &str) -> Result<Self, ProvisioningError> {
        let artifact: LogisticPipelineArtifact =
            serde_json::from_str(json).map_err(|e| ProvisioningError::Load(e.to_string()))?;
        Self::from_artifact(artifact)
    }

    fn decision_function(&self, features: &ClinicalFeatureVector) -> Result<f64, ClassifierError> {
        let mut z = self.intercept;
        for (field, value) in features.iter() {
            let column = &self.columns[field.index()];
            let x = value.or(column.fill).ok_or_else(|| {
                ClassifierError::RejectedInput(format!(
                    "{} is undefined and the model has no fill value for it",
                    field.column_name()
                ))
            })?;
            z += column.coefficient * (x - column.mean) / column.scale;
        }
        Ok(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl ClinicalClassifier for LogisticPipeline {
    fn predict_proba(&self, features: &ClinicalFeatureVector) -> Result<[f64; 2], ClassifierError> {
        let z = self.decision_function(features)?;
        let positive = sigmoid(z);
        if !positive.is_finite() {
            return Err(ClassifierError::InvalidOutput(format!(
                "decision value {} produced a non-finite probability",
                z
            )));
        }
        Ok([1.0 - positive, positive])
    }
}

/// Loads the pipeline from a JSON file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPipelineLoader;

impl ClinicalModelLoader for JsonPipelineLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn ClinicalClassifier>, ProvisioningError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ProvisioningError::Io(format!("{}: {}", path.display(), e)))?;
        let pipeline = LogisticPipeline::from_json(&json)?;
        debug!(path = %path.display(), "Clinical pipeline loaded");
        Ok(Arc::new(pipeline))
    }
}
