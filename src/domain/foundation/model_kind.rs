//! ModelKind enum naming the two externally provisioned models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The predictive artifacts consumed by the assessment pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Probabilistic classifier over clinical measurements.
    Clinical,
    /// Binary classifier over ultrasound images.
    Imaging,
}

impl ModelKind {
    /// Returns all model kinds.
    pub fn all() -> &'static [ModelKind] {
        &[ModelKind::Clinical, ModelKind::Imaging]
    }

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Clinical => "clinical",
            ModelKind::Imaging => "imaging",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
