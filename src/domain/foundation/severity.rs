//! Severity tag shared by every pipeline's presentation contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display severity attached to every assessment outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Caution,
    Elevated,
}

impl Severity {
    /// Returns the hex display color for this severity.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Normal => "#4CAF50",
            Severity::Caution => "#FF9800",
            Severity::Elevated => "#F44336",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Normal => "normal",
            Severity::Caution => "caution",
            Severity::Elevated => "elevated",
        };
        write!(f, "{}", s)
    }
}

/// Uniform outcome shape: a label, its severity and supporting text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTag {
    pub label: String,
    pub severity: Severity,
    pub color: String,
    pub explanation: Vec<String>,
}

impl DisplayTag {
    /// Creates a tag whose color follows the severity.
    pub fn new(label: impl Into<String>, severity: Severity) -> Self {
        Self {
            label: label.into(),
            severity,
            color: severity.color().to_string(),
            explanation: Vec::new(),
        }
    }

    /// Appends a line of explanatory text.
    pub fn with_explanation(mut self, line: impl Into<String>) -> Self {
        self.explanation.push(line.into());
        self
    }
}
