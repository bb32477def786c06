//! Display-only clinical intake details.
//!
//! Nothing here feeds the decision; the fields are echoed back so the
//! form collaborator can render them next to the result.

use serde::{Deserialize, Serialize};

/// Average menstrual cycle length as selected on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleLength {
    LessThan25Days,
    From25To34Days,
    From35To60Days,
    MoreThan60Days,
    TotallyVariable,
}

/// Whether the ultrasound report mentioned stromal or endometrial changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StromaFinding {
    Yes,
    No,
    NotSure,
}

/// Free-form details captured alongside the clinical measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalIntake {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cycle_length: Option<CycleLength>,
    #[serde(default)]
    pub excess_hair_growth: Option<bool>,
    #[serde(default)]
    pub follicle_count: Option<u32>,
    #[serde(default)]
    pub ovarian_volume_cm3: Option<f64>,
    #[serde(default)]
    pub stroma_endometrial: Option<StromaFinding>,
    #[serde(default)]
    pub ultrasound_findings: Vec<String>,
}

impl ClinicalIntake {
    /// Name to address in the result, falling back to "the patient".
    pub fn display_name(&self) -> &str {
        self.patient_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("the patient")
    }

    /// Non-empty notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}
