//! Clinical Likelihood Decision - turns a probabilistic classifier's
//! output over twelve clinical measurements into a diagnosis label.

mod features;
mod intake;
mod likelihood;

pub use features::{
    body_mass_index, ClinicalFeatureVector, ClinicalField, ClinicalMeasurements,
    CLINICAL_FIELD_COUNT,
};
pub use intake::{ClinicalIntake, CycleLength, StromaFinding};
pub use likelihood::{ClassProbabilities, Diagnosis, LikelihoodResult, LIKELY_ABOVE_PERCENT};

use serde::Serialize;

use crate::domain::foundation::DisplayTag;

/// Outcome of a clinical assessment, with the intake echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicalAssessment {
    pub result: LikelihoodResult,
    pub body_mass_index: Option<f64>,
    pub intake: ClinicalIntake,
    pub display: DisplayTag,
}

impl ClinicalAssessment {
    /// Assembles the assessment and its presentation text.
    pub fn new(result: LikelihoodResult, features: &ClinicalFeatureVector, intake: ClinicalIntake) -> Self {
        let mut display = result.display_tag();
        display.explanation.insert(
            0,
            format!("Prediction for {}: {}", intake.display_name(), result.diagnosis.label()),
        );
        if let Some(notes) = intake.notes() {
            display
                .explanation
                .push(format!("Additional Notes Provided: {}", notes));
        }

        Self {
            result,
            body_mass_index: features.get(ClinicalField::BodyMassIndex),
            intake,
            display,
        }
    }
}
