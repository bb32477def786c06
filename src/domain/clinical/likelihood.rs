//! Probability-threshold decision over a clinical classifier's output.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AssessmentError, DisplayTag, Percentage, Severity, ValidationError,
};

/// Likelihood percentage strictly above which the diagnosis is "Likely".
///
/// A likelihood of exactly 50% is "Unlikely".
pub const LIKELY_ABOVE_PERCENT: f64 = 50.0;

/// Tolerance when checking that a probability pair sums to one.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Class-probability pair returned by a clinical classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub negative: f64,
    pub positive: f64,
}

impl ClassProbabilities {
    /// Validates a raw `[negative, positive]` pair.
    pub fn try_new(negative: f64, positive: f64) -> Result<Self, ValidationError> {
        for (field, p) in [("negative_probability", negative), ("positive_probability", positive)] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(ValidationError::out_of_range(field, 0.0, 1.0, p));
            }
        }
        if ((negative + positive) - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(ValidationError::invalid_format(
                "class_probabilities",
                format!("probabilities sum to {}, expected 1", negative + positive),
            ));
        }
        Ok(Self { negative, positive })
    }
}

/// Binary clinical diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    Likely,
    Unlikely,
}

impl Diagnosis {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::Likely => "PCOS Likely",
            Diagnosis::Unlikely => "PCOS Unlikely",
        }
    }

    /// Returns the advisory sentence shown with the diagnosis.
    pub fn advisory(&self) -> &'static str {
        match self {
            Diagnosis::Likely => {
                "Based on the provided information, it is likely that the patient has PCOS. \
                 Please consult with a healthcare provider for further evaluation and confirmation."
            }
            Diagnosis::Unlikely => {
                "Based on the provided information, it is unlikely that the patient has PCOS. \
                 Please consult with a healthcare provider for further evaluation if symptoms persist."
            }
        }
    }

    /// Returns the display severity.
    pub fn severity(&self) -> Severity {
        match self {
            Diagnosis::Likely => Severity::Elevated,
            Diagnosis::Unlikely => Severity::Normal,
        }
    }
}

/// Diagnosis label plus the positive-class likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LikelihoodResult {
    pub diagnosis: Diagnosis,
    pub likelihood: Percentage,
}

impl LikelihoodResult {
    /// Applies the decision rule to a classifier's output.
    pub fn from_probabilities(probabilities: ClassProbabilities) -> Result<Self, AssessmentError> {
        let likelihood = Percentage::from_fraction(probabilities.positive)?;
        let diagnosis = if likelihood.value() > LIKELY_ABOVE_PERCENT {
            Diagnosis::Likely
        } else {
            Diagnosis::Unlikely
        };
        Ok(Self {
            diagnosis,
            likelihood,
        })
    }

    /// Likelihood rounded to two decimals for display.
    pub fn likelihood_percentage(&self) -> f64 {
        self.likelihood.rounded(2)
    }

    /// Builds the presentation tag.
    pub fn display_tag(&self) -> DisplayTag {
        DisplayTag::new(self.diagnosis.label(), self.diagnosis.severity())
            .with_explanation(format!("PCOS Likelihood: {:.2}%", self.likelihood_percentage()))
            .with_explanation(self.diagnosis.advisory())
    }
}
