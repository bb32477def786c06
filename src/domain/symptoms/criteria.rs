//! Rotterdam-style criterion bands and the count-to-risk decision table.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::domain::foundation::{DisplayTag, Severity};

use super::SymptomResponseVector;

/// Groups of symptom answers that each evidence one diagnostic criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionBand {
    OvulatoryDysfunction,
    Hyperandrogenism,
    PolycysticMorphology,
    /// Collected for context, never scored.
    Informational,
}

impl CriterionBand {
    /// The bands that count toward the criteria total, in canonical order.
    pub fn scored() -> &'static [CriterionBand] {
        &[
            CriterionBand::OvulatoryDysfunction,
            CriterionBand::Hyperandrogenism,
            CriterionBand::PolycysticMorphology,
        ]
    }

    /// Answer positions belonging to this band.
    pub fn positions(&self) -> Range<usize> {
        match self {
            CriterionBand::OvulatoryDysfunction => 0..3,
            CriterionBand::Hyperandrogenism => 3..6,
            CriterionBand::PolycysticMorphology => 6..8,
            CriterionBand::Informational => 8..11,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionBand::OvulatoryDysfunction => "Ovulatory dysfunction",
            CriterionBand::Hyperandrogenism => "Hyperandrogenism",
            CriterionBand::PolycysticMorphology => "Polycystic ovarian morphology",
            CriterionBand::Informational => "Additional symptoms",
        }
    }
}

/// Which scored bands have at least one positive answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionSatisfaction {
    pub ovulatory_dysfunction: bool,
    pub hyperandrogenism: bool,
    pub polycystic_morphology: bool,
}

impl CriterionSatisfaction {
    /// Derives satisfaction from a response vector.
    pub fn from_responses(responses: &SymptomResponseVector) -> Self {
        let satisfied = |band: CriterionBand| band.positions().any(|i| responses.answer(i));
        Self {
            ovulatory_dysfunction: satisfied(CriterionBand::OvulatoryDysfunction),
            hyperandrogenism: satisfied(CriterionBand::Hyperandrogenism),
            polycystic_morphology: satisfied(CriterionBand::PolycysticMorphology),
        }
    }

    /// Returns whether a band is satisfied. Informational is never satisfied.
    pub fn is_satisfied(&self, band: CriterionBand) -> bool {
        match band {
            CriterionBand::OvulatoryDysfunction => self.ovulatory_dysfunction,
            CriterionBand::Hyperandrogenism => self.hyperandrogenism,
            CriterionBand::PolycysticMorphology => self.polycystic_morphology,
            CriterionBand::Informational => false,
        }
    }

    /// Number of satisfied bands (0-3).
    pub fn count(&self) -> u8 {
        CriterionBand::scored()
            .iter()
            .filter(|band| self.is_satisfied(**band))
            .count() as u8
    }
}

/// Discrete symptom risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Rows of the decision table: (minimum criteria count, level).
///
/// Scanned from the top; the first row whose minimum is met wins.
const RISK_TABLE: [(u8, RiskLevel); 3] = [
    (2, RiskLevel::High),
    (1, RiskLevel::Moderate),
    (0, RiskLevel::Low),
];

impl RiskLevel {
    /// Maps a satisfied-criteria count to a risk level.
    pub fn from_criteria_count(count: u8) -> Self {
        RISK_TABLE
            .iter()
            .find(|(min, _)| count >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(RiskLevel::Low)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// Returns the display severity.
    pub fn severity(&self) -> Severity {
        match self {
            RiskLevel::Low => Severity::Normal,
            RiskLevel::Moderate => Severity::Caution,
            RiskLevel::High => Severity::Elevated,
        }
    }

    /// Returns the hex display color.
    pub fn color(&self) -> &'static str {
        self.severity().color()
    }

    /// Builds the presentation tag for this level.
    pub fn display_tag(&self) -> DisplayTag {
        DisplayTag::new(self.label(), self.severity())
    }
}
