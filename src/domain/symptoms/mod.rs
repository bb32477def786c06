//! Symptom Rule Engine - Rotterdam-style criteria grouping over
//! self-reported yes/no answers.
//!
//! The engine is a pure function: answers are partitioned into the three
//! scored bands, each band is OR-ed, the satisfied bands are counted, and the
//! count is looked up in a small decision table.

mod criteria;
mod questionnaire;
mod responses;

pub use criteria::{CriterionBand, CriterionSatisfaction, RiskLevel};
pub use questionnaire::{
    SymptomQuestion, ROTTERDAM_ADVISORY, SYMPTOM_QUESTIONS, SYMPTOM_QUESTION_COUNT,
};
pub use responses::SymptomResponseVector;

use serde::Serialize;

use crate::domain::foundation::DisplayTag;

/// Outcome of a symptom assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomAssessment {
    pub risk_level: RiskLevel,
    pub criteria: CriterionSatisfaction,
    pub criteria_count: u8,
    pub display: DisplayTag,
}

impl SymptomAssessment {
    /// Returns the hex display color for the risk level.
    pub fn color(&self) -> &str {
        &self.display.color
    }
}

/// Stateless scorer for symptom responses.
pub struct SymptomRuleEngine;

impl SymptomRuleEngine {
    /// Scores one submission.
    pub fn assess(responses: &SymptomResponseVector) -> SymptomAssessment {
        let criteria = CriterionSatisfaction::from_responses(responses);
        let criteria_count = criteria.count();
        let risk_level = RiskLevel::from_criteria_count(criteria_count);

        SymptomAssessment {
            risk_level,
            criteria,
            criteria_count,
            display: risk_level.display_tag().with_explanation(ROTTERDAM_ADVISORY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vector(bits: [u8; 11]) -> SymptomResponseVector {
        SymptomResponseVector::from_flags(&bits).unwrap()
    }

    #[test]
    fn all_no_is_low_risk() {
        let result = SymptomRuleEngine::assess(&vector([0; 11]));
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.criteria_count, 0);
        assert_eq!(result.color(), "#4CAF50");
    }

    #[test]
    fn single_ovulatory_answer_is_moderate_risk() {
        let result = SymptomRuleEngine::assess(&vector([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.criteria_count, 1);
        assert_eq!(result.display.label, "Moderate Risk");
    }

    #[test]
    fn ovulatory_and_morphology_bands_are_high_risk() {
        let result = SymptomRuleEngine::assess(&vector([0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0]));
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.criteria.ovulatory_dysfunction);
        assert!(!result.criteria.hyperandrogenism);
        assert!(result.criteria.polycystic_morphology);
    }

    #[test]
    fn several_answers_in_one_band_count_once() {
        let result = SymptomRuleEngine::assess(&vector([0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0]));
        assert_eq!(result.criteria_count, 1);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn informational_answers_are_not_scored() {
        let result = SymptomRuleEngine::assess(&vector([0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1]));
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn assessment_carries_rotterdam_advisory() {
        let result = SymptomRuleEngine::assess(&vector([0; 11]));
        assert_eq!(result.display.explanation, vec![ROTTERDAM_ADVISORY.to_string()]);
    }

    proptest! {
        #[test]
        fn criteria_count_matches_band_definition(answers in prop::array::uniform11(any::<bool>())) {
            let responses = SymptomResponseVector::new(answers);
            let result = SymptomRuleEngine::assess(&responses);

            let expected = [0..3, 3..6, 6..8]
                .into_iter()
                .filter(|band| answers[band.clone()].iter().any(|a| *a))
                .count() as u8;

            prop_assert_eq!(result.criteria_count, expected);
            prop_assert_eq!(result.risk_level, RiskLevel::from_criteria_count(expected));
        }

        #[test]
        fn risk_is_monotonic_in_criteria_count(a in 0u8..=3, b in 0u8..=3) {
            if a <= b {
                prop_assert!(RiskLevel::from_criteria_count(a) <= RiskLevel::from_criteria_count(b));
            }
        }

        #[test]
        fn adding_a_yes_never_lowers_risk(
            answers in prop::array::uniform11(any::<bool>()),
            flip in 0usize..11,
        ) {
            let before = SymptomRuleEngine::assess(&SymptomResponseVector::new(answers));
            let mut raised = answers;
            raised[flip] = true;
            let after = SymptomRuleEngine::assess(&SymptomResponseVector::new(raised));
            prop_assert!(after.risk_level >= before.risk_level);
        }
    }
}
