//! Canonical symptom questionnaire.
//!
//! The order of [`SYMPTOM_QUESTIONS`] is the order of answers in a
//! [`SymptomResponseVector`](super::SymptomResponseVector).

use serde::Serialize;

use super::CriterionBand;

/// One fixed yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomQuestion {
    pub text: &'static str,
    pub hint: &'static str,
    pub band: CriterionBand,
}

/// Number of questions in the questionnaire.
pub const SYMPTOM_QUESTION_COUNT: usize = 11;

/// The questionnaire in canonical order.
pub const SYMPTOM_QUESTIONS: [SymptomQuestion; SYMPTOM_QUESTION_COUNT] = [
    SymptomQuestion {
        text: "Do you have irregular or missed periods (fewer than 9 per year)?",
        hint: "Irregular periods are a common sign of ovulatory dysfunction.",
        band: CriterionBand::OvulatoryDysfunction,
    },
    SymptomQuestion {
        text: "Have you gone more than 35 days without a period?",
        hint: "Long cycles may indicate hormonal imbalances.",
        band: CriterionBand::OvulatoryDysfunction,
    },
    SymptomQuestion {
        text: "Do you often experience very light or very heavy periods?",
        hint: "Extreme variations in period flow can be a sign of ovulatory issues.",
        band: CriterionBand::OvulatoryDysfunction,
    },
    SymptomQuestion {
        text: "Do you have excessive hair growth on your face, chest, or back?",
        hint: "Hirsutism is a key indicator of high androgen levels.",
        band: CriterionBand::Hyperandrogenism,
    },
    SymptomQuestion {
        text: "Have you noticed persistent acne or very oily skin?",
        hint: "High androgen levels can cause persistent acne and oiliness.",
        band: CriterionBand::Hyperandrogenism,
    },
    SymptomQuestion {
        text: "Do you experience significant hair thinning or hair loss on your scalp?",
        hint: "Male-pattern baldness or thinning hair may suggest hormonal imbalance.",
        band: CriterionBand::Hyperandrogenism,
    },
    SymptomQuestion {
        text: "Have you been diagnosed with polycystic ovaries on an ultrasound?",
        hint: "Polycystic ovaries are a diagnostic factor for PCOS.",
        band: CriterionBand::PolycysticMorphology,
    },
    SymptomQuestion {
        text: "Have you ever been diagnosed with ovarian cysts?",
        hint: "Ovarian cysts can contribute to PCOS symptoms.",
        band: CriterionBand::PolycysticMorphology,
    },
    SymptomQuestion {
        text: "Do you have unexplained weight gain or difficulty losing weight?",
        hint: "Insulin resistance can lead to weight gain in PCOS.",
        band: CriterionBand::Informational,
    },
    SymptomQuestion {
        text: "Do you feel unusually fatigued or low on energy?",
        hint: "Hormonal imbalances can cause fatigue.",
        band: CriterionBand::Informational,
    },
    SymptomQuestion {
        text: "Do you have darkened patches of skin (e.g., on your neck, armpits, or groin)?",
        hint: "Acanthosis nigricans is often linked to insulin resistance.",
        band: CriterionBand::Informational,
    },
];

/// Advisory paragraph shown with every symptom assessment.
pub const ROTTERDAM_ADVISORY: &str = "The Rotterdam Criteria require at least 2 out of 3 factors \
(Irregular periods, Hyperandrogenism, Polycystic ovaries) to diagnose PCOS. If you are at \
moderate or high risk, consider consulting a healthcare professional for further evaluation.";
