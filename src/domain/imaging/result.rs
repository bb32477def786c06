//! Confidence-threshold decision over an image classifier's score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{round_to, AssessmentError, DisplayTag, Severity};

use super::ConfidenceThreshold;

/// Raw classifier output in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageConfidenceScore(f64);

impl ImageConfidenceScore {
    /// Wraps a score, rejecting values outside [0, 1].
    pub fn new(value: f64) -> Result<Self, AssessmentError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(AssessmentError::InvalidImage(format!(
                "classifier score {} is outside [0, 1]",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Ultrasound classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImagingLabel {
    Noninfected,
    Infected,
}

const NONINFECTED_INSIGHTS: [&str; 4] = [
    "Normal ovarian size (<10 cm³).",
    "Fewer than 12 follicles, evenly distributed.",
    "Homogeneous ovarian stroma.",
    "No cystic patterns detected.",
];

const INFECTED_INSIGHTS: [&str; 5] = [
    "Increased ovarian size (>10 cm³).",
    "Presence of 12+ follicles (2-9 mm) arranged peripherally.",
    "\"String of pearls\" appearance observed.",
    "Increased stromal echogenicity.",
    "Potential thickened endometrium.",
];

impl ImagingLabel {
    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagingLabel::Noninfected => "Noninfected",
            ImagingLabel::Infected => "Infected",
        }
    }

    /// Static clinical insight bullets for this label.
    pub fn insights(&self) -> &'static [&'static str] {
        match self {
            ImagingLabel::Noninfected => &NONINFECTED_INSIGHTS,
            ImagingLabel::Infected => &INFECTED_INSIGHTS,
        }
    }

    /// Returns the display severity.
    pub fn severity(&self) -> Severity {
        match self {
            ImagingLabel::Noninfected => Severity::Normal,
            ImagingLabel::Infected => Severity::Elevated,
        }
    }
}

impl fmt::Display for ImagingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label chosen for one score under one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagingResult {
    pub label: ImagingLabel,
    pub score: ImageConfidenceScore,
    pub threshold: ConfidenceThreshold,
}

impl ImagingResult {
    /// `score >= threshold` is Noninfected, anything lower is Infected.
    pub fn decide(score: ImageConfidenceScore, threshold: ConfidenceThreshold) -> Self {
        let label = if score.value() >= threshold.value() {
            ImagingLabel::Noninfected
        } else {
            ImagingLabel::Infected
        };
        Self {
            label,
            score,
            threshold,
        }
    }

    /// Raw score as a percentage, rounded to one decimal.
    ///
    /// This is the classifier's score, not the confidence in the chosen
    /// label: an Infected result at score 0.3 reports 30.0.
    pub fn confidence_percentage(&self) -> f64 {
        round_to(self.score.value() * 100.0, 1)
    }

    /// Builds the presentation tag.
    pub fn display_tag(&self) -> DisplayTag {
        let mut tag = DisplayTag::new(self.label.as_str(), self.label.severity()).with_explanation(
            format!(
                "The ultrasound image is classified as {}.",
                self.label.as_str()
            ),
        );
        tag.explanation
            .extend(self.label.insights().iter().map(|s| s.to_string()));
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(score: f64, threshold: f64) -> ImagingResult {
        ImagingResult::decide(
            ImageConfidenceScore::new(score).unwrap(),
            ConfidenceThreshold::new(threshold).unwrap(),
        )
    }

    #[test]
    fn score_above_threshold_is_noninfected() {
        let result = decide(0.62, 0.5);
        assert_eq!(result.label, ImagingLabel::Noninfected);
        assert_eq!(result.confidence_percentage(), 62.0);
    }

    #[test]
    fn score_below_threshold_is_infected_and_reports_raw_score() {
        let result = decide(0.3, 0.5);
        assert_eq!(result.label, ImagingLabel::Infected);
        assert_eq!(result.confidence_percentage(), 30.0);
    }

    #[test]
    fn score_equal_to_threshold_is_noninfected() {
        assert_eq!(decide(0.5, 0.5).label, ImagingLabel::Noninfected);
        assert_eq!(decide(0.0, 0.0).label, ImagingLabel::Noninfected);
    }

    #[test]
    fn same_score_different_thresholds_can_disagree() {
        assert_eq!(decide(0.6, 0.5).label, ImagingLabel::Noninfected);
        assert_eq!(decide(0.6, 0.7).label, ImagingLabel::Infected);
    }

    #[test]
    fn confidence_rounds_to_one_decimal() {
        assert_eq!(decide(0.12345, 0.5).confidence_percentage(), 12.3);
        assert_eq!(decide(0.98765, 0.5).confidence_percentage(), 98.8);
    }

    #[test]
    fn score_outside_unit_interval_is_rejected() {
        assert!(ImageConfidenceScore::new(1.5).is_err());
        assert!(ImageConfidenceScore::new(f64::INFINITY).is_err());
    }

    #[test]
    fn insights_follow_label_not_score() {
        assert_eq!(decide(0.99, 0.5).label.insights().len(), 4);
        assert_eq!(decide(0.01, 0.5).label.insights().len(), 5);
    }

    #[test]
    fn display_tag_lists_insights() {
        let tag = decide(0.3, 0.5).display_tag();
        assert_eq!(tag.label, "Infected");
        assert_eq!(tag.severity, Severity::Elevated);
        assert_eq!(tag.explanation.len(), 6);
    }
}
