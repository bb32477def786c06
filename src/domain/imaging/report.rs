//! Plain-text imaging summary for download or on-disk export.

use serde::Serialize;

use crate::domain::foundation::{AssessmentId, Timestamp};

use super::ImagingResult;

/// Name used when the caller gives none.
pub const DEFAULT_PATIENT_NAME: &str = "Patient";

/// Exportable summary of one imaging result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagingReport {
    pub assessment_id: AssessmentId,
    pub patient_name: String,
    pub result: ImagingResult,
    pub generated_at: Timestamp,
}

impl ImagingReport {
    /// Creates a report for a result.
    pub fn new(assessment_id: AssessmentId, patient_name: Option<&str>, result: ImagingResult) -> Self {
        let patient_name = patient_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_PATIENT_NAME)
            .to_string();
        Self {
            assessment_id,
            patient_name,
            result,
            generated_at: Timestamp::now(),
        }
    }

    /// Renders the summary text.
    ///
    /// ```text
    /// Result: <label>
    /// Prediction Confidence: <pct>%
    ///
    /// Clinical Insights:
    /// - <insight>
    /// ```
    pub fn render(&self) -> String {
        let mut text = format!(
            "Result: {}\nPrediction Confidence: {:.1}%\n\nClinical Insights:",
            self.result.label,
            self.result.confidence_percentage()
        );
        for insight in self.result.label.insights() {
            text.push_str("\n- ");
            text.push_str(insight);
        }
        text
    }

    /// File name for the exported summary: `<patient>_PCOS_Result.txt`.
    pub fn file_name(&self) -> String {
        format!("{}_PCOS_Result.txt", sanitize_file_stem(&self.patient_name))
    }
}

/// Reduces a display name to a safe single path component.
fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        DEFAULT_PATIENT_NAME.to_string()
    } else {
        trimmed.chars().take(64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::imaging::{ConfidenceThreshold, ImageConfidenceScore};

    fn result(score: f64) -> ImagingResult {
        ImagingResult::decide(
            ImageConfidenceScore::new(score).unwrap(),
            ConfidenceThreshold::DEFAULT,
        )
    }

    #[test]
    fn renders_noninfected_summary() {
        let report = ImagingReport::new(AssessmentId::new(), Some("Ada"), result(0.62));
        assert_eq!(
            report.render(),
            "Result: Noninfected\n\
             Prediction Confidence: 62.0%\n\
             \n\
             Clinical Insights:\n\
             - Normal ovarian size (<10 cm³).\n\
             - Fewer than 12 follicles, evenly distributed.\n\
             - Homogeneous ovarian stroma.\n\
             - No cystic patterns detected."
        );
    }

    #[test]
    fn renders_infected_summary_with_raw_score() {
        let text = ImagingReport::new(AssessmentId::new(), None, result(0.3)).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Result: Infected");
        assert_eq!(lines[1], "Prediction Confidence: 30.0%");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Clinical Insights:");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn file_name_defaults_to_patient() {
        let report = ImagingReport::new(AssessmentId::new(), Some("  "), result(0.9));
        assert_eq!(report.file_name(), "Patient_PCOS_Result.txt");
    }

    #[test]
    fn file_name_strips_path_separators() {
        let report = ImagingReport::new(AssessmentId::new(), Some("../../etc/Jane Doe"), result(0.9));
        let name = report.file_name();
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
        assert_eq!(name, "etc_Jane_Doe_PCOS_Result.txt");
    }
}
