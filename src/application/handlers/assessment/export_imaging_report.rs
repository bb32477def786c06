//! ExportImagingReportHandler - Renders an imaging summary for download and
//! optionally persists it.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::foundation::{AssessmentError, AssessmentId};
use crate::domain::imaging::{ConfidenceThreshold, ImageConfidenceScore, ImagingReport, ImagingResult};
use crate::ports::ResultStore;

/// Command to export a previously computed imaging result.
#[derive(Debug, Clone)]
pub struct ExportImagingReportCommand {
    pub patient_name: Option<String>,
    pub score: f64,
    pub threshold: f64,
    /// Write the summary to the result store as well as returning it.
    pub save: bool,
}

/// Rendered summary and, when saved, where it went.
#[derive(Debug, Clone)]
pub struct ExportImagingReportResult {
    pub report: ImagingReport,
    pub file_name: String,
    pub text: String,
    pub saved_to: Option<PathBuf>,
}

/// Handler for report export.
pub struct ExportImagingReportHandler {
    store: Arc<dyn ResultStore>,
}

impl ExportImagingReportHandler {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ExportImagingReportCommand,
    ) -> Result<ExportImagingReportResult, AssessmentError> {
        let score = ImageConfidenceScore::new(cmd.score)?;
        let threshold = ConfidenceThreshold::new(cmd.threshold)?;
        let result = ImagingResult::decide(score, threshold);
        let report = ImagingReport::new(AssessmentId::new(), cmd.patient_name.as_deref(), result);

        let saved_to = if cmd.save {
            let path = self
                .store
                .save(&report)
                .await
                .map_err(|e| AssessmentError::Export(e.to_string()))?;
            Some(path)
        } else {
            None
        };

        Ok(ExportImagingReportResult {
            file_name: report.file_name(),
            text: report.render(),
            report,
            saved_to,
        })
    }
}
