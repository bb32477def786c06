//! Imaging Confidence Decision - classifies an ultrasound image by comparing
//! an external classifier's score with a caller-supplied threshold.

mod report;
mod result;
mod tensor;
mod threshold;

pub use report::{ImagingReport, DEFAULT_PATIENT_NAME};
pub use result::{ImageConfidenceScore, ImagingLabel, ImagingResult};
pub use tensor::{NormalizedImageTensor, DEFAULT_IMAGE_SIDE, IMAGE_CHANNELS};
pub use threshold::ConfidenceThreshold;

use serde::Serialize;

use crate::domain::foundation::DisplayTag;

/// Outcome of an imaging assessment with its exportable summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagingAssessment {
    pub result: ImagingResult,
    pub confidence_percentage: f64,
    pub display: DisplayTag,
    pub report: ImagingReport,
}

impl ImagingAssessment {
    /// Assembles the assessment for a decided result.
    pub fn new(report: ImagingReport) -> Self {
        let result = report.result;
        Self {
            result,
            confidence_percentage: result.confidence_percentage(),
            display: result.display_tag(),
            report,
        }
    }
}
