//! Assessment command handlers.
//!
//! Each handler fetches what it needs from the ports and hands the pure
//! decision to the domain.

mod assess_clinical;
mod assess_image;
mod assess_symptoms;
mod export_imaging_report;

pub use assess_clinical::{AssessClinicalCommand, AssessClinicalHandler, AssessClinicalResult};
pub use assess_image::{AssessImageCommand, AssessImageHandler, AssessImageResult, ImageInput};
pub use assess_symptoms::{AssessSymptomsCommand, AssessSymptomsHandler, AssessSymptomsResult};
pub use export_imaging_report::{
    ExportImagingReportCommand, ExportImagingReportHandler, ExportImagingReportResult,
};
