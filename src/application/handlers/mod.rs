//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessClinicalCommand, AssessClinicalHandler, AssessClinicalResult, AssessImageCommand,
    AssessImageHandler, AssessImageResult, AssessSymptomsCommand, AssessSymptomsHandler,
    AssessSymptomsResult, ExportImagingReportCommand, ExportImagingReportHandler,
    ExportImagingReportResult, ImageInput,
};
