//! Result Store Port - Persisting exported imaging summaries.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::imaging::ImagingReport;

/// Errors that can occur while persisting a report.
#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for saving rendered reports.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Writes the rendered report and returns where it was stored.
    ///
    /// # Errors
    ///
    /// Returns `ResultStoreError::IoError` if the destination cannot be
    /// created or written.
    async fn save(&self, report: &ImagingReport) -> Result<PathBuf, ResultStoreError>;
}
