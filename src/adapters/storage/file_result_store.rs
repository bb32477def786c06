//! File-based Result Store Adapter
//!
//! Writes rendered imaging summaries as plain-text files into one export
//! directory. A later save for the same patient name overwrites the earlier
//! file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::imaging::ImagingReport;
use crate::ports::{ResultStore, ResultStoreError};

/// Directory-backed store for exported reports
#[derive(Debug, Clone)]
pub struct FileResultStore {
    export_dir: PathBuf,
}

impl FileResultStore {
    /// Create a store rooted at `export_dir`. The directory is created on
    /// first save.
    pub fn new<P: AsRef<Path>>(export_dir: P) -> Self {
        Self {
            export_dir: export_dir.as_ref().to_path_buf(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    async fn ensure_dir(&self) -> Result<(), ResultStoreError> {
        fs::create_dir_all(&self.export_dir)
            .await
            .map_err(|e| ResultStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl ResultStore for FileResultStore {
    async fn save(&self, report: &ImagingReport) -> Result<PathBuf, ResultStoreError> {
        self.ensure_dir().await?;

        let file_path = self.export_dir.join(report.file_name());
        fs::write(&file_path, report.render())
            .await
            .map_err(|e| ResultStoreError::IoError(e.to_string()))?;

        info!(
            assessment_id = %report.assessment_id,
            path = %file_path.display(),
            "Imaging summary exported"
        );
        Ok(file_path)
    }
}
