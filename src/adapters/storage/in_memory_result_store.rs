//! In-Memory Result Store Adapter
//!
//! Keeps rendered reports keyed by file name. Useful for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::imaging::ImagingReport;
use crate::ports::{ResultStore, ResultStoreError};

/// In-memory store for exported reports
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultStore {
    reports: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered text saved under `file_name`, if any
    pub async fn get(&self, file_name: &str) -> Option<String> {
        self.reports.read().await.get(file_name).cloned()
    }

    /// Number of stored reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn save(&self, report: &ImagingReport) -> Result<PathBuf, ResultStoreError> {
        let file_name = report.file_name();
        self.reports
            .write()
            .await
            .insert(file_name.clone(), report.render());
        Ok(PathBuf::from(file_name))
    }
}
