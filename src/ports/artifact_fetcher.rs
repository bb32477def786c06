//! Artifact Fetcher Port - Downloads a model artifact to local disk.

use async_trait::async_trait;
use std::path::Path;

use super::ProvisioningError;

/// Port for retrieving a remote artifact.
#[async_trait]
pub trait ArtifactFetcher: Send + Sync {
    /// Downloads `url` to `destination`.
    ///
    /// Implementations must never leave a partial or unverified file at
    /// `destination`. When `sha256` is given, the downloaded bytes must hash
    /// to it (lowercase hex).
    ///
    /// # Errors
    ///
    /// Returns `ProvisioningError::Fetch`, `Timeout` or `Checksum` once the
    /// implementation's retry budget is exhausted.
    async fn fetch(
        &self,
        url: &str,
        destination: &Path,
        sha256: Option<&str>,
    ) -> Result<(), ProvisioningError>;
}
