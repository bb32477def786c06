//! HTTP artifact fetcher.
//!
//! Streams the body to `<destination>.part`, hashing as it goes, and renames
//! into place only after the checksum (if any) matches. Failed attempts
//! remove the partial file.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::ModelsConfig;
use crate::ports::{ArtifactFetcher, ProvisioningError};

/// Configuration for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Timeout for one download attempt, body included.
    pub timeout: Duration,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Base delay; attempt `n` waits `backoff * 2^n` before retrying.
    pub backoff: Duration,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            max_retries: 1,
            backoff: Duration::from_millis(1000),
        }
    }
}

impl From<&ModelsConfig> for HttpFetcherConfig {
    fn from(config: &ModelsConfig) -> Self {
        Self {
            timeout: config.fetch_timeout(),
            max_retries: config.fetch_max_retries,
            backoff: config.fetch_backoff(),
        }
    }
}

/// Downloads artifacts over HTTP(S) with bounded retries.
pub struct HttpArtifactFetcher {
    config: HttpFetcherConfig,
    client: Client,
}

impl HttpArtifactFetcher {
    /// Creates a fetcher.
    ///
    /// # Errors
    ///
    /// Returns `ProvisioningError::Fetch` if the HTTP client cannot be built.
    pub fn new(config: HttpFetcherConfig) -> Result<Self, ProvisioningError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProvisioningError::Fetch(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn map_reqwest_error(&self, e: reqwest::Error) -> ProvisioningError {
        if e.is_timeout() {
            ProvisioningError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ProvisioningError::Fetch(format!("Connection failed: {}", e))
        } else {
            ProvisioningError::Fetch(e.to_string())
        }
    }

    /// Streams one attempt into `part`, returning the hex digest of the body.
    async fn download_to(&self, url: &str, part: &Path) -> Result<String, ProvisioningError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProvisioningError::Fetch(format!("HTTP {}", status)));
        }

        let mut file = fs::File::create(part)
            .await
            .map_err(|e| ProvisioningError::Io(e.to_string()))?;
        let mut hasher = Sha256::new();
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            let bytes = chunk.map_err(|e| self.map_reqwest_error(e))?;
            hasher.update(&bytes);
            file.write_all(&bytes)
                .await
                .map_err(|e| ProvisioningError::Io(e.to_string()))?;
        }
        file.flush()
            .await
            .map_err(|e| ProvisioningError::Io(e.to_string()))?;

        Ok(format!("{:x}", hasher.finalize()))
    }

    async fn attempt(
        &self,
        url: &str,
        destination: &Path,
        sha256: Option<&str>,
    ) -> Result<(), ProvisioningError> {
        let part = part_path(destination);
        let outcome = match self.download_to(url, &part).await {
            Ok(actual) => match sha256 {
                Some(expected) if !expected.eq_ignore_ascii_case(&actual) => {
                    Err(ProvisioningError::Checksum {
                        expected: expected.to_lowercase(),
                        actual,
                    })
                }
                _ => fs::rename(&part, destination)
                    .await
                    .map_err(|e| ProvisioningError::Io(e.to_string())),
            },
            Err(e) => Err(e),
        };

        if outcome.is_err() {
            // Missing .part is fine here.
            let _ = fs::remove_file(&part).await;
        }
        outcome
    }
}

fn part_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}

#[async_trait]
impl ArtifactFetcher for HttpArtifactFetcher {
    async fn fetch(
        &self,
        url: &str,
        destination: &Path,
        sha256: Option<&str>,
    ) -> Result<(), ProvisioningError> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ProvisioningError::Io(e.to_string()))?;
        }

        let mut attempt = 0;
        loop {
            debug!(url, attempt, "Fetching artifact");
            match self.attempt(url, destination, sha256).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if !err.is_retryable() || attempt >= self.config.max_retries {
                        return Err(err);
                    }
                    warn!(url, attempt, error = %err, "Artifact fetch failed, retrying");
                }
            }

            // Exponential backoff: base, 2x base, 4x base, ...
            sleep(self.config.backoff * 2u32.pow(attempt)).await;
            attempt += 1;
        }
    }
}
