//! Remote artifact fetching.

mod http_fetcher;

pub use http_fetcher::{HttpArtifactFetcher, HttpFetcherConfig};
