//! Adapters - Implementations of port interfaces.
//!
//! - `models` - Clinical and image classifiers plus the provisioning registry
//! - `fetch` - Remote artifact download
//! - `storage` - Exported report persistence
//! - `http` - REST API

pub mod fetch;
pub mod http;
pub mod models;
pub mod storage;
