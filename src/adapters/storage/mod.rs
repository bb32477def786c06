//! Storage Adapters
//!
//! Implementations of the ResultStore port for exported imaging summaries.
//!
//! - **FileResultStore** - Writes plain-text files into an export directory
//! - **InMemoryResultStore** - Keeps rendered text in memory (testing)

mod file_result_store;
mod in_memory_result_store;

pub use file_result_store::FileResultStore;
pub use in_memory_result_store::InMemoryResultStore;
