//! Storage trait and error types

use crate::storage::Webpage;
use thiserror::Error;

/// Errors that can occur during page store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Pages directory does not exist: {0}")]
    MissingDir(String),

    #[error("Page not found: {0}")]
    PageNotFound(u64),

    #[error("Malformed page file {id}: {reason}")]
    Malformed { id: u64, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for page store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for page store backends
///
/// Implementations must be safe to share across crawl tasks; distinct
/// identifiers may be written concurrently.
pub trait PageStore: Send + Sync {
    /// Persists a page under the given identifier
    fn save(&self, page: &Webpage, id: u64) -> StoreResult<()>;

    /// Reloads a previously persisted page
    fn load(&self, id: u64) -> StoreResult<Webpage>;

    /// Lists the identifiers of all persisted pages
    fn ids(&self) -> StoreResult<Vec<u64>>;
}
