//! Scour: a small end-to-end search stack
//!
//! This crate implements a concurrent, depth-bounded web crawler, a batch
//! indexer that turns saved pages into an inverted word index, and a boolean
//! query evaluator that ranks results by term frequency.

pub mod config;
pub mod crawler;
pub mod index;
pub mod query;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Scour operations
#[derive(Debug, Error)]
pub enum ScourError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] crawler::FetchError),

    #[error("Storage error: {0}")]
    Store(#[from] storage::StoreError),

    #[error("Index error: {0}")]
    Index(#[from] index::IndexError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Scour operations
pub type Result<T> = std::result::Result<T, ScourError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Crawler, FetchedPage, Fetcher, HttpFetcher};
pub use index::Index;
pub use state::{VisitStatus, VisitedRegistry};
pub use storage::{FsPageStore, PageStore, Webpage};
pub use url::CrawlScope;
