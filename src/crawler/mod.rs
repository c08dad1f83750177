//! Crawler module for concurrent page fetching
//!
//! This module contains the core crawling logic, including:
//! - The Fetcher abstraction and its HTTP implementation
//! - Textual link extraction
//! - The recursive, depth-bounded crawl orchestrator

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use parser::extract_links;

use crate::config::Config;
use crate::state::VisitedRegistry;
use crate::storage::FsPageStore;
use crate::url::CrawlScope;
use crate::ScourError;
use std::path::Path;
use std::sync::Arc;

/// Runs a complete crawl described by the configuration
///
/// Builds the HTTP fetcher, opens the page store, and drives the orchestrator
/// from the seed URL down to the configured depth. Returns once the entire
/// reachable subtree has been attempted.
pub async fn crawl(config: &Config) -> Result<(), ScourError> {
    let store = FsPageStore::new(Path::new(&config.output.pages_dir))?;
    let fetcher = HttpFetcher::new()?;
    let registry = Arc::new(VisitedRegistry::new());
    let scope = CrawlScope::new(&config.crawler.seed_url);

    let crawler = Crawler::new(
        Arc::new(fetcher),
        Arc::clone(&registry),
        Arc::new(store),
        scope,
    );

    tracing::info!(
        "Starting crawl at {} (max depth {})",
        config.crawler.seed_url,
        config.crawler.max_depth
    );

    crawler.run(i64::from(config.crawler.max_depth)).await;

    let fetched = registry.done_urls().len();
    tracing::info!("Crawl complete: {} pages fetched", fetched);

    Ok(())
}
