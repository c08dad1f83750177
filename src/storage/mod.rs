//! Page persistence
//!
//! The crawler hands each successfully fetched page to a page store together
//! with the identifier assigned by the visited registry. The store must be
//! durable before the crawl branch returns and must tolerate concurrent
//! writes to distinct identifiers; each identifier is written exactly once.

mod fs;
mod traits;

pub use fs::FsPageStore;
pub use traits::{PageStore, StoreError, StoreResult};

/// A crawled page as persisted by the page store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webpage {
    /// Canonical URL the page was fetched from
    pub url: String,

    /// Remaining crawl depth at the moment of the fetch
    pub depth: i64,

    /// Raw page body
    pub text: String,
}
