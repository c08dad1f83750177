//! URL resolution and scope filtering
//!
//! This module decides which discovered links become crawl targets:
//! - Resolving relative references against the containing page's URL
//! - Rejecting same-page fragment links
//! - Stripping fragment identifiers
//! - Enforcing the seed-URL scope prefix

mod resolve;

pub use resolve::CrawlScope;
