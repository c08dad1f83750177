//! Configuration loading and validation
//!
//! A crawl run is described by a small TOML file naming the seed URL, the
//! maximum depth, the pages directory, and the index path.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, CrawlerConfig, OutputConfig};
pub use validation::validate;
