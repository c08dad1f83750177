use serde::Deserialize;

/// Main configuration structure for Scour
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Starting URL; also the scope prefix only crawled URLs may share
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Maximum recursion depth from the seed
    #[serde(rename = "max-depth")]
    pub max_depth: u32,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the page store writes fetched pages into
    #[serde(rename = "pages-dir")]
    pub pages_dir: String,

    /// Path the indexer writes the JSON index to
    #[serde(rename = "index-path")]
    pub index_path: String,
}
