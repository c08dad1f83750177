use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Configuration errors are the only process-fatal conditions; everything
/// here is checked before any crawling starts.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let seed = Url::parse(&config.crawler.seed_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.crawler.seed_url, e)))?;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "seed-url must be http or https, got: {}",
            seed.scheme()
        )));
    }

    if config.output.pages_dir.is_empty() {
        return Err(ConfigError::Validation(
            "pages-dir must not be empty".to_string(),
        ));
    }

    if !config.output.index_path.ends_with(".json") {
        return Err(ConfigError::Validation(format!(
            "index-path must end in .json: {}",
            config.output.index_path
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{CrawlerConfig, OutputConfig};

    fn valid_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                seed_url: "https://seed.example/".to_string(),
                max_depth: 2,
            },
            output: OutputConfig {
                pages_dir: "./pages".to_string(),
                index_path: "./index.json".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_malformed_seed_url() {
        let mut config = valid_config();
        config.crawler.seed_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_seed_rejected() {
        let mut config = valid_config();
        config.crawler.seed_url = "ftp://seed.example/".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_pages_dir_rejected() {
        let mut config = valid_config();
        config.output.pages_dir = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_index_path_must_be_json() {
        let mut config = valid_config();
        config.output.index_path = "./index.toml".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
