//! Page fetching
//!
//! The orchestrator depends only on the [`Fetcher`] trait, never on the
//! concrete network client, so a deterministic in-memory double can stand in
//! for live network access in tests.

use crate::crawler::parser::extract_links;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by a fetch attempt
///
/// Either kind abandons the crawl branch; the visited registry entry is
/// removed so the URL stays retryable from another discovery path.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Raw response body
    pub body: String,

    /// Raw link strings extracted from the body, in document order.
    /// Resolution against the page URL happens in the orchestrator.
    pub links: Vec<String>,
}

/// Capability to retrieve a URL's body and its outbound links
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Builds the HTTP client used by [`HttpFetcher`]
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("scour/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a live HTTP client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client()?,
        })
    }

    /// Creates a fetcher over an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// Issues a GET and requires a success status
    ///
    /// Any non-success status or transport failure yields an error and no
    /// body or links.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let links = extract_links(&body);
        Ok(FetchedPage { body, links })
    }
}
