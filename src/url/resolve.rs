use url::Url;

/// Scope boundary for a crawl run
///
/// A crawl stays within one logical site: a resolved URL is in-scope exactly
/// when its string form starts with the seed URL. The seed doubles as the
/// starting point of the crawl.
#[derive(Debug, Clone)]
pub struct CrawlScope {
    seed: String,
}

impl CrawlScope {
    /// Creates a scope rooted at the given seed URL
    pub fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
        }
    }

    /// Returns the seed URL this scope is rooted at
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Checks whether an absolute URL falls under the seed prefix
    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.seed)
    }

    /// Resolves a raw link found on a page into an in-scope absolute URL
    ///
    /// Returns `None` when the link carries no new page:
    /// - empty input or a same-page fragment reference (`#...`)
    /// - malformed references that fail RFC 3986 resolution
    /// - resolved URLs outside the seed prefix
    ///
    /// Otherwise the link is resolved against `base` (the URL of the page it
    /// was found on) and any fragment component is truncated, since two URLs
    /// differing only by fragment denote the same page.
    ///
    /// Trailing-slash variants are deliberately not unified here; the visited
    /// registry checks both spellings at claim time.
    pub fn resolve(&self, raw_link: &str, base: &str) -> Option<String> {
        if raw_link.is_empty() || raw_link.starts_with('#') {
            return None;
        }

        let base_url = match Url::parse(base) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("unparseable base URL {}: {}", base, e);
                return None;
            }
        };

        // Url::join handles relative, protocol-relative, and absolute
        // references alike.
        let resolved = match base_url.join(raw_link) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("failed to resolve {} against {}: {}", raw_link, base, e);
                return None;
            }
        };

        let mut resolved = resolved.to_string();

        if !self.contains(&resolved) {
            return None;
        }

        if let Some(frag) = resolved.find('#') {
            resolved.truncate(frag);
        }

        Some(resolved)
    }
}
