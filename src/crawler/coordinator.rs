//! Crawl orchestrator
//!
//! The recursive, depth-bounded, concurrent driver. Each invocation claims a
//! URL via the registry, fetches it, persists the result, and fans out one
//! concurrent sub-crawl per discovered in-scope link, joining on all children
//! before returning. A root invocation therefore returns only once its entire
//! reachable subtree has been attempted.

use crate::crawler::Fetcher;
use crate::state::VisitedRegistry;
use crate::storage::{PageStore, Webpage};
use crate::url::CrawlScope;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type CrawlFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Crawl orchestrator tying together fetcher, registry, store, and scope
///
/// All collaborators are injected; the registry in particular is owned by the
/// caller so independent crawls (and parallel tests) never share state.
pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    registry: Arc<VisitedRegistry>,
    store: Arc<dyn PageStore>,
    scope: CrawlScope,
}

impl Crawler {
    /// Creates an orchestrator over the given collaborators
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        registry: Arc<VisitedRegistry>,
        store: Arc<dyn PageStore>,
        scope: CrawlScope,
    ) -> Arc<Self> {
        Arc::new(Self {
            fetcher,
            registry,
            store,
            scope,
        })
    }

    /// The registry backing this crawl, for inspection after it returns
    pub fn registry(&self) -> &VisitedRegistry {
        &self.registry
    }

    /// Crawls from the scope's seed URL down to the given depth
    pub async fn run(self: &Arc<Self>, max_depth: i64) {
        self.crawl(self.scope.seed().to_string(), max_depth).await;
    }

    /// Crawls a single URL and, recursively and concurrently, every in-scope
    /// page reachable from it within the remaining depth
    ///
    /// Termination conditions, in order:
    /// - `depth < 0`: the branch ends with no claim attempted
    /// - the claim fails: another branch owns or already finished this URL
    /// - the fetch fails: the claim is released and the branch ends
    ///
    /// Failures never propagate upward; observability is via logs and the
    /// final contents of the registry. There is no cancellation or timeout:
    /// a hung fetch hangs this branch and its ancestors' joins.
    pub fn crawl(self: &Arc<Self>, url: String, depth: i64) -> CrawlFuture {
        let this = Arc::clone(self);
        Box::pin(async move {
            if depth < 0 {
                return;
            }

            if !this.registry.try_claim(&url) {
                return;
            }

            let page = match this.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("failed to load {}: {}", url, e);
                    this.registry.mark_failed(&url);
                    return;
                }
            };

            let id = this.registry.mark_done(&url);
            tracing::debug!("fetched {} at depth {} (page {})", url, depth, id);

            let record = Webpage {
                url: url.clone(),
                depth,
                text: page.body,
            };
            // Best effort: the page counts as crawled even if unsaved.
            if let Err(e) = this.store.save(&record, id) {
                tracing::error!("failed to save {} as page {}: {}", url, id, e);
            }

            let mut children = Vec::new();
            for raw_link in &page.links {
                if let Some(child_url) = this.scope.resolve(raw_link, &url) {
                    let child = Arc::clone(&this);
                    children.push(tokio::spawn(async move {
                        child.crawl(child_url, depth - 1).await;
                    }));
                }
            }

            for handle in children {
                if let Err(e) = handle.await {
                    tracing::error!("crawl task for a child of {} panicked: {}", url, e);
                }
            }
        })
    }
}
