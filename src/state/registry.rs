//! Visited-URL registry
//!
//! The registry guarantees at most one in-flight or completed fetch per
//! logical page across all concurrently running crawl branches. It is an
//! injected component owned by the orchestrator's caller, so tests can run
//! independent registries in parallel.

use std::collections::HashMap;
use std::sync::Mutex;

/// Status of a URL in the registry
///
/// A URL that is absent from the registry has either never been attempted or
/// was attempted and failed; failed entries are removed so the URL may be
/// retried by a future discovery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitStatus {
    /// Claimed; a fetch is in flight
    Loading,

    /// Fetch succeeded and the page was persisted under this canonical URL
    Done(String),
}

impl VisitStatus {
    /// Returns true if the fetch for this URL completed successfully
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

struct RegistryInner {
    entries: HashMap<String, VisitStatus>,
    // Monotonic page-sequence counter, guarded by the same lock as the map.
    next_id: u64,
}

/// Shared registry of visited URLs
///
/// Every operation runs inside a single critical section. No operation
/// blocks on I/O while holding the lock; fetching and persistence happen
/// strictly outside it.
pub struct VisitedRegistry {
    inner: Mutex<RegistryInner>,
}

impl VisitedRegistry {
    /// Creates an empty registry with the page counter at zero
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                entries: HashMap::new(),
                next_id: 0,
            }),
        }
    }

    /// Attempts to claim a URL for fetching
    ///
    /// The exact spelling, the spelling with a trailing slash appended, and
    /// the spelling with the trailing slash stripped are all checked; if any
    /// is present the claim fails without modification. Otherwise the URL is
    /// recorded as `Loading` and the claim succeeds.
    pub fn try_claim(&self, url: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();

        if inner.entries.contains_key(url) {
            return false;
        }
        let expanded = format!("{}/", url);
        if inner.entries.contains_key(&expanded) {
            return false;
        }
        if let Some(stripped) = url.strip_suffix('/') {
            if inner.entries.contains_key(stripped) {
                return false;
            }
        }

        inner.entries.insert(url.to_string(), VisitStatus::Loading);
        true
    }

    /// Marks a claimed URL as done and assigns its persistence identifier
    ///
    /// The entry is overwritten with the canonical URL and the global page
    /// counter is incremented atomically with it.
    pub fn mark_done(&self, url: &str) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner
            .entries
            .insert(url.to_string(), VisitStatus::Done(url.to_string()));
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    /// Removes a failed URL, returning it to never-attempted status
    pub fn mark_failed(&self, url: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.remove(url);
    }

    /// Returns the number of registry entries
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    /// Returns true if the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the given URL spelling completed successfully
    pub fn is_done(&self, url: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .entries
            .get(url)
            .map(VisitStatus::is_done)
            .unwrap_or(false)
    }

    /// Returns the canonical URLs of all successfully fetched pages
    pub fn done_urls(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .values()
            .filter_map(|status| match status {
                VisitStatus::Done(url) => Some(url.clone()),
                VisitStatus::Loading => None,
            })
            .collect()
    }
}

impl Default for VisitedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
