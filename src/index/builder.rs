//! Index construction
//!
//! One worker per persisted page, all feeding a shared index behind a lock.
//! The build joins on every worker before returning, so the returned index
//! is complete.

use crate::index::{Index, IndexError};
use crate::storage::{PageStore, StoreError};
use std::sync::{Arc, Mutex};

/// Splits page text into indexable words
///
/// Words shorter than four characters or containing anything but ASCII
/// letters are dropped; survivors are lowercased.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.len() > 3 && w.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|w| w.to_lowercase())
        .collect()
}

/// Builds the inverted index over every page in the store
pub async fn build_index(store: Arc<dyn PageStore>) -> Result<Index, IndexError> {
    let ids = store.ids()?;
    tracing::info!("Indexing {} pages", ids.len());

    let index = Arc::new(Mutex::new(Index::new()));
    let mut workers = Vec::with_capacity(ids.len());

    for id in ids {
        let store = Arc::clone(&store);
        let index = Arc::clone(&index);
        workers.push(tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            let page = store.load(id)?;
            let words = tokenize(&page.text);
            let mut index = index.lock().unwrap();
            for word in words {
                index.record(&word, &page.url);
            }
            Ok(())
        }));
    }

    for worker in workers {
        worker.await??;
    }

    let index = std::mem::take(&mut *index.lock().unwrap());
    tracing::info!("Index complete: {} unique words", index.word_count());
    Ok(index)
}
