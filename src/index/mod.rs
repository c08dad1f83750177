//! Inverted index
//!
//! Maps each word to the URLs it appears on and the frequency per URL. Built
//! as an independent batch job over the page store, with no shared state with
//! the crawler at run time.

mod builder;

pub use builder::{build_index, tokenize};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building, saving, or loading an index
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Index path must end in .json: {0}")]
    BadExtension(String),

    #[error("Storage error: {0}")]
    Store(#[from] crate::storage::StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Index worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Word → url → occurrence count
///
/// Serialized as plain nested JSON objects:
///
/// ```json
/// {
///   "word1": { "url1": 3, "url2": 1 },
///   "word2": { "url1": 2 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    words: HashMap<String, HashMap<String, u64>>,
}

impl Index {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of a word on a URL
    pub fn record(&mut self, word: &str, url: &str) {
        *self
            .words
            .entry(word.to_string())
            .or_default()
            .entry(url.to_string())
            .or_default() += 1;
    }

    /// Returns the url → count postings for a word, if indexed
    pub fn postings(&self, word: &str) -> Option<&HashMap<String, u64>> {
        self.words.get(word)
    }

    /// Returns the occurrence count of a word on a URL (zero if absent)
    pub fn count(&self, word: &str, url: &str) -> u64 {
        self.words
            .get(word)
            .and_then(|urls| urls.get(url))
            .copied()
            .unwrap_or(0)
    }

    /// Number of unique words in the index
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are indexed
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Saves the index as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        require_json_extension(path)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads an index previously written by [`Index::save`]
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        require_json_extension(path)?;
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

fn require_json_extension(path: &Path) -> Result<(), IndexError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(IndexError::BadExtension(path.display().to_string()));
    }
    Ok(())
}
