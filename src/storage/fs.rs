//! Filesystem-backed page store
//!
//! One file per page, named by its decimal identifier. The file holds the
//! URL on the first line, the crawl depth on the second, and the raw page
//! text after that.

use crate::storage::traits::{PageStore, StoreError, StoreResult};
use crate::storage::Webpage;
use std::fs;
use std::path::{Path, PathBuf};

/// Page store writing plain files into a directory
#[derive(Debug, Clone)]
pub struct FsPageStore {
    dir: PathBuf,
}

impl FsPageStore {
    /// Opens a page store over an existing directory
    ///
    /// A missing directory is a configuration error detected before crawling
    /// starts, so this fails rather than creating it.
    pub fn new(dir: &Path) -> StoreResult<Self> {
        if !dir.is_dir() {
            return Err(StoreError::MissingDir(dir.display().to_string()));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn page_path(&self, id: u64) -> PathBuf {
        self.dir.join(id.to_string())
    }
}

impl PageStore for FsPageStore {
    fn save(&self, page: &Webpage, id: u64) -> StoreResult<()> {
        let contents = format!("{}\n{}\n{}", page.url, page.depth, page.text);
        fs::write(self.page_path(id), contents)?;
        Ok(())
    }

    fn load(&self, id: u64) -> StoreResult<Webpage> {
        let path = self.page_path(id);
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::PageNotFound(id))
            }
            Err(e) => return Err(e.into()),
        };

        let mut parts = contents.splitn(3, '\n');
        let url = parts.next().ok_or_else(|| StoreError::Malformed {
            id,
            reason: "missing url line".to_string(),
        })?;
        let depth_line = parts.next().ok_or_else(|| StoreError::Malformed {
            id,
            reason: "missing depth line".to_string(),
        })?;
        let depth = depth_line.parse().map_err(|_| StoreError::Malformed {
            id,
            reason: format!("invalid depth: {}", depth_line),
        })?;
        let text = parts.next().unwrap_or("");

        Ok(Webpage {
            url: url.to_string(),
            depth,
            text: text.to_string(),
        })
    }

    fn ids(&self) -> StoreResult<Vec<u64>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            // Skip anything that is not a page file (editor droppings etc).
            if let Some(id) = entry.file_name().to_str().and_then(|n| n.parse().ok()) {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }
}
