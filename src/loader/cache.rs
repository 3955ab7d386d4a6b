use super::load_data;
use crate::models::DataTable;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Memoized loads keyed by the path they were requested with.
///
/// Entries are never invalidated when the file changes on disk; `clear` is
/// the only way to force a reload. Empty results (failed loads) are cached
/// like any other.
#[derive(Debug, Default)]
pub struct DataCache {
    entries: HashMap<PathBuf, DataTable>,
}

impl DataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, path: &Path) -> &DataTable {
        self.entries.entry(path.to_path_buf()).or_insert_with(|| {
            tracing::debug!(path = %path.display(), "cache miss");
            load_data(path)
        })
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
