use crate::core::timeline::{Timeline, build_timeline};
use crate::errors::AppResult;
use crate::loader::{DataCache, list_data_files};
use crate::ui::messages::error;
use std::path::{Path, PathBuf};

/// Result of selecting a file on the page
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The file loaded empty (or failed to load); nothing is drawn
    NoData,
    Chart(Timeline),
}

/// The attendance page: a data directory, the files it offers, and a
/// selection handler that recomputes the timeline for the chosen file.
///
/// Apart from the load cache nothing is kept between selections.
#[derive(Debug)]
pub struct AttendancePage {
    data_dir: PathBuf,
    cache: DataCache,
}

impl AttendancePage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: DataCache::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Files the user can choose from
    pub fn files(&self) -> AppResult<Vec<String>> {
        list_data_files(&self.data_dir)
    }

    /// Selection handler: load `file_name` from the data directory and build its timeline.
    pub fn select(&mut self, file_name: &str) -> AppResult<PageOutcome> {
        let path = self.data_dir.join(file_name);
        tracing::debug!(path = %path.display(), cached = self.cache.contains(&path), "file selected");

        let table = self.cache.get_or_load(&path);

        if table.is_empty() {
            error("No data available to visualize.");
            return Ok(PageOutcome::NoData);
        }

        Ok(PageOutcome::Chart(build_timeline(table)?))
    }

    pub fn cache(&self) -> &DataCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
