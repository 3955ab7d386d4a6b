//! Data file discovery and loading.
//!
//! `list_data_files` fails loudly (a missing directory is a setup error),
//! while `load_data` is fail-soft: any problem with the selected file is shown
//! to the user and turned into an empty table.

mod cache;
mod csv_file;
mod xlsx_file;

pub use cache::DataCache;

use crate::errors::{AppError, AppResult};
use crate::models::DataTable;
use crate::ui::messages::error;
use std::fs;
use std::path::Path;

/// Tabular formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Xlsx,
}

impl DataFormat {
    pub const ALL: [DataFormat; 2] = [DataFormat::Csv, DataFormat::Xlsx];

    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Csv => ".csv",
            DataFormat::Xlsx => ".xlsx",
        }
    }

    /// Detect the format from the file name suffix (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| name.ends_with(f.extension()))
    }
}

/// Names of the files in `dir` ending in `.csv` or `.xlsx`, sorted by name.
/// Sub-directories are not descended into.
pub fn list_data_files(dir: &Path) -> AppResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(AppError::DataDirMissing(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if DataFormat::from_name(&name).is_some() {
            files.push(name);
        }
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "data files listed");
    Ok(files)
}

/// Read a data file, propagating every failure.
pub fn read_table(path: &Path) -> AppResult<DataTable> {
    let name = path.to_string_lossy();
    let format = DataFormat::from_name(&name)
        .ok_or_else(|| AppError::UnsupportedFormat(name.to_string()))?;

    let table = match format {
        DataFormat::Csv => csv_file::read_csv(path)?,
        DataFormat::Xlsx => xlsx_file::read_xlsx(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "table loaded"
    );
    Ok(table)
}

/// Read a data file; on any failure report it and return an empty table.
pub fn load_data(path: &Path) -> DataTable {
    match read_table(path) {
        Ok(table) => table,
        Err(AppError::UnsupportedFormat(_)) => {
            error("Unsupported file format");
            DataTable::empty()
        }
        Err(e) => {
            error(format!("Error loading data: {e}"));
            DataTable::empty()
        }
    }
}
