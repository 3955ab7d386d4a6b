//! Unified application error type.
//! All modules (loader, core, render, cli) return AppError so failures reach
//! `main` through a single path.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Data directory not found: {}", .0.display())]
    DataDirMissing(PathBuf),

    // ---------------------------
    // Loading
    // ---------------------------
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row} has {found} fields, header has {expected}")]
    RowTooWide {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("XLSX error: {0}")]
    Xlsx(String),

    // ---------------------------
    // Timeline
    // ---------------------------
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid timestamp in column '{column}' (row {row}): {value}")]
    InvalidTimestamp {
        column: String,
        row: usize,
        value: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Rendering
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
