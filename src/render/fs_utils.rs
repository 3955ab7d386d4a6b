// src/render/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Check whether a chart file may be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user for confirmation.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Render(
            "chart not written: existing file not overwritten".into(),
        ))
    }
}

/// Write a rendered chart to `out`, or to stdout when no path is given.
pub fn write_output(bytes: &[u8], out: Option<&Path>, force: bool) -> AppResult<()> {
    match out {
        Some(path) => {
            ensure_writable(path, force)?;
            fs::write(path, bytes)?;
            success(format!("Chart written: {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
