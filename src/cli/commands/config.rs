use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            print_config_yaml(cfg)?;
        }

        if *edit_config {
            if is_test {
                warning("Test mode: the configuration file is left untouched.");
                return Ok(());
            }
            edit_config_file(cfg, editor.as_deref())?;
        }
    }

    Ok(())
}

fn print_config_yaml(cfg: &Config) -> AppResult<()> {
    println!("# {}", Config::config_file().display());
    print!("{}", serde_yaml::to_string(cfg)?);
    Ok(())
}

/// Editors to try, in order: `--editor`, `$EDITOR`, `$VISUAL`, platform default.
/// Duplicates are dropped.
fn editor_candidates(explicit: Option<&str>) -> Vec<String> {
    let platform = if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    };

    let from_env = ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .filter(|v| !v.trim().is_empty());

    let mut candidates: Vec<String> = Vec::new();
    for ed in explicit
        .map(str::to_string)
        .into_iter()
        .chain(from_env)
        .chain(std::iter::once(platform.to_string()))
    {
        if !candidates.contains(&ed) {
            candidates.push(ed);
        }
    }
    candidates
}

fn edit_config_file(cfg: &Config, explicit: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();

    // the editor needs something to open
    if !path.exists() {
        cfg.save()?;
        info(format!("Created {} with the current settings", path.display()));
    }

    for editor in editor_candidates(explicit) {
        if run_editor(&editor, &path) {
            success(format!("Configuration edited with '{editor}'"));
            return Ok(());
        }
        warning(format!("Editor '{editor}' not available, trying the next one"));
    }

    Err(AppError::Other(format!(
        "no editor could open {}",
        path.display()
    )))
}

fn run_editor(editor: &str, path: &Path) -> bool {
    match Command::new(editor).arg(path).status() {
        Ok(status) => status.success(),
        Err(e) => {
            tracing::debug!(editor, error = %e, "editor failed to start");
            false
        }
    }
}
