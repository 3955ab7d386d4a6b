use crate::config::Config;
use crate::errors::AppResult;
use crate::loader::list_data_files;
use crate::ui::messages::warning;

/// Handle the `list` command: one numbered line per data file on stdout
pub fn handle(cfg: &Config) -> AppResult<()> {
    let dir = cfg.data_path();
    let files = list_data_files(&dir)?;

    if files.is_empty() {
        warning(format!(
            "No data files found in the '{}' directory. Please upload a data file.",
            dir.display()
        ));
        return Ok(());
    }

    for (i, f) in files.iter().enumerate() {
        println!("{:>3}  {}", i + 1, f);
    }
    Ok(())
}
