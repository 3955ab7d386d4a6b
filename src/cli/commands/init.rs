use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory the attendance files are read from
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing rattendance…");

    cfg.init_all(cli.test)?;

    info(format!(
        "Put .csv or .xlsx attendance exports in {} and run `rattendance chart`.",
        cfg.data_path().display()
    ));
    Ok(())
}
