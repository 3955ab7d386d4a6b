use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AttendancePage, PageOutcome};
use crate::errors::{AppError, AppResult};
use crate::render::{ChartFormat, RenderOptions, render, write_output};
use crate::ui::messages::{header, info, warning};
use crate::ui::prompt::select_from;
use std::io::{self, IsTerminal};
use std::path::Path;

/// Handle the `chart` command: pick a file, build its timeline, render it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        file,
        format,
        out,
        force,
        width,
    } = cmd
    {
        let format = format.unwrap_or(cfg.default_format);
        if format.is_binary() && out.is_none() {
            return Err(AppError::Render(format!(
                "{} output needs --out <FILE>",
                format.as_str()
            )));
        }

        header("Session Attendance Visualization");

        let mut page = AttendancePage::new(cfg.data_path());
        let files = page.files()?;

        let selected = match file {
            Some(f) => f.clone(),
            None if files.is_empty() => {
                warning(format!(
                    "No data files found in the '{}' directory. Please upload a data file.",
                    page.data_dir().display()
                ));
                return Ok(());
            }
            None => {
                let idx = select_from(
                    "Choose a data file",
                    &files,
                    &mut io::stdin().lock(),
                    &mut io::stderr(),
                )?;
                files[idx].clone()
            }
        };

        let timeline = match page.select(&selected)? {
            PageOutcome::NoData => return Ok(()),
            PageOutcome::Chart(t) => t.with_title(&cfg.title),
        };

        info(format!(
            "{}: {} attendees, session {} → {}",
            selected,
            timeline.series.len(),
            timeline.session.start.format("%Y-%m-%d %H:%M"),
            timeline.session.end.format("%H:%M")
        ));

        let to_terminal = out.is_none() && io::stdout().is_terminal();
        let opts = RenderOptions {
            width: width.unwrap_or(match format {
                ChartFormat::Text => cfg.text_width,
                _ => cfg.chart_width,
            }),
            height: cfg.chart_height,
            color: to_terminal && std::env::var_os("NO_COLOR").is_none(),
        };

        let bytes = render(&timeline, format, &opts)?;
        write_output(&bytes, out.as_deref().map(Path::new), *force)?;
    }

    Ok(())
}
