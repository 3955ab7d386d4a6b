use crate::render::ChartFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to chart meeting attendance from CSV/XLSX exports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Chart who was present in a meeting, and when, from a CSV or XLSX attendance export",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (default from config: `datafiles`)
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the attendance files available in the data directory
    List,

    /// Render the attendance timeline of a data file
    Chart {
        /// File name inside the data directory.
        ///
        /// If omitted, the available files are listed and one is chosen
        /// interactively (Enter picks the first one).
        file: Option<String>,

        /// Output format: text, svg, pdf, json (default from config)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ChartFormat>,

        /// Output file path (stdout if omitted; required for pdf)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Chart width (columns for text, points for svg/pdf)
        #[arg(long, value_name = "N")]
        width: Option<u32>,
    },
}
