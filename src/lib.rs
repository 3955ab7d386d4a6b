//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function, and the loader,
//! timeline and render modules used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod loader;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cli.test),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    utils::logger::init_cli_logger(cli.verbose);

    // 2️⃣ load config once; --test never reads the user's file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // 3️⃣ command-line override of the data directory
    if let Some(dir) = &cli.dir {
        cfg.data_dir = dir.clone();
    }

    tracing::debug!(data_dir = %cfg.data_dir, "configuration resolved");

    // 4️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
