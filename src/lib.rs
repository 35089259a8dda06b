//! pointadmin library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules: the adjustment form, the worker directory and the point ledger.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::session::AdminSession;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Summary => cli::commands::views::summary(&AdminSession::open(cfg)?),
        Commands::Workers => cli::commands::views::workers(&AdminSession::open(cfg)?),
        Commands::History => cli::commands::views::history(&AdminSession::open(cfg)?),
        Commands::Chart => cli::commands::views::chart(&AdminSession::open(cfg)?),
        Commands::Adjust { .. } => {
            cli::commands::adjust::handle(&cli.command, &mut AdminSession::open(cfg)?)
        }
        Commands::Console => cli::commands::console::handle(&mut AdminSession::open(cfg)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(custom) => utils::path::expand_tilde(custom),
        None => Config::config_file(),
    };

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
