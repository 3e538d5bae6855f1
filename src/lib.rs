//! hourbook library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (the pure accounting engine lives under `core::calculator`).

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
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, user: &str) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, user),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Submit { .. } => cli::commands::submit::handle(&cli.command, cfg, user),
        Commands::Confirm { .. } => cli::commands::confirm::handle(&cli.command, cfg),
        Commands::Absence { action } => cli::commands::absence::handle(action, cfg, user),
        Commands::Request { action } => cli::commands::request::handle(action, cfg, user),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg, user),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, user),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg, user),
        Commands::Balance { .. } => cli::commands::balance::handle(&cli.command, cfg, user),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, user),
    }
}

/// Parse the CLI, resolve config and user, and run the command.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }

    let user = cli
        .user
        .clone()
        .unwrap_or_else(|| cfg.default_user.clone());

    dispatch(&cli, &cfg, &user)
}
