//! rAccessLog library root.
//! Exposes the CLI parser, the analysis engine and the export layer.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use session::Session;
use std::path::PathBuf;
use utils::path::absolutize;

/// Config path: `--config` override or the platform default.
fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(absolutize)
        .unwrap_or_else(Config::config_file)
}

/// Open a session and apply `--login USER:PASSWORD` when given.
pub fn open_session(login: Option<&str>, cfg: &Config) -> AppResult<Session> {
    let mut session = Session::new();

    if let Some(creds) = login {
        let (user, password) = creds
            .split_once(':')
            .ok_or_else(|| AppError::Other("--login expects USER:PASSWORD".into()))?;
        session.login(user, password, &cfg.auth)?;
    }

    Ok(session)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cli.login.as_deref(), cfg)?;
    let s = &mut session;

    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, &config_path(cli)),
        Commands::Options { .. } => cli::commands::options::handle(&cli.command, cfg, s),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg, s),
        Commands::Events { .. } => cli::commands::events::handle(&cli.command, cfg, s),
        Commands::Presence { .. } => cli::commands::presence::handle(&cli.command, cfg, s),
        Commands::Alerts { .. } => cli::commands::alerts::handle(&cli.command, cfg, s),
        Commands::Absent { .. } => cli::commands::absent::handle(&cli.command, cfg, s),
        Commands::FirstLast { .. } => cli::commands::first_last::handle(&cli.command, cfg, s),
        Commands::Heatmap { .. } => cli::commands::heatmap::handle(&cli.command, cfg, s),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, s),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (init writes it, so skip loading there)
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path(&cli))?,
    };

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
