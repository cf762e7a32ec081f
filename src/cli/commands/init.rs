use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::absolutize;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = match &cli.config {
            Some(custom) => absolutize(custom),
            None => Config::config_file(),
        };

        if Config::init_at(&path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}
