use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    if *print_config {
        if !path.exists() {
            info(format!(
                "{} not found, showing defaults (run `raccesslog init` to write it)",
                path.display()
            ));
        }
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    if *edit_config {
        if Config::init_at(path, false)? {
            info(format!("Created {} with default values", path.display()));
        }

        let fallback = default_editor();
        let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

        if launch(&chosen, path) {
            success(format!("Configuration edited using '{}'", chosen));
        } else if chosen != fallback {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                chosen, fallback
            ));
            if launch(&fallback, path) {
                success(format!("Configuration edited using '{}'", fallback));
            } else {
                error(format!("Failed to edit configuration using '{}'", fallback));
            }
        } else {
            error(format!("Failed to edit configuration using '{}'", chosen));
        }

        // an edit that breaks the thresholds is reported right away
        let edited = Config::load_from(path)?;
        log::debug!(
            "reloaded config: policy {}-{}, pairing {:?}",
            edited.policy.office_start,
            edited.policy.office_end,
            edited.pairing.strategy
        );
    }

    Ok(())
}
