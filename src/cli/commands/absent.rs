use crate::cli::commands::analyze;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{alert, success};

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Absent { filter } = cmd {
        let report = analyze(filter, cfg, session)?;

        if report.absent_users.is_empty() {
            success("No absent users in the selected range.");
            return Ok(());
        }

        alert("User(s) absent in selected range", report.absent_users.len());
        for u in &report.absent_users {
            println!("   {u}");
        }
    }
    Ok(())
}
