use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{distinct_departments, distinct_users};
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::header;
use crate::utils::path::absolutize;

/// Handle `options`: values accepted by `--user` and `--dept`.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Options { file } = cmd {
        session.require_login(&cfg.auth)?;
        let dataset = session.load(&absolutize(file), &cfg.ingest)?;

        header("Users");
        println!("All");
        for u in distinct_users(&dataset.events) {
            println!("{u}");
        }

        header("Departments");
        println!("All");
        for d in distinct_departments(&dataset.events) {
            println!("{d}");
        }

        if let Some((min, max)) = dataset.date_bounds() {
            header("Dates");
            println!("{} → {}", min.format("%Y-%m-%d"), max.format("%Y-%m-%d"));
        }
    }
    Ok(())
}
