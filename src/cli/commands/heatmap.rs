use crate::cli::commands::{analyze, print_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ReportKind, build_table};
use crate::session::Session;

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Heatmap { filter } = cmd {
        let report = analyze(filter, cfg, session)?;
        print_table(&build_table(&report, ReportKind::Heatmap));
    }
    Ok(())
}
