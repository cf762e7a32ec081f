use crate::cli::commands::{analyze, print_table};
use crate::cli::parser::{Commands, PresenceView};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ReportKind, build_table};
use crate::session::Session;

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Presence { filter, view } = cmd {
        let report = analyze(filter, cfg, session)?;

        let kind = match view {
            PresenceView::Trend => ReportKind::Trend,
            PresenceView::Detail => ReportKind::Presence,
            PresenceView::Weekly => ReportKind::Weekly,
            PresenceView::Intervals => ReportKind::Intervals,
        };
        print_table(&build_table(&report, kind));
    }
    Ok(())
}
