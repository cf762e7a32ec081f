use crate::cli::commands::{analyze, print_table};
use crate::cli::parser::{AlertKind, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::model::flagged_table;
use crate::models::anomaly::AnomalyFlags;
use crate::session::Session;
use crate::ui::messages::alert;

fn predicate(kind: AlertKind) -> fn(&AnomalyFlags) -> bool {
    match kind {
        AlertKind::EarlyArrival => |f| f.is_early_arrival,
        AlertKind::LateArrival => |f| f.is_late_arrival,
        AlertKind::EarlyExit => |f| f.is_early_exit,
        AlertKind::LateDeparture => |f| f.is_late_departure,
        AlertKind::HighTemp => |f| f.is_high_temp,
    }
}

fn label(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::EarlyArrival => "Early arrivals",
        AlertKind::LateArrival => "Late arrivals",
        AlertKind::EarlyExit => "Early exits",
        AlertKind::LateDeparture => "Late departures",
        AlertKind::HighTemp => "High temperatures",
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Alerts { filter, kind } = cmd {
        let report = analyze(filter, cfg, session)?;

        let (title, pick): (&str, fn(&AnomalyFlags) -> bool) = match kind {
            Some(k) => (label(*k), predicate(*k)),
            None => ("All alerts", AnomalyFlags::any),
        };

        let table = flagged_table(&report, format!("{} ({})", title, report.filter.range), pick);
        alert(title, table.rows.len());
        print_table(&table);
    }
    Ok(())
}
