use crate::cli::commands::analyze;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{alert, header, info};

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Summary { filter } = cmd {
        let report = analyze(filter, cfg, session)?;
        let m = report.metrics();
        let a = report.alerts;

        header("Access Control Log Analyzer");
        println!("👥 Unique users    : {}", m.unique_users);
        println!("🚪 Total accesses  : {}", m.total_accesses);
        match m.high_temps {
            Some(n) => println!("🌡️  High temps      : {} ⚠️", n),
            None => println!("🌡️  High temps      : N/A"),
        }

        header("Alerts");
        let p = report.policy;
        alert(
            &format!("Early arrivals (before {})", p.office_start.format("%H:%M")),
            a.early_arrivals,
        );
        alert(
            &format!("Late arrivals (after {})", p.office_start.format("%H:%M")),
            a.late_arrivals,
        );
        alert(
            &format!("Early exits (before {})", p.office_end.format("%H:%M")),
            a.early_exits,
        );
        alert(
            &format!("Late departures (after {})", p.office_end.format("%H:%M")),
            a.late_departures,
        );

        header("Presence");
        println!(
            "{} interval(s) over {} user-day(s)",
            report.reconstruction.interval_count(),
            report.daily.len()
        );
        let open = report.reconstruction.open_entries();
        if open > 0 {
            info(format!(
                "{} entr(ies) without a matching exit, not counted as presence",
                open
            ));
        }
        let inverted = report.reconstruction.discarded();
        if inverted > 0 {
            info(format!(
                "{} pair(s) with exit not after entry, not counted as presence",
                inverted
            ));
        }

        header("Absent users");
        alert("Absent in selected range", report.absent_users.len());
        for u in &report.absent_users {
            println!("   {u}");
        }
    }
    Ok(())
}
