// src/export/model.rs

use crate::core::logic::AnalysisReport;
use crate::export::ReportKind;
use crate::models::access_event::AccessEvent;
use crate::models::anomaly::AnomalyFlags;
use crate::utils::time::secs2readable;

/// Tabella generica: the single shape every exporter and the terminal
/// renderer consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the table for `kind` from an analysis report.
pub fn build_table(report: &AnalysisReport, kind: ReportKind) -> ReportTable {
    let range = report.filter.range;
    let title = format!("{} ({})", kind.title(), range);

    let (headers, rows) = match kind {
        ReportKind::Events => (
            vec![
                "User",
                "Department",
                "Door",
                "Card ID",
                "Time",
                "Entry/Exit",
                "Body Temp",
                "Date",
                "Hour",
                "High Temp",
            ],
            report
                .events
                .iter()
                .zip(report.flags.iter())
                .map(|(e, f)| event_row(e, f))
                .collect(),
        ),
        ReportKind::Timeline => (
            vec!["Time", "User", "Entry/Exit", "Door", "Body Temp", "Flags"],
            report
                .events
                .iter()
                .zip(report.flags.iter())
                .map(|(e, f)| timeline_row(e, f))
                .collect(),
        ),
        ReportKind::Alerts => {
            return flagged_table(report, title, AnomalyFlags::any);
        }
        ReportKind::Heatmap => (
            vec!["User", "Date", "Hour", "Count"],
            report
                .heatmap
                .iter()
                .map(|c| {
                    vec![
                        c.user.clone(),
                        c.date.format("%Y-%m-%d").to_string(),
                        c.hour.to_string(),
                        c.count.to_string(),
                    ]
                })
                .collect(),
        ),
        ReportKind::Trend => (
            vec!["Date", "User", "Hours"],
            report
                .trend
                .iter()
                .map(|t| {
                    vec![
                        t.date.format("%Y-%m-%d").to_string(),
                        t.user.clone(),
                        format!("{:.2}", t.hours),
                    ]
                })
                .collect(),
        ),
        ReportKind::Presence => (
            vec!["Date", "User", "Presence Time"],
            report
                .detail
                .iter()
                .map(|d| {
                    vec![
                        d.date.format("%Y-%m-%d").to_string(),
                        d.user.clone(),
                        d.readable.clone(),
                    ]
                })
                .collect(),
        ),
        ReportKind::Weekly => (
            vec!["User", "Week", "Days", "Hours"],
            report
                .weekly
                .iter()
                .map(|w| {
                    vec![
                        w.user.clone(),
                        format!("{}-W{:02}", w.iso_year, w.iso_week),
                        w.days.to_string(),
                        format!("{:.2}", w.hours),
                    ]
                })
                .collect(),
        ),
        ReportKind::FirstEntries => (
            vec!["User", "Time", "Department", "Door", "Body Temp"],
            report.first_entries.iter().map(first_last_row).collect(),
        ),
        ReportKind::LastExits => (
            vec!["User", "Time", "Department", "Door", "Body Temp"],
            report.last_exits.iter().map(first_last_row).collect(),
        ),
        ReportKind::Intervals => (
            vec!["User", "Date", "Entry", "Exit", "Duration"],
            report
                .reconstruction
                .intervals()
                .map(|i| {
                    vec![
                        i.user.clone(),
                        i.date.format("%Y-%m-%d").to_string(),
                        i.start.format("%H:%M:%S").to_string(),
                        i.end.format("%H:%M:%S").to_string(),
                        secs2readable(i.seconds()),
                    ]
                })
                .collect(),
        ),
    };

    ReportTable {
        title,
        headers,
        rows,
    }
}

/// Flagged events selected by `pick`, with their markers.
pub fn flagged_table<F>(report: &AnalysisReport, title: String, pick: F) -> ReportTable
where
    F: Fn(&AnomalyFlags) -> bool,
{
    let rows = report
        .flagged(pick)
        .into_iter()
        .map(|(e, f)| {
            vec![
                e.timestamp_str(),
                e.user.clone(),
                e.department.clone(),
                e.direction.to_string(),
                e.body_temp.display(),
                f.markers().join(" "),
            ]
        })
        .collect();

    ReportTable {
        title,
        headers: vec!["Time", "User", "Department", "Entry/Exit", "Body Temp", "Flags"],
        rows,
    }
}

fn event_row(e: &AccessEvent, f: &AnomalyFlags) -> Vec<String> {
    vec![
        e.user.clone(),
        e.department.clone(),
        e.door.clone(),
        e.card_id.clone(),
        e.timestamp_str(),
        e.direction.to_string(),
        e.body_temp.display(),
        e.date_str(),
        e.hour().to_string(),
        f.is_high_temp.to_string(),
    ]
}

fn timeline_row(e: &AccessEvent, f: &AnomalyFlags) -> Vec<String> {
    vec![
        e.timestamp_str(),
        e.user.clone(),
        e.direction.to_string(),
        e.door.clone(),
        e.body_temp.display(),
        f.markers().join(" "),
    ]
}

fn first_last_row(e: &AccessEvent) -> Vec<String> {
    vec![
        e.user.clone(),
        e.timestamp_str(),
        e.department.clone(),
        e.door.clone(),
        e.body_temp.display(),
    ]
}
