pub mod absent;
pub mod alerts;
pub mod config;
pub mod events;
pub mod export;
pub mod first_last;
pub mod heatmap;
pub mod init;
pub mod options;
pub mod presence;
pub mod summary;

use crate::cli::parser::FilterArgs;
use crate::config::{Config, IngestConfig, IngestMode};
use crate::core::filter::{DateRange, EventFilter, Selection};
use crate::core::logic::{AnalysisReport, Analyzer};
use crate::core::normalizer::Dataset;
use crate::errors::{AppError, AppResult};
use crate::export::ReportTable;
use crate::session::Session;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{colorize_direction, colorize_flags, colorize_hours};
use crate::utils::date::parse_date;
use crate::utils::path::absolutize;
use crate::utils::table;

/// Rejected rows printed before "... and N more".
const MAX_REJECTED_SHOWN: usize = 10;

fn ingest_for(args: &FilterArgs, cfg: &Config) -> IngestConfig {
    let mut ingest = cfg.ingest.clone();
    if args.lenient {
        ingest.mode = IngestMode::Lenient;
    }
    ingest
}

/// Build the filter from CLI arguments; missing bounds default to the
/// dataset's first/last day.
pub(crate) fn build_filter(args: &FilterArgs, dataset: &Dataset) -> AppResult<EventFilter> {
    let range = match &args.range {
        Some(r) => DateRange::parse(r)?,
        None => {
            let bounds = dataset.date_bounds();
            let lower = match &args.from {
                Some(s) => parse_date(s)?,
                None => bounds.map(|b| b.0).ok_or(AppError::EmptyDataset)?,
            };
            let upper = match &args.to {
                Some(s) => parse_date(s)?,
                None => bounds.map(|b| b.1).ok_or(AppError::EmptyDataset)?,
            };
            DateRange::new(lower, upper)?
        }
    };

    Ok(EventFilter::new(
        Selection::parse(args.user.as_deref()),
        Selection::parse(args.dept.as_deref()),
        range,
    ))
}

fn report_rejected(dataset: &Dataset) {
    if dataset.rejected.is_empty() {
        return;
    }

    warning(format!("{} row(s) skipped:", dataset.rejected.len()));
    for r in dataset.rejected.iter().take(MAX_REJECTED_SHOWN) {
        println!("   row {}: {}", r.row, r.reason);
    }
    if dataset.rejected.len() > MAX_REJECTED_SHOWN {
        println!(
            "   ... and {} more",
            dataset.rejected.len() - MAX_REJECTED_SHOWN
        );
    }
}

/// Load (login gate → normalizer → filter) and run the analysis.
pub(crate) fn analyze(
    args: &FilterArgs,
    cfg: &Config,
    session: &mut Session,
) -> AppResult<AnalysisReport> {
    session.require_login(&cfg.auth)?;

    let path = absolutize(&args.file);
    let dataset = session.load(&path, &ingest_for(args, cfg))?;
    report_rejected(dataset);

    let filter = build_filter(args, dataset)?;
    info(format!(
        "User: {} | Department: {} | Dates: {}",
        filter.user, filter.department, filter.range
    ));

    Analyzer::run(dataset, &filter, cfg)
}

/// Print a report table with direction/flag/hour colouring.
pub(crate) fn print_table(t: &ReportTable) {
    header(&t.title);

    if t.is_empty() {
        println!("No rows.");
        return;
    }

    let headers = t.headers.clone();
    let out = table::render(t, |col, cell| match headers.get(col).copied() {
        Some("Entry/Exit") => colorize_direction(cell),
        Some("Flags") => colorize_flags(cell),
        Some("Hours") | Some("Presence Time") => colorize_hours(cell),
        _ => cell.to_string(),
    });
    print!("{out}");
}
