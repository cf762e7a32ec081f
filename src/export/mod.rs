// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{ReportTable, build_table};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Which table of the analysis to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Filtered raw events
    Events,
    /// Events with policy flags
    Timeline,
    /// Only flagged events
    Alerts,
    /// Events per user/date/hour
    Heatmap,
    /// Hours per user/day
    Trend,
    /// h/m/s presence per user/day
    Presence,
    /// Hours per user/ISO week
    Weekly,
    /// Reconstructed entry/exit intervals
    Intervals,
    /// First entry per user
    FirstEntries,
    /// Last exit per user
    LastExits,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Events => "Access events",
            ReportKind::Timeline => "Access timeline",
            ReportKind::Alerts => "Alerts",
            ReportKind::Heatmap => "Presence heatmap",
            ReportKind::Trend => "Presence trend (hours per day)",
            ReportKind::Presence => "Daily detailed presence time",
            ReportKind::Weekly => "Weekly presence",
            ReportKind::Intervals => "Presence intervals",
            ReportKind::FirstEntries => "First entry per user",
            ReportKind::LastExits => "Last exit per user",
        }
    }
}
