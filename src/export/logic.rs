// src/export/logic.rs

use crate::core::logic::AnalysisReport;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_table;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ReportKind};
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one table of `report`.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `kind`: which table (events, timeline, trend, ...)
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        report: &AnalysisReport,
        format: ExportFormat,
        kind: ReportKind,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        if !file.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                file.display()
            )));
        }

        ensure_writable(file, force)?;

        let table = build_table(report, kind);

        if table.is_empty() {
            warning(format!(
                "No rows for '{}' in the selected range; writing headers only.",
                kind.title()
            ));
        }

        match format {
            ExportFormat::Csv => export_csv(&table, file)?,
            ExportFormat::Json => export_json(&table, file)?,
            ExportFormat::Xlsx => export_xlsx(&table, file)?,
            ExportFormat::Pdf => export_pdf(&table, file)?,
        }

        log::debug!(
            "exported {} rows of {:?} as {}",
            table.rows.len(),
            kind,
            format.as_str()
        );
        Ok(())
    }
}
