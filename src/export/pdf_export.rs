// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::pdf::PdfManager;
use crate::export::{ReportTable, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Tables with more columns than this switch to landscape.
const PORTRAIT_MAX_COLS: usize = 6;

/// Export PDF usando PdfManager e la tabella generata.
pub(crate) fn export_pdf(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = if table.headers.len() > PORTRAIT_MAX_COLS {
        PdfManager::landscape()
    } else {
        PdfManager::new()
    };
    pdf.write_table(&table.title, &table.headers, &table.rows);
    log::debug!("{} rows on {} page(s)", table.rows.len(), pdf.page_count());

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
