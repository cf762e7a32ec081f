// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::{ReportTable, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_ODD: u32 = 0xEAF3FB;
const BAND_EVEN: u32 = 0xFFFFFF;
const ALERT_FG: u32 = 0xC00000;

/// Export XLSX: styled header with autofilter, banded rows, policy flags in
/// red, auto column widths.
pub(crate) fn export_xlsx(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(&table.title)).map_err(to_app_error)?;

    write_header(worksheet, table)?;

    let mut col_widths: Vec<usize> = table.headers.iter().map(|h| h.width()).collect();

    for (row_index, values) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = Color::RGB(if row_index % 2 == 0 { BAND_ODD } else { BAND_EVEN });

        for (col, value) in values.iter().enumerate() {
            let header = table.headers.get(col).copied().unwrap_or("");
            let alert = is_alert_cell(header, value);
            write_cell(worksheet, row, col as u16, value, ColumnKind::of(header), band, alert)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(value.width());
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_header(worksheet: &mut Worksheet, table: &ReportTable) -> AppResult<()> {
    let fmt = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &fmt)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    if !table.headers.is_empty() {
        let last_col = (table.headers.len() - 1) as u16;
        worksheet
            .autofilter(0, 0, table.rows.len() as u32, last_col)
            .map_err(to_app_error)?;
    }
    Ok(())
}

/// Cells that carry a policy anomaly.
fn is_alert_cell(header: &str, value: &str) -> bool {
    match header {
        "Flags" => !value.is_empty(),
        "High Temp" => value == "true",
        _ => false,
    }
}

/// How a column's cells are stored in the sheet.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    /// Excel date serial with a date/time number format.
    Temporal,
    Numeric,
    /// Identifiers and free text, kept verbatim (`Card ID` `000123` stays `000123`).
    Text,
}

impl ColumnKind {
    fn of(header: &str) -> Self {
        match header {
            "Time" | "Date" | "Entry" | "Exit" => ColumnKind::Temporal,
            "Hour" | "Count" | "Hours" | "Days" | "Body Temp" => ColumnKind::Numeric,
            _ => ColumnKind::Text,
        }
    }
}

/// Converts only where the column allows it; anything that does not parse
/// is written as text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: ColumnKind,
    bg: Color,
    alert: bool,
) -> AppResult<()> {
    let mut base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if alert {
        base = base.set_bold().set_font_color(Color::RGB(ALERT_FG));
    }

    let serial = match kind {
        ColumnKind::Temporal => parse_to_excel_date(s),
        _ => None,
    };
    let number = match kind {
        ColumnKind::Numeric => s.parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    };

    let written = if let Some((num_format, serial)) = serial {
        worksheet.write_with_format(row, col, serial, &base.set_num_format(num_format))
    } else if let Some(num) = number {
        worksheet.write_with_format(row, col, num, &base.set_align(FormatAlign::Right))
    } else {
        worksheet.write_with_format(row, col, s, &base)
    };

    written.map(|_| ()).map_err(to_app_error)
}

/// Excel limits sheet names to 31 chars and forbids `[]:*?/\`.
fn sheet_name(title: &str) -> String {
    // drop the " (from → to)" suffix
    let base = title.split(" (").next().unwrap_or(title);
    let cleaned: String = base
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();

    match cleaned.trim() {
        "" => "Report".to_string(),
        name => name.to_string(),
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
