//! Table rendering utilities for CLI outputs.

use crate::export::ReportTable;
use unicode_width::UnicodeWidthStr;

/// Plain-width layout (widths ignore ANSI codes added by `style`).
///
/// `style(col, raw)` may decorate a cell; padding is computed on the raw text.
pub fn render<F>(table: &ReportTable, style: F) -> String
where
    F: Fn(usize, &str) -> String,
{
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let mut out = String::new();

    // Header
    for (h, w) in table.headers.iter().zip(&widths) {
        out.push_str(&pad(h, *w));
        out.push_str("  ");
    }
    out.push('\n');

    for w in &widths {
        out.push_str(&"-".repeat(*w));
        out.push_str("  ");
    }
    out.push('\n');

    // Rows
    for row in &table.rows {
        for (i, (cell, w)) in row.iter().zip(&widths).enumerate() {
            let styled = style(i, cell);
            out.push_str(&styled);
            out.push_str(&" ".repeat(w.saturating_sub(cell.width())));
            out.push_str("  ");
        }
        out.push('\n');
    }

    out
}

fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(s.width())));
    out
}
