use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH: f32 = 0.52;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,
    cell_pad: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    /// A4 portrait.
    pub fn new() -> Self {
        Self::with_page(595.0, 842.0)
    }

    /// A4 landscape, for wide tables.
    pub fn landscape() -> Self {
        Self::with_page(842.0, 595.0)
    }

    fn with_page(page_w: f32, page_h: f32) -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,
            margin: 40.0,
            line_h: 12.0,
            cell_pad: 4.0,

            next_id,
            font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = to_winansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, w: f32, h: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Fixed grid: every column gets usable width / column count.
    fn col_width(&self, cols: usize) -> f32 {
        (self.page_w - 2.0 * self.margin) / cols.max(1) as f32
    }

    /// Wrap every cell of `row` to the column width.
    fn wrap_row(&self, row: &[String], col_w: f32, font_size: f32) -> Vec<Vec<String>> {
        let max_chars = (((col_w - 2.0 * self.cell_pad) / (font_size * AVG_GLYPH)) as usize).max(1);

        row.iter()
            .map(|cell| {
                if cell.is_empty() {
                    return vec![String::new()];
                }
                let opts = textwrap::Options::new(max_chars).break_words(true);
                textwrap::wrap(cell, opts)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect()
            })
            .collect()
    }

    fn row_height(&self, wrapped: &[Vec<String>]) -> f32 {
        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
        lines as f32 * self.line_h + self.cell_pad
    }

    /// `y` is the bottom edge of the row.
    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_w: f32,
        wrapped: &[Vec<String>],
        h: f32,
        font_size: f32,
    ) {
        let mut x = self.margin;

        for lines in wrapped {
            let mut ty = y + h - self.line_h + 1.0;
            for line in lines {
                self.draw_text(content, x + self.cell_pad, ty, font_size, line);
                ty -= self.line_h;
            }
            self.draw_cell_borders(content, x, y, col_w, h);
            x += col_w;
        }
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 25.0,
            self.font_size,
            &pg,
        );
    }

    /// Tabella multipagina con titolo; the header row repeats on every page.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let cols = headers.len();
        let col_w = self.col_width(cols);
        let table_w = col_w * cols as f32;

        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let header_wrapped = self.wrap_row(&header_row, col_w, self.header_font_size);
        let header_h = self.row_height(&header_wrapped);

        let body: Vec<Vec<Vec<String>>> = rows
            .iter()
            .map(|r| self.wrap_row(r, col_w, self.font_size))
            .collect();

        let mut next = 0;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 10.0 - header_h;

            self.fill_band(&mut content, y, table_w, header_h, 0.85);
            self.draw_row(
                &mut content,
                y,
                col_w,
                &header_wrapped,
                header_h,
                self.header_font_size,
            );

            let mut placed_on_page = 0;

            while next < body.len() {
                let h = self.row_height(&body[next]);

                // a row taller than a whole page is still placed alone
                if y - h < self.margin && placed_on_page > 0 {
                    break;
                }
                y -= h;

                // zebra stripe
                if next % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, h, 0.96);
                }

                self.draw_row(&mut content, y, col_w, &body[next], h, self.font_size);

                next += 1;
                placed_on_page += 1;
            }

            self.finalize_page(content);
            page_idx += 1;

            if next >= body.len() {
                break;
            }
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Helvetica is a single-byte font: keep Latin-1, map arrows, drop the rest.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .flat_map(|c| match c {
            '→' => vec![b'-', b'>'],
            c if (c as u32) < 0x80 => vec![c as u8],
            c if (0xA0..=0xFF).contains(&(c as u32)) => vec![c as u32 as u8],
            _ => vec![b'?'],
        })
        .collect()
}
