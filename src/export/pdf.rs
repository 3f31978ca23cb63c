use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};

use super::{ExportError, HEADER};
use crate::data::model::Company;
use crate::format::format_de;

// ---------------------------------------------------------------------------
// Page geometry (A4 portrait, millimetres from the top-left corner)
// ---------------------------------------------------------------------------

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const TITLE_Y: f32 = 10.0;
const TITLE_SIZE: f32 = 14.0;
/// First page: the table starts below the title.
const FIRST_TABLE_Y: f32 = 20.0;
const ROW_HEIGHT: f32 = 7.0;
const CELL_SIZE: f32 = 9.0;
const CELL_PADDING: f32 = 1.5;

/// Column widths in millimetres, summing to the printable width.
const COLUMN_WIDTHS: [f32; 7] = [48.0, 18.0, 22.0, 28.0, 30.0, 22.0, 22.0];

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Rows of one page: indices into the exported row list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRows {
    pub start: usize,
    pub end: usize,
}

/// Body rows that fit on a page whose table starts at `table_y`, header
/// row included.
fn rows_per_page(table_y: f32) -> usize {
    let available = PAGE_HEIGHT - MARGIN - table_y - ROW_HEIGHT;
    (available / ROW_HEIGHT).floor().max(1.0) as usize
}

/// Split `row_count` rows across pages. The first page has less room because
/// of the title. An empty table still gets one page with its header.
pub fn paginate(row_count: usize) -> Vec<PageRows> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut capacity = rows_per_page(FIRST_TABLE_Y);
    loop {
        let end = (start + capacity).min(row_count);
        pages.push(PageRows { start, end });
        if end >= row_count {
            return pages;
        }
        start = end;
        capacity = rows_per_page(MARGIN);
    }
}

/// Text cells of one company, as printed.
pub fn cells(company: &Company) -> [String; 7] {
    [
        company.name.clone(),
        company.company_type.clone(),
        company.region.clone(),
        company.industry.clone(),
        format_de(company.revenue),
        company.headcount.to_string(),
        company.founding_year.to_string(),
    ]
}

/// Cut `text` so it fits a column of `width_mm` at the cell font size.
fn fit(text: &str, width_mm: f32) -> String {
    // Helvetica averages roughly half an em per glyph.
    let glyph_mm = CELL_SIZE * 0.5 * 0.3528;
    let max_chars = ((width_mm - 2.0 * CELL_PADDING) / glyph_mm).floor().max(3.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `rows` as a paginated table titled `title`.
pub fn to_bytes(rows: &[&Company], title: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Tabelle");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for (page_no, page) in paginate(rows.len()).iter().enumerate() {
        let mut y = if page_no == 0 {
            layer.use_text(title, TITLE_SIZE, Mm(MARGIN), from_top(TITLE_Y), &bold);
            FIRST_TABLE_Y
        } else {
            let (page_idx, layer_idx) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Tabelle");
            layer = doc.get_page(page_idx).get_layer(layer_idx);
            MARGIN
        };

        let header = HEADER.map(str::to_string);
        draw_row(&layer, &header, y, &bold);
        y += ROW_HEIGHT;
        rule(&layer, y);

        for company in &rows[page.start..page.end] {
            draw_row(&layer, &cells(company), y, &regular);
            y += ROW_HEIGHT;
        }
    }
    drop(layer);

    Ok(doc.save_to_bytes()?)
}

/// Convert a distance from the page top into PDF's bottom-up coordinate.
fn from_top(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

fn draw_row(layer: &PdfLayerReference, texts: &[String; 7], top: f32, font: &IndirectFontRef) {
    let baseline = top + ROW_HEIGHT - 2.0;
    let mut x = MARGIN;
    for (text, width) in texts.iter().zip(COLUMN_WIDTHS) {
        layer.use_text(
            fit(text, width),
            CELL_SIZE,
            Mm(x + CELL_PADDING),
            from_top(baseline),
            font,
        );
        x += width;
    }
}

fn rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), from_top(y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), from_top(y)), false),
        ],
        is_closed: false,
    });
}
