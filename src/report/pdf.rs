// ─── PDF generation ───────────────────────────────────────────────────────────

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use printpdf::*;

use super::types::{HealthReport, ReportError};
use super::{
    generated_line, medication_lines, period_line, seizure_line, summary_lines, trigger_line,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const TOP: f32 = 280.0;
const BOTTOM: f32 = 20.0;
const LEFT: f32 = 20.0;

/// Writes lines top to bottom, starting a new A4 page when the cursor
/// reaches the bottom margin.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
    pages: usize,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: Mm(TOP),
            pages: 1,
        }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef, advance: f32) {
        if self.y < Mm(BOTTOM) {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(TOP);
            self.pages += 1;
        }
        self.layer.use_text(text, size, Mm(LEFT), self.y, font);
        self.y -= Mm(advance);
    }

    fn gap(&mut self, mm: f32) {
        self.y -= Mm(mm);
    }
}

/// Renders the report as an A4 PDF. Returns PDF bytes.
pub fn generate_report_pdf(report: &HealthReport) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) =
        PdfDocument::new(&report.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("PDF font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("PDF font error: {e}")))?;

    let pages = {
        let mut cursor = PageCursor::new(&doc, layer);

        // Header
        cursor.line(&report.title, 20.0, &bold, 8.0);
        cursor.line(&generated_line(report), 10.0, &font, 6.0);
        cursor.line(&period_line(report), 10.0, &font, 6.0);
        cursor.gap(10.0);

        cursor.line("Summary", 14.0, &bold, 10.0);
        for line in summary_lines(report) {
            cursor.line(&line, 11.0, &font, 8.0);
        }
        cursor.gap(8.0);

        cursor.line("Current Medications", 14.0, &bold, 10.0);
        for line in medication_lines(report) {
            for wrapped in wrap_text(&line, 90) {
                cursor.line(&wrapped, 10.0, &font, 8.0);
            }
        }
        cursor.gap(10.0);

        cursor.line("Recent Seizures", 14.0, &bold, 10.0);
        if report.recent_seizures.is_empty() {
            cursor.line("No seizures recorded in this period", 9.0, &font, 6.0);
        }
        for seizure in &report.recent_seizures {
            cursor.line(&seizure_line(seizure), 9.0, &font, 6.0);
        }

        if !report.summary.triggers.is_empty() {
            cursor.gap(10.0);
            cursor.line("Common Triggers", 14.0, &bold, 10.0);
            for trigger in &report.summary.triggers {
                cursor.line(&trigger_line(trigger), 10.0, &font, 7.0);
            }
        }

        // Disclaimer
        cursor.gap(8.0);
        for line in wrap_text(&report.disclaimer, 110) {
            cursor.line(&line, 8.0, &font, 4.0);
        }
        cursor.pages
    };

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("PDF save error: {e}")))?;
    let bytes = buf
        .into_inner()
        .map_err(|e| ReportError::Pdf(format!("PDF buffer error: {e}")))?;

    tracing::info!(pages, bytes = bytes.len(), "Report PDF generated");
    Ok(bytes)
}

/// `seizure-report-YYYY-MM-DD.pdf`
pub fn report_filename(date: NaiveDate) -> String {
    format!("seizure-report-{}.pdf", date.format("%Y-%m-%d"))
}

/// Saves PDF bytes into `exports_dir`, creating it if needed.
pub fn export_report_to_file(
    pdf_bytes: &[u8],
    exports_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(exports_dir)?;
    let path = exports_dir.join(report_filename(date));
    std::fs::write(&path, pdf_bytes)?;
    tracing::info!(path = %path.display(), "Report exported");
    Ok(path)
}

/// Simple word-wrap helper for PDF text rendering.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// ─── Tests ────────────────────────────────────────────────────────────────────
