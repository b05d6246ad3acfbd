pub mod config;
pub mod emit;
pub mod error;
pub mod extraction;
pub mod index;
pub mod lookup;
pub mod model;
pub mod parsing;
pub mod provenance;

use config::{DailyReportConfig, IndexConfig};
use emit::{DailyReportDocument, ReferenceIndexDocument};
use error::MeldexError;
use extraction::PdfExtractor;
use provenance::DocumentProvenance;

/// Build the MEL reference index for a PDF.
///
/// Every page is scanned for reference codes and category tags; the result
/// carries the SHA-256 of `pdf_bytes` so consumers can detect a stale index.
pub fn index_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    config: &IndexConfig,
) -> Result<ReferenceIndexDocument, MeldexError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "indexing document"
    );

    let index = index::build_reference_index(&pages, config);

    Ok(ReferenceIndexDocument {
        provenance: DocumentProvenance::from_bytes(pdf_bytes),
        index,
    })
}

/// Parse the open items table of a daily maintenance report PDF.
///
/// `source_pdf` is recorded as given (normally the file name). Fails with
/// [`MeldexError::HeaderNotFound`] when the table header is missing.
pub fn parse_daily_report_pdf(
    pdf_bytes: &[u8],
    source_pdf: &str,
    extractor: &dyn PdfExtractor,
    config: &DailyReportConfig,
) -> Result<DailyReportDocument, MeldexError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let lines = parsing::document_lines(&pages);
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        lines = lines.len(),
        "parsing daily report"
    );

    let rows = parsing::parse_daily_report(&lines, config)?;

    Ok(DailyReportDocument::new(
        source_pdf,
        DocumentProvenance::from_bytes(pdf_bytes),
        rows,
    ))
}
