pub mod pdftotext;

use crate::error::MeldexError;

/// Content extracted from a single page of a PDF.
///
/// `lines` is empty when the backend produced no text for the page.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn new(page_number: usize, text: &str) -> Self {
        PageContent {
            page_number,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }

    /// The page text with its original line breaks, or `None` if the page
    /// carries no non-whitespace text.
    pub fn text(&self) -> Option<String> {
        if self.lines.iter().all(|l| l.trim().is_empty()) {
            None
        } else {
            Some(self.lines.join("\n"))
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MeldexError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
