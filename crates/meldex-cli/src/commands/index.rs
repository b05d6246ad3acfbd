use meldex_core::config::{ExtractionConfig, Granularity};
use meldex_core::error::MeldexError;
use meldex_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_file: PathBuf,
    granularity: Option<&str>,
    pretty: bool,
    config: &ExtractionConfig,
) -> Result<(), MeldexError> {
    let pdf_bytes = super::read_input(&pdf_file)?;

    let mut index_config = config.index.clone();
    match granularity {
        Some("line") => index_config.granularity = Granularity::Line,
        Some("page") => index_config.granularity = Granularity::Page,
        _ => {}
    }

    tracing::info!(
        input = %pdf_file.display(),
        granularity = ?index_config.granularity,
        "building reference index"
    );
    let extractor = PdftotextExtractor::new();
    let doc = meldex_core::index_pdf(&pdf_bytes, &extractor, &index_config)?;
    output::json::write(&output_file, &doc, pretty)?;

    eprintln!(
        "Wrote {} (refs={}, cat={})",
        output_file.display(),
        doc.index.refs.len(),
        doc.index.cat_summary.len()
    );
    Ok(())
}
