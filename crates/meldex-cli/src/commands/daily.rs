use meldex_core::config::ExtractionConfig;
use meldex_core::error::MeldexError;
use meldex_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_file: PathBuf,
    show: bool,
    config: &ExtractionConfig,
) -> Result<(), MeldexError> {
    let pdf_bytes = super::read_input(&pdf_file)?;
    let source_pdf = pdf_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| pdf_file.display().to_string());

    tracing::info!(input = %pdf_file.display(), "parsing daily report");
    let extractor = PdftotextExtractor::new();
    let doc = meldex_core::parse_daily_report_pdf(
        &pdf_bytes,
        &source_pdf,
        &extractor,
        &config.daily_report,
    )?;
    output::json::write(&output_file, &doc, true)?;

    if show {
        output::table::print_rows(&doc.rows);
    }
    eprintln!(
        "Wrote {} with {} rows.",
        output_file.display(),
        doc.rows.len()
    );
    Ok(())
}
