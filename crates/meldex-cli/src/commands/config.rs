use meldex_core::config::{CategoryWindow, ExtractionConfig};
use meldex_core::error::MeldexError;
use std::path::Path;

use crate::output;

pub fn show(config: &ExtractionConfig) -> Result<(), MeldexError> {
    output::json::print(config)
}

pub fn validate(file: &Path) -> Result<(), MeldexError> {
    let config = meldex_core::config::load_config(file)?;
    let index = &config.index;

    println!("Config '{}' is valid.", file.display());
    println!("  Granularity: {:?}", index.granularity);
    match index.window() {
        CategoryWindow::Segment => println!("  Category window: whole segment"),
        CategoryWindow::Span { chars } => {
            println!("  Category window: {chars} chars around each code")
        }
    }
    println!("  Daily report header: {}", config.daily_report.header);

    let mut warnings = Vec::new();
    if index.ref_snippet_chars > index.cat_snippet_chars {
        warnings.push(format!(
            "ref_snippet_chars ({}) is longer than cat_snippet_chars ({})",
            index.ref_snippet_chars, index.cat_snippet_chars
        ));
    }
    if config.daily_report.soft_stop_min_rows == 0 {
        warnings.push(
            "soft_stop_min_rows is 0: any 'MEL/CDL Items' line ends the table".to_string(),
        );
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
