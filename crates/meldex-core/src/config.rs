use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MeldexError;

/// Header line of the open items table in the MCC daily report.
pub const DEFAULT_TABLE_HEADER: &str = "Reg No WO Open/Due Date MEL/CDL Description";

/// Characters taken on each side of a code by the default span window.
pub const DEFAULT_SPAN_CHARS: usize = 80;

/// How the reference index splits the document into located segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One segment per PDF page; location is the 1-based page number.
    #[default]
    Page,
    /// One segment per non-empty line; location is the 1-based physical line
    /// number across the document, blank lines counted.
    Line,
}

/// Text searched for category tags when a segment triggers category detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CategoryWindow {
    /// The whole whitespace-collapsed segment.
    Segment,
    /// `chars` characters before and after the code's first occurrence.
    Span { chars: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub granularity: Granularity,
    /// Overrides the window implied by `granularity`.
    pub category_window: Option<CategoryWindow>,
    pub ref_snippet_chars: usize,
    pub cat_snippet_chars: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            granularity: Granularity::Page,
            category_window: None,
            ref_snippet_chars: 250,
            cat_snippet_chars: 500,
        }
    }
}

impl IndexConfig {
    /// The effective category window: explicit setting, else the granularity's
    /// natural choice (whole page, or a span around the code on a line).
    pub fn window(&self) -> CategoryWindow {
        self.category_window.unwrap_or(match self.granularity {
            Granularity::Page => CategoryWindow::Segment,
            Granularity::Line => CategoryWindow::Span {
                chars: DEFAULT_SPAN_CHARS,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DailyReportConfig {
    /// Exact (trimmed) text of the line that anchors the table.
    pub header: String,
    /// Rows that must be finalized before a `MEL/CDL Items` line ends the table.
    pub soft_stop_min_rows: usize,
}

impl Default for DailyReportConfig {
    fn default() -> Self {
        DailyReportConfig {
            header: DEFAULT_TABLE_HEADER.to_string(),
            soft_stop_min_rows: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    pub index: IndexConfig,
    pub daily_report: DailyReportConfig,
}

/// Load an extraction config from a JSON file.
pub fn load_config(path: &Path) -> Result<ExtractionConfig, MeldexError> {
    let content = std::fs::read_to_string(path).map_err(|e| MeldexError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse an extraction config from a JSON string.
pub fn parse_config(json: &str, source: &Path) -> Result<ExtractionConfig, MeldexError> {
    let config: ExtractionConfig =
        serde_json::from_str(json).map_err(|e| MeldexError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse an extraction config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<ExtractionConfig, MeldexError> {
    let config: ExtractionConfig = serde_json::from_str(json).map_err(MeldexError::Json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a config is usable.
pub fn validate_config(config: &ExtractionConfig) -> Result<(), MeldexError> {
    if config.index.ref_snippet_chars == 0 {
        return Err(MeldexError::ConfigInvalid(
            "index.ref_snippet_chars must be greater than 0".into(),
        ));
    }

    if config.index.cat_snippet_chars == 0 {
        return Err(MeldexError::ConfigInvalid(
            "index.cat_snippet_chars must be greater than 0".into(),
        ));
    }

    if let Some(CategoryWindow::Span { chars: 0 }) = config.index.category_window {
        return Err(MeldexError::ConfigInvalid(
            "index.category_window span must cover at least one character".into(),
        ));
    }

    if config.daily_report.header.trim().is_empty() {
        return Err(MeldexError::ConfigInvalid(
            "daily_report.header must not be empty".into(),
        ));
    }

    Ok(())
}
