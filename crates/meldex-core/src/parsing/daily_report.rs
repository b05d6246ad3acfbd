use crate::config::DailyReportConfig;
use crate::error::MeldexError;
use crate::model::DailyReportRow;
use crate::parsing::patterns::{
    first_reference, is_section_stop, match_row_start, strip_mel_label, RowStart,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    ScanningForHeader,
    Collecting,
}

/// Finalized rows plus the one still receiving continuation lines.
#[derive(Debug, Default)]
struct RowAccumulator {
    current: Option<DailyReportRow>,
    rows: Vec<DailyReportRow>,
}

impl RowAccumulator {
    fn start(&mut self, row: DailyReportRow) {
        self.flush();
        self.current = Some(row);
    }

    /// Append a wrapped line to the open row. Returns false if no row is open.
    fn append(&mut self, line: &str) -> bool {
        match self.current.as_mut() {
            Some(row) => {
                row.desc = format!("{} {}", row.desc, line).trim().to_string();
                row.raw = format!("{} | {}", row.raw, line);
                true
            }
            None => false,
        }
    }

    fn flush(&mut self) {
        if let Some(row) = self.current.take() {
            self.rows.push(row);
        }
    }

    fn finalized(&self) -> usize {
        self.rows.len()
    }

    fn finish(mut self) -> Vec<DailyReportRow> {
        self.flush();
        self.rows
    }
}

/// Parse the table that follows `config.header` into rows, in document order.
///
/// Text extraction breaks each table row into a row-start line
/// (`TAIL WO rest...`) followed by any number of wrapped lines. Every other
/// line after the header, a repeated header included, is appended to the open
/// row.
///
/// Lines are expected trimmed and non-empty (see
/// [`crate::parsing::document_lines`]); blank lines are skipped regardless.
/// Fails with [`MeldexError::HeaderNotFound`] if the header never appears.
pub fn parse_daily_report(
    lines: &[&str],
    config: &DailyReportConfig,
) -> Result<Vec<DailyReportRow>, MeldexError> {
    let header = config.header.trim();
    let mut state = TableState::ScanningForHeader;
    let mut acc = RowAccumulator::default();

    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match state {
            TableState::ScanningForHeader => {
                if line == header {
                    tracing::debug!(line = idx + 1, "found daily report table header");
                    state = TableState::Collecting;
                }
            }
            TableState::Collecting => {
                if is_section_stop(line) && acc.finalized() >= config.soft_stop_min_rows {
                    tracing::debug!(
                        line = idx + 1,
                        rows = acc.finalized(),
                        "section header ends daily report table"
                    );
                    break;
                }

                if let Some(start) = match_row_start(line) {
                    acc.start(row_from_start(line, &start));
                } else if !acc.append(line) {
                    tracing::debug!(line = idx + 1, "dropping text before the first row");
                }
            }
        }
    }

    if state == TableState::ScanningForHeader {
        return Err(MeldexError::HeaderNotFound {
            header: header.to_string(),
        });
    }

    let rows = acc.finish();
    tracing::info!(rows = rows.len(), "parsed daily report table");
    Ok(rows)
}

fn row_from_start(line: &str, start: &RowStart<'_>) -> DailyReportRow {
    DailyReportRow {
        tail: start.tail.to_string(),
        wo: start.wo.to_string(),
        ata: String::new(),
        desc: strip_mel_label(start.rest),
        raw: line.to_string(),
        mel_ref: first_reference(start.rest),
    }
}
