use meldex_core::emit::{read_artifact, Artifact};
use meldex_core::error::MeldexError;
use meldex_core::lookup::{lookup_reference, matching_rows};
use std::path::Path;

use crate::output;

pub fn run(artifact_path: &Path, query: &str) -> Result<(), MeldexError> {
    match read_artifact(artifact_path)? {
        Artifact::ReferenceIndex(doc) => {
            let hit = lookup_reference(&doc.index, query)?;
            output::table::print_hit(&hit);
        }
        Artifact::DailyReport(doc) => {
            let rows = matching_rows(&doc.rows, query);
            if rows.is_empty() {
                println!("No rows match '{}'.", query.trim());
            } else {
                let rows: Vec<_> = rows.into_iter().cloned().collect();
                output::table::print_rows(&rows);
            }
        }
    }
    Ok(())
}
