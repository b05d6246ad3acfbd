use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::error::MeldexError;
use crate::index::ReferenceIndex;
use crate::model::DailyReportRow;
use crate::provenance::DocumentProvenance;

pub const DAILY_REPORT_TYPE: &str = "daily_report";

/// `{pdf_sha256, generated_utc, refs, cat_summary}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceIndexDocument {
    #[serde(flatten)]
    pub provenance: DocumentProvenance,
    #[serde(flatten)]
    pub index: ReferenceIndex,
}

/// `{type, source_pdf, pdf_sha256, generated_utc, rows}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReportDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub source_pdf: String,
    #[serde(flatten)]
    pub provenance: DocumentProvenance,
    pub rows: Vec<DailyReportRow>,
}

impl DailyReportDocument {
    pub fn new(
        source_pdf: impl Into<String>,
        provenance: DocumentProvenance,
        rows: Vec<DailyReportRow>,
    ) -> Self {
        DailyReportDocument {
            kind: DAILY_REPORT_TYPE.to_string(),
            source_pdf: source_pdf.into(),
            provenance,
            rows,
        }
    }
}

/// Either artifact, as read back from disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Artifact {
    DailyReport(DailyReportDocument),
    ReferenceIndex(ReferenceIndexDocument),
}

impl Artifact {
    pub fn provenance(&self) -> &DocumentProvenance {
        match self {
            Artifact::DailyReport(doc) => &doc.provenance,
            Artifact::ReferenceIndex(doc) => &doc.provenance,
        }
    }
}

pub fn to_json<T: Serialize>(doc: &T, pretty: bool) -> Result<String, MeldexError> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}

pub fn read_artifact(path: &Path) -> Result<Artifact, MeldexError> {
    if !path.exists() {
        return Err(MeldexError::InputNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Write `contents` to `path` in one step.
///
/// The data goes to a temporary file next to `path` which is then renamed over
/// it, so readers never see a partial artifact. Missing parent directories are
/// created.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), MeldexError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| MeldexError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryEntry, CategoryTag, RefEntry, NO_REF_KEY};
    use crate::parsing::normalize::normalize_reference;
    use chrono::{TimeZone, Utc};

    fn provenance() -> DocumentProvenance {
        let ts = Utc.with_ymd_and_hms(2026, 2, 20, 6, 30, 0).unwrap();
        DocumentProvenance::at(b"%PDF-1.7", ts)
    }

    #[test]
    fn test_index_document_shape_and_key_order() {
        let mut index = ReferenceIndex::default();
        for (code, page) in [("34-11-02", 9), ("21-10-01", 3)] {
            index.refs.insert(
                normalize_reference(code),
                RefEntry {
                    page,
                    snippet: format!("{code} text"),
                },
            );
        }
        index.cat_summary.insert(
            NO_REF_KEY.to_string(),
            CategoryEntry {
                page: 1,
                cats: vec![CategoryTag::CatIIIA],
                snippet: "CAT IIIA".into(),
            },
        );
        let doc = ReferenceIndexDocument {
            provenance: provenance(),
            index,
        };

        let json = to_json(&doc, false).unwrap();
        let sha = json.find("\"pdf_sha256\"").unwrap();
        let generated = json.find("\"generated_utc\"").unwrap();
        let refs = json.find("\"refs\"").unwrap();
        let cats = json.find("\"cat_summary\"").unwrap();
        assert!(sha < generated && generated < refs && refs < cats);
        assert!(json.find("21-10-01").unwrap() < json.find("34-11-02").unwrap());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["refs"]["21-10-01"]["page"], 3);
        assert_eq!(value["cat_summary"]["__NO_REF__"]["cats"][0], "CATIIIA");
        assert_eq!(value["generated_utc"], "2026-02-20T06:30:00Z");
    }

    #[test]
    fn test_daily_document_shape() {
        let doc = DailyReportDocument::new("Daily Report 20022026.pdf", provenance(), vec![]);
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "daily_report");
        assert_eq!(value["source_pdf"], "Daily Report 20022026.pdf");
        assert_eq!(value["rows"], serde_json::json!([]));
        assert_eq!(value["pdf_sha256"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_artifact_reads_back_either_shape() {
        let daily = DailyReportDocument::new("r.pdf", provenance(), vec![]);
        let parsed: Artifact =
            serde_json::from_str(&to_json(&daily, true).unwrap()).unwrap();
        assert!(matches!(parsed, Artifact::DailyReport(_)));

        let index = ReferenceIndexDocument {
            provenance: provenance(),
            index: ReferenceIndex::default(),
        };
        let parsed: Artifact = serde_json::from_str(&to_json(&index, false).unwrap()).unwrap();
        assert!(matches!(parsed, Artifact::ReferenceIndex(_)));
        assert_eq!(parsed.provenance(), &provenance());
    }

    #[test]
    fn test_write_atomic_creates_parent_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("mel_pdf_index.json");

        write_atomic(&path, "{\"a\":1}").unwrap();
        write_atomic(&path, "{\"a\":2}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"a\":2}");
        let leftovers = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_read_artifact_missing() {
        let err = read_artifact(Path::new("/nonexistent/index.json")).unwrap_err();
        assert!(matches!(err, MeldexError::InputNotFound(_)));
    }
}
