use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Identifies the source document an artifact was built from, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProvenance {
    /// Lowercase hex SHA-256 of the source file bytes.
    pub pdf_sha256: String,
    /// ISO-8601 UTC timestamp with a trailing `Z`.
    pub generated_utc: String,
}

impl DocumentProvenance {
    /// Provenance for `bytes`, stamped now.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::at(bytes, Utc::now())
    }

    pub fn at(bytes: &[u8], generated: DateTime<Utc>) -> Self {
        DocumentProvenance {
            pdf_sha256: sha256_hex(bytes),
            generated_utc: format_utc(generated),
        }
    }

    /// True if `bytes` hash to the recorded digest.
    pub fn matches(&self, bytes: &[u8]) -> bool {
        self.pdf_sha256.eq_ignore_ascii_case(&sha256_hex(bytes))
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn format_utc(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
