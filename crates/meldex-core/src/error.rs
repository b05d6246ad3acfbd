use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MeldexError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("could not find '{header}' header in document text")]
    HeaderNotFound { header: String },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("'{0}' is not a reference code (expected NN-NN-NN with optional letter and /NN)")]
    UnknownReference(String),

    #[error("{} was built from a different document (sha256 {expected}, file has {actual})", .artifact.display())]
    StaleArtifact {
        artifact: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
