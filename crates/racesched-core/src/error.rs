use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no text content found in document")]
    NoText,

    #[error("could not find any series in the document. Please check the file format")]
    NoSeries,

    #[error("failed to load replacement rules from {path}: {reason}")]
    RulesLoad { path: PathBuf, reason: String },

    #[error("invalid replacement rules: {0}")]
    RulesInvalid(String),

    #[error("failed to load parse options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid series selection: {0}")]
    InvalidSelection(String),

    #[error("invalid schedule date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
