use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document formats the ingestion pipeline knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Csv,
    Xlsx,
}

impl DocumentFormat {
    /// Infers the format from the file extension, case-insensitively.
    /// Returns `None` for unsupported extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }
}

/// A file the corpus build gave up on, with the reason it was skipped.
/// Kept on the corpus so callers and tests can inspect what was dropped
/// instead of grepping logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// The combined text extracted from every ingested document, plus the
/// per-file outcome bookkeeping. Built once at startup, immutable after
/// the token-budget trim.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub text: String,
    pub processed: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}
