//! Per-format text extraction for the ingestion pipeline.
//!
//! Each extractor takes a file path and either produces plain text or
//! fails explicitly. Failures are per-file: the corpus builder decides
//! what to do with them.

pub mod docx;
pub mod pdf;
pub mod tabular;

use std::path::Path;
use thiserror::Error;

use crate::domain::{ports::TextExtractor, DocumentFormat, DomainError};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("no extractable text in any page")]
    NoPdfText,

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("unable to read the file with any known encoding")]
    EncodingExhausted,
}

/// Dispatches to the extractor matching the inferred format.
pub fn extract_file(path: &Path, format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => pdf::extract(path),
        DocumentFormat::Docx => docx::extract(path),
        DocumentFormat::Csv | DocumentFormat::Xlsx => tabular::extract(path, format),
    }
}

/// The production [`TextExtractor`]: routes each file to the extractor
/// matching its format.
pub struct FormatExtractor;

impl TextExtractor for FormatExtractor {
    fn extract(&self, path: &Path, format: DocumentFormat) -> Result<String, DomainError> {
        extract_file(path, format).map_err(|e| DomainError::extraction(e.to_string()))
    }
}
