use crate::domain::entities::DocumentFormat;
use crate::domain::errors::DomainError;
use std::path::Path;

/// Per-format text extraction. Given a file path and its inferred
/// format, produce plain text or fail explicitly.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path, format: DocumentFormat) -> Result<String, DomainError>;
}
