use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::{ports::TextExtractor, Corpus, DocumentFormat, DomainError, SkippedFile};

/// Builds the grounding corpus from a source directory, once at startup.
///
/// Only regular files directly inside the directory are considered
/// (non-recursive), filtered to supported extensions case-insensitively.
/// Section order follows directory-listing order, which is
/// platform-dependent and not guaranteed stable.
pub struct CorpusBuilder {
    source_dir: PathBuf,
    extractor: Arc<dyn TextExtractor>,
}

impl CorpusBuilder {
    pub fn new(source_dir: impl Into<PathBuf>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            source_dir: source_dir.into(),
            extractor,
        }
    }

    /// Walks the source directory and concatenates every successfully
    /// extracted file into one annotated text blob.
    ///
    /// A single file's failure is recorded and skipped, never fatal.
    /// Zero successful files is fatal: there is no corpus to serve.
    #[instrument(skip(self), fields(dir = %self.source_dir.display()))]
    pub fn build(&self) -> Result<Corpus, DomainError> {
        let entries = fs::read_dir(&self.source_dir).map_err(|e| {
            DomainError::internal(format!(
                "cannot read source directory {}: {e}",
                self.source_dir.display()
            ))
        })?;

        let mut text = String::new();
        let mut processed = Vec::new();
        let mut skipped = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| DomainError::internal(e.to_string()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(format) = DocumentFormat::from_path(&path) else {
                continue;
            };
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();

            match self.extractor.extract(&path, format) {
                Ok(content) if !content.trim().is_empty() => {
                    text.push_str(&format!("\nContent from {name}:\n{content}\n"));
                    info!(file = %name, "successfully processed");
                    processed.push(name);
                }
                Ok(_) => {
                    warn!(file = %name, "extraction produced no text, skipping");
                    skipped.push(SkippedFile {
                        file: name,
                        reason: "extraction produced no text".to_string(),
                    });
                }
                Err(e) => {
                    warn!(file = %name, error = %e, "extraction failed, skipping");
                    skipped.push(SkippedFile {
                        file: name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if text.is_empty() {
            return Err(DomainError::empty_corpus(
                "no supported files could be processed; provide PDF, DOCX, CSV, or Excel files",
            ));
        }

        Ok(Corpus {
            text,
            processed,
            skipped,
        })
    }
}
