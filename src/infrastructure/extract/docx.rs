//! DOCX text extraction via docx-rs.
//!
//! A .docx file is a ZIP of XML parts; docx-rs parses it into a typed
//! tree. Text lives on the Paragraph -> Run -> Text path.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::fs;
use std::path::Path;

use super::ExtractError;

/// Extracts paragraph text in document order, joined by newlines.
/// Empty paragraphs are preserved as empty lines.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| ExtractError::Docx(format!("{e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            paragraphs.push(paragraph_text(para));
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Concatenates the text runs of one paragraph. Runs are parts of the
/// same sentence, so no separator is inserted between them.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    parts.push_str(&t.text);
                }
            }
        }
    }
    parts
}
