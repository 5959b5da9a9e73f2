//! PDF text extraction via lopdf, page by page in page order.

use lopdf::Document;
use std::path::Path;
use tracing::warn;

use super::ExtractError;

/// Extracts text from every page in page order and concatenates it
/// without separators.
///
/// A page that yields no extractable text (an image-only scan, for
/// example) is skipped with a warning rather than aborting the file.
/// The file as a whole fails only when no page yields any text.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for (&page_number, _) in &doc.get_pages() {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) if !page_text.trim().is_empty() => text.push_str(&page_text),
            Ok(_) => {
                warn!(file = %path.display(), page = page_number, "page has no extractable text, skipping");
            }
            Err(e) => {
                warn!(file = %path.display(), page = page_number, error = %e, "page text extraction failed, skipping");
            }
        }
    }

    if text.trim().is_empty() {
        Err(ExtractError::NoPdfText)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::io::Write;

    fn page_content(text: Option<&str>) -> Vec<u8> {
        let mut operations = Vec::new();
        if let Some(text) = text {
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ]);
        }
        Content { operations }.encode().unwrap()
    }

    /// Writes a PDF with one page per entry; `None` produces a page with
    /// no text operations, like an image-only scan.
    fn write_pdf(path: &Path, pages_text: &[Option<&str>]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages_text {
            let content_id = doc.add_object(Stream::new(dictionary! {}, page_content(*text)));
            kids.push(
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                    "Resources" => resources_id,
                    "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                })
                .into(),
            );
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn extracts_text_from_every_page_in_order() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        write_pdf(
            file.path(),
            &[Some("Algebra basics"), Some("Linear equations")],
        );

        let text = extract(file.path()).unwrap();
        assert!(text.contains("Algebra basics"));
        assert!(text.contains("Linear equations"));
        let first = text.find("Algebra basics").unwrap();
        let second = text.find("Linear equations").unwrap();
        assert!(first < second);
    }

    #[test]
    fn a_textless_page_is_skipped_without_aborting_the_file() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        write_pdf(file.path(), &[Some("Algebra basics"), None]);

        let text = extract(file.path()).unwrap();
        assert!(text.contains("Algebra basics"));
    }

    #[test]
    fn a_pdf_with_no_extractable_text_fails() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        write_pdf(file.path(), &[None, None]);

        let err = extract(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::NoPdfText));
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let err = extract(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn missing_file_is_a_pdf_error() {
        let err = extract(Path::new("/nonexistent/file.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
