//! Per-format text extraction backends.
//!
//! Word-processor formats are read paragraph by paragraph; PDFs come back as
//! one string with page texts already concatenated in page order. Any backend
//! failure converts to `ExtractError` so the caller can drop the document and
//! keep the batch moving.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

use crate::extraction::format::FormatKind;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("word document parse failed: {0}")]
    Word(String),

    #[error("PDF parse failed: {0}")]
    Pdf(String),

    #[error("no extraction backend for this format")]
    Unsupported,
}

/// Extracts reading-order plain text from a document's bytes.
pub fn extract(bytes: &[u8], kind: FormatKind) -> Result<String, ExtractError> {
    match kind {
        // Legacy .doc uploads are fed to the same reader as .docx; true binary
        // .doc files fail to parse and are skipped upstream.
        FormatKind::Doc | FormatKind::Docx => extract_word(bytes),
        FormatKind::Pdf => extract_pdf(bytes),
        FormatKind::Unsupported => Err(ExtractError::Unsupported),
    }
}

/// Paragraphs in document order, joined with single newlines. Empty
/// paragraphs contribute empty strings to the join.
fn extract_word(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Word(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in doc.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for child in paragraph.children {
                if let ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Page texts in page order, concatenated by the backend with no separator.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    /// Builds an in-memory .docx with one paragraph per entry.
    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_docx_paragraphs_joined_with_newlines() {
        let bytes = docx_bytes(&["First paragraph.", "Second paragraph."]);
        let text = extract(&bytes, FormatKind::Docx).unwrap();
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn test_docx_empty_paragraphs_survive_the_join() {
        let bytes = docx_bytes(&["Top.", "", "Bottom."]);
        let text = extract(&bytes, FormatKind::Docx).unwrap();
        assert_eq!(text, "Top.\n\nBottom.");
    }

    #[test]
    fn test_doc_routes_through_word_reader() {
        let bytes = docx_bytes(&["Same reader either way."]);
        let text = extract(&bytes, FormatKind::Doc).unwrap();
        assert_eq!(text, "Same reader either way.");
    }

    #[test]
    fn test_corrupt_word_bytes_yield_extract_error() {
        let result = extract(b"definitely not a zip archive", FormatKind::Docx);
        assert!(matches!(result, Err(ExtractError::Word(_))));
    }

    #[test]
    fn test_corrupt_pdf_bytes_yield_extract_error() {
        let result = extract(b"definitely not a pdf", FormatKind::Pdf);
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_unsupported_kind_is_an_error() {
        let result = extract(b"", FormatKind::Unsupported);
        assert!(matches!(result, Err(ExtractError::Unsupported)));
    }
}
