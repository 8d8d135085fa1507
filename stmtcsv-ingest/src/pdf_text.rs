//! PDF to text adapter.

use std::panic;
use std::path::Path;

use crate::error::StatementError;

/// Run `f`, turning a panic into `Err` without the default hook printing it.
fn catch_quietly<F, R>(f: F) -> std::thread::Result<R>
where
    F: FnOnce() -> R + panic::UnwindSafe,
{
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(f);
    panic::set_hook(hook);
    result
}

/// Extract the text of every page of the PDF at `path`, one page after
/// another, separated by newlines.
///
/// Unreadable files, malformed PDFs and panics inside the PDF library are
/// all reported as [`StatementError::Extraction`].
pub fn extract_text(path: &Path) -> Result<String, StatementError> {
    let extraction_error = |reason: String| StatementError::Extraction {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| extraction_error(e.to_string()))?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let pages = catch_quietly(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
        .map_err(|_| extraction_error("PDF library panicked while reading the document".to_string()))?
        .map_err(|e| extraction_error(e.to_string()))?;

    // The library does not mark page ends, so the last line of one page
    // would otherwise run into the first line of the next.
    let text = pages.join("\n");

    log::debug!(
        "Extracted {} characters of text from {} pages of {}",
        text.len(),
        pages.len(),
        path.display()
    );

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{StatementGrammar, grammar_for};
    use crate::types::StatementFormat;
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};
    use std::io::Write;

    /// Build a PDF with one Courier text line per page, all at the same height.
    fn write_pdf(path: &Path, pages: &[&str]) {
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
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
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
    fn test_pages_are_joined_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.pdf");
        write_pdf(
            &path,
            &[
                "Summary",
                "Joint statement Account number: 12345678",
                "Closing balance",
            ],
        );

        let text = extract_text(&path).unwrap();
        assert!(!text.contains("SummaryJoint"), "pages ran together: {text:?}");

        let summary = text.find("Summary").unwrap();
        let account = text.find("Joint statement").unwrap();
        assert!(summary < account);
        assert!(text[summary..account].contains('\n'));
        assert!(text.find("Closing balance").unwrap() > account);

        let grammar = grammar_for(StatementFormat::ChaseUk).unwrap();
        assert_eq!(grammar.account_name(&text).as_deref(), Some("Joint"));
    }

    #[test]
    fn test_catch_quietly() {
        assert_eq!(catch_quietly(|| 7).unwrap(), 7);
        assert!(catch_quietly(|| -> u32 { panic!("bad xref") }).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = extract_text(Path::new("does/not/exist.pdf")).unwrap_err();
        assert!(matches!(err, StatementError::Extraction { .. }));
        assert!(err.to_string().contains("does/not/exist.pdf"));
    }

    #[test]
    fn test_not_a_pdf() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is plainly not a PDF document").unwrap();

        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, StatementError::Extraction { .. }));
    }
}
