//! PDF text extraction

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::domain::DomainError;

/// Extract text from a PDF page by page, in page order.
///
/// Pages are joined with a blank line. The parser is run under `catch_unwind`
/// since it can panic on malformed fonts.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, DomainError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(DomainError::extraction("pdf", e.to_string())),
        Err(_) => {
            warn!("PDF parser panicked on malformed input");
            return Err(DomainError::extraction(
                "pdf",
                "PDF parser panicked, the file is likely malformed",
            ));
        }
    };

    debug!("Extracted {} PDF pages", pages.len());

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// One Courier text line per page
    fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
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

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
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

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pages_extracted_in_order() {
        let bytes = pdf_with_pages(&["Hello first page", "Second page here"]);

        let text = extract_pdf(&bytes).unwrap();

        assert_eq!(text, "Hello first page\n\nSecond page here");
    }

    #[test]
    fn test_blank_page_is_not_an_error() {
        let bytes = pdf_with_pages(&["Only text", ""]);

        assert_eq!(extract_pdf(&bytes).unwrap(), "Only text");
    }

    #[test]
    fn test_corrupt_pdf_is_extraction_error() {
        let err = extract_pdf(b"definitely not a pdf").unwrap_err();

        assert!(matches!(err, DomainError::Extraction { .. }));
    }

    #[test]
    fn test_empty_pdf_is_extraction_error() {
        assert!(extract_pdf(b"").is_err());
    }

    #[test]
    fn test_join_pages_skips_blank_pages() {
        let pages = vec![
            "Page one\n".to_string(),
            "   ".to_string(),
            " Page two ".to_string(),
        ];

        assert_eq!(join_pages(&pages), "Page one\n\nPage two");
    }
}
