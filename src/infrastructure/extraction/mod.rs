//! Format-specific text extraction
//!
//! Each format has a pure `bytes -> text` function; `TextExtractor` dispatches
//! on the document's format tag. Extraction is blocking and is expected to run
//! off the async runtime.

pub mod docx;
pub mod markdown;
pub mod ocr;
pub mod pdf;
pub mod plain_text;
pub mod spreadsheet;

use std::sync::Arc;

use tracing::debug;

use crate::domain::document::{Document, DocumentFormat};
use crate::domain::extraction::ExtractedText;
use crate::domain::DomainError;

pub use ocr::{detect_image_kind, ImageKind, OcrEngine, TesseractOcr};

#[cfg(test)]
pub use ocr::MockOcrEngine;

/// Dispatches a document to the extraction strategy for its format
#[derive(Clone)]
pub struct TextExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl TextExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extract raw text from the document.
    ///
    /// Returns possibly empty text for readable input and `Extraction` only when
    /// the bytes cannot be parsed as the declared format.
    pub fn extract(&self, document: &Document) -> Result<ExtractedText, DomainError> {
        let bytes = document.bytes();
        let format = document.format();

        let content = match format {
            DocumentFormat::PlainText => plain_text::decode_text(bytes),
            DocumentFormat::Markdown => markdown::extract_markdown(bytes),
            DocumentFormat::Pdf => pdf::extract_pdf(bytes)?,
            DocumentFormat::Word => docx::extract_docx(bytes)?,
            DocumentFormat::Spreadsheet => spreadsheet::extract_spreadsheet(bytes)?,
            DocumentFormat::Image => ocr::extract_image(self.ocr.as_ref(), bytes)?,
        };

        debug!(
            "Extracted {} chars from {} ({})",
            content.chars().count(),
            document.filename(),
            format
        );

        Ok(ExtractedText::new(content, format))
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(Arc::new(TesseractOcr::default()))
    }
}

impl std::fmt::Debug for TextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextExtractor")
            .field("ocr", &self.ocr.engine_name())
            .finish()
    }
}
