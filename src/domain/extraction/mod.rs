//! Extracted text and normalization
//!
//! Extraction strategies live in `infrastructure::extraction`; this module holds
//! the format-independent representation they produce and the normalizer that
//! prepares it for analysis.

mod normalizer;

pub use normalizer::{is_text_meaningful, normalize_text};

use super::document::DocumentFormat;

/// Plain text recovered from a document, before normalization.
///
/// Line breaks are preserved here; the structure analysis reads line counts from
/// this representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Raw decoded text
    pub content: String,
    /// Format the text was extracted from
    pub format: DocumentFormat,
}

impl ExtractedText {
    pub fn new(content: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            content: content.into(),
            format,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Normalized copy for analysis
    pub fn normalize(&self) -> String {
        normalize_text(&self.content)
    }
}
