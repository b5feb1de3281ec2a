//! Document format tags and detection from filename / content type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::DomainError;

/// Supported document formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// PDF documents
    Pdf,
    /// Word processor documents
    Word,
    /// Plain text files
    PlainText,
    /// Excel / OpenDocument spreadsheets
    Spreadsheet,
    /// Markdown files
    Markdown,
    /// Raster images (text recovered via OCR)
    Image,
}

impl DocumentFormat {
    /// All supported formats, in display order
    pub const ALL: [DocumentFormat; 6] = [
        Self::Pdf,
        Self::Word,
        Self::PlainText,
        Self::Spreadsheet,
        Self::Markdown,
        Self::Image,
    ];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Word => &["docx", "doc"],
            Self::PlainText => &["txt", "text"],
            Self::Spreadsheet => &["xlsx", "xlsm", "xls", "ods"],
            Self::Markdown => &["md", "markdown"],
            Self::Image => &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "gif", "webp"],
        }
    }

    /// Get MIME types associated with this format
    pub fn mime_types(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["application/pdf"],
            Self::Word => &[
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "application/msword",
            ],
            Self::PlainText => &["text/plain"],
            Self::Spreadsheet => &[
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                "application/vnd.ms-excel",
                "application/vnd.oasis.opendocument.spreadsheet",
            ],
            Self::Markdown => &["text/markdown", "text/x-markdown"],
            Self::Image => &[
                "image/png",
                "image/jpeg",
                "image/jpg",
                "image/tiff",
                "image/bmp",
                "image/gif",
                "image/webp",
            ],
        }
    }

    /// Stable machine-readable tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::PlainText => "plain_text",
            Self::Spreadsheet => "spreadsheet",
            Self::Markdown => "markdown",
            Self::Image => "image",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Word => "Word",
            Self::PlainText => "Text",
            Self::Spreadsheet => "Excel",
            Self::Markdown => "Markdown",
            Self::Image => "Image (OCR)",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect format from filename extension
pub fn detect_format_from_filename(filename: &str) -> Option<DocumentFormat> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_lowercase();

    DocumentFormat::ALL
        .into_iter()
        .find(|format| format.extensions().contains(&ext.as_str()))
}

/// Detect format from MIME type, ignoring parameters such as `charset`
pub fn detect_format_from_mime(mime: &str) -> Option<DocumentFormat> {
    let essence = mime
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    DocumentFormat::ALL
        .into_iter()
        .find(|format| format.mime_types().contains(&essence.as_str()))
}

/// Detect format from filename and optional content-type hint.
///
/// The extension wins; the hint is consulted next, and the MIME type guessed from
/// the filename last.
pub fn detect_format(
    filename: &str,
    content_type: Option<&str>,
) -> Result<DocumentFormat, DomainError> {
    if let Some(format) = detect_format_from_filename(filename) {
        return Ok(format);
    }

    if let Some(format) = content_type.and_then(detect_format_from_mime) {
        return Ok(format);
    }

    mime_guess::from_path(filename)
        .iter()
        .find_map(|mime| detect_format_from_mime(mime.essence_str()))
        .ok_or_else(|| DomainError::unsupported_format(filename))
}
