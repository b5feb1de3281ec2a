//! Uploaded document payload

use bytes::Bytes;

use super::format::{detect_format, DocumentFormat};
use crate::domain::DomainError;

/// A single uploaded document: raw bytes, declared filename and inferred format.
///
/// Immutable once loaded. The payload is reference counted so that extraction can
/// run on a blocking thread without copying the bytes.
#[derive(Debug, Clone)]
pub struct Document {
    bytes: Bytes,
    filename: String,
    format: DocumentFormat,
}

impl Document {
    /// Load a document, inferring its format from the filename and an optional
    /// content-type hint
    pub fn load(
        bytes: impl Into<Bytes>,
        filename: impl Into<String>,
        content_type: Option<&str>,
    ) -> Result<Self, DomainError> {
        let filename = filename.into();
        let format = detect_format(&filename, content_type)?;

        Ok(Self::with_format(bytes, filename, format))
    }

    /// Create a document with an explicit format
    pub fn with_format(
        bytes: impl Into<Bytes>,
        filename: impl Into<String>,
        format: DocumentFormat,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
            format,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Payload size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_detects_format() {
        let doc = Document::load(b"hello".to_vec(), "notes.txt", None).unwrap();

        assert_eq!(doc.format(), DocumentFormat::PlainText);
        assert_eq!(doc.size(), 5);
        assert_eq!(doc.bytes(), b"hello");
        assert_eq!(doc.filename(), "notes.txt");
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        let result = Document::load(b"MZ".to_vec(), "setup.exe", None);
        assert!(matches!(
            result,
            Err(DomainError::UnsupportedFormat { .. })
        ));
    }
}
