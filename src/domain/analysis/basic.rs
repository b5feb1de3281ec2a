//! File-level facts: size, format, counts and reading time

use serde::{Deserialize, Serialize};

use crate::domain::document::{Document, DocumentFormat};

/// Basic file-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicMetadata {
    pub file_name: String,
    pub format: DocumentFormat,
    pub file_size_bytes: u64,
    /// Human-readable size, e.g. "1.5 KB"
    pub file_size: String,
    /// Whitespace-delimited tokens of the normalized text
    pub word_count: usize,
    pub character_count: usize,
    pub reading_time_minutes: u64,
}

/// Compute basic metadata from the document and its normalized text
pub fn generate_basic_metadata(
    document: &Document,
    normalized: &str,
    reading_speed_wpm: u32,
) -> BasicMetadata {
    let word_count = normalized.split_whitespace().count();

    BasicMetadata {
        file_name: document.filename().to_string(),
        format: document.format(),
        file_size_bytes: document.size(),
        file_size: format_file_size(document.size()),
        word_count,
        character_count: normalized.chars().count(),
        reading_time_minutes: reading_time_minutes(word_count, reading_speed_wpm),
    }
}

/// ceil(words / wpm); zero words read in zero minutes
pub fn reading_time_minutes(word_count: usize, reading_speed_wpm: u32) -> u64 {
    let wpm = u64::from(reading_speed_wpm.max(1));
    (word_count as u64).div_ceil(wpm)
}

/// Format a byte count with binary units
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_basic_metadata() {
        let text = "Hello world. Hello again.";
        let document = Document::with_format(text.as_bytes().to_vec(), "greeting.txt", DocumentFormat::PlainText);

        let metadata = generate_basic_metadata(&document, text, 200);

        assert_eq!(metadata.file_name, "greeting.txt");
        assert_eq!(metadata.format, DocumentFormat::PlainText);
        assert_eq!(metadata.file_size_bytes, 25);
        assert_eq!(metadata.file_size, "25 B");
        assert_eq!(metadata.word_count, 4);
        assert_eq!(metadata.character_count, 25);
        assert_eq!(metadata.reading_time_minutes, 1);
    }

    #[test]
    fn test_empty_text() {
        let document = Document::with_format(Vec::new(), "empty.txt", DocumentFormat::PlainText);
        let metadata = generate_basic_metadata(&document, "", 200);

        assert_eq!(metadata.word_count, 0);
        assert_eq!(metadata.character_count, 0);
        assert_eq!(metadata.reading_time_minutes, 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(0, 200), 0);
        assert_eq!(reading_time_minutes(1, 200), 1);
        assert_eq!(reading_time_minutes(200, 200), 1);
        assert_eq!(reading_time_minutes(201, 200), 2);
        assert_eq!(reading_time_minutes(1000, 250), 4);
    }

    #[test]
    fn test_character_count_uses_chars_not_bytes() {
        let document = Document::with_format(Vec::new(), "accents.txt", DocumentFormat::PlainText);
        let metadata = generate_basic_metadata(&document, "café naïve", 200);

        assert_eq!(metadata.character_count, 10);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10.0 MB");
    }
}
