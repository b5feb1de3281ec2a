//! Flat metadata record assembled from every analysis stage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::analysis::{BasicMetadata, LanguageResult, Readability, StructureResult};
use crate::domain::document::DocumentFormat;
use crate::domain::insight::InsightResult;

/// Unified metadata for one document.
///
/// Field order is the export order. Every field is present in every record; no
/// optional values so that both JSON and TOML exports carry the same keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    // Basic
    pub file_name: String,
    pub file_format: DocumentFormat,
    pub file_size_bytes: u64,
    pub file_size: String,
    pub word_count: usize,
    pub character_count: usize,
    pub reading_time_minutes: u64,

    // Language
    pub detected_language: String,
    pub language_name: String,
    pub language_confidence: f64,
    pub language_reliable: bool,

    // Structure
    pub sentence_count: usize,
    pub line_count: usize,
    pub character_count_no_spaces: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub readability: Readability,
    /// `(word, count)` pairs, most frequent first
    pub top_words: Vec<(String, usize)>,

    // Insights
    pub document_type: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub insights_available: bool,

    pub generated_at: DateTime<Utc>,
}

impl MetadataRecord {
    /// Flatten the stage results into one record
    pub fn assemble(
        basic: BasicMetadata,
        language: LanguageResult,
        structure: StructureResult,
        insights: InsightResult,
    ) -> Self {
        Self {
            file_name: basic.file_name,
            file_format: basic.format,
            file_size_bytes: basic.file_size_bytes,
            file_size: basic.file_size,
            word_count: basic.word_count,
            character_count: basic.character_count,
            reading_time_minutes: basic.reading_time_minutes,

            detected_language: language.language,
            language_name: language.language_name,
            language_confidence: language.confidence,
            language_reliable: language.is_reliable,

            sentence_count: structure.sentence_count,
            line_count: structure.line_count,
            character_count_no_spaces: structure.character_count_no_spaces,
            avg_word_length: structure.avg_word_length,
            avg_sentence_length: structure.avg_sentence_length,
            readability: structure.readability,
            top_words: structure
                .top_words
                .into_iter()
                .map(|wf| (wf.word, wf.count))
                .collect(),

            document_type: insights.document_type,
            summary: insights.summary,
            key_points: insights.key_points,
            insights_available: insights.available,

            generated_at: Utc::now(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_record;
    use super::*;

    const EXPECTED_KEYS: [&str; 23] = [
        "file_name",
        "file_format",
        "file_size_bytes",
        "file_size",
        "word_count",
        "character_count",
        "reading_time_minutes",
        "detected_language",
        "language_name",
        "language_confidence",
        "language_reliable",
        "sentence_count",
        "line_count",
        "character_count_no_spaces",
        "avg_word_length",
        "avg_sentence_length",
        "readability",
        "top_words",
        "document_type",
        "summary",
        "key_points",
        "insights_available",
        "generated_at",
    ];

    #[test]
    fn test_assemble_flattens_all_fields() {
        let record = sample_record();

        assert_eq!(record.file_name, "report.txt");
        assert_eq!(record.file_format, DocumentFormat::PlainText);
        assert_eq!(record.word_count, 4);
        assert_eq!(record.detected_language, "en");
        assert_eq!(record.sentence_count, 2);
        assert_eq!(record.readability, Readability::Medium);
        assert_eq!(
            record.top_words,
            vec![("hello".to_string(), 2), ("world".to_string(), 1)]
        );
        assert_eq!(record.document_type, "Unknown");
        assert!(!record.insights_available);
    }

    #[test]
    fn test_serialized_keys_are_unique_and_ordered() {
        let value = serde_json::to_value(sample_record()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), EXPECTED_KEYS.len());
        for key in EXPECTED_KEYS {
            assert!(object.contains_key(key), "missing key {}", key);
        }

        let json = serde_json::to_string(&sample_record()).unwrap();
        let positions: Vec<usize> = EXPECTED_KEYS
            .iter()
            .map(|k| json.find(&format!("\"{}\":", k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_enum_fields_serialize_snake_case() {
        let value = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(value["file_format"], "plain_text");
        assert_eq!(value["readability"], "medium");
    }
}
