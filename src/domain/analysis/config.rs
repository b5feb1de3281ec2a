//! Analysis configuration types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Readability band derived from average word and sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readability {
    Easy,
    Medium,
    Hard,
}

impl Readability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Upper bounds for each readability band.
///
/// Text falls in the first band whose sentence-length and word-length bounds are
/// both strictly above its averages; anything else is `Hard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityThresholds {
    #[serde(default = "default_easy_sentence")]
    pub easy_max_sentence_length: f64,
    #[serde(default = "default_easy_word")]
    pub easy_max_word_length: f64,
    #[serde(default = "default_medium_sentence")]
    pub medium_max_sentence_length: f64,
    #[serde(default = "default_medium_word")]
    pub medium_max_word_length: f64,
}

fn default_easy_sentence() -> f64 {
    15.0
}

fn default_easy_word() -> f64 {
    5.0
}

fn default_medium_sentence() -> f64 {
    20.0
}

fn default_medium_word() -> f64 {
    6.0
}

impl Default for ReadabilityThresholds {
    fn default() -> Self {
        Self {
            easy_max_sentence_length: default_easy_sentence(),
            easy_max_word_length: default_easy_word(),
            medium_max_sentence_length: default_medium_sentence(),
            medium_max_word_length: default_medium_word(),
        }
    }
}

impl ReadabilityThresholds {
    /// Classify averages into a readability band
    pub fn classify(&self, avg_word_length: f64, avg_sentence_length: f64) -> Readability {
        if avg_sentence_length < self.easy_max_sentence_length
            && avg_word_length < self.easy_max_word_length
        {
            Readability::Easy
        } else if avg_sentence_length < self.medium_max_sentence_length
            && avg_word_length < self.medium_max_word_length
        {
            Readability::Medium
        } else {
            Readability::Hard
        }
    }
}

/// Language reliability gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Minimum confidence (0.0 - 1.0) for a reliable detection
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// Minimum normalized length, in characters, for a reliable detection
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

fn default_confidence_threshold() -> f64 {
    0.7
}

fn default_min_chars() -> usize {
    50
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            min_chars: default_min_chars(),
        }
    }
}

/// Configuration for the analysis stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Reading speed used for the reading-time estimate, in words per minute
    #[serde(default = "default_reading_speed")]
    pub reading_speed_wpm: u32,
    /// Minimum alphanumeric characters for text to count as meaningful
    #[serde(default = "default_min_meaningful_chars")]
    pub min_meaningful_chars: usize,
    /// Number of top-frequency words to report
    #[serde(default = "default_top_words")]
    pub top_words_count: usize,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub readability: ReadabilityThresholds,
}

fn default_reading_speed() -> u32 {
    200
}

fn default_min_meaningful_chars() -> usize {
    10
}

fn default_top_words() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reading_speed_wpm: default_reading_speed(),
            min_meaningful_chars: default_min_meaningful_chars(),
            top_words_count: default_top_words(),
            language: LanguageConfig::default(),
            readability: ReadabilityThresholds::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reading_speed(mut self, wpm: u32) -> Self {
        self.reading_speed_wpm = wpm;
        self
    }

    pub fn with_top_words_count(mut self, count: usize) -> Self {
        self.top_words_count = count;
        self
    }

    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.language.confidence_threshold = threshold;
        self
    }

    pub fn with_language_min_chars(mut self, min_chars: usize) -> Self {
        self.language.min_chars = min_chars;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.reading_speed_wpm == 0 {
            return Err(DomainError::configuration(
                "Reading speed must be greater than 0",
            ));
        }

        if self.top_words_count == 0 {
            return Err(DomainError::configuration(
                "Top words count must be greater than 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.language.confidence_threshold) {
            return Err(DomainError::configuration(
                "Language confidence threshold must be between 0.0 and 1.0",
            ));
        }

        let r = &self.readability;
        if r.easy_max_sentence_length > r.medium_max_sentence_length
            || r.easy_max_word_length > r.medium_max_word_length
        {
            return Err(DomainError::configuration(
                "Easy readability bounds must not exceed medium bounds",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();

        assert_eq!(config.reading_speed_wpm, 200);
        assert_eq!(config.top_words_count, 10);
        assert_eq!(config.language.confidence_threshold, 0.7);
        assert_eq!(config.language.min_chars, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_classify_readability() {
        let thresholds = ReadabilityThresholds::default();

        assert_eq!(thresholds.classify(0.0, 0.0), Readability::Easy);
        assert_eq!(thresholds.classify(4.2, 10.0), Readability::Easy);
        assert_eq!(thresholds.classify(5.5, 10.0), Readability::Medium);
        assert_eq!(thresholds.classify(4.0, 18.0), Readability::Medium);
        assert_eq!(thresholds.classify(6.5, 10.0), Readability::Hard);
        assert_eq!(thresholds.classify(4.0, 25.0), Readability::Hard);
    }

    #[test]
    fn test_readability_ordering() {
        assert!(Readability::Easy < Readability::Medium);
        assert!(Readability::Medium < Readability::Hard);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(AnalysisConfig::new().with_reading_speed(0).validate().is_err());
        assert!(AnalysisConfig::new().with_top_words_count(0).validate().is_err());
        assert!(AnalysisConfig::new()
            .with_confidence_threshold(1.5)
            .validate()
            .is_err());

        let mut config = AnalysisConfig::new();
        config.readability.easy_max_word_length = 9.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"reading_speed_wpm": 250, "language": {"min_chars": 20}}"#)
                .unwrap();

        assert_eq!(config.reading_speed_wpm, 250);
        assert_eq!(config.language.min_chars, 20);
        assert_eq!(config.language.confidence_threshold, 0.7);
        assert_eq!(config.top_words_count, 10);
    }
}
