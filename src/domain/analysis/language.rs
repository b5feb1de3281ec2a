//! Language detection result and reliability gating

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::config::LanguageConfig;

/// ISO 639 code for an undetermined language
pub const UNDETERMINED: &str = "und";

/// Raw output of a language identifier
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageGuess {
    /// ISO 639-1 code
    pub code: String,
    /// Score in [0, 1]
    pub confidence: f64,
}

impl LanguageGuess {
    pub fn new(code: impl Into<String>, confidence: f64) -> Self {
        Self {
            code: code.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Trait for language identification models and heuristics
pub trait LanguageIdentifier: Send + Sync + Debug {
    /// Highest-scoring language, or `None` when the text carries no signal
    fn identify(&self, text: &str) -> Option<LanguageGuess>;

    /// Identifier name, for logging
    fn name(&self) -> &'static str;
}

/// Detected language with a reliability flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageResult {
    pub language: String,
    pub language_name: String,
    pub confidence: f64,
    pub is_reliable: bool,
}

impl LanguageResult {
    /// Explicit result for empty or signal-free input
    pub fn undetermined() -> Self {
        Self {
            language: UNDETERMINED.to_string(),
            language_name: language_name(UNDETERMINED).to_string(),
            confidence: 0.0,
            is_reliable: false,
        }
    }
}

/// Run the identifier and gate reliability on both confidence and input length.
///
/// Never fails: empty input yields `LanguageResult::undetermined()`.
pub fn analyze_language(
    identifier: &dyn LanguageIdentifier,
    text: &str,
    config: &LanguageConfig,
) -> LanguageResult {
    let text = text.trim();

    if text.is_empty() {
        return LanguageResult::undetermined();
    }

    let Some(guess) = identifier.identify(text) else {
        return LanguageResult::undetermined();
    };

    let long_enough = text.chars().count() >= config.min_chars;
    let confident = guess.confidence >= config.confidence_threshold;

    LanguageResult {
        language_name: language_name(&guess.code).to_string(),
        confidence: round2(guess.confidence),
        is_reliable: long_enough && confident,
        language: guess.code,
    }
}

/// English name for an ISO 639-1 code
pub fn language_name(code: &str) -> &'static str {
    match code {
        "en" => "English",
        "fr" => "French",
        "de" => "German",
        "es" => "Spanish",
        "it" => "Italian",
        "pt" => "Portuguese",
        "nl" => "Dutch",
        "ru" => "Russian",
        "el" => "Greek",
        "ar" => "Arabic",
        "he" => "Hebrew",
        "hi" => "Hindi",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        "th" => "Thai",
        UNDETERMINED => "Undetermined",
        _ => "Unknown",
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
