//! Structural statistics: sentences, lines, word lengths, readability and top words

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

use super::config::{AnalysisConfig, Readability};
use super::stopwords::is_stop_word;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Alphabetic}\p{Nd}]+").expect("word pattern is valid"));

/// A word and its frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Structural statistics of a document's text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureResult {
    pub sentence_count: usize,
    /// Non-blank lines of the text before normalization
    pub line_count: usize,
    pub character_count_no_spaces: usize,
    pub avg_word_length: f64,
    /// Words per sentence
    pub avg_sentence_length: f64,
    pub readability: Readability,
    /// Descending by count, ties by first occurrence
    pub top_words: Vec<WordFrequency>,
}

/// Analyse text structure.
///
/// `raw` is the extracted text before normalization and is only used for the line
/// count; every other metric is computed on `normalized`. Total over all inputs:
/// degenerate text yields zero counts and averages.
pub fn analyze_structure(raw: &str, normalized: &str, config: &AnalysisConfig) -> StructureResult {
    let sentence_count = count_sentences(normalized);
    let line_count = count_lines(raw);
    let character_count_no_spaces = normalized.chars().filter(|c| !c.is_whitespace()).count();

    let words = tokenize(normalized);
    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    let avg_word_length = ratio(total_word_chars, words.len());
    let avg_sentence_length = ratio(words.len(), sentence_count);
    let readability = config
        .readability
        .classify(avg_word_length, avg_sentence_length);

    StructureResult {
        sentence_count,
        line_count,
        character_count_no_spaces,
        avg_word_length,
        avg_sentence_length,
        readability,
        top_words: top_words(&words, config.top_words_count),
    }
}

/// Sentences by Unicode sentence boundaries, ignoring fragments with no word
/// characters
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    // Plain iteration: the sentence iterator's size_hint underflows on an
    // exhausted input
    let mut count = 0;
    for sentence in text.unicode_sentences() {
        if sentence.chars().any(char::is_alphanumeric) {
            count += 1;
        }
    }

    count
}

fn count_lines(raw: &str) -> usize {
    raw.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Alphanumeric runs
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Most frequent words, case-insensitive, excluding stop words, single characters
/// and purely numeric tokens
pub fn top_words(words: &[&str], limit: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, word) in words.iter().enumerate() {
        let word = word.to_lowercase();

        if word.chars().count() < 2
            || !word.chars().any(char::is_alphabetic)
            || is_stop_word(&word)
        {
            continue;
        }

        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count, _)| WordFrequency::new(word, count))
        .collect()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }

    let value = numerator as f64 / denominator as f64;
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> StructureResult {
        analyze_structure(text, text, &AnalysisConfig::default())
    }

    #[test]
    fn test_hello_world_scenario() {
        let result = analyze("Hello world. Hello again.");

        assert_eq!(result.sentence_count, 2);
        assert_eq!(result.line_count, 1);
        assert_eq!(result.character_count_no_spaces, 22);
        assert_eq!(result.avg_word_length, 5.0);
        assert_eq!(result.avg_sentence_length, 2.0);
        assert_eq!(result.readability, Readability::Medium);
        assert_eq!(result.top_words[0], WordFrequency::new("hello", 2));
    }

    #[test]
    fn test_empty_text_has_zero_averages() {
        let result = analyze("");

        assert_eq!(result.sentence_count, 0);
        assert_eq!(result.line_count, 0);
        assert_eq!(result.character_count_no_spaces, 0);
        assert_eq!(result.avg_word_length, 0.0);
        assert_eq!(result.avg_sentence_length, 0.0);
        assert!(result.top_words.is_empty());
    }

    #[test]
    fn test_count_sentences_degenerate_input() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences(" \n\t "), 0);
        assert_eq!(count_sentences("One"), 1);
        assert_eq!(count_sentences("One. Two? Three!"), 3);
    }

    #[test]
    fn test_punctuation_only_text() {
        let result = analyze("... !!! ???");

        assert_eq!(result.sentence_count, 0);
        assert_eq!(result.avg_word_length, 0.0);
        assert_eq!(result.avg_sentence_length, 0.0);
        assert_eq!(result.readability, Readability::Easy);
    }

    #[test]
    fn test_line_count_uses_raw_text() {
        let raw = "First line.\n\nSecond line.\nThird line.\n";
        let normalized = "First line. Second line. Third line.";

        let result = analyze_structure(raw, normalized, &AnalysisConfig::default());

        assert_eq!(result.line_count, 3);
        assert_eq!(result.sentence_count, 3);
    }

    #[test]
    fn test_top_words_order_and_ties() {
        let words = tokenize("beta alpha gamma alpha beta delta alpha");
        let top = top_words(&words, 10);

        assert_eq!(
            top,
            vec![
                WordFrequency::new("alpha", 3),
                WordFrequency::new("beta", 2),
                WordFrequency::new("gamma", 1),
                WordFrequency::new("delta", 1),
            ]
        );
    }

    #[test]
    fn test_top_words_case_insensitive_and_filtered() {
        let words = tokenize("The Rust rust RUST and the 2024 x compiler");
        let top = top_words(&words, 10);

        assert_eq!(top[0], WordFrequency::new("rust", 3));
        assert!(top.iter().all(|w| w.word != "the" && w.word != "and"));
        assert!(top.iter().all(|w| w.word != "2024" && w.word != "x"));
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_top_words_respects_limit() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let config = AnalysisConfig::default().with_top_words_count(5);

        let result = analyze_structure(text, text, &config);

        assert_eq!(result.top_words.len(), 5);
        assert_eq!(result.top_words[0].word, "one");
        assert_eq!(result.top_words[4].word, "five");
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(tokenize("naïve café, déjà-vu 42"), vec!["naïve", "café", "déjà", "vu", "42"]);
    }

    #[test]
    fn test_long_words_are_hard() {
        let text = "Internationalization considerations notwithstanding, implementation proceeds.";
        let result = analyze(text);

        assert_eq!(result.readability, Readability::Hard);
    }
}
