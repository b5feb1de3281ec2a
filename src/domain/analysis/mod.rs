//! Text analysis: basic metadata, language and structure
//!
//! Every analysis here is a total function over its input: empty or degenerate
//! text produces zero counts or an undetermined language, never an error.

pub mod basic;
pub mod config;
pub mod language;
pub mod stopwords;
pub mod structure;

pub use basic::{format_file_size, generate_basic_metadata, reading_time_minutes, BasicMetadata};
pub use config::{AnalysisConfig, LanguageConfig, Readability, ReadabilityThresholds};
pub use language::{
    analyze_language, language_name, LanguageGuess, LanguageIdentifier, LanguageResult,
    UNDETERMINED,
};
pub use structure::{analyze_structure, StructureResult, WordFrequency};

#[cfg(test)]
pub use language::mock::FixedLanguageIdentifier;
