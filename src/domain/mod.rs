//! Domain layer - document model, analyses and capability traits

pub mod analysis;
pub mod document;
pub mod error;
pub mod extraction;
pub mod insight;
pub mod llm;
pub mod metadata;

pub use analysis::{
    analyze_language, analyze_structure, generate_basic_metadata, AnalysisConfig, BasicMetadata,
    LanguageConfig, LanguageGuess, LanguageIdentifier, LanguageResult, Readability,
    ReadabilityThresholds, StructureResult, WordFrequency,
};
pub use document::{detect_format, Document, DocumentFormat};
pub use error::DomainError;
pub use extraction::{is_text_meaningful, normalize_text, ExtractedText};
pub use insight::{
    InsightConfig, InsightGenerator, InsightProvider, InsightRequest, InsightResult, RawInsights,
};
pub use llm::{FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole, Usage};
pub use metadata::{export_file_name, render_record, ExportFormat, MetadataRecord};
