//! Infrastructure layer - extractors, providers and the pipeline

pub mod analysis;
pub mod extraction;
pub mod insight;
pub mod llm;
pub mod logging;
pub mod pipeline;

pub use analysis::StopwordLanguageIdentifier;
pub use extraction::{OcrEngine, TesseractOcr, TextExtractor};
pub use insight::{create_insight_provider, DisabledInsightProvider, LlmInsightProvider};
pub use llm::{HttpClient, HttpClientTrait, OpenAiCompatibleProvider};
pub use pipeline::MetadataPipeline;
