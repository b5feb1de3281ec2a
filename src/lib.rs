//! docmeta
//!
//! Turns a single uploaded document into a uniform metadata profile:
//! - Text extraction for PDF, Word, plain text, spreadsheets, Markdown and images (OCR)
//! - Basic statistics, language detection and structural/readability analysis
//! - AI-generated document type, summary and key points (optional, time-bounded)
//! - JSON and TOML export

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::insight::InsightGenerator;
use domain::DomainError;
use infrastructure::{
    create_insight_provider, MetadataPipeline, StopwordLanguageIdentifier, TesseractOcr,
    TextExtractor,
};

/// Wire a pipeline from configuration
pub fn create_pipeline(config: &AppConfig) -> Result<MetadataPipeline, DomainError> {
    config.validate()?;

    let ocr = TesseractOcr::new(&config.ocr.tesseract_path, &config.ocr.language);
    let extractor = TextExtractor::new(Arc::new(ocr));

    let provider = create_insight_provider(&config.insights)?;
    let insights = InsightGenerator::new(provider, config.insights.clone());

    Ok(MetadataPipeline::new(
        extractor,
        Arc::new(StopwordLanguageIdentifier::new()),
        insights,
        config.analysis.clone(),
        config.max_file_size_bytes(),
    ))
}
