//! Document metadata pipeline
//!
//! Runs one document through every stage in a fixed order:
//! size gate, extraction, normalization, content check, analyses, insights and
//! assembly. Format, size and extraction failures abort the run; insight
//! failures degrade to placeholder values.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::domain::analysis::{
    analyze_language, analyze_structure, generate_basic_metadata, AnalysisConfig,
    LanguageIdentifier,
};
use crate::domain::document::Document;
use crate::domain::extraction::{is_text_meaningful, ExtractedText};
use crate::domain::insight::InsightGenerator;
use crate::domain::metadata::MetadataRecord;
use crate::domain::DomainError;

use super::extraction::TextExtractor;

/// Pipeline for turning an uploaded document into a metadata record
pub struct MetadataPipeline {
    extractor: TextExtractor,
    language: Arc<dyn LanguageIdentifier>,
    insights: InsightGenerator,
    analysis: AnalysisConfig,
    max_file_size_bytes: u64,
}

impl MetadataPipeline {
    pub fn new(
        extractor: TextExtractor,
        language: Arc<dyn LanguageIdentifier>,
        insights: InsightGenerator,
        analysis: AnalysisConfig,
        max_file_size_bytes: u64,
    ) -> Self {
        Self {
            extractor,
            language,
            insights,
            analysis,
            max_file_size_bytes,
        }
    }

    /// Detect the format of an upload and process it
    pub async fn process_upload(
        &self,
        bytes: impl Into<Bytes>,
        filename: &str,
        content_type: Option<&str>,
    ) -> Result<MetadataRecord, DomainError> {
        let document = Document::load(bytes, filename, content_type)?;
        self.process(document).await
    }

    /// Process a loaded document
    pub async fn process(&self, document: Document) -> Result<MetadataRecord, DomainError> {
        let span = info_span!(
            "process_document",
            file = %document.filename(),
            format = %document.format()
        );

        self.run(document).instrument(span).await
    }

    async fn run(&self, document: Document) -> Result<MetadataRecord, DomainError> {
        self.check_size(&document)?;

        let extracted = self.extract(document.clone()).await?;

        let normalized = extracted.normalize();
        if !is_text_meaningful(&normalized, self.analysis.min_meaningful_chars) {
            return Err(DomainError::empty_text(normalized.chars().count()));
        }

        debug!(
            "Normalized text: {} chars ({} before normalization)",
            normalized.chars().count(),
            extracted.content.chars().count()
        );

        let basic =
            generate_basic_metadata(&document, &normalized, self.analysis.reading_speed_wpm);
        let language = analyze_language(self.language.as_ref(), &normalized, &self.analysis.language);
        let structure = analyze_structure(&extracted.content, &normalized, &self.analysis);

        info!(
            words = basic.word_count,
            sentences = structure.sentence_count,
            language = %language.language,
            "Analysis complete"
        );

        let insights = self
            .insights
            .generate_or_placeholder(&normalized, Some(document.format().label()))
            .await;

        if !insights.available {
            warn!("Record assembled with placeholder insights");
        }

        Ok(MetadataRecord::assemble(basic, language, structure, insights))
    }

    fn check_size(&self, document: &Document) -> Result<(), DomainError> {
        if document.size() > self.max_file_size_bytes {
            return Err(DomainError::size_limit_exceeded(
                document.size(),
                self.max_file_size_bytes,
            ));
        }

        Ok(())
    }

    async fn extract(&self, document: Document) -> Result<ExtractedText, DomainError> {
        let extractor = self.extractor.clone();

        tokio::task::spawn_blocking(move || extractor.extract(&document))
            .await
            .map_err(|e| DomainError::internal(format!("Extraction task failed: {}", e)))?
    }
}

impl std::fmt::Debug for MetadataPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataPipeline")
            .field("extractor", &self.extractor)
            .field("language", &self.language.name())
            .field("insights", &self.insights.provider_name())
            .field("max_file_size_bytes", &self.max_file_size_bytes)
            .finish()
    }
}
