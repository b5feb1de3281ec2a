use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported format: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("Size limit exceeded: {size} bytes (limit {limit} bytes)")]
    SizeLimitExceeded { size: u64, limit: u64 },

    #[error("Extraction error ({format}): {message}")]
    Extraction { format: String, message: String },

    #[error("Could not extract meaningful text from the document ({characters} characters)")]
    EmptyOrMeaninglessText { characters: usize },

    #[error("Insights unavailable: {message}")]
    InsightUnavailable { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn unsupported_format(filename: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            filename: filename.into(),
        }
    }

    pub fn size_limit_exceeded(size: u64, limit: u64) -> Self {
        Self::SizeLimitExceeded { size, limit }
    }

    pub fn extraction(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn empty_text(characters: usize) -> Self {
        Self::EmptyOrMeaninglessText { characters }
    }

    pub fn insight_unavailable(message: impl Into<String>) -> Self {
        Self::InsightUnavailable {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error aborts a pipeline run. Insight failures degrade to
    /// placeholder values instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InsightUnavailable { .. })
    }
}
