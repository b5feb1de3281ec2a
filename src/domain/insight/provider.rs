//! Insight capability trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Document type used when insights are unavailable
pub const UNAVAILABLE_DOCUMENT_TYPE: &str = "Unknown";

/// Summary used when insights are unavailable
pub const UNAVAILABLE_SUMMARY: &str = "Summary unavailable.";

/// Input to the insight capability
#[derive(Debug, Clone, PartialEq)]
pub struct InsightRequest {
    /// Normalized (and possibly truncated) document text
    pub text: String,
    /// Optional context label, e.g. the source format
    pub context: Option<String>,
}

impl InsightRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Unsanitized output of the insight capability
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawInsights {
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl RawInsights {
    pub fn new(
        document_type: impl Into<String>,
        summary: impl Into<String>,
        key_points: Vec<String>,
    ) -> Self {
        Self {
            document_type: document_type.into(),
            summary: summary.into(),
            key_points,
        }
    }
}

/// Sanitized insights attached to a metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightResult {
    pub document_type: String,
    pub summary: String,
    pub key_points: Vec<String>,
    /// False when the values are placeholders
    pub available: bool,
}

impl InsightResult {
    /// Placeholder insights used when the capability failed or timed out
    pub fn unavailable() -> Self {
        Self {
            document_type: UNAVAILABLE_DOCUMENT_TYPE.to_string(),
            summary: UNAVAILABLE_SUMMARY.to_string(),
            key_points: Vec::new(),
            available: false,
        }
    }
}

/// Capability that produces a document type, summary and key points from text.
///
/// Implementations may fail with a transient error; the generator bounds every
/// call with a timeout.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Produce insights for the given text
    async fn generate(&self, request: InsightRequest) -> Result<RawInsights, DomainError>;

    /// Provider name, for logging
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_placeholders() {
        let insights = InsightResult::unavailable();

        assert_eq!(insights.document_type, "Unknown");
        assert_eq!(insights.summary, "Summary unavailable.");
        assert!(insights.key_points.is_empty());
        assert!(!insights.available);
    }

    #[test]
    fn test_raw_insights_missing_fields_default() {
        let raw: RawInsights = serde_json::from_str(r#"{"summary": "Short."}"#).unwrap();

        assert_eq!(raw.summary, "Short.");
        assert!(raw.document_type.is_empty());
        assert!(raw.key_points.is_empty());
    }

    #[test]
    fn test_request_builder() {
        let request = InsightRequest::new("text").with_context("pdf");

        assert_eq!(request.text, "text");
        assert_eq!(request.context.as_deref(), Some("pdf"));
    }
}
