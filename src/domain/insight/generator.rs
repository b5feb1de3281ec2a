//! Insight generator - bounds, calls and sanitizes the insight capability

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use tokio::time::timeout;
use tracing::{debug, warn};

use super::config::InsightConfig;
use super::provider::{InsightProvider, InsightRequest, InsightResult, RawInsights, UNAVAILABLE_DOCUMENT_TYPE};
use crate::domain::DomainError;

/// A bullet (`-`, `*`, `•`) or list number (`1.`, `2)`) followed by whitespace
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*•]|\d+[.)])\s+").expect("list marker pattern is valid"));

/// Wraps an `InsightProvider` with input truncation, a timeout and output
/// sanitization
pub struct InsightGenerator {
    provider: Arc<dyn InsightProvider>,
    config: InsightConfig,
    timeout: Duration,
}

impl InsightGenerator {
    pub fn new(provider: Arc<dyn InsightProvider>, config: InsightConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);

        Self {
            provider,
            config,
            timeout,
        }
    }

    /// Override the call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Generate insights, surfacing any failure as `InsightUnavailable`
    pub async fn generate(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<InsightResult, DomainError> {
        let input = truncate_text(text, self.config.max_input_chars);

        if input.len() < text.len() {
            debug!(
                "Truncated insight input from {} to {} bytes",
                text.len(),
                input.len()
            );
        }

        let mut request = InsightRequest::new(input);
        if let Some(context) = context {
            request = request.with_context(context);
        }

        let provider = self.provider.provider_name();

        match timeout(self.timeout, self.provider.generate(request)).await {
            Ok(Ok(raw)) => Ok(self.sanitize(raw)),
            Ok(Err(e)) => Err(DomainError::insight_unavailable(format!(
                "{} failed: {}",
                provider, e
            ))),
            Err(_) => Err(DomainError::insight_unavailable(format!(
                "{} timed out after {}ms",
                provider,
                self.timeout.as_millis()
            ))),
        }
    }

    /// Generate insights, falling back to placeholders on failure
    pub async fn generate_or_placeholder(&self, text: &str, context: Option<&str>) -> InsightResult {
        match self.generate(text, context).await {
            Ok(insights) => insights,
            Err(e) => {
                warn!("Continuing without insights: {}", e);
                InsightResult::unavailable()
            }
        }
    }

    fn sanitize(&self, raw: RawInsights) -> InsightResult {
        let document_type = raw.document_type.trim();
        let document_type = if document_type.is_empty() {
            UNAVAILABLE_DOCUMENT_TYPE.to_string()
        } else {
            document_type.to_string()
        };

        InsightResult {
            document_type,
            summary: raw.summary.trim().to_string(),
            key_points: sanitize_key_points(raw.key_points, self.config.max_key_points),
            available: true,
        }
    }
}

/// Strip a leading list marker and whitespace, drop blank entries, keep order
pub fn sanitize_key_points(points: Vec<String>, limit: usize) -> Vec<String> {
    points
        .into_iter()
        .map(|p| {
            let trimmed = p.trim();
            LIST_MARKER.replace(trimmed, "").trim().to_string()
        })
        .filter(|p| !p.is_empty())
        .take(limit)
        .collect()
}

/// Truncate to at most `max_chars` characters, preferring a sentence or word
/// boundary in the second half of the window
pub fn truncate_text(text: &str, max_chars: usize) -> &str {
    let Some((end, _)) = text.char_indices().nth(max_chars) else {
        return text;
    };

    let truncated = &text[..end];
    let half = truncated.len() / 2;

    if let Some(pos) = truncated.rfind(". ").filter(|&p| p >= half) {
        return &truncated[..=pos];
    }

    if let Some(pos) = truncated.rfind(' ').filter(|&p| p >= half) {
        return &truncated[..pos];
    }

    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight::MockInsightProvider;
    use async_trait::async_trait;

    fn generator_with(mock: MockInsightProvider) -> InsightGenerator {
        InsightGenerator::new(Arc::new(mock), InsightConfig::default())
    }

    #[derive(Debug)]
    struct SlowProvider;

    #[async_trait]
    impl InsightProvider for SlowProvider {
        async fn generate(&self, _request: InsightRequest) -> Result<RawInsights, DomainError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(RawInsights::default())
        }

        fn provider_name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_generate_sanitizes_key_points() {
        let mut mock = MockInsightProvider::new();
        mock.expect_provider_name().return_const("mock");
        mock.expect_generate().returning(|_| {
            Ok(RawInsights::new(
                " Report ",
                " A quarterly report. ",
                vec![
                    "- Revenue grew".to_string(),
                    "   ".to_string(),
                    String::new(),
                    "Costs fell".to_string(),
                ],
            ))
        });

        let insights = generator_with(mock).generate("text", None).await.unwrap();

        assert_eq!(insights.document_type, "Report");
        assert_eq!(insights.summary, "A quarterly report.");
        assert_eq!(insights.key_points, vec!["Revenue grew", "Costs fell"]);
        assert!(insights.available);
    }

    #[tokio::test]
    async fn test_generate_passes_context_and_truncated_text() {
        let mut mock = MockInsightProvider::new();
        mock.expect_provider_name().return_const("mock");
        mock.expect_generate()
            .withf(|request| request.text.chars().count() <= 20 && request.context.as_deref() == Some("pdf"))
            .times(1)
            .returning(|_| Ok(RawInsights::new("Memo", "Short memo.", vec![])));

        let generator = InsightGenerator::new(
            Arc::new(mock),
            InsightConfig::default().with_max_input_chars(20),
        );

        let insights = generator
            .generate(&"word ".repeat(100), Some("pdf"))
            .await
            .unwrap();

        assert_eq!(insights.document_type, "Memo");
    }

    #[tokio::test]
    async fn test_provider_error_becomes_unavailable() {
        let mut mock = MockInsightProvider::new();
        mock.expect_provider_name().return_const("mock");
        mock.expect_generate()
            .returning(|_| Err(DomainError::provider("mock", "503 Service Unavailable")));

        let err = generator_with(mock).generate("text", None).await.unwrap_err();

        assert!(matches!(err, DomainError::InsightUnavailable { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_timeout_becomes_unavailable() {
        let generator = InsightGenerator::new(Arc::new(SlowProvider), InsightConfig::default())
            .with_timeout(Duration::from_millis(20));

        let err = generator.generate("text", None).await.unwrap_err();

        assert!(matches!(err, DomainError::InsightUnavailable { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_generate_or_placeholder() {
        let generator = InsightGenerator::new(Arc::new(SlowProvider), InsightConfig::default())
            .with_timeout(Duration::from_millis(20));

        let insights = generator.generate_or_placeholder("text", None).await;

        assert_eq!(insights, InsightResult::unavailable());
    }

    #[tokio::test]
    async fn test_empty_document_type_gets_placeholder() {
        let mut mock = MockInsightProvider::new();
        mock.expect_provider_name().return_const("mock");
        mock.expect_generate()
            .returning(|_| Ok(RawInsights::new("", "Summary.", vec![])));

        let insights = generator_with(mock).generate("text", None).await.unwrap();

        assert_eq!(insights.document_type, "Unknown");
        assert!(insights.available);
    }

    #[test]
    fn test_sanitize_key_points_limit() {
        let points = (1..=8).map(|i| format!("Point {}", i)).collect();
        let sanitized = sanitize_key_points(points, 5);

        assert_eq!(sanitized.len(), 5);
        assert_eq!(sanitized[0], "Point 1");
        assert_eq!(sanitized[4], "Point 5");
    }

    #[test]
    fn test_sanitize_key_points_strips_list_markers() {
        let points = vec![
            "- Revenue grew".to_string(),
            "* Costs fell".to_string(),
            "• Margin improved".to_string(),
            "1. First milestone".to_string(),
            "12) Twelfth item".to_string(),
            "   ".to_string(),
        ];

        assert_eq!(
            sanitize_key_points(points, 10),
            vec![
                "Revenue grew",
                "Costs fell",
                "Margin improved",
                "First milestone",
                "Twelfth item",
            ]
        );
    }

    #[test]
    fn test_sanitize_key_points_keeps_leading_signs_and_numbers() {
        let points = vec![
            "-5% churn".to_string(),
            "*Nonstandard* emphasis".to_string(),
            "2024 was a record year".to_string(),
            "3.5x growth".to_string(),
        ];

        assert_eq!(
            sanitize_key_points(points, 10),
            vec![
                "-5% churn",
                "*Nonstandard* emphasis",
                "2024 was a record year",
                "3.5x growth",
            ]
        );
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 100), "short");
        assert_eq!(truncate_text("First one. Second one here", 18), "First one.");
        assert_eq!(truncate_text("alpha beta gamma delta", 13), "alpha beta");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        let text = "ééééé ééééé";
        let truncated = truncate_text(text, 3);

        assert_eq!(truncated, "ééé");
    }
}
