//! LLM-backed insight provider
//!
//! Prompts a chat model for a JSON object with the document type, a summary and
//! key points, then parses the reply.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::insight::{InsightConfig, InsightProvider, InsightRequest, RawInsights};
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

const SYSTEM_PROMPT: &str = "You analyse documents. Reply with a single JSON object and nothing \
else, using exactly these keys: \"document_type\" (a short label such as \"Invoice\", \
\"Research paper\" or \"Meeting notes\"), \"summary\" (two or three sentences) and \
\"key_points\" (an array of short strings).";

/// Insight provider that delegates to a chat completion model
#[derive(Debug)]
pub struct LlmInsightProvider<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    max_key_points: usize,
}

impl<P: LlmProvider> LlmInsightProvider<P> {
    pub fn new(provider: Arc<P>, config: &InsightConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            max_key_points: config.max_key_points,
        }
    }

    fn build_user_prompt(&self, request: &InsightRequest) -> String {
        let mut prompt = String::new();

        if let Some(ref context) = request.context {
            prompt.push_str(&format!("The text was extracted from a {} file.\n", context));
        }

        prompt.push_str(&format!(
            "List at most {} key points.\n\nDocument:\n{}",
            self.max_key_points, request.text
        ));

        prompt
    }

    fn parse_reply(&self, reply: &str) -> Result<RawInsights, DomainError> {
        let json = extract_json(reply).unwrap_or(reply);

        serde_json::from_str(json).map_err(|e| {
            warn!("Unparseable insight reply: {}", e);
            DomainError::provider(
                self.provider.provider_name(),
                format!("Invalid insight reply: {}", e),
            )
        })
    }
}

/// Slice from the first `{` to the last `}`, tolerating code fences and prose
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    (start < end).then(|| &text[start..=end])
}

#[async_trait]
impl<P: LlmProvider> InsightProvider for LlmInsightProvider<P> {
    async fn generate(&self, request: InsightRequest) -> Result<RawInsights, DomainError> {
        let llm_request = LlmRequest::builder()
            .system(SYSTEM_PROMPT)
            .user(self.build_user_prompt(&request))
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .json_mode(true)
            .build();

        debug!(
            "Requesting insights from {} (model: {}, {} chars)",
            self.provider.provider_name(),
            self.model,
            request.text.chars().count()
        );

        let response = self.provider.chat(&self.model, llm_request).await?;

        if response.is_truncated() {
            warn!("Insight reply hit the token limit and may be incomplete");
        }

        self.parse_reply(response.content())
    }

    fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }
}
