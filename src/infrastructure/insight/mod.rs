//! Insight provider implementations and wiring

mod disabled;
mod llm_provider;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::domain::insight::{InsightConfig, InsightProvider};
use crate::domain::DomainError;
use crate::infrastructure::llm::{HttpClient, OpenAiCompatibleProvider};

pub use disabled::DisabledInsightProvider;
pub use llm_provider::LlmInsightProvider;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "MISTRAL_API_KEY";

/// Build the insight provider for a configuration.
///
/// Disabled insights, or a missing API key, yield a `DisabledInsightProvider`
/// so that the pipeline still completes with placeholder insights.
pub fn create_insight_provider(config: &InsightConfig) -> Result<Arc<dyn InsightProvider>, DomainError> {
    if !config.enabled {
        return Ok(Arc::new(DisabledInsightProvider::new("insights are disabled")));
    }

    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()));

    let Some(api_key) = api_key else {
        warn!("No API key configured ({}), insights are disabled", API_KEY_ENV);
        return Ok(Arc::new(DisabledInsightProvider::new(format!(
            "{} is not set",
            API_KEY_ENV
        ))));
    };

    // Outlives the generator timeout
    let http = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs + 5))?;
    let llm = OpenAiCompatibleProvider::with_base_url(http, api_key, config.base_url.clone());

    Ok(Arc::new(LlmInsightProvider::new(Arc::new(llm), config)))
}
