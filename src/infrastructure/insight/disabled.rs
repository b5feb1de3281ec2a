//! Provider used when insights are turned off or unconfigured

use async_trait::async_trait;

use crate::domain::insight::{InsightProvider, InsightRequest, RawInsights};
use crate::domain::DomainError;

/// Always reports insights as unavailable
#[derive(Debug, Clone)]
pub struct DisabledInsightProvider {
    reason: String,
}

impl DisabledInsightProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl InsightProvider for DisabledInsightProvider {
    async fn generate(&self, _request: InsightRequest) -> Result<RawInsights, DomainError> {
        Err(DomainError::insight_unavailable(self.reason.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_unavailable() {
        let provider = DisabledInsightProvider::new("no API key");

        let err = provider.generate(InsightRequest::new("text")).await.unwrap_err();

        assert!(matches!(err, DomainError::InsightUnavailable { .. }));
        assert!(err.to_string().contains("no API key"));
    }
}
