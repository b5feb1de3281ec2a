//! Insight generation configuration

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Configuration for the insight collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Whether to call the collaborator at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Base URL of an OpenAI-compatible chat completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// API key (falls back to the `MISTRAL_API_KEY` environment variable)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Upper bound on a single collaborator call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Text longer than this (in characters) is truncated before the call
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    #[serde(default = "default_max_key_points")]
    pub max_key_points: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.mistral.ai".to_string()
}

fn default_model() -> String {
    "mistral-small-latest".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_input_chars() -> usize {
    4000
}

fn default_max_key_points() -> usize {
    5
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    800
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_input_chars: default_max_input_chars(),
            max_key_points: default_max_key_points(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl InsightConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn with_max_key_points(mut self, max: usize) -> Self {
        self.max_key_points = max;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "Insight timeout must be greater than 0",
            ));
        }

        if self.max_input_chars == 0 {
            return Err(DomainError::configuration(
                "Insight input bound must be greater than 0",
            ));
        }

        if self.enabled && self.model.trim().is_empty() {
            return Err(DomainError::configuration("Insight model cannot be empty"));
        }

        Ok(())
    }
}
