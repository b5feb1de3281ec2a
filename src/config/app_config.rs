use serde::Deserialize;

use crate::domain::analysis::AnalysisConfig;
use crate::domain::insight::InsightConfig;
use crate::domain::DomainError;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub insights: InsightConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upload limits
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
}

/// OCR engine settings
#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: String,
    /// Tesseract language pack, e.g. "eng" or "eng+fra"
    #[serde(default = "default_ocr_language")]
    pub language: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_file_size_mb() -> u64 {
    10
}

fn default_tesseract_path() -> String {
    "tesseract".to_string()
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: default_tesseract_path(),
            language: default_ocr_language(),
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `DOCMETA__*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("DOCMETA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Size gate in bytes
    pub fn max_file_size_bytes(&self) -> u64 {
        self.limits.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.limits.max_file_size_mb == 0 {
            return Err(DomainError::configuration(
                "Maximum file size must be greater than 0",
            ));
        }

        if self.ocr.tesseract_path.trim().is_empty() {
            return Err(DomainError::configuration("OCR binary path cannot be empty"));
        }

        self.analysis.validate()?;
        self.insights.validate()
    }
}
