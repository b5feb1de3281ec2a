//! Record export: rendering and file naming

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::record::MetadataRecord;
use crate::domain::DomainError;

/// Serialization format for an exported record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(DomainError::validation(format!(
                "Unknown export format '{}'",
                other
            ))),
        }
    }
}

/// `<stem>_metadata.<ext>`
pub fn export_file_name(stem: &str, format: ExportFormat) -> String {
    let stem = if stem.is_empty() { "document" } else { stem };
    format!("{}_metadata.{}", stem, format.extension())
}

/// Render a record as UTF-8 text in the given format
pub fn render_record(record: &MetadataRecord, format: ExportFormat) -> Result<String, DomainError> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(record)
            .map_err(|e| DomainError::serialization(format!("JSON export failed: {}", e))),
        ExportFormat::Toml => toml::to_string(record)
            .map_err(|e| DomainError::serialization(format!("TOML export failed: {}", e))),
    }
}
