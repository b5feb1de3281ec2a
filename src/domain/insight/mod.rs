//! AI insight domain types
//!
//! This module provides:
//! - `InsightProvider`, the narrow "text to insights" capability
//! - `InsightGenerator`, which bounds, times and sanitizes calls to it
//! - `InsightResult` and the placeholders used when insights are unavailable

pub mod config;
pub mod generator;
mod provider;

pub use config::InsightConfig;
pub use generator::{sanitize_key_points, truncate_text, InsightGenerator};
pub use provider::{
    InsightProvider, InsightRequest, InsightResult, RawInsights, UNAVAILABLE_DOCUMENT_TYPE,
    UNAVAILABLE_SUMMARY,
};

#[cfg(test)]
pub use provider::MockInsightProvider;
