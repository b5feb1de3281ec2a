//! Document domain types
//!
//! This module provides:
//! - `Document`, the immutable uploaded payload
//! - `DocumentFormat` and format detection from filename / content type

mod payload;
pub mod format;

pub use payload::Document;
pub use format::{
    detect_format, detect_format_from_filename, detect_format_from_mime,
    DocumentFormat,
};
