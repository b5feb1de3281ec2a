//! Metadata record assembly and export

pub mod export;
mod record;

pub use export::{export_file_name, render_record, ExportFormat};
pub use record::MetadataRecord;
