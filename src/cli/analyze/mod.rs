//! Analyze command - runs the metadata pipeline on one file

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::metadata::{export_file_name, render_record, ExportFormat, MetadataRecord};
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Document to analyse
    pub path: PathBuf,

    /// Content-type hint used when the extension is not recognised
    #[arg(long)]
    pub content_type: Option<String>,

    /// Export format (json or toml)
    #[arg(long, default_value = "json")]
    pub format: ExportFormat,

    /// Directory for the export file (defaults to the input's directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the export to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Skip AI insights and use placeholder values
    #[arg(long)]
    pub no_insights: bool,
}

/// Run the analyze command
pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if args.no_insights {
        config.insights.enabled = false;
    }

    logging::init_logging(&config.logging);

    let pipeline = crate::create_pipeline(&config).context("Invalid configuration")?;

    let bytes = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    let filename = args
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = pipeline
        .process_upload(bytes, &filename, args.content_type.as_deref())
        .await
        .with_context(|| format!("Failed to process {}", args.path.display()))?;

    let rendered = render_record(&record, args.format)?;

    if args.stdout {
        println!("{}", rendered);
        return Ok(());
    }

    let destination = export_path(&args.path, args.output_dir.as_deref(), args.format);
    write_export(&destination, &rendered).await?;

    println!("{}", format_summary(&record));
    println!("Metadata written to {}", destination.display());
    info!("Exported {}", destination.display());

    Ok(())
}

/// `<dir>/<stem>_metadata.<ext>`, next to the input unless a directory is given
pub fn export_path(input: &Path, output_dir: Option<&Path>, format: ExportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    dir.join(export_file_name(&stem, format))
}

/// Write an export, creating the directory if needed
pub async fn write_export(destination: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(destination, contents)
        .await
        .with_context(|| format!("Failed to write {}", destination.display()))
}

/// Human-readable report
pub fn format_summary(record: &MetadataRecord) -> String {
    let mut lines = vec![
        format!(
            "File:          {} ({}, {})",
            record.file_name,
            record.file_format.label(),
            record.file_size
        ),
        format!(
            "Words:         {} ({} characters, ~{} min read)",
            record.word_count, record.character_count, record.reading_time_minutes
        ),
        format!(
            "Language:      {} ({}), confidence {:.2}{}",
            record.language_name,
            record.detected_language,
            record.language_confidence,
            if record.language_reliable { "" } else { ", unreliable" }
        ),
        format!(
            "Structure:     {} sentences, {} lines, readability {}",
            record.sentence_count,
            record.line_count,
            record.readability.as_str()
        ),
    ];

    if !record.top_words.is_empty() {
        let words: Vec<String> = record
            .top_words
            .iter()
            .map(|(word, count)| format!("{} ({})", word, count))
            .collect();
        lines.push(format!("Top words:     {}", words.join(", ")));
    }

    lines.push(format!("Document type: {}", record.document_type));
    lines.push(format!("Summary:       {}", record.summary));

    for (i, point) in record.key_points.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, point));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{BasicMetadata, LanguageResult, Readability, StructureResult, WordFrequency};
    use crate::domain::document::DocumentFormat;
    use crate::domain::insight::InsightResult;

    fn record() -> MetadataRecord {
        MetadataRecord::assemble(
            BasicMetadata {
                file_name: "hello.txt".to_string(),
                format: DocumentFormat::PlainText,
                file_size_bytes: 25,
                file_size: "25 B".to_string(),
                word_count: 4,
                character_count: 25,
                reading_time_minutes: 1,
            },
            LanguageResult::undetermined(),
            StructureResult {
                sentence_count: 2,
                line_count: 1,
                character_count_no_spaces: 22,
                avg_word_length: 5.0,
                avg_sentence_length: 2.0,
                readability: Readability::Medium,
                top_words: vec![WordFrequency::new("hello", 2)],
            },
            InsightResult {
                document_type: "Greeting".to_string(),
                summary: "A greeting.".to_string(),
                key_points: vec!["Says hello".to_string()],
                available: true,
            },
        )
    }

    #[test]
    fn test_export_path_next_to_input() {
        let path = export_path(Path::new("docs/report.pdf"), None, ExportFormat::Json);

        assert_eq!(path, PathBuf::from("docs/report_metadata.json"));
    }

    #[test]
    fn test_export_path_with_output_dir() {
        let path = export_path(
            Path::new("docs/report.pdf"),
            Some(Path::new("out")),
            ExportFormat::Toml,
        );

        assert_eq!(path, PathBuf::from("out/report_metadata.toml"));
    }

    #[test]
    fn test_export_path_bare_filename() {
        let path = export_path(Path::new("notes.md"), None, ExportFormat::Json);

        assert_eq!(path, PathBuf::from("notes_metadata.json"));
    }

    #[tokio::test]
    async fn test_write_export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("nested").join("hello_metadata.json");
        let rendered = render_record(&record(), ExportFormat::Json).unwrap();

        write_export(&destination, &rendered).await.unwrap();

        let written = std::fs::read_to_string(&destination).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["file_name"], "hello.txt");
        assert_eq!(value["document_type"], "Greeting");
    }

    #[test]
    fn test_format_summary() {
        let summary = format_summary(&record());

        assert!(summary.contains("hello.txt (Text, 25 B)"));
        assert!(summary.contains("Undetermined (und), confidence 0.00, unreliable"));
        assert!(summary.contains("readability medium"));
        assert!(summary.contains("hello (2)"));
        assert!(summary.contains("  1. Says hello"));
    }
}
