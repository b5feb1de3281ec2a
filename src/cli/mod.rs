//! Command-line interface
//!
//! - `analyze`: extract, analyse and export metadata for one document
//! - `formats`: list supported formats

pub mod analyze;
pub mod formats;

use clap::{Parser, Subcommand};

/// docmeta - metadata profiles for PDF, Word, text, spreadsheet, Markdown and image files
#[derive(Parser)]
#[command(name = "docmeta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyse a document and export its metadata
    Analyze(analyze::AnalyzeArgs),

    /// List supported formats and extensions
    Formats,
}
