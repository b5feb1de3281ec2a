//! Formats command - lists supported formats

use crate::domain::document::DocumentFormat;

pub fn run() -> anyhow::Result<()> {
    for line in format_lines() {
        println!("{}", line);
    }

    Ok(())
}

/// One line per format: label and extensions
pub fn format_lines() -> Vec<String> {
    DocumentFormat::ALL
        .iter()
        .map(|format| {
            let extensions: Vec<String> =
                format.extensions().iter().map(|e| format!(".{}", e)).collect();
            format!("{:<12} {}", format.label(), extensions.join(" "))
        })
        .collect()
}
