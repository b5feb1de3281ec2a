//! Spreadsheet flattening

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, ExcelDateTime, Reader};
use chrono::Timelike;
use tracing::{debug, warn};

use crate::domain::DomainError;

/// Flatten every sheet row-major in sheet order.
///
/// Cells are joined with a space, rows with a newline, and sheets with a blank
/// line. Empty cells are skipped; numbers are stringified and dates rendered as
/// ISO 8601.
pub fn extract_spreadsheet(bytes: &[u8]) -> Result<String, DomainError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| DomainError::extraction("spreadsheet", format!("Failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in &sheet_names {
        let range = match workbook.worksheet_range(name) {
            Ok(range) => range,
            Err(e) => {
                warn!("Skipping unreadable sheet '{}': {}", name, e);
                continue;
            }
        };

        let rows: Vec<String> = range
            .rows()
            .map(flatten_row)
            .filter(|row| !row.is_empty())
            .collect();

        if !rows.is_empty() {
            sheets.push(rows.join("\n"));
        }
    }

    debug!("Flattened {} of {} sheets", sheets.len(), sheet_names.len());

    Ok(sheets.join("\n\n"))
}

fn flatten_row(row: &[Data]) -> String {
    row.iter()
        .filter(|cell| !matches!(cell, Data::Empty))
        .map(render_cell)
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::DateTime(value) => render_excel_datetime(value),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Serial date cells as `YYYY-MM-DD`, with the time only when it is not midnight.
/// Durations become `H:MM:SS`.
fn render_excel_datetime(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        return match value.as_duration() {
            Some(duration) => {
                let seconds = duration.num_seconds();
                format!(
                    "{}:{:02}:{:02}",
                    seconds / 3600,
                    (seconds % 3600) / 60,
                    seconds % 60
                )
            }
            None => value.to_string(),
        };
    }

    match value.as_datetime() {
        Some(datetime) if datetime.num_seconds_from_midnight() == 0 => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
        None => value.to_string(),
    }
}
