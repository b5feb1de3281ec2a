//! Word (.docx) text extraction

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild};

use crate::domain::DomainError;

/// Extract visible text from a .docx container in document order.
///
/// Each paragraph ends a line; table cells are separated by spaces and each row
/// ends a line. Legacy binary .doc files are not zip containers and fail here.
pub fn extract_docx(bytes: &[u8]) -> Result<String, DomainError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| DomainError::extraction("word", format!("Failed to parse document: {}", e)))?;

    let mut text = String::new();
    for child in &docx.document.children {
        push_document_child(child, &mut text);
    }

    Ok(text.trim_end().to_string())
}

fn push_document_child(child: &DocumentChild, out: &mut String) {
    match child {
        DocumentChild::Paragraph(paragraph) => {
            push_paragraph(paragraph, out);
            out.push('\n');
        }
        DocumentChild::Table(table) => {
            for row in &table.rows {
                let TableChild::TableRow(row) = row;
                let mut cells = Vec::new();

                for cell in &row.cells {
                    let TableRowChild::TableCell(cell) = cell;
                    let mut cell_text = String::new();

                    for content in &cell.children {
                        if let TableCellContent::Paragraph(paragraph) = content {
                            if !cell_text.is_empty() {
                                cell_text.push(' ');
                            }
                            push_paragraph(paragraph, &mut cell_text);
                        }
                    }

                    if !cell_text.trim().is_empty() {
                        cells.push(cell_text);
                    }
                }

                if !cells.is_empty() {
                    out.push_str(&cells.join(" "));
                    out.push('\n');
                }
            }
        }
        _ => {}
    }
}

fn push_paragraph(paragraph: &Paragraph, out: &mut String) {
    for child in &paragraph.children {
        match child {
            ParagraphChild::Run(run) => push_run_children(&run.children, out),
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let ParagraphChild::Run(run) = inner {
                        push_run_children(&run.children, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_children(children: &[RunChild], out: &mut String) {
    for child in children {
        match child {
            RunChild::Text(text) => out.push_str(&text.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
