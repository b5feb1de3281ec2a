//! Markdown extraction: decode, then strip markup

use pulldown_cmark::{Event, Parser, Tag};

use super::plain_text::decode_text;

/// Decode Markdown bytes and return the visible text
pub fn extract_markdown(bytes: &[u8]) -> String {
    strip_markdown(&decode_text(bytes))
}

/// Render Markdown to plain text.
///
/// Block elements end on their own line so that the line structure survives;
/// emphasis, link and heading markers are dropped.
pub fn strip_markdown(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::Start(Tag::Paragraph)
            | Event::Start(Tag::Heading(..))
            | Event::Start(Tag::Item)
            | Event::Start(Tag::CodeBlock(_))
            | Event::Start(Tag::TableRow)
            | Event::Start(Tag::TableHead) => start_line(&mut text),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::TableRow)
            | Event::End(Tag::TableHead) => text.push('\n'),
            Event::End(Tag::TableCell) => text.push(' '),
            Event::Rule => start_line(&mut text),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn start_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}
