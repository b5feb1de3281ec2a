//! Text normalization prior to analysis

/// Zero-width and byte-order characters left behind by converters
const INVISIBLE_ARTIFACTS: [char; 5] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Decoding replacement character
const REPLACEMENT: char = '\u{FFFD}';

fn is_artifact(c: char) -> bool {
    c == REPLACEMENT || INVISIBLE_ARTIFACTS.contains(&c) || (c.is_control() && !c.is_whitespace())
}

/// Collapse every whitespace run to a single space, drop control characters and
/// extraction artifacts, and trim both ends.
///
/// Idempotent: `normalize_text(&normalize_text(x)) == normalize_text(x)`.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        if is_artifact(c) {
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }

        out.push(c);
        pending_space = false;
    }

    out
}

/// Whether normalized text carries enough content to analyse
pub fn is_text_meaningful(text: &str, min_chars: usize) -> bool {
    text.chars().filter(|c| c.is_alphanumeric()).count() >= min_chars.max(1)
}
