//! Plain-text decoding

use std::borrow::Cow;

use tracing::warn;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Decode text bytes, replacing undecodable sequences instead of failing.
///
/// UTF-8 is assumed unless a UTF-16 byte-order mark is present.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }

    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!("Text is not valid UTF-8, undecodable bytes were replaced");
            text
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    if bytes.len() % 2 != 0 {
        warn!("UTF-16 text has an odd byte count, dropping the trailing byte");
    }

    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("Grüße aus Köln".as_bytes()), "Grüße aus Köln");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFHello"), "Hello");
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        let text = decode_text(b"Hello \xFF\xFE world");

        assert!(text.starts_with("Hello "));
        assert!(text.ends_with(" world"));
        assert!(text.contains(char::REPLACEMENT_CHARACTER));
    }

    #[test]
    fn test_decode_utf16_le() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "Hi!".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        assert_eq!(decode_text(&bytes), "Hi!");
    }

    #[test]
    fn test_decode_utf16_be() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "Olá".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }

        assert_eq!(decode_text(&bytes), "Olá");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_text(b""), "");
    }
}
