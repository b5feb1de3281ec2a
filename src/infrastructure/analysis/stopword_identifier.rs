//! Script and stop-word language identification

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::domain::analysis::{LanguageGuess, LanguageIdentifier};

const ENGLISH: &[&str] = &[
    "the", "and", "of", "to", "is", "in", "that", "it", "was", "for", "with", "as", "on", "be",
    "at", "by", "this", "are", "from", "have", "not", "but", "or", "which", "you", "they", "we",
    "his", "her", "been", "were", "will", "would", "there", "their", "what", "about", "again",
];

const FRENCH: &[&str] = &[
    "le", "la", "les", "de", "des", "du", "et", "est", "un", "une", "que", "qui", "dans", "pour",
    "pas", "sur", "au", "aux", "avec", "ce", "cette", "il", "elle", "nous", "vous", "sont",
    "mais", "ou", "je", "ne",
];

const GERMAN: &[&str] = &[
    "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "zu", "den", "dem", "mit", "sich",
    "von", "auf", "für", "auch", "es", "im", "dass", "wir", "ich", "sie", "werden", "wird",
    "sind", "bei", "oder", "aus", "nach",
];

const SPANISH: &[&str] = &[
    "el", "la", "los", "las", "de", "que", "y", "en", "un", "una", "es", "por", "con", "para",
    "del", "se", "no", "lo", "como", "más", "pero", "sus", "le", "ya", "fue", "este", "esta",
    "son", "al", "muy",
];

const ITALIAN: &[&str] = &[
    "il", "lo", "la", "gli", "le", "di", "che", "e", "è", "un", "una", "per", "non", "con",
    "del", "della", "sono", "si", "da", "come", "anche", "nel", "questo", "ma", "più", "alla",
    "dei", "ha", "ho", "io",
];

const PORTUGUESE: &[&str] = &[
    "o", "a", "os", "as", "de", "que", "e", "do", "da", "em", "um", "uma", "para", "com", "não",
    "por", "mais", "se", "dos", "das", "como", "mas", "foi", "ao", "ele", "ela", "são", "seu",
    "sua", "é",
];

const DUTCH: &[&str] = &[
    "de", "het", "een", "en", "van", "in", "is", "dat", "op", "te", "zijn", "met", "voor",
    "niet", "aan", "er", "maar", "om", "ook", "als", "bij", "dan", "nog", "wat", "ik", "je",
    "hij", "zij", "wordt", "deze",
];

static PROFILES: Lazy<Vec<(&'static str, HashSet<&'static str>)>> = Lazy::new(|| {
    [
        ("en", ENGLISH),
        ("fr", FRENCH),
        ("de", GERMAN),
        ("es", SPANISH),
        ("it", ITALIAN),
        ("pt", PORTUGUESE),
        ("nl", DUTCH),
    ]
    .into_iter()
    .map(|(code, words)| (code, words.iter().copied().collect()))
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Script {
    Latin,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
    Devanagari,
    Thai,
    Hangul,
    Han,
    Kana,
    Other,
}

fn script_of(c: char) -> Script {
    match c as u32 {
        0x0041..=0x005A | 0x0061..=0x007A | 0x00C0..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
        0x0370..=0x03FF => Script::Greek,
        0x0400..=0x04FF => Script::Cyrillic,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF => Script::Arabic,
        0x0900..=0x097F => Script::Devanagari,
        0x0E00..=0x0E7F => Script::Thai,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
        0x3040..=0x30FF => Script::Kana,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF => Script::Han,
        _ => Script::Other,
    }
}

/// Heuristic identifier.
///
/// Non-Latin scripts decide the language directly, with confidence equal to the
/// share of letters in that script. Latin text is scored against small stop-word
/// profiles; a word shared by several profiles is split between them.
#[derive(Debug, Clone, Default)]
pub struct StopwordLanguageIdentifier;

impl StopwordLanguageIdentifier {
    pub fn new() -> Self {
        Self
    }

    fn identify_latin(text: &str, latin_share: f64) -> Option<LanguageGuess> {
        let mut scores: HashMap<&'static str, f64> = HashMap::new();

        for token in text.split(|c: char| !c.is_alphabetic()).filter(|t| !t.is_empty()) {
            let token = token.to_lowercase();
            let matches: Vec<&'static str> = PROFILES
                .iter()
                .filter(|(_, words)| words.contains(token.as_str()))
                .map(|(code, _)| *code)
                .collect();

            if matches.is_empty() {
                continue;
            }

            let weight = 1.0 / matches.len() as f64;
            for code in matches {
                *scores.entry(code).or_insert(0.0) += weight;
            }
        }

        let total: f64 = scores.values().sum();
        if total <= 0.0 {
            return None;
        }

        // Profile order breaks exact ties deterministically
        let (code, best) = PROFILES
            .iter()
            .map(|(code, _)| (*code, scores.get(code).copied().unwrap_or(0.0)))
            .fold(("", 0.0), |acc, item| if item.1 > acc.1 { item } else { acc });

        Some(LanguageGuess::new(code, best / total * latin_share))
    }
}

impl LanguageIdentifier for StopwordLanguageIdentifier {
    fn identify(&self, text: &str) -> Option<LanguageGuess> {
        let mut counts: HashMap<Script, usize> = HashMap::new();
        let mut letters = 0usize;

        for c in text.chars().filter(|c| c.is_alphabetic()) {
            letters += 1;
            *counts.entry(script_of(c)).or_insert(0) += 1;
        }

        if letters == 0 {
            return None;
        }

        let count = |script| counts.get(&script).copied().unwrap_or(0);
        let cjk = count(Script::Han) + count(Script::Kana);

        let candidates = [
            (Script::Latin, count(Script::Latin)),
            (Script::Cyrillic, count(Script::Cyrillic)),
            (Script::Greek, count(Script::Greek)),
            (Script::Arabic, count(Script::Arabic)),
            (Script::Hebrew, count(Script::Hebrew)),
            (Script::Devanagari, count(Script::Devanagari)),
            (Script::Thai, count(Script::Thai)),
            (Script::Hangul, count(Script::Hangul)),
            (Script::Han, cjk),
        ];

        let (script, dominant) = candidates
            .into_iter()
            .fold((Script::Other, 0), |acc, item| if item.1 > acc.1 { item } else { acc });

        if dominant == 0 {
            return None;
        }

        let share = dominant as f64 / letters as f64;

        let code = match script {
            Script::Latin => return Self::identify_latin(text, share),
            Script::Cyrillic => "ru",
            Script::Greek => "el",
            Script::Arabic => "ar",
            Script::Hebrew => "he",
            Script::Devanagari => "hi",
            Script::Thai => "th",
            Script::Hangul => "ko",
            Script::Han if count(Script::Kana) > 0 => "ja",
            Script::Han => "zh",
            Script::Kana | Script::Other => return None,
        };

        Some(LanguageGuess::new(code, share))
    }

    fn name(&self) -> &'static str {
        "stopword-heuristic"
    }
}
