// src/core/analyzer.rs
use crate::core::dictionary::PronunciationLookup;
use crate::core::transcoder::IpaTranscoder;
use crate::core::types::{AnalysisResult, Transcription, WordEntry};

/// Strips every character that is not an ASCII word character or
/// whitespace, then lowercases. Digits and underscores survive;
/// punctuation and non-ASCII letters do not.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Splits on runs of whitespace. Empty input yields a single empty
/// token, and boundary whitespace yields boundary empty tokens; they all
/// collapse onto the "" key during analysis.
pub fn split_words(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    let mut words = Vec::new();
    if text.starts_with(char::is_whitespace) {
        words.push("");
    }
    words.extend(text.split_whitespace());
    if text.ends_with(char::is_whitespace) {
        words.push("");
    }
    words
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Analyzes text against a pronunciation dictionary: normalize, tokenize,
/// look up each word, transcode hits to IPA, and record a found/not-found
/// entry per distinct word. Total over any input; never fails.
pub fn analyze_with(
    dictionary: &dyn PronunciationLookup,
    transcoder: &IpaTranscoder,
    text: &str,
) -> AnalysisResult {
    let clean = normalize_text(text);
    let mut result = AnalysisResult::new();

    for word in split_words(&clean) {
        let entry = match dictionary.lookup(word) {
            Some(arpabet) => {
                let ipa = transcoder.transcode(arpabet);
                WordEntry::Found(Transcription {
                    arpabet: arpabet.to_string(),
                    arpabet_no_space: strip_whitespace(arpabet),
                    ipa_no_space: strip_whitespace(&ipa),
                    ipa,
                })
            }
            None => WordEntry::NotFound,
        };
        result.insert(word.to_string(), entry);
    }
    result
}
