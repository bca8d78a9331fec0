// src/core/dictionary.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read-only pronunciation lookup. The analyzer only ever needs this one
/// operation, so tests can run against a small in-memory mock.
pub trait PronunciationLookup {
    /// Returns the space-delimited ARPAbet transcription for a lowercase
    /// word, if the dictionary knows it.
    fn lookup(&self, word: &str) -> Option<&str>;
}

/// HashMap-backed pronunciation dictionary, populated from cmudict-format
/// text and cached to disk between runs (see `persistence`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryDictionary {
    entries: HashMap<String, String>,
}

impl InMemoryDictionary {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn from_entries(pairs: &[(&str, &str)]) -> Self {
        let mut dict = Self::new();
        for (word, transcription) in pairs {
            dict.insert(word, transcription);
        }
        dict
    }

    pub fn insert(&mut self, word: &str, transcription: &str) {
        self.entries
            .insert(word.to_lowercase(), transcription.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges cmudict-format text into the dictionary. Returns the number
    /// of entries added. Malformed lines are skipped, never fatal.
    pub fn merge_dict_text(&mut self, text: &str) -> usize {
        let mut added = 0;
        for line in text.lines() {
            if let Some((word, transcription)) = parse_dict_line(line) {
                self.entries.insert(word, transcription);
                added += 1;
            }
        }
        added
    }

    /// Streams a cmudict-format file into the dictionary.
    pub fn load_dict_file(&mut self, path: &Path) -> io::Result<usize> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut added = 0;
        for line in reader.lines() {
            if let Some((word, transcription)) = parse_dict_line(&line?) {
                self.entries.insert(word, transcription);
                added += 1;
            }
        }
        Ok(added)
    }
}

impl PronunciationLookup for InMemoryDictionary {
    fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }
}

/// Parses one dictionary line into a (lowercase word, transcription) pair.
///
/// The format is one entry per line, `word PH ON EMES`. Lines starting
/// with `;` are comments, and `#` starts a trailing comment. Variant
/// terms like `aluminium(2)` are skipped so the first listed
/// pronunciation wins.
fn parse_dict_line(line: &str) -> Option<(String, String)> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() || line.starts_with(';') {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let term = tokens.next()?;
    if term.contains('(') {
        return None;
    }

    let transcription = tokens.collect::<Vec<&str>>().join(" ");
    if transcription.is_empty() {
        return None;
    }
    Some((term.to_lowercase(), transcription))
}
