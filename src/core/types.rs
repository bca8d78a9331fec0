// src/core/types.rs
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Sentinel reported for words the dictionary does not know.
pub const NOT_FOUND: &str = "No entry found";

/// Both notations for one dictionary word, with and without spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    pub arpabet: String,
    pub arpabet_no_space: String,
    pub ipa: String,
    pub ipa_no_space: String,
}

/// Lookup outcome for a single word. Every analyzed word gets one of
/// these; absence from the dictionary is a value, not a missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEntry {
    Found(Transcription),
    NotFound,
}

impl WordEntry {
    pub fn is_found(&self) -> bool {
        matches!(self, WordEntry::Found(_))
    }

    pub fn transcription(&self) -> Option<&Transcription> {
        match self {
            WordEntry::Found(t) => Some(t),
            WordEntry::NotFound => None,
        }
    }
}

// NotFound serializes as the sentinel string, so JSON consumers see
// either a record object or "No entry found" per word.
impl Serialize for WordEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            WordEntry::Found(t) => t.serialize(serializer),
            WordEntry::NotFound => serializer.serialize_str(NOT_FOUND),
        }
    }
}

/// Insertion-ordered word -> entry mapping with last-write-wins keys.
/// Result sets are word-count sized, so key lookup is a linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    entries: Vec<(String, WordEntry)>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts or overwrites the entry for a word, keeping the position
    /// of the first occurrence.
    pub fn insert(&mut self, word: String, entry: WordEntry) {
        if let Some(pos) = self.entries.iter().position(|(w, _)| *w == word) {
            self.entries[pos].1 = entry;
        } else {
            self.entries.push((word, entry));
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordEntry)> {
        self.entries.iter().map(|(w, e)| (w.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, entry) in &self.entries {
            map.serialize_entry(word, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transcription() -> Transcription {
        Transcription {
            arpabet: "K AE1 T".to_string(),
            arpabet_no_space: "KAE1T".to_string(),
            ipa: "k ˈæ t".to_string(),
            ipa_no_space: "kˈæt".to_string(),
        }
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut result = AnalysisResult::new();
        result.insert("cat".to_string(), WordEntry::NotFound);
        result.insert("dog".to_string(), WordEntry::NotFound);
        result.insert("cat".to_string(), WordEntry::Found(sample_transcription()));

        assert_eq!(result.len(), 2);
        let keys: Vec<&str> = result.iter().map(|(w, _)| w).collect();
        assert_eq!(keys, vec!["cat", "dog"]);
        assert!(result.get("cat").unwrap().is_found());
    }

    #[test]
    fn test_not_found_serializes_as_sentinel() {
        let json = serde_json::to_string(&WordEntry::NotFound).unwrap();
        assert_eq!(json, "\"No entry found\"");
    }

    #[test]
    fn test_result_serializes_as_ordered_object() {
        let mut result = AnalysisResult::new();
        result.insert("cat".to_string(), WordEntry::Found(sample_transcription()));
        result.insert("zzz".to_string(), WordEntry::NotFound);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.starts_with("{\"cat\":{\"arpabet\":\"K AE1 T\""));
        assert!(json.ends_with("\"zzz\":\"No entry found\"}"));
    }
}
