use crate::core::analyzer;
use crate::core::dictionary::InMemoryDictionary;
use crate::core::transcoder::IpaTranscoder;
use crate::core::types::AnalysisResult;
use crate::persistence::{load_from_disk, save_to_disk};
use std::io;
use std::path::Path;

/// The analysis engine composes the dictionary store and the transcoder.
/// Both are read-only once loaded, so `analyze` borrows immutably and is
/// safe to call from any number of threads.
pub struct AnalysisEngine {
    pub dictionary: InMemoryDictionary,
    pub transcoder: IpaTranscoder,
    dictionary_path: Option<String>,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            dictionary: InMemoryDictionary::new(),
            transcoder: IpaTranscoder::new(),
            dictionary_path: None,
        }
    }

    pub fn with_dictionary(dictionary: InMemoryDictionary) -> Self {
        Self {
            dictionary,
            transcoder: IpaTranscoder::new(),
            dictionary_path: None,
        }
    }

    /// Loads the binary dictionary cache at `path`, or starts empty if it
    /// is absent or unreadable. The path is remembered for
    /// `save_dictionary`.
    pub fn from_file_or_new(path: &str) -> Self {
        let mut engine = match load_from_disk(Path::new(path)) {
            Ok(dictionary) => Self::with_dictionary(dictionary),
            Err(_) => Self::new(),
        };
        engine.dictionary_path = Some(path.to_string());
        engine
    }

    /// Merges a cmudict-format text file into the dictionary, returning
    /// the number of entries added.
    pub fn load_dictionary_file(&mut self, path: &Path) -> io::Result<usize> {
        self.dictionary.load_dict_file(path)
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        analyzer::analyze_with(&self.dictionary, &self.transcoder, text)
    }

    pub fn save_dictionary(&self) -> Result<(), io::Error> {
        if let Some(path) = &self.dictionary_path {
            save_to_disk(&self.dictionary, Path::new(path))
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}
