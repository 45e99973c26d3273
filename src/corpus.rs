use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::MatcherError;

/// One question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered FAQ corpus
/// Entries are immutable once the matcher is built; question texts are
/// assumed distinct but duplicates are not rejected (a duplicate simply loses
/// tie-breaks to the earlier entry).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FaqCorpus {
    entries: Vec<FaqEntry>,
}

/// Accepted JSON shapes: an ordered `{"question": "answer"}` object or an
/// array of `{question, answer}` entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Map(IndexMap<String, String>),
    Entries(Vec<FaqEntry>),
}

impl FaqCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: impl Into<String>, answer: impl Into<String>) -> &mut Self {
        self.entries.push(FaqEntry::new(question, answer));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaqEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    /// Parse a corpus from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, MatcherError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        Ok(match file {
            CorpusFile::Map(map) => map
                .into_iter()
                .map(|(question, answer)| FaqEntry { question, answer })
                .collect(),
            CorpusFile::Entries(entries) => Self { entries },
        })
    }

    /// Load a corpus from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MatcherError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl FromIterator<FaqEntry> for FaqCorpus {
    fn from_iter<I: IntoIterator<Item = FaqEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<Q: Into<String>, A: Into<String>> FromIterator<(Q, A)> for FaqCorpus {
    fn from_iter<I: IntoIterator<Item = (Q, A)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(q, a)| FaqEntry::new(q, a))
            .collect()
    }
}
