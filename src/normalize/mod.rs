pub mod stopwords;

use std::collections::{HashMap, HashSet};

use rust_stemmers::{Algorithm, Stemmer};

use crate::normalize::stopwords::STOP_WORDS;

/// Irregular word forms the stemmer cannot reduce to a dictionary base.
/// Looked up before stemming; the stemmer handles the regular inflections.
const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
];

/// Immutable language resources used by the `Normalizer`.
/// Built once at startup and shared read-only afterwards; there is no way to
/// mutate the sets after construction, which keeps normalization identical
/// for every query over the process lifetime.
pub struct LangResources {
    stop_words: HashSet<&'static str>,
    lemma_exceptions: HashMap<&'static str, &'static str>,
    stemmer: Stemmer,
}

impl LangResources {
    /// English stopword set, irregular-form table and Snowball stemmer.
    pub fn english() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            lemma_exceptions: LEMMA_EXCEPTIONS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl std::fmt::Debug for LangResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LangResources")
            .field("stop_words", &self.stop_words.len())
            .field("lemma_exceptions", &self.lemma_exceptions.len())
            .finish_non_exhaustive()
    }
}

impl Default for LangResources {
    fn default() -> Self {
        Self::english()
    }
}

/// Text normalizer
/// Maps arbitrary input text to the canonical token sequence the vectorizer
/// consumes: lowercase, alphanumeric tokens only, lemmatized, stopwords
/// removed.
///
/// Pure function of its input plus the fixed `LangResources`; never fails.
/// An input of only punctuation or stopwords normalizes to an empty
/// sequence, which is valid and scores zero against every document.
#[derive(Debug)]
pub struct Normalizer {
    resources: LangResources,
}

impl Normalizer {
    pub fn new(resources: LangResources) -> Self {
        Self { resources }
    }

    /// English defaults.
    pub fn english() -> Self {
        Self::new(LangResources::english())
    }

    /// Normalize text into its surviving lemma tokens, order preserved.
    ///
    /// # Arguments
    /// * `text` - raw input text
    ///
    /// # Returns
    /// * `Vec<String>` - lowercase lemmas with stopwords removed
    pub fn normalize_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|tok| !tok.is_empty())
            // drop inflected stopwords before stemming mangles them
            // ("very" stems to "veri", which would slip past the set)
            .filter(|tok| !self.resources.stop_words.contains(tok))
            .map(|tok| self.lemmatize(tok))
            .filter(|lemma| !self.resources.stop_words.contains(lemma.as_str()))
            .collect()
    }

    /// Normalize text into a single space-joined string for the vectorizer.
    /// May be empty; an empty normalized text must not be treated as an error.
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_tokens(text).join(" ")
    }

    /// Reduce one lowercase token to its base form.
    /// Irregular forms go through the exception table, everything else
    /// through the Snowball stemmer. Numeric tokens pass through unchanged.
    fn lemmatize(&self, token: &str) -> String {
        if let Some(base) = self.resources.lemma_exceptions.get(token) {
            return (*base).to_string();
        }
        self.resources.stemmer.stem(token).to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}
