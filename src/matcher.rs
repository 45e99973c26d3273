use serde::{Deserialize, Serialize};

use crate::corpus::FaqCorpus;
use crate::error::MatcherError;
use crate::normalize::Normalizer;
use crate::vectorizer::{first_max, score_rows, TFIDFModel, TermFrequency};

/// Similarity a best match must strictly exceed before it is returned.
/// Observed behavior of the engine, kept tunable through `MatcherConfig`
/// rather than hardcoded.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.30;

/// Tunables for `FaqMatcher`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatcherConfig {
    /// Best score must be strictly greater than this to count as a match.
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// A confident match against one corpus entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqMatch<'a> {
    /// corpus index of the matched entry
    pub index: usize,
    /// cosine similarity in [0, 1]
    pub score: f64,
    /// stored answer text of the matched entry
    pub answer: &'a str,
}

/// FAQ similarity matcher
/// Fits a TF-IDF model over the normalized corpus questions once at
/// construction and scores queries against the resulting document matrix.
/// All per-query operations take `&self` and only read fitted state, so one
/// matcher can be shared across threads without locking.
#[derive(Debug)]
pub struct FaqMatcher {
    corpus: FaqCorpus,
    normalizer: Normalizer,
    model: TFIDFModel,
    doc_matrix: Vec<Vec<f32>>,
    config: MatcherConfig,
}

impl FaqMatcher {
    /// Build a matcher: normalize every corpus question, fit the TF-IDF
    /// model, vectorize the questions into the document matrix.
    ///
    /// # Errors
    /// `MatcherError::EmptyCorpus` if the corpus has no entries; the fit
    /// needs at least one document.
    pub fn new(
        corpus: FaqCorpus,
        normalizer: Normalizer,
        config: MatcherConfig,
    ) -> Result<Self, MatcherError> {
        if corpus.is_empty() {
            return Err(MatcherError::EmptyCorpus);
        }

        let question_freqs: Vec<TermFrequency> = corpus
            .iter()
            .map(|entry| TermFrequency::from_tokens(&normalizer.normalize_tokens(&entry.question)))
            .collect();

        let model = TFIDFModel::fit(&question_freqs);
        let doc_matrix: Vec<Vec<f32>> = question_freqs
            .iter()
            .map(|freq| model.transform(freq))
            .collect();

        tracing::info!(
            entries = corpus.len(),
            vocab = model.vocab_size(),
            threshold = config.threshold,
            "faq matcher ready"
        );

        Ok(Self {
            corpus,
            normalizer,
            model,
            doc_matrix,
            config,
        })
    }

    /// Build with English resources and the default threshold.
    pub fn with_defaults(corpus: FaqCorpus) -> Result<Self, MatcherError> {
        Self::new(corpus, Normalizer::english(), MatcherConfig::default())
    }

    /// Reattach point for a deserialized snapshot; skips the fit.
    pub(crate) fn from_parts(
        corpus: FaqCorpus,
        normalizer: Normalizer,
        model: TFIDFModel,
        doc_matrix: Vec<Vec<f32>>,
        config: MatcherConfig,
    ) -> Result<Self, MatcherError> {
        if corpus.is_empty() {
            return Err(MatcherError::EmptyCorpus);
        }
        Ok(Self {
            corpus,
            normalizer,
            model,
            doc_matrix,
            config,
        })
    }

    /// Find the best matching corpus entry for a raw query, or abstain.
    ///
    /// Normalizes the query, transforms it with the fixed model, scores it
    /// against every corpus row and takes the first maximum (lowest index
    /// wins ties). Returns `Some` iff the best score is strictly greater
    /// than the threshold. Never errors: an empty or out-of-vocabulary query
    /// scores 0 everywhere and resolves to `None`.
    pub fn find_best_match(&self, query: &str) -> Option<FaqMatch<'_>> {
        let scores = self.scores(query);
        let (index, score) = first_max(&scores)?;
        tracing::debug!(index, score, threshold = self.config.threshold, "best candidate");
        if score > self.config.threshold {
            Some(FaqMatch {
                index,
                score,
                answer: &self.corpus.get(index)?.answer,
            })
        } else {
            None
        }
    }

    /// Cosine score of the query against every corpus entry, corpus order.
    /// Diagnostic surface; `find_best_match` is the decision rule.
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let tokens = self.normalizer.normalize_tokens(query);
        tracing::debug!(?tokens, "normalized query");
        let query_vec = self.model.transform(&TermFrequency::from_tokens(&tokens));
        score_rows(&self.doc_matrix, &query_vec)
    }

    pub fn corpus(&self) -> &FaqCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub(crate) fn model(&self) -> &TFIDFModel {
        &self.model
    }

    pub(crate) fn doc_matrix(&self) -> &[Vec<f32>] {
        &self.doc_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matcher() -> FaqMatcher {
        let corpus: FaqCorpus = [
            ("What is your name?", "I am a chatbot."),
            ("What is Python?", "Python is a programming language."),
        ]
        .into_iter()
        .collect();
        FaqMatcher::with_defaults(corpus).unwrap()
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let err = FaqMatcher::with_defaults(FaqCorpus::new()).unwrap_err();
        assert!(matches!(err, MatcherError::EmptyCorpus));
    }

    #[test]
    fn exact_question_scores_one() {
        let matcher = sample_matcher();
        let m = matcher.find_best_match("What is Python?").unwrap();
        assert_eq!(m.index, 1);
        assert_eq!(m.answer, "Python is a programming language.");
        assert!((m.score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn paraphrase_matches_the_right_entry() {
        let matcher = sample_matcher();
        let m = matcher.find_best_match("what's your name").unwrap();
        assert_eq!(m.index, 0);
        assert_eq!(m.answer, "I am a chatbot.");
    }

    #[test]
    fn gibberish_abstains() {
        let matcher = sample_matcher();
        assert!(matcher.find_best_match("asdkjhaskjdh").is_none());
    }

    #[test]
    fn empty_query_abstains_with_zero_scores() {
        let matcher = sample_matcher();
        assert!(matcher.find_best_match("").is_none());
        assert!(matcher.scores("").iter().all(|s| *s == 0.0));
        assert!(matcher.scores("?!?!").iter().all(|s| *s == 0.0));
    }

    #[test]
    fn duplicate_questions_resolve_to_the_lower_index() {
        let corpus: FaqCorpus = [
            ("How do I reset my password?", "first answer"),
            ("How do I reset my password?", "second answer"),
        ]
        .into_iter()
        .collect();
        let matcher = FaqMatcher::with_defaults(corpus).unwrap();
        let m = matcher.find_best_match("reset password").unwrap();
        assert_eq!(m.index, 0);
        assert_eq!(m.answer, "first answer");
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let matcher = sample_matcher();
        let a = matcher.scores("what is python");
        let b = matcher.scores("what is python");
        assert_eq!(a, b);
    }
}
