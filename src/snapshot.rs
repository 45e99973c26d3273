use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::corpus::FaqCorpus;
use crate::error::MatcherError;
use crate::matcher::{FaqMatcher, MatcherConfig};
use crate::normalize::Normalizer;
use crate::vectorizer::TFIDFModel;

/// Serializable snapshot of a fitted matcher.
///
/// Holds everything `FaqMatcher` derives at construction (corpus, fitted
/// model, document matrix, config) but not the language resources; those are
/// reattached on load, the same way the snapshot was detached from them.
/// Restoring skips the fit entirely, so a reloaded matcher scores
/// bit-for-bit like the one that was saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqIndexData {
    pub corpus: FaqCorpus,
    pub model: TFIDFModel,
    pub doc_matrix: Vec<Vec<f32>>,
    pub config: MatcherConfig,
}

impl FaqIndexData {
    /// Detach a snapshot from a fitted matcher.
    pub fn from_matcher(matcher: &FaqMatcher) -> Self {
        Self {
            corpus: matcher.corpus().clone(),
            model: matcher.model().clone(),
            doc_matrix: matcher.doc_matrix().to_vec(),
            config: *matcher.config(),
        }
    }

    /// Reattach language resources and become a matcher again, without
    /// refitting.
    pub fn into_matcher(self, normalizer: Normalizer) -> Result<FaqMatcher, MatcherError> {
        FaqMatcher::from_parts(
            self.corpus,
            normalizer,
            self.model,
            self.doc_matrix,
            self.config,
        )
    }

    /// Write the snapshot as CBOR.
    pub fn to_cbor_writer<W: Write>(&self, writer: W) -> Result<(), MatcherError> {
        serde_cbor::to_writer(writer, self)?;
        Ok(())
    }

    /// Read a snapshot back from CBOR.
    pub fn from_cbor_reader<R: Read>(reader: R) -> Result<Self, MatcherError> {
        Ok(serde_cbor::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cbor_round_trip_reproduces_scores_exactly() {
        let corpus: FaqCorpus = [
            ("How do I reset my password?", "Use the reset link."),
            ("How do I change my email address?", "Open account settings."),
        ]
        .into_iter()
        .collect();
        let matcher = FaqMatcher::with_defaults(corpus).unwrap();
        let before = matcher.scores("reset my password please");

        let snapshot = FaqIndexData::from_matcher(&matcher);
        let mut buf = Vec::new();
        snapshot.to_cbor_writer(&mut buf).unwrap();
        let restored = FaqIndexData::from_cbor_reader(buf.as_slice())
            .unwrap()
            .into_matcher(Normalizer::english())
            .unwrap();

        assert_eq!(before, restored.scores("reset my password please"));
    }

    #[test]
    fn snapshot_of_empty_corpus_cannot_become_a_matcher() {
        let data = FaqIndexData {
            corpus: FaqCorpus::new(),
            model: TFIDFModel::fit(&[]),
            doc_matrix: Vec::new(),
            config: MatcherConfig::default(),
        };
        assert!(data.into_matcher(Normalizer::english()).is_err());
    }
}
