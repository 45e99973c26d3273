use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TermFrequency;

/// Fitted TF-IDF model
/// Holds the vocabulary (term → column index) and the smoothed IDF weight per
/// column, both fixed by `fit`. `transform` only reads this state, so the
/// fixed-vocabulary invariant holds for the lifetime of the model: a term the
/// corpus never produced contributes nothing to any query vector, and the
/// model is never refit per request.
///
/// Weighting: tf = raw term count, idf = ln((1 + n) / (1 + df)) + 1, and each
/// output vector is L2-normalized. With normalized vectors an exact normalized
/// match scores cosine 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TFIDFModel {
    /// term → column, in first-seen corpus order
    #[serde(with = "indexmap::map::serde_seq")]
    vocabulary: IndexMap<Box<str>, usize>,
    /// smoothed IDF weight per column
    idf: Vec<f32>,
}

impl TFIDFModel {
    /// Fit vocabulary and IDF weights over the given document frequencies.
    /// Run once at corpus load; callers must reject an empty corpus before
    /// fitting.
    pub fn fit(documents: &[TermFrequency]) -> Self {
        let mut vocabulary: IndexMap<Box<str>, usize> = IndexMap::new();
        for doc in documents {
            for (term, _) in doc.iter() {
                let next = vocabulary.len();
                vocabulary.entry(term.into()).or_insert(next);
            }
        }

        // document frequency per column
        let mut df = vec![0u32; vocabulary.len()];
        for doc in documents {
            for (term, _) in doc.iter() {
                if let Some(&col) = vocabulary.get(term) {
                    df[col] += 1;
                }
            }
        }

        let doc_num = documents.len() as f64;
        let idf = df
            .iter()
            .map(|&doc_freq| (((1.0 + doc_num) / (1.0 + doc_freq as f64)).ln() + 1.0) as f32)
            .collect();

        tracing::debug!(
            docs = documents.len(),
            vocab = vocabulary.len(),
            "fitted tf-idf model"
        );

        TFIDFModel { vocabulary, idf }
    }

    /// Transform one document's term counts into a dense, L2-normalized
    /// TF-IDF vector over the fixed vocabulary.
    /// Out-of-vocabulary terms are ignored; a document with no known terms
    /// transforms to the zero vector.
    pub fn transform(&self, freq: &TermFrequency) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.vocabulary.len()];
        for (term, count) in freq.iter() {
            if let Some(&col) = self.vocabulary.get(term) {
                vec[col] = count as f32 * self.idf[col];
            }
        }

        let norm = vec.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
        if norm > 0.0 {
            let inv = (1.0 / norm) as f32;
            for v in &mut vec {
                *v *= inv;
            }
        }
        vec
    }

    /// Number of terms in the fixed vocabulary.
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&[&str]]) -> Vec<TermFrequency> {
        texts.iter().map(|t| TermFrequency::from_tokens(t)).collect()
    }

    #[test]
    fn vocabulary_is_first_seen_order() {
        let model = TFIDFModel::fit(&docs(&[&["name"], &["python", "name"]]));
        assert_eq!(model.vocab_size(), 2);
        assert!(model.contains_term("name"));
        assert!(model.contains_term("python"));
    }

    #[test]
    fn transform_is_l2_normalized() {
        let model = TFIDFModel::fit(&docs(&[&["reset", "password"], &["change", "email"]]));
        let vec = model.transform(&TermFrequency::from_tokens(&["reset", "password"]));
        let norm: f64 = vec.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_vocabulary_terms_contribute_nothing() {
        let model = TFIDFModel::fit(&docs(&[&["name"]]));
        let vec = model.transform(&TermFrequency::from_tokens(&["dragon", "spaceship"]));
        assert!(vec.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn empty_document_transforms_to_zero_vector() {
        let model = TFIDFModel::fit(&docs(&[&["name"], &["python"]]));
        let vec = model.transform(&TermFrequency::new());
        assert_eq!(vec.len(), 2);
        assert!(vec.iter().all(|v| *v == 0.0));
    }
}
