use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency structure
/// Counts term occurrences within one document.
/// Insertion order is preserved so the fitted vocabulary is deterministic
/// for a given corpus.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count one occurrence of `term`.
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Count one occurrence of each term in `terms`.
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Build directly from a token sequence.
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = TermFrequency::new();
        freq.add_terms(tokens);
        freq
    }

    /// Occurrence count of `term`, 0 if absent.
    ///
    /// # Arguments
    /// * `term` - the term
    ///
    /// # Returns
    /// * `u32` - occurrence count
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        *self.term_count.get(term).unwrap_or(&0)
    }

    /// Total number of counted occurrences.
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms.
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Distinct terms in insertion order.
    ///
    /// # Returns
    /// * `Vec<&str>` - term set, borrowed
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// (term, count) pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(t, c)| (t.as_str(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let mut freq = TermFrequency::new();
        freq.add_term("rust").add_term("fast").add_term("rust");
        assert_eq!(freq.term_count("rust"), 2);
        assert_eq!(freq.term_count("fast"), 1);
        assert_eq!(freq.term_count("missing"), 0);
        assert_eq!(freq.term_sum(), 3);
        assert_eq!(freq.term_num(), 2);
    }

    #[test]
    fn preserves_insertion_order() {
        let freq = TermFrequency::from_tokens(&["b", "a", "c", "a"]);
        let terms = freq.term_set_ref_str();
        assert_eq!(terms, vec!["b", "a", "c"]);
    }
}
