use thiserror::Error;

/// Errors raised while building a matcher or loading its inputs.
/// Per-query operations never error; a low-confidence or empty query resolves
/// to "no match" instead.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The TF-IDF fit needs at least one document.
    #[error("FAQ corpus is empty; at least one entry is required")]
    EmptyCorpus,

    #[error("failed to read FAQ corpus: {0}")]
    CorpusIo(#[from] std::io::Error),

    #[error("failed to parse FAQ corpus: {0}")]
    CorpusFormat(#[from] serde_json::Error),

    #[error("failed to encode or decode index snapshot: {0}")]
    Snapshot(#[from] serde_cbor::Error),
}
