/// This crate is a FAQ matching engine: TF-IDF over a fixed question corpus,
/// cosine-similarity best-match selection, and a pluggable fallback responder
/// for everything below the confidence threshold.
pub mod bot;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod responder;
pub mod snapshot;
pub mod vectorizer;

/// FAQ corpus
/// An ordered sequence of question/answer entries, immutable once a matcher
/// is built over it. Loadable from JSON in either object form
/// (`{"question": "answer"}`, order preserved) or entry-array form.
pub use corpus::{FaqCorpus, FaqEntry};

/// FAQ similarity matcher
/// The core of this crate. Construction normalizes every corpus question,
/// fits the TF-IDF model once, and vectorizes the questions into a read-only
/// document matrix. `find_best_match` scores a raw query against every entry
/// and returns the first maximum if it clears the threshold; otherwise it
/// abstains with `None` rather than erroring.
///
/// All query-time operations take `&self`, so a matcher can be shared across
/// threads without locking.
pub use matcher::{FaqMatch, FaqMatcher, MatcherConfig, DEFAULT_SIMILARITY_THRESHOLD};

/// Text normalizer
/// Lowercases, keeps alphanumeric tokens, lemmatizes (exception table plus
/// Snowball stemmer) and removes stopwords. Pure over an immutable
/// `LangResources` built once at startup.
pub use normalize::{LangResources, Normalizer};

/// Fitted TF-IDF model
/// Fixed vocabulary and smoothed IDF weights. `fit` runs once per corpus;
/// `transform` runs per query and never refits, so out-of-vocabulary terms
/// contribute nothing.
pub use vectorizer::{TFIDFModel, TermFrequency};

/// Fallback seam
/// Consulted only when the matcher abstains. Implementations convert their
/// own failures into user-facing strings; errors never reach the matcher.
pub use responder::{CannedResponder, FallbackResponder};

/// Chatbot facade
/// `get_response(query) -> String`: answer from the corpus on a confident
/// match, delegate to the fallback responder otherwise.
pub use bot::Chatbot;

/// Serializable snapshot of a fitted matcher
/// CBOR save/load so an index can be reloaded without refitting. Restored
/// matchers score bit-for-bit like the saved ones.
pub use snapshot::FaqIndexData;

pub use error::MatcherError;
