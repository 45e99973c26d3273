pub mod scoring;
pub mod tfidf;
pub mod token;

pub use scoring::{cosine_similarity, first_max, score_rows};
pub use tfidf::TFIDFModel;
pub use token::TermFrequency;
