//! SQL keyword TF-IDF profiles.
//!
//! Characterizes a corpus of SQL statements by how important each SQL
//! reserved keyword is to each statement relative to the whole corpus.
//! The result is one sparse term → weight map per statement.
//!
//! ```
//! use sql_tfidf::TfidfEngine;
//!
//! let stats = TfidfEngine::default().compute(&["SELECT * FROM T WHERE A = 1", "SELECT B FROM T"]);
//! assert_eq!(stats.len(), 2);
//! assert_eq!(stats.profile(0).unwrap()["WHERE"], 0.0);
//! ```

pub mod collector;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod index;
pub mod types;

pub use config::{DfStrategy, TfidfConfig};
pub use corpus::{parse_corpus, read_corpus};
pub use engine::{
    cosine_similarity, ReservedVocabulary, TfidfEngine, TfidfStatistics, Tokenizer, WeightedTerm,
    RESERVED_WORDS,
};
pub use index::{DocFrequency, TermCounts};
pub use types::{TfidfError, TfidfResult};

/// Profile a corpus with the default configuration.
pub fn compute_statistics<S>(corpus: &[S]) -> TfidfStatistics
where
    S: AsRef<str> + Sync,
{
    TfidfEngine::default().compute(corpus)
}
