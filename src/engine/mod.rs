//! TF-IDF engine: vocabulary, tokenizer, combiner and result profiles.

pub mod profile;
pub mod tfidf;
pub mod tokenizer;
pub mod vocabulary;

pub use profile::{cosine_similarity, TfidfStatistics, WeightedTerm};
pub use tfidf::TfidfEngine;
pub use tokenizer::Tokenizer;
pub use vocabulary::{ReservedVocabulary, RESERVED_WORDS};
