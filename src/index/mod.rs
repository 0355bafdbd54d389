//! Count structures built from a corpus. Each is immutable once built.

pub mod doc_frequency;
pub mod term_counts;

pub use doc_frequency::{smoothed_idf, DocFrequency};
pub use term_counts::TermCounts;
