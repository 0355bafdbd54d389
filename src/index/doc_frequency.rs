//! Document frequency table: term → number of statements containing it.

use std::collections::HashMap;

use super::term_counts::TermCounts;

/// Precomputed document frequencies over a whole corpus of term counts.
pub struct DocFrequency {
    /// term → number of statements whose counts contain the term
    frequencies: HashMap<String, usize>,
    /// Number of statements in the corpus, including keyword-free ones.
    doc_count: usize,
}

impl DocFrequency {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            frequencies: HashMap::new(),
            doc_count: 0,
        }
    }

    /// Build from the per-statement counts of a corpus. Each statement
    /// contributes at most once per term.
    pub fn build(all_counts: &[TermCounts]) -> Self {
        let mut table = Self::new();
        for counts in all_counts {
            for term in counts.terms() {
                *table.frequencies.entry(term.to_string()).or_insert(0) += 1;
            }
            table.doc_count += 1;
        }
        table
    }

    /// Document frequency of the term by rescanning every statement.
    /// Matches `build(..).doc_frequency(term)` exactly.
    pub fn rescan(all_counts: &[TermCounts], term: &str) -> usize {
        all_counts.iter().filter(|counts| counts.contains(term)).count()
    }

    /// Number of statements containing the term (0 if never seen).
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.frequencies.get(term).copied().unwrap_or(0)
    }

    /// Total number of statements in the corpus.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct terms seen anywhere in the corpus.
    pub fn term_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Smoothed inverse document frequency, `ln(N / (df + 1))`.
    pub fn idf(&self, term: &str) -> f64 {
        smoothed_idf(self.doc_count, self.doc_frequency(term))
    }
}

impl Default for DocFrequency {
    fn default() -> Self {
        Self::new()
    }
}

/// `ln(doc_count / (df + 1))`. Negative when a term appears in every
/// statement; no clamping.
pub fn smoothed_idf(doc_count: usize, df: usize) -> f64 {
    (doc_count as f64 / (df as f64 + 1.0)).ln()
}
