//! TF-IDF combination over a corpus of SQL statements.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::config::{DfStrategy, TfidfConfig};
use crate::engine::profile::TfidfStatistics;
use crate::engine::tokenizer::Tokenizer;
use crate::index::{smoothed_idf, DocFrequency, TermCounts};
use crate::types::{TfidfError, TfidfResult};

/// Computes per-statement TF-IDF keyword profiles.
pub struct TfidfEngine {
    config: TfidfConfig,
    tokenizer: Tokenizer,
}

impl TfidfEngine {
    pub fn new(config: TfidfConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }

    /// Term counts for every statement, in corpus order.
    pub fn count_terms<S>(&self, corpus: &[S]) -> Vec<TermCounts>
    where
        S: AsRef<str> + Sync,
    {
        if self.config.parallel {
            corpus
                .par_iter()
                .map(|statement| self.tokenizer.term_counts(statement.as_ref()))
                .collect()
        } else {
            corpus
                .iter()
                .map(|statement| self.tokenizer.term_counts(statement.as_ref()))
                .collect()
        }
    }

    /// Build the TF-IDF profile of every statement in the corpus.
    pub fn compute<S>(&self, corpus: &[S]) -> TfidfStatistics
    where
        S: AsRef<str> + Sync,
    {
        if corpus.is_empty() {
            return TfidfStatistics::default();
        }

        let all_counts = self.count_terms(corpus);

        // All counts must exist before any document frequency is read.
        let table = match self.config.strategy {
            DfStrategy::Precomputed => Some(DocFrequency::build(&all_counts)),
            DfStrategy::Rescan => None,
        };
        log::debug!(
            "tf-idf over {} statements, strategy {:?}, parallel {}",
            all_counts.len(),
            self.config.strategy,
            self.config.parallel
        );
        if let Some(table) = &table {
            log::debug!("{} distinct reserved terms in corpus", table.term_count());
        }

        let doc_count = all_counts.len();
        let profile_of = |counts: &TermCounts| -> HashMap<String, f64> {
            let total = counts.total();
            counts
                .iter()
                .map(|(term, count)| {
                    let df = match &table {
                        Some(table) => table.doc_frequency(term),
                        None => DocFrequency::rescan(&all_counts, term),
                    };
                    (term.to_string(), combine(count, total, df, doc_count))
                })
                .collect()
        };

        let profiles: Vec<HashMap<String, f64>> = if self.config.parallel {
            all_counts.par_iter().map(profile_of).collect()
        } else {
            all_counts.iter().map(profile_of).collect()
        };

        TfidfStatistics::new(profiles, all_counts)
    }

    /// Weight of a single (statement, term) pair. Always rescans
    /// `all_counts` for the document frequency, independent of any
    /// engine's configured strategy.
    ///
    /// The term must have a positive count in the statement; anything else
    /// is a caller bug and is reported as an error rather than a zero.
    pub fn weight(all_counts: &[TermCounts], statement: usize, term: &str) -> TfidfResult<f64> {
        let counts = all_counts
            .get(statement)
            .ok_or(TfidfError::StatementOutOfRange {
                index: statement,
                len: all_counts.len(),
            })?;
        let count = counts.get(term).ok_or_else(|| TfidfError::TermNotCounted {
            statement,
            term: term.to_string(),
        })?;
        let df = DocFrequency::rescan(all_counts, term);
        Ok(combine(count, counts.total(), df, all_counts.len()))
    }
}

impl Default for TfidfEngine {
    fn default() -> Self {
        Self::new(TfidfConfig::default())
    }
}

/// `tf * idf` with `tf = count / total` and `idf = ln(N / (df + 1))`.
/// `total >= count >= 1` for every pair the engine combines.
fn combine(count: u32, total: u32, df: usize, doc_count: usize) -> f64 {
    let tf = count as f64 / total as f64;
    tf * smoothed_idf(doc_count, df)
}
