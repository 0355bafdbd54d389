//! Result profiles: one term → weight map per statement.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::index::TermCounts;
use crate::types::{TfidfError, TfidfResult};

/// A single weighted term from a statement profile.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
}

/// TF-IDF profiles of a corpus, parallel to the input statements.
#[derive(Debug, Clone, Default)]
pub struct TfidfStatistics {
    profiles: Vec<HashMap<String, f64>>,
    term_counts: Vec<TermCounts>,
}

impl TfidfStatistics {
    pub(crate) fn new(profiles: Vec<HashMap<String, f64>>, term_counts: Vec<TermCounts>) -> Self {
        debug_assert_eq!(profiles.len(), term_counts.len());
        Self {
            profiles,
            term_counts,
        }
    }

    /// Number of statements profiled.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profile(&self, statement: usize) -> Option<&HashMap<String, f64>> {
        self.profiles.get(statement)
    }

    pub fn profiles(&self) -> &[HashMap<String, f64>] {
        &self.profiles
    }

    /// The term counts the profile of `statement` was built from.
    pub fn term_counts(&self, statement: usize) -> Option<&TermCounts> {
        self.term_counts.get(statement)
    }

    pub fn all_term_counts(&self) -> &[TermCounts] {
        &self.term_counts
    }

    /// Consume into the bare profile vector.
    pub fn into_profiles(self) -> Vec<HashMap<String, f64>> {
        self.profiles
    }

    /// The `k` highest-weighted terms of a statement. Ties break on term.
    pub fn top_terms(&self, statement: usize, k: usize) -> TfidfResult<Vec<WeightedTerm>> {
        let profile = self.checked(statement)?;
        let mut ranked: Vec<WeightedTerm> = profile
            .iter()
            .map(|(term, &weight)| WeightedTerm {
                term: term.clone(),
                weight,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        ranked.truncate(k);
        Ok(ranked)
    }

    /// Cosine similarity of two statement profiles. Returns 0.0 when either
    /// profile has zero norm.
    pub fn similarity(&self, a: usize, b: usize) -> TfidfResult<f64> {
        Ok(cosine_similarity(self.checked(a)?, self.checked(b)?))
    }

    /// Profiles with keys in sorted order, for stable output.
    pub fn sorted_profiles(&self) -> Vec<BTreeMap<&str, f64>> {
        self.profiles
            .iter()
            .map(|profile| {
                profile
                    .iter()
                    .map(|(term, &weight)| (term.as_str(), weight))
                    .collect()
            })
            .collect()
    }

    /// Pretty JSON array of profiles, keys sorted.
    pub fn to_json(&self) -> TfidfResult<String> {
        Ok(serde_json::to_string_pretty(&self.sorted_profiles())?)
    }

    fn checked(&self, statement: usize) -> TfidfResult<&HashMap<String, f64>> {
        self.profiles
            .get(statement)
            .ok_or(TfidfError::StatementOutOfRange {
                index: statement,
                len: self.profiles.len(),
            })
    }
}

/// Cosine similarity between two sparse term → weight maps.
pub fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, &wa)| large.get(term).map(|&wb| wa * wb))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
