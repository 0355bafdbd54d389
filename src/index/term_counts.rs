//! Per-statement term occurrence counts.

use std::collections::HashMap;

use serde::Serialize;

/// Mapping from a matched reserved term to its occurrence count within one
/// statement. Absent terms are never stored with a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermCounts {
    counts: HashMap<String, u32>,
}

impl TermCounts {
    /// Create an empty count table.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Count a sequence of retained tokens.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::new();
        for token in tokens {
            counts.increment(token);
        }
        counts
    }

    fn increment(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(term.to_string(), 1);
            }
        }
    }

    /// Occurrence count of a term, if it was seen.
    pub fn get(&self, term: &str) -> Option<u32> {
        self.counts.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Sum of all counts (total retained tokens in the statement).
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of distinct terms.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate (term, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Iterate distinct terms in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|term| term.as_str())
    }
}
