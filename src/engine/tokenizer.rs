//! Keyword tokenizer shared by term counting and profile building.

use crate::engine::vocabulary::ReservedVocabulary;
use crate::index::TermCounts;

/// Splits statements on single spaces and keeps exact reserved-word matches.
///
/// This is not a SQL lexer: punctuation, quoted literals and comments are
/// left attached to their tokens, so `FROM(` or `select` never match.
pub struct Tokenizer {
    vocabulary: &'static ReservedVocabulary,
}

impl Tokenizer {
    /// Create a tokenizer over the global reserved vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: ReservedVocabulary::global(),
        }
    }

    /// Retained keyword tokens of one statement, in statement order.
    pub fn tokenize<'s>(&self, statement: &'s str) -> Vec<&'s str> {
        statement
            .split(' ')
            .filter(|token| self.vocabulary.contains(token))
            .collect()
    }

    /// Tokenize and count occurrences of each retained keyword.
    pub fn term_counts(&self, statement: &str) -> TermCounts {
        TermCounts::from_tokens(self.tokenize(statement))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
