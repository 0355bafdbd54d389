//! Engine configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::TfidfResult;

/// How document frequencies are obtained during combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DfStrategy {
    /// Build a term → document-frequency table once and reuse it.
    #[default]
    Precomputed,
    /// Recount across all statements for every (statement, term) pair.
    Rescan,
}

/// Configuration for [`crate::TfidfEngine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfidfConfig {
    pub strategy: DfStrategy,
    /// Count terms of each statement on the rayon thread pool.
    pub parallel: bool,
}

impl TfidfConfig {
    /// Parse from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> TfidfResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> TfidfResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
