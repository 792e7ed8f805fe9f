use serde::{Deserialize, Serialize};
use std::fmt;

use super::strategy::{CosineScorer, Scorer, WeightedScorer};

/// Which similarity measure compares a trait vector with career weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Dot product of traits and weights
    #[default]
    Weighted,
    /// Cosine similarity of traits and weights
    Cosine,
}

impl ScoringMode {
    /// Resolve the scorer once per run; every career is scored with the same one.
    pub fn scorer(self) -> &'static dyn Scorer {
        match self {
            ScoringMode::Weighted => &WeightedScorer,
            ScoringMode::Cosine => &CosineScorer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringMode::Weighted => "weighted",
            ScoringMode::Cosine => "cosine",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_TOP_K: i64 = 3;

/// Settings the engine needs for one run.
///
/// `top_k` is signed; out-of-range requests are clamped by the ranker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    pub top_k: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Weighted,
            top_k: DEFAULT_TOP_K,
        }
    }
}
