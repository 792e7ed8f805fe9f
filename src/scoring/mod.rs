pub mod aggregate;
pub mod config;
pub mod engine;
pub mod normalize;
pub mod ranker;
pub mod strategy;
pub mod tiebreak;
pub mod validation;

pub use aggregate::aggregate_traits;
pub use config::*;
pub use engine::{recommend, score_careers, Recommendation, ScoreRecord};
pub use normalize::normalize;
pub use ranker::{clamp_top_k, rank, TIE_EPSILON};
pub use strategy::{CosineScorer, Scorer, WeightedScorer};
pub use tiebreak::{preference_boost, TIE_BREAK_WEIGHT};
pub use validation::{validate_catalog, validate_inputs, validate_survey, ValidationError};
