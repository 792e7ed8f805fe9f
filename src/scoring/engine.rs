use super::aggregate::aggregate_validated;
use super::config::{ScoringConfig, ScoringMode};
use super::normalize::normalize;
use super::ranker::{clamp_top_k, rank};
use super::tiebreak::preference_boost;
use super::validation::{validate_inputs, ValidationError};
use crate::catalog::Career;
use crate::explain::{explain, Explanation};
use crate::survey::{Answers, Preferences, Question, TraitVector};

/// One career's standing after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub career_name: String,
    pub raw_score: f64,        // Strategy-dependent range
    pub normalized_score: f64, // 0..1 across the run
    pub tie_break_boost: f64,  // 0..TIE_BREAK_WEIGHT
    pub final_score: f64,      // normalized_score + tie_break_boost
    pub rank: usize,           // 1-based, 0 until ranked
}

/// Everything a run produces: traits, full standings and top-K explanations.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub mode: ScoringMode,
    pub traits: TraitVector,
    /// All careers in rank order, not only the top-K.
    pub standings: Vec<ScoreRecord>,
    /// Explanations for the top-K careers, in rank order.
    pub explanations: Vec<Explanation>,
}

impl Recommendation {
    /// The top-K slice of the standings.
    pub fn top(&self) -> &[ScoreRecord] {
        &self.standings[..self.explanations.len()]
    }
}

/// Score every career against `traits` with a single scorer, normalize
/// across the run and add the preference boost. Records come back unranked,
/// in catalog order.
pub fn score_careers(
    traits: &TraitVector,
    careers: &[Career],
    preferences: &Preferences,
    mode: ScoringMode,
) -> Vec<ScoreRecord> {
    let scorer = mode.scorer();
    let raw: Vec<f64> = careers
        .iter()
        .map(|c| scorer.score(traits, &c.trait_weights()))
        .collect();
    let normalized = normalize(&raw);

    careers
        .iter()
        .zip(raw)
        .zip(normalized)
        .map(|((career, raw_score), normalized_score)| {
            let tie_break_boost = preference_boost(preferences, &career.preferences);
            ScoreRecord {
                career_name: career.name.clone(),
                raw_score,
                normalized_score,
                tie_break_boost,
                final_score: normalized_score + tie_break_boost,
                rank: 0,
            }
        })
        .collect()
}

/// Run the full pipeline: validate, aggregate, score, rank, explain.
///
/// All input problems are reported together before any scoring happens.
pub fn recommend(
    questions: &[Question],
    careers: &[Career],
    answers: &Answers,
    preferences: &Preferences,
    config: &ScoringConfig,
) -> Result<Recommendation, Vec<ValidationError>> {
    validate_inputs(questions, careers, answers, preferences)?;

    let traits = aggregate_validated(questions, answers);
    tracing::info!(mode = %config.mode, careers = careers.len(), "scoring careers");

    let standings = rank(score_careers(&traits, careers, preferences, config.mode));
    let top_k = clamp_top_k(config.top_k, standings.len());

    let explanations = standings[..top_k]
        .iter()
        .filter_map(|record| careers.iter().find(|c| c.name == record.career_name))
        .map(|career| explain(career, &traits, preferences))
        .collect();

    Ok(Recommendation {
        mode: config.mode,
        traits,
        standings,
        explanations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::Trait;
    use std::collections::BTreeMap;

    fn question(id: u32, label: &str) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            trait_label: label.to_string(),
            reverse: false,
        }
    }

    fn career(name: &str, weights: &[(&str, f64)]) -> Career {
        Career {
            name: name.to_string(),
            weights: weights
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            preferences: Preferences::default(),
            desc: String::new(),
        }
    }

    fn survey() -> (Vec<Question>, Answers) {
        let questions = ["E", "C", "O", "A", "N", "M"]
            .iter()
            .enumerate()
            .map(|(i, label)| question(i as u32 + 1, label))
            .collect();
        // E=0, C=0.75, O=0.5, A=0.25, N=0.5, M=1
        let answers = Answers::from([(1, 1), (2, 4), (3, 3), (4, 2), (5, 3), (6, 5)]);
        (questions, answers)
    }

    fn catalog() -> Vec<Career> {
        vec![
            career("Sales Rep", &[("E", 0.6), ("A", 0.3)]),
            career("Data Analyst", &[("M", 0.5), ("C", 0.3)]),
            career("Designer", &[("O", 0.6), ("M", 0.1)]),
        ]
    }

    #[test]
    fn test_score_careers_normalizes_and_boosts() {
        let traits = TraitVector::from_values([0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let careers = vec![
            career("Low", &[("M", -0.5)]),
            career("High", &[("M", 0.5)]),
        ];
        let prefs = Preferences::default();
        let records = score_careers(&traits, &careers, &prefs, ScoringMode::Weighted);

        assert_eq!(records[0].raw_score, -0.5);
        assert_eq!(records[0].normalized_score, 0.0);
        assert_eq!(records[1].normalized_score, 1.0);
        // Identical default preferences -> full boost
        assert!((records[1].tie_break_boost - 0.1).abs() < 1e-12);
        assert!((records[1].final_score - 1.1).abs() < 1e-12);
        assert!(records.iter().all(|r| r.rank == 0));
    }

    #[test]
    fn test_recommend_full_pipeline() {
        let (questions, answers) = survey();
        let config = ScoringConfig {
            mode: ScoringMode::Weighted,
            top_k: 2,
        };
        let prefs = Preferences::default();
        let rec = recommend(&questions, &catalog(), &answers, &prefs, &config).unwrap();

        assert_eq!(rec.traits.get(Trait::M), 1.0);
        assert_eq!(rec.standings.len(), 3);
        assert_eq!(rec.top().len(), 2);
        assert_eq!(rec.explanations.len(), 2);
        assert_eq!(rec.standings[0].career_name, "Data Analyst");
        assert_eq!(rec.standings[0].rank, 1);
        assert_eq!(rec.explanations[0].career_name, "Data Analyst");
        assert_eq!(rec.standings[2].rank, 3);
    }

    #[test]
    fn test_recommend_clamps_top_k() {
        let (questions, answers) = survey();
        for requested in [-1, 0, 99] {
            let config = ScoringConfig {
                mode: ScoringMode::Cosine,
                top_k: requested,
            };
            let prefs = Preferences::default();
            let rec = recommend(&questions, &catalog(), &answers, &prefs, &config).unwrap();
            let expected = if requested > 0 { 3 } else { 1 };
            assert_eq!(rec.top().len(), expected);
        }
    }

    #[test]
    fn test_recommend_rejects_bad_input_before_scoring() {
        let (questions, mut answers) = survey();
        answers.insert(1, 7);
        let mut careers = catalog();
        careers.push(career("Designer", &[]));

        let errors = recommend(
            &questions,
            &careers,
            &answers,
            &Preferences::default(),
            &ScoringConfig::default(),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_constant_scores_rank_alphabetically() {
        let (questions, answers) = survey();
        let careers = vec![
            career("Data Analyst", &[("M", 0.4)]),
            career("Biologist", &[("M", 0.4)]),
        ];
        let rec = recommend(
            &questions,
            &careers,
            &answers,
            &Preferences::default(),
            &ScoringConfig::default(),
        )
        .unwrap();

        assert_eq!(rec.standings[0].career_name, "Biologist");
        assert!(rec.standings.iter().all(|r| r.normalized_score == 1.0));
    }
}
