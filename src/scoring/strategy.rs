use crate::catalog::TraitWeights;
use crate::survey::TraitVector;

/// Raw compatibility between a person's traits and a career's weights.
///
/// The range depends on the implementation; scores are only comparable
/// between careers scored by the same scorer in the same run.
pub trait Scorer {
    fn score(&self, traits: &TraitVector, weights: &TraitWeights) -> f64;
}

fn dot(traits: &TraitVector, weights: &TraitWeights) -> f64 {
    weights.iter().map(|(t, w)| traits.get(t) * w).sum()
}

/// Sum of trait value times weight over the six traits.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScorer;

impl Scorer for WeightedScorer {
    fn score(&self, traits: &TraitVector, weights: &TraitWeights) -> f64 {
        dot(traits, weights)
    }
}

/// Cosine of the angle between traits and weights, in [-1, 1].
///
/// A zero vector on either side scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineScorer;

impl Scorer for CosineScorer {
    fn score(&self, traits: &TraitVector, weights: &TraitWeights) -> f64 {
        let denom = traits.magnitude() * weights.magnitude();
        if denom == 0.0 {
            return 0.0;
        }
        dot(traits, weights) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // E, C, O, A, N, M
    fn analyst_weights() -> TraitWeights {
        TraitWeights::from_values([0.05, 0.3, 0.15, 0.05, -0.05, 0.4])
    }

    #[test]
    fn test_weighted_score() {
        let traits = TraitVector::from_values([0.0, 0.8, 0.0, 0.0, 0.0, 1.0]);
        let score = WeightedScorer.score(&traits, &analyst_weights());
        assert!((score - 0.64).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_missing_weights_are_zero() {
        let traits = TraitVector::from_values([1.0; 6]);
        let weights = TraitWeights::from_values([0.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(WeightedScorer.score(&traits, &weights), 0.5);
    }

    #[test]
    fn test_cosine_parallel_vectors() {
        let traits = TraitVector::from_values([0.2, 0.4, 0.0, 0.0, 0.0, 0.0]);
        let weights = TraitWeights::from_values([0.1, 0.2, 0.0, 0.0, 0.0, 0.0]);
        assert!((CosineScorer.score(&traits, &weights) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let traits = TraitVector::from_values([0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let weights = TraitWeights::from_values([0.0, 0.0, 0.0, 0.0, -0.3, 0.0]);
        assert!((CosineScorer.score(&traits, &weights) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_weights() {
        let traits = TraitVector::from_values([0.3, 0.9, 0.1, 0.5, 0.5, 0.7]);
        let zero = TraitWeights::default();
        assert_eq!(CosineScorer.score(&traits, &zero), 0.0);
    }

    #[test]
    fn test_cosine_zero_traits() {
        let traits = TraitVector::default();
        assert_eq!(CosineScorer.score(&traits, &analyst_weights()), 0.0);
    }
}
