use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::survey::{Preferences, Trait};

/// A career as described in the careers data file.
///
/// `name` is the identity of the career and must be unique within a catalog.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Career {
    pub name: String,

    /// Trait label -> weight in [-1, 1]. Missing traits weigh 0.
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,

    /// What the career offers on the four preference axes.
    #[serde(default)]
    pub preferences: Preferences,

    #[serde(default)]
    pub desc: String,
}

impl Career {
    pub fn weight(&self, t: Trait) -> f64 {
        self.weights.get(t.label()).copied().unwrap_or(0.0)
    }

    pub fn trait_weights(&self) -> TraitWeights {
        let mut values = [0.0; 6];
        for (slot, t) in values.iter_mut().zip(Trait::ALL) {
            *slot = self.weight(t);
        }
        TraitWeights { values }
    }
}

/// A career's weights laid out over the six trait dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitWeights {
    values: [f64; 6],
}

impl TraitWeights {
    /// Build weights from values in `Trait::ALL` order.
    pub fn from_values(values: [f64; 6]) -> Self {
        Self { values }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::ALL.into_iter().zip(self.values.iter().copied())
    }

    pub fn magnitude(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_parse_with_defaults() {
        let json = r#"{"name": "Data Analyst", "weights": {"M": 0.4, "C": 0.3}}"#;
        let career: Career = serde_json::from_str(json).unwrap();
        assert_eq!(career.name, "Data Analyst");
        assert_eq!(career.weight(Trait::M), 0.4);
        assert_eq!(career.weight(Trait::E), 0.0);
        assert_eq!(career.preferences, Preferences::default());
        assert!(career.desc.is_empty());
    }

    #[test]
    fn test_trait_weights_follow_trait_order() {
        let json = r#"{"name": "Nurse", "weights": {"A": 0.5, "N": -0.2}}"#;
        let career: Career = serde_json::from_str(json).unwrap();
        let weights: Vec<_> = career.trait_weights().iter().collect();
        assert_eq!(weights[3], (Trait::A, 0.5));
        assert_eq!(weights[4], (Trait::N, -0.2));
        assert_eq!(weights[0], (Trait::E, 0.0));
    }
}
