use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Likert answers keyed by question id.
///
/// Values are kept as plain integers so out-of-scale input survives until
/// validation can report it.
pub type Answers = BTreeMap<u32, i64>;

/// Lowest and highest point of the Likert scale.
pub const LIKERT_MIN: i64 = 1;
pub const LIKERT_MAX: i64 = 5;

/// One of the six personality dimensions measured by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trait {
    E,
    C,
    O,
    A,
    N,
    M,
}

impl Trait {
    /// All traits in survey order (the order used for reports and history rows).
    pub const ALL: [Trait; 6] = [Trait::E, Trait::C, Trait::O, Trait::A, Trait::N, Trait::M];

    /// Single-letter label as it appears in data files.
    pub fn label(self) -> &'static str {
        match self {
            Trait::E => "E",
            Trait::C => "C",
            Trait::O => "O",
            Trait::A => "A",
            Trait::N => "N",
            Trait::M => "M",
        }
    }

    /// Human-readable name used in explanations.
    pub fn name(self) -> &'static str {
        match self {
            Trait::E => "Extraversion (social expression)",
            Trait::C => "Conscientiousness (planning & execution)",
            Trait::O => "Openness (creativity & novelty)",
            Trait::A => "Agreeableness (collaboration & empathy)",
            Trait::N => "Emotional stability (stress tolerance)",
            Trait::M => "Analytical mindset (logic & abstraction)",
        }
    }

    /// Parse a data-file label. Labels must match exactly: case-sensitive,
    /// no surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        Trait::ALL.into_iter().find(|t| t.label() == label)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single survey statement.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    /// Raw trait label from the data file; checked by validation.
    #[serde(rename = "trait")]
    pub trait_label: String,
    #[serde(default)]
    pub reverse: bool,
}

impl Question {
    pub fn trait_kind(&self) -> Option<Trait> {
        Trait::from_label(&self.trait_label)
    }

    /// Likert value after reverse scoring (`6 - v` for reversed items).
    pub fn effective_value(&self, value: i64) -> i64 {
        if self.reverse {
            LIKERT_MIN + LIKERT_MAX - value
        } else {
            value
        }
    }
}

/// The four things a person can say they value in a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Salary,
    Stability,
    Creativity,
    Social,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        PreferenceKey::Salary,
        PreferenceKey::Stability,
        PreferenceKey::Creativity,
        PreferenceKey::Social,
    ];

    /// Key as written in data and answer files.
    pub fn key(self) -> &'static str {
        match self {
            PreferenceKey::Salary => "salary",
            PreferenceKey::Stability => "stability",
            PreferenceKey::Creativity => "creativity",
            PreferenceKey::Social => "social",
        }
    }

    /// Wording used in explanations.
    pub fn describe(self) -> &'static str {
        match self {
            PreferenceKey::Salary => "compensation",
            PreferenceKey::Stability => "stability",
            PreferenceKey::Creativity => "creativity",
            PreferenceKey::Social => "social interaction",
        }
    }
}

/// Preference profile on a 0..1 scale. Used both for what the user values and
/// for what a career offers. Unspecified entries default to 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    pub salary: f64,
    pub stability: f64,
    pub creativity: f64,
    pub social: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            salary: 0.5,
            stability: 0.5,
            creativity: 0.5,
            social: 0.5,
        }
    }
}

impl Preferences {
    pub fn get(&self, key: PreferenceKey) -> f64 {
        match key {
            PreferenceKey::Salary => self.salary,
            PreferenceKey::Stability => self.stability,
            PreferenceKey::Creativity => self.creativity,
            PreferenceKey::Social => self.social,
        }
    }

    pub fn set(&mut self, key: PreferenceKey, value: f64) {
        match key {
            PreferenceKey::Salary => self.salary = value,
            PreferenceKey::Stability => self.stability = value,
            PreferenceKey::Creativity => self.creativity = value,
            PreferenceKey::Social => self.social = value,
        }
    }

    /// Highest-valued key; the earliest key in `PreferenceKey::ALL` wins ties.
    pub fn strongest(&self) -> PreferenceKey {
        PreferenceKey::ALL
            .into_iter()
            .fold(PreferenceKey::Salary, |best, key| {
                if self.get(key) > self.get(best) {
                    key
                } else {
                    best
                }
            })
    }
}

/// Per-trait scores in [0, 1] computed from a completed survey.
///
/// Every trait always has a value. Traits that no question measured are
/// scored 0 and listed in [`TraitVector::unscored`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraitVector {
    values: [f64; 6],
    unscored: Vec<Trait>,
}

impl TraitVector {
    /// Build a vector from values in `Trait::ALL` order.
    pub fn from_values(values: [f64; 6]) -> Self {
        Self {
            values,
            unscored: Vec::new(),
        }
    }

    pub fn get(&self, t: Trait) -> f64 {
        self.values[t.index()]
    }

    pub fn set(&mut self, t: Trait, value: f64) {
        self.values[t.index()] = value;
    }

    pub(crate) fn mark_unscored(&mut self, t: Trait) {
        self.values[t.index()] = 0.0;
        if !self.unscored.contains(&t) {
            self.unscored.push(t);
        }
    }

    /// Traits that had no question and were defaulted to 0.
    pub fn unscored(&self) -> &[Trait] {
        &self.unscored
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    pub fn magnitude(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}
