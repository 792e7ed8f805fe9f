pub mod prompt;
pub mod types;

pub use prompt::{collect_preferences, likert_to_unit, print_intro, take_survey};
pub use types::{
    Answers, PreferenceKey, Preferences, Question, Trait, TraitVector, LIKERT_MAX, LIKERT_MIN,
};
