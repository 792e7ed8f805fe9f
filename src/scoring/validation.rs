use std::collections::HashSet;
use thiserror::Error;

use crate::catalog::Career;
use crate::survey::{Answers, PreferenceKey, Preferences, Question, Trait, LIKERT_MAX, LIKERT_MIN};

/// Malformed run input. Any of these aborts the run before scoring starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("questions: at least one question is required")]
    NoQuestions,

    #[error("careers: at least one career is required")]
    NoCareers,

    #[error("question {0}: duplicate id")]
    DuplicateQuestion(u32),

    #[error("question {id}: unknown trait '{label}' (expected one of E, C, O, A, N, M)")]
    UnknownQuestionTrait { id: u32, label: String },

    #[error("career '{0}': duplicate name")]
    DuplicateCareer(String),

    #[error("career '{career}': unknown trait key '{label}' in weights")]
    UnknownWeightTrait { career: String, label: String },

    #[error("career '{career}': weight {label}={value} is outside -1..1")]
    WeightOutOfRange {
        career: String,
        label: String,
        value: f64,
    },

    #[error("{owner}: preference {key}={value} is outside 0..1")]
    PreferenceOutOfRange {
        owner: String,
        key: &'static str,
        value: f64,
    },

    #[error("answer for question {id}: {value} is outside the 1-5 scale")]
    LikertOutOfRange { id: u32, value: i64 },

    #[error("answer references unknown question {0}")]
    UnknownQuestion(u32),

    #[error("question {0}: no answer given")]
    MissingAnswer(u32),
}

fn check_questions(questions: &[Question], errors: &mut Vec<ValidationError>) {
    if questions.is_empty() {
        errors.push(ValidationError::NoQuestions);
    }

    let mut seen = HashSet::new();
    for q in questions {
        if !seen.insert(q.id) {
            errors.push(ValidationError::DuplicateQuestion(q.id));
        }
        if q.trait_kind().is_none() {
            errors.push(ValidationError::UnknownQuestionTrait {
                id: q.id,
                label: q.trait_label.clone(),
            });
        }
    }
}

fn check_preferences(owner: &str, prefs: &Preferences, errors: &mut Vec<ValidationError>) {
    for key in PreferenceKey::ALL {
        let value = prefs.get(key);
        if !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::PreferenceOutOfRange {
                owner: owner.to_string(),
                key: key.key(),
                value,
            });
        }
    }
}

fn check_careers(careers: &[Career], errors: &mut Vec<ValidationError>) {
    if careers.is_empty() {
        errors.push(ValidationError::NoCareers);
    }

    let mut seen = HashSet::new();
    for career in careers {
        if !seen.insert(career.name.as_str()) {
            errors.push(ValidationError::DuplicateCareer(career.name.clone()));
        }
        for (label, &value) in &career.weights {
            if Trait::from_label(label).is_none() {
                errors.push(ValidationError::UnknownWeightTrait {
                    career: career.name.clone(),
                    label: label.clone(),
                });
            } else if !(-1.0..=1.0).contains(&value) {
                errors.push(ValidationError::WeightOutOfRange {
                    career: career.name.clone(),
                    label: label.clone(),
                    value,
                });
            }
        }
        check_preferences(&format!("career '{}'", career.name), &career.preferences, errors);
    }
}

fn check_answers(questions: &[Question], answers: &Answers, errors: &mut Vec<ValidationError>) {
    let known: HashSet<u32> = questions.iter().map(|q| q.id).collect();

    for (&id, &value) in answers {
        if !known.contains(&id) {
            errors.push(ValidationError::UnknownQuestion(id));
        } else if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            errors.push(ValidationError::LikertOutOfRange { id, value });
        }
    }

    for q in questions {
        if !answers.contains_key(&q.id) {
            errors.push(ValidationError::MissingAnswer(q.id));
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate loaded questions and careers at startup, before any answers are collected.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(
    questions: &[Question],
    careers: &[Career],
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_questions(questions, &mut errors);
    check_careers(careers, &mut errors);
    into_result(errors)
}

/// Validate a completed survey against its questions.
pub fn validate_survey(
    questions: &[Question],
    answers: &Answers,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_questions(questions, &mut errors);
    check_answers(questions, answers, &mut errors);
    into_result(errors)
}

/// Single validation pass over everything a run consumes.
pub fn validate_inputs(
    questions: &[Question],
    careers: &[Career],
    answers: &Answers,
    preferences: &Preferences,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_questions(questions, &mut errors);
    check_careers(careers, &mut errors);
    check_answers(questions, answers, &mut errors);
    check_preferences("preferences", preferences, &mut errors);
    into_result(errors)
}
