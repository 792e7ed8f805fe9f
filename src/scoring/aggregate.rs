use super::validation::{validate_survey, ValidationError};
use crate::survey::{Answers, Question, Trait, TraitVector, LIKERT_MAX, LIKERT_MIN};

/// Turn a completed survey into a trait vector.
///
/// Each answer is reverse-scored where needed, averaged per trait and
/// rescaled from the 1-5 Likert range to 0..1. A trait with no questions is
/// scored 0 and reported through [`TraitVector::unscored`].
pub fn aggregate_traits(
    questions: &[Question],
    answers: &Answers,
) -> Result<TraitVector, Vec<ValidationError>> {
    validate_survey(questions, answers)?;
    Ok(aggregate_validated(questions, answers))
}

/// Aggregation for input that already passed validation.
pub(crate) fn aggregate_validated(questions: &[Question], answers: &Answers) -> TraitVector {
    let mut sums = [0.0_f64; 6];
    let mut counts = [0_u32; 6];

    for q in questions {
        let (Some(t), Some(&value)) = (q.trait_kind(), answers.get(&q.id)) else {
            continue;
        };
        sums[t.index()] += q.effective_value(value) as f64;
        counts[t.index()] += 1;
    }

    let span = (LIKERT_MAX - LIKERT_MIN) as f64;
    let mut vector = TraitVector::default();
    for t in Trait::ALL {
        let i = t.index();
        if counts[i] == 0 {
            tracing::warn!(%t, name = t.name(), "no questions measure this trait; scoring it as 0");
            vector.mark_unscored(t);
            continue;
        }
        let mean = sums[i] / counts[i] as f64;
        vector.set(t, (mean - LIKERT_MIN as f64) / span);
    }
    vector
}
