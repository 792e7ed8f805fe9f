use std::cmp::Ordering;

use super::tables::{improvement_tip, strength_effect};
use crate::catalog::Career;
use crate::survey::{Preferences, Trait, TraitVector};

/// Why a career was recommended, and what to work on.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub career_name: String,
    /// The two traits contributing most to the score, best first.
    pub strengths: [String; 2],
    pub watch_out: String,
    pub tip: String,
    /// Present when the career rewards what the user values most.
    pub preference_note: Option<String>,
}

/// Signed contribution of a single trait to a career's weighted score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub trait_kind: Trait,
    pub value: f64,
}

/// Higher contribution first; equal contributions in alphabetical label order.
fn by_contribution_desc(a: &Contribution, b: &Contribution) -> Ordering {
    b.value
        .partial_cmp(&a.value)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.trait_kind.label().cmp(b.trait_kind.label()))
}

/// `traits[t] * weights[t]` for all six traits, strongest first.
pub fn contributions(traits: &TraitVector, career: &Career) -> Vec<Contribution> {
    let mut all: Vec<Contribution> = Trait::ALL
        .into_iter()
        .map(|t| Contribution {
            trait_kind: t,
            value: traits.get(t) * career.weight(t),
        })
        .collect();
    all.sort_by(by_contribution_desc);
    all
}

fn strength_sentence(c: &Contribution) -> String {
    format!(
        "{}: {} (contribution {:+.2}).",
        c.trait_kind.name(),
        strength_effect(c.trait_kind),
        c.value
    )
}

fn watch_out_sentence(c: &Contribution) -> String {
    if c.value <= 0.0 {
        format!(
            "{} is relatively weaker or pulls against this role's weighting (contribution {:+.2}).",
            c.trait_kind.name(),
            c.value
        )
    } else {
        format!(
            "{} still has room to grow for this role (contribution {:+.2}).",
            c.trait_kind.name(),
            c.value
        )
    }
}

/// Note shared priorities: the user's strongest preference is one the
/// career also rates above neutral.
fn preference_note(user: &Preferences, career: &Career) -> Option<String> {
    let key = user.strongest();
    if user.get(key) > 0.5 && career.preferences.get(key) > 0.5 {
        Some(format!(
            "This career values {}, which matches what you said matters most to you.",
            key.describe()
        ))
    } else {
        None
    }
}

/// Build the explanation for one recommended career.
///
/// Strengths are the two highest contributions even when they are not
/// positive. The watch-out is the lowest contribution among the remaining
/// four traits, with alphabetical order breaking ties. This is the overall
/// lowest contribution except when a strength ties with it (e.g. all
/// contributions equal); the watch-out then never repeats a strength.
pub fn explain(career: &Career, traits: &TraitVector, user_prefs: &Preferences) -> Explanation {
    let ranked = contributions(traits, career);
    let (top, rest) = ranked.split_at(2);

    let weakest = rest
        .iter()
        .min_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.trait_kind.label().cmp(b.trait_kind.label()))
        })
        .copied()
        .unwrap_or(top[1]);

    Explanation {
        career_name: career.name.clone(),
        strengths: [strength_sentence(&top[0]), strength_sentence(&top[1])],
        watch_out: watch_out_sentence(&weakest),
        tip: improvement_tip(weakest.trait_kind).to_string(),
        preference_note: preference_note(user_prefs, career),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn career(weights: &[(&str, f64)], preferences: Preferences) -> Career {
        Career {
            name: "Data Analyst".to_string(),
            weights: weights
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            preferences,
            desc: "Turns data into decisions".to_string(),
        }
    }

    fn analyst() -> Career {
        career(
            &[
                ("M", 0.4),
                ("C", 0.3),
                ("O", 0.15),
                ("E", 0.05),
                ("A", 0.05),
                ("N", -0.05),
            ],
            Preferences::default(),
        )
    }

    #[test]
    fn test_strengths_are_top_two_contributions() {
        // E, C, O, A, N, M
        let traits = TraitVector::from_values([0.5, 0.8, 0.2, 0.5, 1.0, 1.0]);
        let explanation = explain(&analyst(), &traits, &Preferences::default());

        assert_eq!(explanation.career_name, "Data Analyst");
        assert!(explanation.strengths[0].starts_with("Analytical mindset"));
        assert!(explanation.strengths[0].contains("+0.40"));
        assert!(explanation.strengths[1].starts_with("Conscientiousness"));
    }

    #[test]
    fn test_watch_out_is_most_negative() {
        let traits = TraitVector::from_values([0.5, 0.8, 0.2, 0.5, 1.0, 1.0]);
        let explanation = explain(&analyst(), &traits, &Preferences::default());

        assert!(explanation.watch_out.starts_with("Emotional stability"));
        assert!(explanation.watch_out.contains("pulls against"));
        assert_eq!(explanation.tip, improvement_tip(Trait::N));
    }

    #[test]
    fn test_watch_out_when_nothing_negative() {
        let c = career(
            &[
                ("M", 0.4),
                ("C", 0.3),
                ("O", 0.2),
                ("E", 0.1),
                ("A", 0.1),
                ("N", 0.1),
            ],
            Preferences::default(),
        );
        let traits = TraitVector::from_values([1.0; 6]);
        let explanation = explain(&c, &traits, &Preferences::default());

        // E, A and N tie at +0.10; A is first alphabetically
        assert!(explanation.watch_out.starts_with("Agreeableness"));
        assert!(explanation.watch_out.contains("room to grow"));
        assert_eq!(explanation.tip, improvement_tip(Trait::A));
    }

    #[test]
    fn test_all_zero_contributions_use_alphabetical_order() {
        let traits = TraitVector::default();
        let explanation = explain(&analyst(), &traits, &Preferences::default());

        assert!(explanation.strengths[0].starts_with("Agreeableness"));
        assert!(explanation.strengths[1].starts_with("Conscientiousness"));
        assert!(explanation.watch_out.starts_with("Extraversion"));
    }

    #[test]
    fn test_contribution_ties_sorted_by_label() {
        let c = career(&[("O", 0.5), ("A", 0.5)], Preferences::default());
        let traits = TraitVector::from_values([1.0; 6]);
        let ranked = contributions(&traits, &c);
        assert_eq!(ranked[0].trait_kind, Trait::A);
        assert_eq!(ranked[1].trait_kind, Trait::O);
    }

    #[test]
    fn test_preference_note_when_priorities_match() {
        let user = Preferences {
            salary: 0.25,
            stability: 1.0,
            creativity: 0.5,
            social: 0.0,
        };
        let c = career(
            &[("C", 0.5)],
            Preferences {
                stability: 0.9,
                ..Preferences::default()
            },
        );
        let explanation = explain(&c, &TraitVector::from_values([0.5; 6]), &user);
        let note = explanation.preference_note.unwrap();
        assert!(note.contains("stability"));
    }

    #[test]
    fn test_no_preference_note_for_neutral_user() {
        let traits = TraitVector::from_values([0.5; 6]);
        let explanation = explain(&analyst(), &traits, &Preferences::default());
        assert!(explanation.preference_note.is_none());
    }
}
