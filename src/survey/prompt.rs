use anyhow::Result;
use std::io::{BufRead, Write};

use super::types::{Answers, PreferenceKey, Preferences, Question, LIKERT_MAX, LIKERT_MIN};
use crate::prompt::ask_in_range;

/// Map a 1-5 answer onto the 0..1 preference scale.
pub fn likert_to_unit(value: i64) -> f64 {
    (value - LIKERT_MIN) as f64 / (LIKERT_MAX - LIKERT_MIN) as f64
}

fn preference_statement(key: PreferenceKey) -> &'static str {
    match key {
        PreferenceKey::Salary => "I value high salary",
        PreferenceKey::Stability => "I value job stability",
        PreferenceKey::Creativity => "I value creativity",
        PreferenceKey::Social => "I enjoy frequent social interaction",
    }
}

pub fn print_intro<W: Write>(output: &mut W) -> Result<()> {
    let rule = "=".repeat(72);
    writeln!(output, "{}", rule)?;
    writeln!(output, " Career Match ")?;
    writeln!(output, "{}", rule)?;
    writeln!(
        output,
        "Answer a short personality survey. We'll recommend careers with reasons.\n"
    )?;
    Ok(())
}

/// Ask the four preference statements and rescale the answers to 0..1.
pub fn collect_preferences<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Preferences> {
    writeln!(output, "Before we start, tell us what you value more.")?;
    let mut prefs = Preferences::default();
    for key in PreferenceKey::ALL {
        let value = ask_in_range(input, output, preference_statement(key), LIKERT_MIN, LIKERT_MAX)?;
        prefs.set(key, likert_to_unit(value));
    }
    Ok(prefs)
}

/// Ask every question once, in file order.
pub fn take_survey<R: BufRead, W: Write>(
    questions: &[Question],
    input: &mut R,
    output: &mut W,
) -> Result<Answers> {
    writeln!(
        output,
        "\nSurvey begins. Rate each statement 1 (Strongly Disagree) to 5 (Strongly Agree).\n"
    )?;
    let mut answers = Answers::new();
    for (i, question) in questions.iter().enumerate() {
        let message = format!("{:>2}. {}", i + 1, question.text);
        let value = ask_in_range(input, output, &message, LIKERT_MIN, LIKERT_MAX)?;
        answers.insert(question.id, value);
    }
    tracing::info!(answered = answers.len(), "survey completed");
    Ok(answers)
}
