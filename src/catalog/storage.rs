use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::types::Career;
use crate::survey::{Answers, Preferences, Question};

pub const QUESTIONS_FILE: &str = "questions.json";
pub const CAREERS_FILE: &str = "careers.json";

/// Questions and careers for one run, as loaded from the data directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub careers: Vec<Career>,
}

/// Pre-filled survey for non-interactive runs.
///
/// Example YAML:
/// ```yaml
/// preferences:
///   salary: 0.8
///   stability: 0.6
/// answers:
///   1: 4
///   2: 2
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnswerSheet {
    #[serde(default)]
    pub preferences: Preferences,
    pub answers: Answers,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open data file at {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    read_json(path)
}

pub fn load_careers(path: &Path) -> Result<Vec<Career>> {
    read_json(path)
}

/// Load `questions.json` and `careers.json` from `data_dir`.
///
/// Only the file shape is checked here; content rules are left to
/// [`crate::scoring::validate_catalog`].
pub fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let questions = load_questions(&data_dir.join(QUESTIONS_FILE))?;
    let careers = load_careers(&data_dir.join(CAREERS_FILE))?;
    tracing::info!(
        questions = questions.len(),
        careers = careers.len(),
        data_dir = %data_dir.display(),
        "catalog loaded"
    );
    Ok(Catalog { questions, careers })
}

pub fn load_answer_sheet(path: &Path) -> Result<AnswerSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;
    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse answers: invalid YAML in {}", path.display()))
}
