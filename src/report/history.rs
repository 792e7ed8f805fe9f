use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::scoring::Recommendation;
use crate::survey::Trait;

pub const HISTORY_FILE: &str = "history.csv";

/// Number of career names recorded per run.
const HISTORY_TOP_N: usize = 3;

const HEADER: &str = "timestamp,mode,E,C,O,A,N,M,top1,top2,top3";

/// One recorded run.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub mode: String,
    /// Trait values in `Trait::ALL` order, as recorded (3 decimals).
    pub traits: [f64; 6],
    /// Up to three career names, best first. Empty slots are dropped.
    pub top: Vec<String>,
}

/// Quote a field when it contains a separator, quote or newline.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split one CSV line, honoring double-quoted fields with `""` escapes.
fn split_fields(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if in_quotes {
        anyhow::bail!("unterminated quoted field");
    }
    fields.push(current);
    Ok(fields)
}

fn format_row(rec: &Recommendation, timestamp: DateTime<Utc>) -> String {
    let mut row = vec![timestamp.to_rfc3339(), rec.mode.to_string()];
    row.extend(rec.traits.iter().map(|(_, v)| format!("{:.3}", v)));
    let names = rec
        .standings
        .iter()
        .map(|r| r.career_name.as_str())
        .chain(std::iter::repeat(""))
        .take(HISTORY_TOP_N);
    row.extend(names.map(escape_field));
    row.join(",")
}

/// Append one row for `rec` to the history file, writing the header first
/// when the file is new.
pub fn append_history(path: &Path, rec: &Recommendation, timestamp: DateTime<Utc>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let is_new = !path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open history file at {}", path.display()))?;

    if is_new {
        writeln!(file, "{}", HEADER)
            .with_context(|| format!("Failed to write history header to {}", path.display()))?;
    }
    writeln!(file, "{}", format_row(rec, timestamp))
        .with_context(|| format!("Failed to append history to {}", path.display()))?;

    tracing::info!(path = %path.display(), "history appended");
    Ok(())
}

fn parse_row(line: &str) -> Result<HistoryEntry> {
    let fields = split_fields(line)?;
    if fields.len() != 2 + Trait::ALL.len() + HISTORY_TOP_N {
        anyhow::bail!("expected {} fields, found {}", 2 + 6 + HISTORY_TOP_N, fields.len());
    }

    let mut traits = [0.0; 6];
    for (slot, raw) in traits.iter_mut().zip(&fields[2..8]) {
        *slot = raw
            .parse()
            .with_context(|| format!("invalid trait value '{}'", raw))?;
    }

    Ok(HistoryEntry {
        timestamp: fields[0].clone(),
        mode: fields[1].clone(),
        traits,
        top: fields[8..].iter().filter(|n| !n.is_empty()).cloned().collect(),
    })
}

/// Read every recorded run. A missing file means no history yet.
pub fn read_history(path: &Path) -> Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file at {}", path.display()))?;

    content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_row(line)
                .with_context(|| format!("Malformed row at {}:{}", path.display(), i + 1))
        })
        .collect()
}
