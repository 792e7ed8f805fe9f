use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::explain::Explanation;
use crate::report::HistoryEntry;
use crate::scoring::{Recommendation, ScoreRecord};
use crate::survey::{Trait, TraitVector};

/// Widest trait bar, in cells, for a score of 1.0.
const MAX_BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Format a 0..1-ish score with three decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Bar of `value * width` blocks, clamped to the bar width.
fn trait_bar(value: f64, width: usize) -> String {
    let cells = (value.clamp(0.0, 1.0) * width as f64) as usize;
    "█".repeat(cells)
}

/// One line per trait: label, value and a proportional bar.
///
/// Bars shrink on narrow terminals; traits without questions are marked.
pub fn format_traits(traits: &TraitVector, use_colors: bool) -> String {
    // "  E: 0.50 " prefix is 10 cells
    let bar_width = get_terminal_width()
        .map(|w| w.saturating_sub(12).min(MAX_BAR_WIDTH))
        .unwrap_or(MAX_BAR_WIDTH);

    traits
        .iter()
        .map(|(t, value)| {
            let bar = trait_bar(value, bar_width);
            let note = if traits.unscored().contains(&t) {
                "  (no questions)"
            } else {
                ""
            };
            if use_colors {
                format!(
                    "  {}: {:.2} {}{}",
                    t.label().bold(),
                    value,
                    bar.cyan(),
                    note.dimmed()
                )
            } else {
                format!("  {}: {:.2} {}{}", t.label(), value, bar, note)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format records as a ranked table: rank, final score, career name.
/// Rank column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 6 chars wide (fits "1.100")
pub fn format_standings(records: &[ScoreRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No careers scored.".to_string();
    }

    let term_width = get_terminal_width();
    let score_width = 6;
    let separator = "  ";
    let fixed_width = 3 + 1 + score_width + separator.len();

    records
        .iter()
        .map(|record| {
            let index_str = format!("{:>2}.", record.rank);
            let score_padded = format!(
                "{:>width$}",
                format_score(record.final_score),
                width = score_width
            );
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&record.career_name, width - fixed_width)
                }
                // Very narrow terminal, show truncated
                Some(_) => truncate_name(&record.career_name, 20),
                // No terminal (pipe), don't truncate
                None => record.career_name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name
                )
            } else {
                format!("{} {}{}{}", index_str, score_padded, separator, name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one recommendation with its reasons (multi-line).
pub fn format_explanation(
    record: &ScoreRecord,
    explanation: &Explanation,
    use_colors: bool,
) -> String {
    let header = format!(
        "{}. {} -- normalized score {}",
        record.rank,
        record.career_name,
        format_score(record.normalized_score)
    );
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for strength in &explanation.strengths {
        lines.push(format!("     + {}", strength));
    }
    let watch = format!("     ! {}", explanation.watch_out);
    lines.push(if use_colors {
        watch.yellow().to_string()
    } else {
        watch
    });
    lines.push(format!("     Tip: {}", explanation.tip));
    if let Some(note) = &explanation.preference_note {
        lines.push(format!("     {}", note));
    }
    lines.join("\n")
}

/// Full terminal summary of a run.
pub fn format_summary(rec: &Recommendation, use_colors: bool) -> String {
    let mut sections = Vec::new();
    sections.push(format!("Scoring mode = {}", rec.mode));
    sections.push(format!(
        "Your trait scores (0-1 scaled):\n{}",
        format_traits(&rec.traits, use_colors)
    ));

    let top = rec
        .top()
        .iter()
        .zip(&rec.explanations)
        .map(|(record, explanation)| {
            format!("  {}", format_explanation(record, explanation, use_colors))
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    sections.push(format!("Top Recommendations:\n{}", top));
    sections.push(format!(
        "All careers:\n{}",
        format_standings(&rec.standings, use_colors)
    ));

    sections.push(
        "(Higher scores indicate a better match; normalized scores are 0..1.)".to_string(),
    );
    sections.join("\n\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: rank, career, raw, normalized, boost, final (no headers, no colors)
pub fn format_tsv(records: &[ScoreRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
                r.rank,
                r.career_name,
                r.raw_score,
                r.normalized_score,
                r.tie_break_boost,
                r.final_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per recorded run: timestamp, mode, trait values and top careers.
pub fn format_history(entries: &[HistoryEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No runs recorded yet.".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let traits = Trait::ALL
                .iter()
                .zip(entry.traits)
                .map(|(t, v)| format!("{}={:.2}", t.label(), v))
                .collect::<Vec<_>>()
                .join(" ");
            let top = if entry.top.is_empty() {
                "-".to_string()
            } else {
                entry.top.join(", ")
            };
            if use_colors {
                format!(
                    "{}  {:<8}  {}  {}",
                    entry.timestamp.dimmed(),
                    entry.mode,
                    traits,
                    top.bold()
                )
            } else {
                format!("{}  {:<8}  {}  {}", entry.timestamp, entry.mode, traits, top)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
