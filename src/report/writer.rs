use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::output::{format_explanation, format_score, format_traits};
use crate::scoring::Recommendation;

pub const REPORT_FILE: &str = "report.txt";

/// Render the plain-text report for a run (no colors).
///
/// Contains the trait scores, every career's standing and the explained
/// top-K list.
pub fn render_report(rec: &Recommendation, timestamp: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("Career Match Report\n");
    out.push_str("===================\n");
    out.push_str(&format!("Generated: {}\n", timestamp.format("%Y-%m-%d %H:%M:%S UTC")));
    out.push_str(&format!("Scoring mode: {}\n\n", rec.mode));

    out.push_str("Trait scores (0-1 scaled)\n");
    out.push_str(&format_traits(&rec.traits, false));
    out.push_str("\n\n");

    out.push_str("All careers\n");
    out.push_str("rank  final   normalized  raw      boost  career\n");
    for record in &rec.standings {
        out.push_str(&format!(
            "{:>4}  {:<6}  {:<10}  {:<7}  {:<5}  {}\n",
            record.rank,
            format_score(record.final_score),
            format_score(record.normalized_score),
            format_score(record.raw_score),
            format_score(record.tie_break_boost),
            record.career_name
        ));
    }
    out.push('\n');

    out.push_str("Top recommendations\n");
    for (record, explanation) in rec.top().iter().zip(&rec.explanations) {
        out.push_str(&format_explanation(record, explanation, false));
        out.push_str("\n\n");
    }
    out
}

/// Write `content` to `<dir>/report.txt` atomically, creating `dir` if needed.
/// Returns the path written.
pub fn write_report(dir: &Path, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let path = dir.join(REPORT_FILE);
    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    file.commit().context("Failed to save report")?;

    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Career;
    use crate::scoring::{recommend, ScoringConfig};
    use crate::survey::{Answers, Preferences, Question};
    use chrono::TimeZone;

    fn sample_run() -> Recommendation {
        let questions = vec![
            Question {
                id: 1,
                text: "I like puzzles".to_string(),
                trait_label: "M".to_string(),
                reverse: false,
            },
            Question {
                id: 2,
                text: "I enjoy parties".to_string(),
                trait_label: "E".to_string(),
                reverse: false,
            },
        ];
        let careers = vec![
            Career {
                name: "Statistician".to_string(),
                weights: [("M".to_string(), 0.9)].into_iter().collect(),
                preferences: Preferences::default(),
                desc: String::new(),
            },
            Career {
                name: "Event Planner".to_string(),
                weights: [("E".to_string(), 0.9)].into_iter().collect(),
                preferences: Preferences::default(),
                desc: String::new(),
            },
        ];
        let answers: Answers = [(1, 5), (2, 2)].into_iter().collect();
        let config = ScoringConfig {
            top_k: 1,
            ..ScoringConfig::default()
        };
        recommend(&questions, &careers, &answers, &Preferences::default(), &config).unwrap()
    }

    #[test]
    fn test_render_report_sections() {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let report = render_report(&sample_run(), timestamp);

        assert!(report.contains("Generated: 2026-03-01 12:00:00 UTC"));
        assert!(report.contains("Scoring mode: weighted"));
        assert!(report.contains("  M: 1.00"));
        // Full standings list both careers, top-K only the first
        assert!(report.contains("   1  "));
        assert!(report.contains("   2  "));
        let top = report.split("Top recommendations").nth(1).unwrap();
        assert!(top.contains("Statistician"));
        assert!(!top.contains("Event Planner"));
    }

    #[test]
    fn test_write_report_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report_dir = dir.path().join("reports");

        let path = write_report(&report_dir, "hello\n").unwrap();
        assert_eq!(path, report_dir.join(REPORT_FILE));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");

        // Rewrites replace the previous report
        write_report(&report_dir, "again\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "again\n");
    }
}
