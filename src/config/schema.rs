use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::{ScoringConfig, ScoringMode, DEFAULT_TOP_K};

/// Application configuration.
///
/// Example YAML:
/// ```yaml
/// mode: cosine
/// top_k: 5
/// report_dir: reports
/// data_dir: data
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scoring strategy: "weighted" or "cosine"
    pub mode: ScoringMode,

    /// Number of recommendations to show; clamped to [1, careers]
    pub top_k: i64,

    /// Where report.txt and history.csv are written
    pub report_dir: PathBuf,

    /// Directory holding questions.json and careers.json
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Weighted,
            top_k: DEFAULT_TOP_K,
            report_dir: PathBuf::from("reports"),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// The part of the configuration the scoring engine consumes.
    pub fn scoring(&self) -> ScoringConfig {
        ScoringConfig {
            mode: self.mode,
            top_k: self.top_k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode, ScoringMode::Weighted);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.report_dir, PathBuf::from("reports"));
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            mode: ScoringMode::Cosine,
            top_k: 5,
            report_dir: PathBuf::from("out"),
            data_dir: PathBuf::from("/srv/career-data"),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
mode: cosine
top_k: 0
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.mode, ScoringMode::Cosine);
        assert_eq!(config.top_k, 0);
        assert_eq!(config.report_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []");
        assert!(result.is_err());
    }

    #[test]
    fn test_scoring_view() {
        let config = Config {
            top_k: -2,
            ..Config::default()
        };
        let scoring = config.scoring();
        assert_eq!(scoring.mode, ScoringMode::Weighted);
        assert_eq!(scoring.top_k, -2);
    }
}
