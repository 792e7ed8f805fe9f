use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::{get_config_path, Config};
use crate::prompt::{prompt_with_default, prompt_yes_no};
use crate::scoring::ScoringMode;

const CONFIG_HEADER: &str = "# career-match configuration\n# mode: weighted | cosine\n";

/// Serialize `config` to YAML and write it atomically, creating parent directories.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(CONFIG_HEADER.as_bytes())
        .and_then(|_| file.write_all(yaml.as_bytes()))
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    tracing::info!(path = %path.display(), "config written");
    Ok(())
}

fn parse_mode(s: &str) -> Option<ScoringMode> {
    match s.trim().to_lowercase().as_str() {
        "weighted" => Some(ScoringMode::Weighted),
        "cosine" => Some(ScoringMode::Cosine),
        _ => None,
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, it is offered as the config file location.
/// Otherwise the default config path is offered. Returns the path written,
/// or None if the user declined to overwrite an existing file.
pub fn run_init_wizard<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_path: Option<PathBuf>,
    force: bool,
) -> Result<Option<PathBuf>> {
    let defaults = Config::default();

    writeln!(output)?;
    writeln!(output, "Career Match Configuration Wizard")?;
    writeln!(output, "=================================")?;
    writeln!(output)?;

    writeln!(output, "Scoring mode decides how your traits are compared with each career.")?;
    writeln!(output, "  weighted -- sum of trait x weight; rewards strong matching traits")?;
    writeln!(output, "  cosine   -- compares the shape of your profile with the career's")?;
    let mode = loop {
        let answer = prompt_with_default(input, output, "Scoring mode", defaults.mode.as_str())?;
        match parse_mode(&answer) {
            Some(mode) => break mode,
            None => writeln!(output, "  Invalid: expected 'weighted' or 'cosine'. Try again.")?,
        }
    };

    writeln!(output)?;
    let top_k = loop {
        let answer = prompt_with_default(
            input,
            output,
            "How many recommendations to show",
            &defaults.top_k.to_string(),
        )?;
        match answer.parse::<i64>() {
            Ok(v) if v >= 1 => break v,
            Ok(_) => writeln!(output, "  Invalid: must be at least 1. Try again.")?,
            Err(_) => writeln!(output, "  Invalid: must be a whole number. Try again.")?,
        }
    };

    writeln!(output)?;
    let data_dir = prompt_with_default(
        input,
        output,
        "Directory with questions.json and careers.json",
        &defaults.data_dir.display().to_string(),
    )?;
    let report_dir = prompt_with_default(
        input,
        output,
        "Directory for reports and history",
        &defaults.report_dir.display().to_string(),
    )?;

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    writeln!(output)?;
    let path_str = prompt_with_default(
        input,
        output,
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() && !force {
        let overwrite = prompt_yes_no(
            input,
            output,
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            writeln!(output, "Aborted.")?;
            return Ok(None);
        }
    }

    let config = Config {
        mode,
        top_k,
        report_dir: PathBuf::from(report_dir),
        data_dir: PathBuf::from(data_dir),
    };
    write_config(&config_path, &config)?;

    writeln!(output)?;
    writeln!(output, "Config written to {}", config_path.display())?;
    writeln!(output, "Run `career-match` to take the survey.")?;
    Ok(Some(config_path))
}
