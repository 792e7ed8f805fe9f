use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use career_match::catalog::{load_answer_sheet, load_catalog};
use career_match::config::Config;
use career_match::report::{
    append_history, read_history, render_report, write_report, HISTORY_FILE,
};
use career_match::scoring::{recommend, validate_catalog, ScoringMode, ValidationError};
use career_match::survey::{collect_preferences, print_intro, take_survey};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATA: i32 = 2;
const EXIT_VALIDATION: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the survey interactively (default if no subcommand)
    Survey,
    /// Score a pre-filled answers file without prompting
    Score {
        /// YAML file with `answers` and optional `preferences`
        answers: PathBuf,
    },
    /// Show previously recorded runs
    History,
    /// Create a config file interactively
    Init {
        /// Overwrite an existing config file without asking
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "career-match")]
#[command(about = "Rank careers against a short personality survey", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/career-match/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Scoring strategy, overrides the config file
    #[arg(short, long, global = true, value_enum)]
    mode: Option<ScoringMode>,

    /// Number of recommendations to explain, overrides the config file
    #[arg(short = 'k', long, global = true, allow_negative_numbers = true)]
    top_k: Option<i64>,

    /// Print standings as tab-separated values instead of the summary
    #[arg(long, global = true)]
    tsv: bool,

    /// Do not write report.txt or append to history.csv
    #[arg(long, global = true)]
    no_save: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_with_validation_errors(heading: &str, errors: &[ValidationError]) -> ! {
    eprintln!("{}:", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
    std::process::exit(EXIT_VALIDATION);
}

fn main() {
    let cli = Cli::parse();
    career_match::logging::init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Survey);
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = command {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match career_match::config::run_init_wizard(&mut input, &mut output, config_path, force) {
            Ok(_) => std::process::exit(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config, then apply command-line overrides
    let mut config: Config = match career_match::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(top_k) = cli.top_k {
        config.top_k = top_k;
    }
    let use_colors = career_match::output::should_use_colors();
    let history_path = config.report_dir.join(HISTORY_FILE);

    if let Commands::History = command {
        match read_history(&history_path) {
            Ok(entries) => {
                println!("{}", career_match::output::format_history(&entries, use_colors));
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("History error: {:#}", e);
                std::process::exit(EXIT_DATA);
            }
        }
    }

    let catalog = match load_catalog(&config.data_dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Data error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    };
    if let Err(errors) = validate_catalog(&catalog.questions, &catalog.careers) {
        exit_with_validation_errors("Data file errors", &errors);
    }

    // Gather preferences and answers
    let (preferences, answers) = match command {
        Commands::Score { answers } => match load_answer_sheet(&answers) {
            Ok(sheet) => (sheet.preferences, sheet.answers),
            Err(e) => {
                eprintln!("Answers error: {:#}", e);
                std::process::exit(EXIT_DATA);
            }
        },
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let collected = print_intro(&mut output)
                .and_then(|_| collect_preferences(&mut input, &mut output))
                .and_then(|prefs| {
                    take_survey(&catalog.questions, &mut input, &mut output)
                        .map(|answers| (prefs, answers))
                });
            match collected {
                Ok(pair) => pair,
                Err(e) => {
                    eprintln!("Survey aborted: {:#}", e);
                    std::process::exit(EXIT_ERROR);
                }
            }
        }
    };

    tracing::info!(mode = %config.mode, top_k = config.top_k, "scoring");
    let rec = match recommend(
        &catalog.questions,
        &catalog.careers,
        &answers,
        &preferences,
        &config.scoring(),
    ) {
        Ok(rec) => rec,
        Err(errors) => exit_with_validation_errors("Answer errors", &errors),
    };

    if cli.tsv {
        println!("{}", career_match::output::format_tsv(&rec.standings));
    } else {
        println!();
        println!("{}", career_match::output::format_summary(&rec, use_colors));
    }

    if cli.no_save {
        std::process::exit(EXIT_SUCCESS);
    }

    let now = Utc::now();
    let saved = write_report(&config.report_dir, &render_report(&rec, now))
        .and_then(|path| append_history(&history_path, &rec, now).map(|_| path));
    match saved {
        Ok(path) => {
            // Keep stdout machine-readable in TSV mode
            if cli.tsv {
                eprintln!("Report saved to: {}", path.display());
            } else {
                println!("\nReport saved to: {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Failed to save report: {:#}", e);
            std::process::exit(EXIT_ERROR);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
