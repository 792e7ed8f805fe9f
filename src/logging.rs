use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `debug`
/// or `career_match::scoring=trace`.
pub const LOG_ENV: &str = "CAREER_MATCH_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the summary and `--tsv` output. Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
