pub mod formatter;

pub use formatter::{
    format_explanation, format_history, format_score, format_standings, format_summary,
    format_traits, format_tsv, should_use_colors,
};
