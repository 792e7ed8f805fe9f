mod history;
mod writer;

pub use history::{append_history, read_history, HistoryEntry, HISTORY_FILE};
pub use writer::{render_report, write_report, REPORT_FILE};
