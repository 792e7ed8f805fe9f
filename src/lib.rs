pub mod catalog;
pub mod config;
pub mod explain;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod report;
pub mod scoring;
pub mod survey;
