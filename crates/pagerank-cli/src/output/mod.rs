//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use pagerank_core::RankVector;

/// Results of both estimators for one corpus
#[derive(Debug)]
pub struct RankReport {
    pub samples: usize,
    pub sampled: RankVector,
    pub rounds: usize,
    pub iterated: RankVector,
}

/// Format a ranking report
pub fn format_report(report: &RankReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Cli => Ok(terminal::format_report(report)),
    }
}
