//! CLI argument definitions

use anyhow::Result;
use clap::{Parser, ValueEnum};
use pagerank_core::{RankConfig, ScanOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(
    author,
    version,
    about = "Rank the pages of a hyperlinked HTML corpus by sampling and by iteration"
)]
pub struct Cli {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random-walk transitions
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for a reproducible random walk
    #[arg(long)]
    pub seed: Option<u64>,

    /// Per-page convergence tolerance for iteration
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Glob for page file names
    #[arg(long, default_value = "*.html")]
    pub pattern: String,

    /// YAML config file (defaults to the user config directory)
    #[arg(long, env = "PAGERANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Config file values with command-line overrides applied
    pub fn rank_config(&self) -> Result<RankConfig> {
        let mut config = match &self.config {
            Some(path) => RankConfig::load(path)?,
            None => RankConfig::load_default()?,
        };

        if let Some(damping) = self.damping {
            config.damping = damping;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            pattern: self.pattern.clone(),
            ..ScanOptions::default()
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
