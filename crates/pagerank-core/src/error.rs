//! Error types for pagerank

use thiserror::Error;

/// Result type alias using RankError
pub type Result<T> = std::result::Result<T, RankError>;

/// Error type alias for convenience
pub type Error = RankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for pagerank
#[derive(Debug, Error)]
pub enum RankError {
    #[error("graph has no pages; cannot divide rank among zero nodes")]
    EmptyGraph,

    #[error("Page not found in graph: {0}")]
    UnknownPage(String),

    #[error("Invalid damping factor {value}: must lie in {range}")]
    InvalidDamping { value: f64, range: &'static str },

    #[error("Invalid sample count {0}: at least one sample is required")]
    InvalidSampleCount(usize),

    #[error("Invalid convergence tolerance {0}: must be a finite number no smaller than 1e-12")]
    InvalidTolerance(f64),

    #[error("Sampling error: {0}")]
    Sampling(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPage(_) => exit_codes::NOT_FOUND,
            Self::Io(err) if err.kind() == std::io::ErrorKind::NotFound => exit_codes::NOT_FOUND,
            Self::WalkDir(err)
                if err.io_error().map(std::io::Error::kind) == Some(std::io::ErrorKind::NotFound) =>
            {
                exit_codes::NOT_FOUND
            }
            Self::EmptyGraph
            | Self::InvalidDamping { .. }
            | Self::InvalidSampleCount(_)
            | Self::InvalidTolerance(_)
            | Self::GlobPattern(_)
            | Self::Yaml(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
