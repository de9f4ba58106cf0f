//! PageRank Core Library
//!
//! Ranks the pages of a small hyperlinked corpus by the random-surfer model.
//!
//! # Features
//! - Link graph built from a directory of HTML pages
//! - Transition model with uniform handling of pages without links
//! - Monte Carlo estimate from one long random walk
//! - Iterative estimate by synchronous fixed-point updates

pub mod config;
pub mod corpus;
pub mod distribution;
pub mod error;
pub mod graph;
pub mod iteration;
pub mod sampling;
pub mod transition;

pub use config::{RankConfig, DEFAULT_DAMPING, DEFAULT_SAMPLES, DEFAULT_TOLERANCE, MIN_TOLERANCE};
pub use corpus::{extract_links, load_corpus, scan_pages, CorpusPage, ScanOptions};
pub use distribution::{Distribution, RankVector};
pub use error::{exit_codes, Error, RankError, Result};
pub use graph::LinkGraph;
pub use iteration::{iterate_pagerank, iterate_pagerank_with, Iteration};
pub use sampling::{sample_pagerank, RngSampler, Sampler};
pub use transition::transition;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "pagerank";
