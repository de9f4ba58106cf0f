//! Rank a corpus with both estimators

use crate::app::Cli;
use crate::output::{format_report, RankReport};
use anyhow::{Context, Result};
use pagerank_core::{
    iterate_pagerank_with, load_corpus, sample_pagerank, LinkGraph, RankConfig, RngSampler,
};

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.rank_config()?;

    let graph = load_corpus(&cli.corpus, &cli.scan_options())
        .with_context(|| format!("Failed to load corpus from {}", cli.corpus.display()))?;

    let report = rank(&graph, &config)?;
    print!("{}", format_report(&report, cli.format)?);
    Ok(())
}

/// Run the sampling estimator, then the iterative one.
pub fn rank(graph: &LinkGraph, config: &RankConfig) -> pagerank_core::Result<RankReport> {
    let mut sampler = RngSampler::from_seed_option(config.seed);
    let sampled = sample_pagerank(graph, config.damping, config.samples, &mut sampler)?;
    let iteration = iterate_pagerank_with(graph, config.damping, config.tolerance)?;

    tracing::debug!(
        "Largest per-page gap between estimators: {:.4}",
        sampled.max_abs_diff(&iteration.ranks)
    );

    Ok(RankReport {
        samples: config.samples,
        sampled,
        rounds: iteration.rounds,
        iterated: iteration.ranks,
    })
}
