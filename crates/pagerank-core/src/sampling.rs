//! Monte Carlo PageRank from a single long random walk.

use crate::config::check_sampling_damping;
use crate::distribution::{Distribution, RankVector};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use crate::transition::transition_weights;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution as _;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Source of random choices for the walk.
pub trait Sampler {
    /// An index in `0..len`, uniformly. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// An index drawn with probability proportional to `weights[i]`.
    fn draw(&mut self, weights: &[f64]) -> Result<usize>;
}

/// [`Sampler`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<ChaCha8Rng> {
    /// Reproducible walk for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from the thread-local generator.
    pub fn from_thread_rng() -> Self {
        Self::seeded(rand::rng().random())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_thread_rng(),
        }
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn draw(&mut self, weights: &[f64]) -> Result<usize> {
        let dist = WeightedIndex::new(weights).map_err(|e| RankError::Sampling(e.to_string()))?;
        Ok(dist.sample(&mut self.rng))
    }
}

/// Estimate PageRank by walking `n` transitions from a random start page.
///
/// Each page's rank is its share of the `n + 1` visited pages, the start
/// page included.
pub fn sample_pagerank<S>(
    graph: &LinkGraph,
    damping: f64,
    n: usize,
    sampler: &mut S,
) -> Result<RankVector>
where
    S: Sampler + ?Sized,
{
    check_sampling_damping(damping)?;
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    if n == 0 {
        return Err(RankError::InvalidSampleCount(n));
    }

    let mut visits = vec![0usize; graph.len()];
    let mut current = sampler.pick(graph.len());
    record_visit(&mut visits, current)?;

    for _ in 0..n {
        let weights = transition_weights(graph, current, damping);
        current = sampler.draw(&weights)?;
        record_visit(&mut visits, current)?;
    }

    tracing::debug!(
        "Random walk finished: {} transitions over {} pages (damping {})",
        n,
        graph.len(),
        damping
    );

    let total = (n + 1) as f64;
    Ok(Distribution::from_dense(
        graph,
        visits.into_iter().map(|count| count as f64 / total).collect(),
    ))
}

fn record_visit(visits: &mut [usize], idx: usize) -> Result<()> {
    let len = visits.len();
    let slot = visits
        .get_mut(idx)
        .ok_or_else(|| RankError::Sampling(format!("sampler chose index {idx} of {len} pages")))?;
    *slot += 1;
    Ok(())
}
