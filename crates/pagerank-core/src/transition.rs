//! Random-surfer transition model.

use crate::config::check_sampling_damping;
use crate::distribution::Distribution;
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

/// Probability distribution over the page visited after `page`.
///
/// With probability `damping` the surfer follows one of the page's links,
/// chosen uniformly; otherwise it jumps to any page in the graph. A page
/// without links is treated as linking to every page, itself included.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    check_sampling_damping(damping)?;
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    let idx = graph
        .index_of(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;

    Ok(Distribution::from_dense(
        graph,
        transition_weights(graph, idx, damping),
    ))
}

/// Dense form of [`transition`], aligned with `graph.pages()`.
///
/// Callers must pass a valid index into a non-empty graph.
pub(crate) fn transition_weights(graph: &LinkGraph, idx: usize, damping: f64) -> Vec<f64> {
    let k = graph.len() as f64;
    let links = graph.outlinks(idx);

    if links.is_empty() {
        return vec![1.0 / k; graph.len()];
    }

    let mut weights = vec![(1.0 - damping) / k; graph.len()];
    let follow = damping / links.len() as f64;
    for &tgt in links {
        weights[tgt] += follow;
    }
    weights
}
