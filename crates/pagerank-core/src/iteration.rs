//! PageRank by synchronous fixed-point iteration.

use crate::config::{check_iteration_damping, check_tolerance, DEFAULT_TOLERANCE};
use crate::distribution::{Distribution, RankVector};
use crate::error::Result;
use crate::graph::LinkGraph;

/// Outcome of an iterative run.
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    pub ranks: RankVector,
    /// Number of full update rounds performed, the converging one included.
    pub rounds: usize,
}

/// Iterate until no page's rank moves by 0.001 or more in a round.
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<RankVector> {
    iterate_pagerank_with(graph, damping, DEFAULT_TOLERANCE).map(|it| it.ranks)
}

/// Iterate until every page's rank changes by strictly less than `tolerance`
/// between two consecutive rounds.
///
/// Each round computes the whole new vector from the previous round's vector
/// before any comparison is made. A page without links spreads its rank
/// evenly over every page, itself included.
pub fn iterate_pagerank_with(
    graph: &LinkGraph,
    damping: f64,
    tolerance: f64,
) -> Result<Iteration> {
    check_iteration_damping(damping)?;
    check_tolerance(tolerance)?;
    let mut ranks = Distribution::uniform(graph)?.into_dense();

    let n = graph.len();
    let incoming = incoming_links(graph);
    let dangling: Vec<usize> = (0..n).filter(|&i| graph.is_dangling(i)).collect();

    let mut next = vec![0.0; n];
    let mut rounds = 0;

    loop {
        rounds += 1;
        update_round(graph, &incoming, &dangling, damping, &ranks, &mut next);
        let done = converged(&ranks, &next, tolerance);
        std::mem::swap(&mut ranks, &mut next);
        if done {
            break;
        }
    }

    tracing::debug!(
        "Iteration converged after {} rounds over {} pages (damping {}, tolerance {})",
        rounds,
        n,
        damping,
        tolerance
    );

    Ok(Iteration {
        ranks: Distribution::from_dense(graph, ranks),
        rounds,
    })
}

/// For each page, the pages linking to it.
fn incoming_links(graph: &LinkGraph) -> Vec<Vec<usize>> {
    let mut incoming = vec![Vec::new(); graph.len()];
    for src in 0..graph.len() {
        for &tgt in graph.outlinks(src) {
            incoming[tgt].push(src);
        }
    }
    incoming
}

fn update_round(
    graph: &LinkGraph,
    incoming: &[Vec<usize>],
    dangling: &[usize],
    damping: f64,
    prev: &[f64],
    next: &mut [f64],
) {
    let n = prev.len() as f64;
    let teleport = (1.0 - damping) / n;
    // every dangling page contributes prev/n to every target
    let dangling_share: f64 = dangling.iter().map(|&s| prev[s] / n).sum();

    for (tgt, slot) in next.iter_mut().enumerate() {
        let linked: f64 = incoming[tgt]
            .iter()
            .map(|&src| prev[src] / graph.out_degree(src) as f64)
            .sum();
        *slot = teleport + damping * (linked + dangling_share);
    }
}

/// Every page moved by strictly less than `tolerance`.
fn converged(prev: &[f64], next: &[f64], tolerance: f64) -> bool {
    prev.iter()
        .zip(next)
        .all(|(old, new)| (new - old).abs() < tolerance)
}
