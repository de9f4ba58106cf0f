//! Properties shared by the sampling and iterative estimators

use pagerank_core::{
    iterate_pagerank, iterate_pagerank_with, sample_pagerank, transition, LinkGraph, RngSampler,
    DEFAULT_TOLERANCE,
};
use proptest::prelude::*;

/// Per-page change shrinks at least by the damping factor each round, so even
/// damping 0.999 settles within about 8,000 rounds.
const ROUND_CEILING: usize = 20_000;

fn page(i: usize) -> String {
    format!("{i}.html")
}

fn graph_from_adjacency(adj: &[Vec<usize>]) -> LinkGraph {
    LinkGraph::from_corpus(
        adj.iter()
            .enumerate()
            .map(|(i, links)| (page(i), links.iter().map(|&j| page(j)).collect::<Vec<_>>())),
    )
}

fn corpus0() -> LinkGraph {
    LinkGraph::from_corpus([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
    ])
}

fn with_dangling() -> LinkGraph {
    // 0 -> {1, 2}, 1 -> 2, 2 -> 0, 3 dangling
    graph_from_adjacency(&[vec![1, 2], vec![2], vec![0], vec![]])
}

fn arb_adjacency(max_nodes: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_nodes).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n, 0..6), n)
    })
}

#[test]
fn sampling_approaches_iteration_on_corpus0() {
    let g = corpus0();
    let iterated = iterate_pagerank(&g, 0.85).unwrap();
    let sampled = sample_pagerank(&g, 0.85, 100_000, &mut RngSampler::seeded(2024)).unwrap();

    let diff = sampled.max_abs_diff(&iterated);
    assert!(diff < 0.02, "max diff {diff}");
}

#[test]
fn sampling_approaches_iteration_with_dangling_page() {
    let g = with_dangling();
    let iterated = iterate_pagerank(&g, 0.85).unwrap();
    let sampled = sample_pagerank(&g, 0.85, 100_000, &mut RngSampler::seeded(7)).unwrap();

    let diff = sampled.max_abs_diff(&iterated);
    assert!(diff < 0.02, "max diff {diff}");
}

#[test]
fn both_estimators_agree_on_single_page() {
    let g = LinkGraph::from_corpus([("solo.html", Vec::<String>::new())]);

    let sampled = sample_pagerank(&g, 0.85, 50, &mut RngSampler::seeded(0)).unwrap();
    assert_eq!(sampled.get("solo.html"), Some(1.0));

    let iterated = iterate_pagerank(&g, 0.85).unwrap();
    assert!((iterated.get("solo.html").unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn dangling_transition_is_uniform_in_larger_graph() {
    let g = with_dangling();
    let d = transition(&g, "3.html", 0.85).unwrap();
    for p in g.pages() {
        assert!((d.get(p).unwrap() - 0.25).abs() < 1e-12);
    }
}

#[test]
fn iteration_terminates_with_heavy_damping() {
    // a 100-page chain ending in a dangling page
    let adj: Vec<Vec<usize>> = (0..100)
        .map(|i| if i < 99 { vec![i + 1] } else { vec![] })
        .collect();
    let g = graph_from_adjacency(&adj);

    let it = iterate_pagerank_with(&g, 0.99, DEFAULT_TOLERANCE).unwrap();
    assert!(it.rounds < ROUND_CEILING, "rounds {}", it.rounds);
    assert!((it.ranks.total() - 1.0).abs() < 1e-6);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: iteration always terminates, covers every page, and sums to one.
    #[test]
    fn prop_iteration_terminates_and_sums_to_one(
        adj in arb_adjacency(40),
        damping in 0.001f64..0.999,
    ) {
        let g = graph_from_adjacency(&adj);
        let it = iterate_pagerank_with(&g, damping, DEFAULT_TOLERANCE).unwrap();

        prop_assert!(it.rounds < ROUND_CEILING);
        prop_assert_eq!(it.ranks.len(), g.len());
        prop_assert!((it.ranks.total() - 1.0).abs() < 1e-6, "total {}", it.ranks.total());
        prop_assert!(it.ranks.iter().all(|(_, r)| r >= 0.0));
    }

    // Property: sampled frequencies cover every page and sum to one for any walk length.
    #[test]
    fn prop_sampling_sums_to_one(
        adj in arb_adjacency(20),
        damping in 0.05f64..=1.0,
        n in 1usize..500,
        seed in any::<u64>(),
    ) {
        let g = graph_from_adjacency(&adj);
        let ranks = sample_pagerank(&g, damping, n, &mut RngSampler::seeded(seed)).unwrap();

        prop_assert_eq!(ranks.len(), g.len());
        prop_assert!((ranks.total() - 1.0).abs() < 1e-9);
    }

    // Property: every transition distribution is complete and sums to one.
    #[test]
    fn prop_transition_sums_to_one(
        adj in arb_adjacency(30),
        damping in 0.01f64..=1.0,
        pick in any::<prop::sample::Index>(),
    ) {
        let g = graph_from_adjacency(&adj);
        let from = &g.pages()[pick.index(g.len())];
        let d = transition(&g, from, damping).unwrap();

        prop_assert_eq!(d.len(), g.len());
        prop_assert!((d.total() - 1.0).abs() < 1e-9);
    }
}
