//! Probability distributions and rank vectors keyed by page.

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use serde::Serialize;
use std::collections::BTreeMap;

/// A value for every page of a graph.
///
/// Built only from a [`LinkGraph`], so every page of that graph is a key.
/// Transition distributions and rank vectors sum to 1 within floating-point
/// tolerance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    values: BTreeMap<String, f64>,
}

/// Estimated importance of every page.
pub type RankVector = Distribution;

impl Distribution {
    /// Every page gets `1 / |graph|`.
    pub fn uniform(graph: &LinkGraph) -> Result<Self> {
        if graph.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        let share = 1.0 / graph.len() as f64;
        Ok(Self::from_dense(graph, vec![share; graph.len()]))
    }

    /// Build from values aligned with `graph.pages()`.
    pub(crate) fn from_dense(graph: &LinkGraph, values: Vec<f64>) -> Self {
        debug_assert_eq!(graph.len(), values.len());
        Self {
            values: graph.pages().iter().cloned().zip(values).collect(),
        }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.values.get(page).copied()
    }

    /// `(page, value)` pairs sorted by page.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(page, &value)| (page.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Largest per-page absolute difference against `other`.
    ///
    /// Pages missing from `other` are compared against zero.
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.values
            .iter()
            .map(|(page, &value)| (value - other.get(page).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }

    /// Values in `graph.pages()` order.
    ///
    /// Keys are the graph's pages and both are sorted by identifier, so map
    /// order and page order coincide.
    pub(crate) fn into_dense(self) -> Vec<f64> {
        self.values.into_values().collect()
    }
}
