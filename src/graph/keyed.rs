use crate::graph::traits::{Graph, MutableGraph};
use crate::Result;
use num_traits::{Float, Zero};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph stored as nested adjacency maps: node -> (neighbor -> weight)
///
/// Only nodes stored as top-level keys count as graph nodes. A node that only
/// shows up as a neighbor target simply has no outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    adjacency: HashMap<N, HashMap<N, W>>,
}

impl<N, W> Default for KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        KeyedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `nodes` top-level keys
    pub fn with_capacity(nodes: usize) -> Self {
        KeyedGraph {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Returns the first edge whose weight is negative or NaN
    pub fn find_invalid_weight(&self) -> Option<(&N, &N, W)> {
        self.adjacency.iter().find_map(|(from, edges)| {
            edges
                .iter()
                .find(|(_, weight)| weight.is_nan() || **weight < W::zero())
                .map(|(to, weight)| (from, to, *weight))
        })
    }

    /// Borrows the underlying adjacency map
    pub fn as_map(&self) -> &HashMap<N, HashMap<N, W>> {
        &self.adjacency
    }
}

impl<N, W> KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug + DeserializeOwned,
    W: Float + Zero + Debug + Copy + DeserializeOwned,
{
    /// Parses a graph from a JSON object of objects, e.g. `{"0": {"1": 4.0}, "1": {}}`
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl<N, W> From<HashMap<N, HashMap<N, W>>> for KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn from(adjacency: HashMap<N, HashMap<N, W>>) -> Self {
        KeyedGraph { adjacency }
    }
}

/// Builds a graph from `(from, to, weight)` triples.
///
/// Weights are stored as given, so invalid ones are left for validation to
/// report. Only edge sources become top-level keys.
impl<N, W> FromIterator<(N, N, W)> for KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(iter: I) -> Self {
        let mut graph = KeyedGraph::new();
        for (from, to, weight) in iter {
            graph.adjacency.entry(from).or_default().insert(to, weight);
        }
        graph
    }
}

impl<N, W> Graph<N, W> for KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |edges| edges.contains_key(to))
    }

    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to).copied())
    }
}

impl<N, W> MutableGraph<N, W> for KeyedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if weight.is_nan() || weight < W::zero() {
            return false;
        }
        self.adjacency.entry(from).or_default().insert(to, weight);
        true
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        self.adjacency
            .get_mut(from)
            .map_or(false, |edges| edges.remove(to).is_some())
    }
}
