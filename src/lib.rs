//! Keyed SSSP - Dijkstra single-source shortest paths over adjacency maps
//!
//! Graphs are nested maps from a node key to its neighbors and their
//! non-negative edge weights. The engine explores the closest unvisited node
//! first using a binary-heap frontier that tolerates stale duplicate entries,
//! giving O((V + E) log V) distance computation.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

pub use algorithm::{
    dijkstra::{Dijkstra, DijkstraConfig, SearchStats},
    DistanceTable, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::keyed::KeyedGraph;

use graph::Graph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid edge weight {weight} on edge from {from} to {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("Failed to parse input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes distances from `start` to every top-level node of `graph`.
///
/// Weights are trusted to be non-negative; use [`try_shortest_paths`] to
/// reject invalid weights up front.
pub fn shortest_paths<N, W, G>(graph: &G, start: N) -> DistanceTable<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    Dijkstra::new().relax_from(graph, start).0
}

/// Like [`shortest_paths`], but fails with [`Error::InvalidWeight`] before
/// any relaxation if the graph holds a negative or NaN weight.
pub fn try_shortest_paths<N, W, G>(graph: &G, start: N) -> Result<DistanceTable<N, W>>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    Dijkstra::new().compute_shortest_paths(graph, start)
}
