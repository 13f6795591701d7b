use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph keyed by node identifiers
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes that have an outgoing-edge mapping
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the top-level nodes
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges from a node.
    ///
    /// A node that is not a top-level key has no outgoing edges.
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the node is a top-level key
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node with no outgoing edges; returns false if it already existed
    fn add_node(&mut self, node: N) -> bool;

    /// Adds or overwrites a directed edge.
    ///
    /// Returns false without touching the graph if the weight is negative or NaN.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;
}
