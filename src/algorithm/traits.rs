use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;
use num_traits::{Float, Zero};
use serde::Serialize;
use crate::graph::Graph;
use crate::Result;

/// Best-known distances from a source node
///
/// Unreachable nodes map to positive infinity. Entries only ever go down.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    distances: HashMap<N, W>,
}

impl<N, W> DistanceTable<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Every top-level node of `graph` at infinity, `source` at zero
    pub fn seeded<G: Graph<N, W>>(graph: &G, source: &N) -> Self {
        let mut distances: HashMap<N, W> = graph
            .nodes()
            .map(|node| (node.clone(), W::infinity()))
            .collect();
        distances.insert(source.clone(), W::zero());
        DistanceTable { distances }
    }

    /// Lowers the entry for `node` to `candidate` if that is an improvement.
    ///
    /// A missing entry counts as infinity. Returns true iff the table changed.
    pub fn relax(&mut self, node: &N, candidate: W) -> bool {
        match self.distances.get_mut(node) {
            Some(best) if candidate < *best => {
                *best = candidate;
                true
            }
            Some(_) => false,
            None if candidate < W::infinity() => {
                self.distances.insert(node.clone(), candidate);
                true
            }
            None => false,
        }
    }

    pub(crate) fn retain_nodes<F>(&mut self, mut keep: F)
    where
        F: FnMut(&N) -> bool,
    {
        self.distances.retain(|node, _| keep(node));
    }

    pub fn get(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// True if the node has a finite distance
    pub fn is_reachable(&self, node: &N) -> bool {
        self.get(node).map_or(false, |d| d.is_finite())
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.distances.iter().map(|(node, d)| (node, *d))
    }

    /// Entries with a finite distance
    pub fn reachable(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.iter().filter(|(_, d)| d.is_finite())
    }

    pub fn into_inner(self) -> HashMap<N, W> {
        self.distances
    }
}

impl<N, W> Index<&N> for DistanceTable<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    type Output = W;

    /// Panics if the node has no entry
    fn index(&self, node: &N) -> &W {
        &self.distances[node]
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest distances from a source node to all top-level nodes
    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<DistanceTable<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{KeyedGraph, MutableGraph};
    use ordered_float::OrderedFloat;

    #[test]
    fn seeded_table_covers_keys_and_source() {
        let mut graph: KeyedGraph<u32, OrderedFloat<f64>> = KeyedGraph::new();
        graph.add_edge(1, 2, OrderedFloat(1.0));
        graph.add_node(3);

        let table = DistanceTable::seeded(&graph, &9);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&9), Some(OrderedFloat(0.0)));
        assert_eq!(table[&1], OrderedFloat(f64::INFINITY));
        assert_eq!(table.get(&2), None);
        assert!(!table.is_reachable(&3));
    }

    #[test]
    fn relax_never_raises_an_entry() {
        let graph: KeyedGraph<u32, OrderedFloat<f64>> = KeyedGraph::new();
        let mut table = DistanceTable::seeded(&graph, &0);

        assert!(table.relax(&1, OrderedFloat(5.0)));
        assert!(!table.relax(&1, OrderedFloat(6.0)));
        assert!(!table.relax(&1, OrderedFloat(5.0)));
        assert!(table.relax(&1, OrderedFloat(2.0)));
        assert!(!table.relax(&0, OrderedFloat(1.0)));
        assert!(!table.relax(&7, OrderedFloat(f64::INFINITY)));

        assert_eq!(table[&1], OrderedFloat(2.0));
        assert_eq!(table.reachable().count(), 2);
    }
}
