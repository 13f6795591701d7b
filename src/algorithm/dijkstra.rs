use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace, warn};
use num_traits::{Float, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::data_structures::FrontierQueue;
use crate::{Error, Result};

/// Tunables for a Dijkstra run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DijkstraConfig {
    /// Reject negative or NaN weights before relaxing anything
    pub validate_weights: bool,

    /// Drop frontier entries whose priority exceeds the recorded distance
    pub skip_stale: bool,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        DijkstraConfig {
            validate_weights: true,
            skip_stale: true,
        }
    }
}

impl DijkstraConfig {
    /// Parses a config from JSON; missing fields keep their defaults
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the frontier, stale ones included
    pub extracted: usize,
    pub stale_skipped: usize,
    /// Successful relaxations, one per frontier insertion after the seed
    pub relaxations: usize,
    pub max_frontier: usize,
}

/// Classic Dijkstra's algorithm over non-negative weights
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    config: DijkstraConfig,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance with the default config
    pub fn new() -> Self {
        Dijkstra {
            config: DijkstraConfig::default(),
        }
    }

    pub fn with_config(config: DijkstraConfig) -> Self {
        Dijkstra { config }
    }

    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.config.validate_weights = enabled;
        self
    }

    pub fn with_stale_skipping(mut self, enabled: bool) -> Self {
        self.config.skip_stale = enabled;
        self
    }

    pub fn config(&self) -> &DijkstraConfig {
        &self.config
    }

    /// Runs the search and also reports how much work it did
    pub fn compute_with_stats<N, W, G>(
        &self,
        graph: &G,
        source: N,
    ) -> Result<(DistanceTable<N, W>, SearchStats)>
    where
        N: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        if self.config.validate_weights {
            validate_weights(graph)?;
        }
        Ok(self.relax_from(graph, source))
    }

    /// The relaxation loop. Never fails; weights are taken as given.
    pub(crate) fn relax_from<N, W, G>(&self, graph: &G, source: N) -> (DistanceTable<N, W>, SearchStats)
    where
        N: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        debug!(
            "Dijkstra from {:?} over {} nodes and {} edges",
            source,
            graph.node_count(),
            graph.edge_count()
        );

        let mut stats = SearchStats::default();
        let mut distances = DistanceTable::seeded(graph, &source);

        let mut queue = FrontierQueue::with_capacity(graph.node_count());
        queue.insert(source.clone(), W::zero());
        stats.max_frontier = 1;

        while let Some((node, dist_node)) = queue.extract_min() {
            stats.extracted += 1;

            if self.config.skip_stale {
                if let Some(best) = distances.get(&node) {
                    if dist_node > best {
                        trace!("Skipping stale entry {:?} at {:?} (best {:?})", node, dist_node, best);
                        stats.stale_skipped += 1;
                        continue;
                    }
                }
            }

            for (neighbor, weight) in graph.outgoing_edges(&node) {
                let candidate = dist_node + weight;
                if distances.relax(neighbor, candidate) {
                    stats.relaxations += 1;
                    queue.insert(neighbor.clone(), candidate);
                    stats.max_frontier = stats.max_frontier.max(queue.len());
                }
            }
        }

        // Non-key targets were only tracked as intermediate hops
        distances.retain_nodes(|node| *node == source || graph.has_node(node));

        debug!(
            "Dijkstra finished: {} extracted, {} stale, {} relaxations, frontier peak {}",
            stats.extracted, stats.stale_skipped, stats.relaxations, stats.max_frontier
        );

        (distances, stats)
    }
}

/// Fails on the first negative or NaN weight found in the graph
fn validate_weights<N, W, G>(graph: &G) -> Result<()>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    for from in graph.nodes() {
        for (to, weight) in graph.outgoing_edges(from) {
            if weight.is_nan() || weight < W::zero() {
                warn!("Rejecting edge {:?} -> {:?} with weight {:?}", from, to, weight);
                return Err(Error::InvalidWeight {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
    }
    Ok(())
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<DistanceTable<N, W>> {
        self.compute_with_stats(graph, source).map(|(distances, _)| distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::KeyedGraph;
    use ordered_float::OrderedFloat;
    use std::collections::HashMap;

    type Weight = OrderedFloat<f64>;

    fn scenario_one() -> KeyedGraph<u32, Weight> {
        let mut adjacency = HashMap::new();
        adjacency.insert(0, HashMap::from([(1, OrderedFloat(4.0)), (2, OrderedFloat(1.0))]));
        adjacency.insert(1, HashMap::from([(3, OrderedFloat(1.0))]));
        adjacency.insert(2, HashMap::from([(1, OrderedFloat(2.0)), (3, OrderedFloat(5.0))]));
        adjacency.insert(3, HashMap::new());
        KeyedGraph::from(adjacency)
    }

    #[test]
    fn stale_entries_are_skipped() {
        let (distances, stats) = Dijkstra::new()
            .compute_with_stats(&scenario_one(), 0)
            .unwrap();

        assert_eq!(distances[&3], OrderedFloat(4.0));
        // (1, 4.0) and (3, 6.0) are superseded before they come up
        assert_eq!(stats.stale_skipped, 2);
        assert_eq!(stats.extracted, 6);
        assert_eq!(stats.relaxations, 5);
    }

    #[test]
    fn reprocessing_stale_entries_gives_same_distances() {
        let graph = scenario_one();
        let skipping = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        let (eager, stats) = Dijkstra::new()
            .with_stale_skipping(false)
            .compute_with_stats(&graph, 0)
            .unwrap();

        assert_eq!(skipping, eager);
        assert_eq!(stats.stale_skipped, 0);
        assert_eq!(stats.relaxations, 5);
    }

    #[test]
    fn validation_fails_before_relaxing() {
        let graph: KeyedGraph<u32, Weight> =
            vec![(0, 1, OrderedFloat(1.0)), (1, 2, OrderedFloat(-3.0))]
                .into_iter()
                .collect();

        let err = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap_err();
        match err {
            Error::InvalidWeight { from, to, weight } => {
                assert_eq!(from, "1");
                assert_eq!(to, "2");
                assert_eq!(weight, -3.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validation_can_be_disabled() {
        let graph: KeyedGraph<u32, Weight> = vec![(0, 1, OrderedFloat(-1.0))].into_iter().collect();
        let result = Dijkstra::new()
            .with_weight_validation(false)
            .compute_shortest_paths(&graph, 0);
        assert!(result.is_ok());
    }

    #[test]
    fn config_from_partial_json() {
        let config = DijkstraConfig::from_json(r#"{"skip_stale": false}"#).unwrap();
        assert!(config.validate_weights);
        assert!(!config.skip_stale);

        let dijkstra = Dijkstra::with_config(config);
        assert_eq!(dijkstra.config(), &config);
        assert_eq!(
            <Dijkstra as ShortestPathAlgorithm<u32, Weight, KeyedGraph<u32, Weight>>>::name(&dijkstra),
            "Dijkstra"
        );
    }
}
