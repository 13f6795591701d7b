use crate::graph::{KeyedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random directed graph with `n` nodes and about `edge_factor * n` edges.
///
/// Every node in `0..n` is a top-level key. Weights are drawn from `1.0..100.0`
/// and self-loops are skipped. The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> KeyedGraph<usize, OrderedFloat<f64>> {
    let mut graph = KeyedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight edges in the four cardinal directions.
///
/// Node `y * width + x` sits at column `x`, row `y`.
pub fn generate_grid(width: usize, height: usize) -> KeyedGraph<usize, OrderedFloat<f64>> {
    let mut graph = KeyedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            graph.add_node(node);

            if x + 1 < width {
                graph.add_edge(node, node + 1, OrderedFloat(1.0));
            }
            if x > 0 {
                graph.add_edge(node, node - 1, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(node, node + width, OrderedFloat(1.0));
            }
            if y > 0 {
                graph.add_edge(node, node - width, OrderedFloat(1.0));
            }
        }
    }

    graph
}
