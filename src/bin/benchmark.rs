use std::env;
use std::time::{Duration, Instant};
use log::info;
use keyed_sssp::graph::generators::generate_random;
use keyed_sssp::graph::{Graph, KeyedGraph};
use keyed_sssp::{Dijkstra, SearchStats};
use ordered_float::OrderedFloat;

// Function to benchmark a configuration on a graph
fn benchmark_config(
    name: &str,
    dijkstra: &Dijkstra,
    graph: &KeyedGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> Result<(Duration, SearchStats), keyed_sssp::Error> {
    info!("Running {} on graph with {} nodes", name, graph.node_count());

    let start = Instant::now();
    let (distances, stats) = dijkstra.compute_with_stats(graph, source)?;
    let duration = start.elapsed();

    info!(
        "{}: {} reachable nodes in {:?} ({} stale entries skipped)",
        name,
        distances.reachable().count(),
        duration,
        stats.stale_skipped
    );

    Ok((duration, stats))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional args: <max nodes> <edge factor>
    let args: Vec<String> = env::args().collect();
    let max_nodes: usize = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 200_000,
    };
    let edge_factor: f64 = match args.get(2) {
        Some(arg) => arg.parse()?,
        None => 2.0,
    };

    let graph_sizes: Vec<usize> = [1_000, 10_000, 50_000, 100_000, 200_000, 500_000]
        .into_iter()
        .filter(|&n| n <= max_nodes)
        .collect();

    let skipping = Dijkstra::new();
    let eager = Dijkstra::new().with_stale_skipping(false);

    println!("{:<10} | {:<12} | {:<12} | {:<10} | {:<10}",
             "Nodes", "Skip (ms)", "Eager (ms)", "Stale", "Frontier");
    println!("--------------------------------------------------------------");

    for &size in &graph_sizes {
        let graph = generate_random(size, edge_factor, size as u64);
        let (skip_time, stats) = benchmark_config("skip stale", &skipping, &graph, 0)?;
        let (eager_time, _) = benchmark_config("reprocess stale", &eager, &graph, 0)?;

        println!("{:<10} | {:<12} | {:<12} | {:<10} | {:<10}",
                 size,
                 skip_time.as_millis(),
                 eager_time.as_millis(),
                 stats.stale_skipped,
                 stats.max_frontier);
    }

    Ok(())
}
