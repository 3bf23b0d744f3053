use std::time::{Duration, Instant};

use dijkstra_sssp::graph::generators::generate_random;
use dijkstra_sssp::{Dijkstra, DirectedGraph, Graph, SetDijkstra, ShortestPathSolver};

// Function to benchmark a solver on a graph
fn benchmark_solver<S>(solver: &S, graph: &DirectedGraph<u64>, source: usize) -> dijkstra_sssp::Result<Duration>
where
    S: ShortestPathSolver<u64, DirectedGraph<u64>>,
{
    println!("Running {} on graph with {} vertices...", solver.name(), graph.vertex_count());

    let start = Instant::now();
    let distances = solver.solve_distances(graph, source)?;
    let duration = start.elapsed();

    let stats = distances.stats();
    println!(
        "  - Found {} reachable vertices in {:?} ({} pops, {} stale)",
        distances.reachable_count(),
        duration,
        stats.pops,
        stats.stale_skipped
    );

    Ok(duration)
}

fn main() -> dijkstra_sssp::Result<()> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: binary heap vs ordered set frontier");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let heap = Dijkstra::new();
    let set = SetDijkstra::new();
    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, 100, seed as u64);
        let source = 0;

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let heap_time = benchmark_solver(&heap, &graph, source)?;
        let set_time = benchmark_solver(&set, &graph, source)?;
        results.push((size, heap_time, set_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<8}", "Vertices", "Heap (ms)", "Set (ms)", "Ratio");
    println!("-----------------------------------------------------");

    for (size, heap_time, set_time) in &results {
        let ratio = set_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<8.2}",
            size,
            heap_time.as_secs_f64() * 1000.0,
            set_time.as_secs_f64() * 1000.0,
            ratio
        );
    }

    Ok(())
}
