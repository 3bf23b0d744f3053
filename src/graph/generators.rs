use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::DirectedGraph;

/// Generates a random directed graph with about `edge_factor * n` edges and
/// integer weights in `1..=max_weight`. The same seed always yields the same graph.
/// Parallel edges and self-loops may occur.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::new(n);
    if n == 0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(1..=max_weight.max(1));
        // Endpoints are drawn from 0..n, so this cannot fail
        let _ = graph.add_edge(u, v, weight);
    }

    graph
}

/// Same as [`generate_random`] with real weights in `[0, max_weight)`
pub fn generate_random_real(
    n: usize,
    edge_factor: f64,
    max_weight: f64,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new(n);
    if n == 0 || max_weight <= 0.0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
        let _ = graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a `width x height` grid with 4-connectivity in both directions.
/// Vertex `y * width + x` sits at column `x`, row `y`.
pub fn generate_grid(width: usize, height: usize, weight: u64) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::new(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            // Neighbours are only taken inside the grid, so these cannot fail
            if x + 1 < width {
                let _ = graph.add_edge(current, index(x + 1, y), weight);
                let _ = graph.add_edge(index(x + 1, y), current, weight);
            }
            if y + 1 < height {
                let _ = graph.add_edge(current, index(x, y + 1), weight);
                let _ = graph.add_edge(index(x, y + 1), current, weight);
            }
        }
    }

    graph
}
