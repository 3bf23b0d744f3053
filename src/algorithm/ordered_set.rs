use std::collections::BTreeSet;

use log::debug;

use crate::algorithm::traits::{check_non_negative, check_overflowed};
use crate::algorithm::{DistanceTable, PredecessorTable, ShortestPathSolver, SolveStats};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Dijkstra's algorithm with an ordered-set frontier.
///
/// When a vertex's distance improves, its old `(distance, vertex)` entry is
/// removed from the set before the new one goes in, so the frontier holds
/// at most one entry per vertex.
#[derive(Debug, Default, Clone)]
pub struct SetDijkstra {
    validate_weights: bool,
}

impl SetDijkstra {
    /// Creates a new ordered-set Dijkstra instance
    pub fn new() -> Self {
        SetDijkstra::default()
    }

    /// When enabled, every solve first rejects graphs holding a negative weight.
    /// Unvalidated solves stop on negative weights the same way as [`crate::Dijkstra`].
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    fn run<W, G>(
        &self,
        graph: &G,
        source: usize,
        mut predecessors: Option<&mut [Option<usize>]>,
    ) -> Result<DistanceTable<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        graph.check_vertex(source)?;
        if self.validate_weights {
            check_non_negative(graph)?;
        }

        let n = graph.vertex_count();
        let relaxation_limit = graph.edge_count();
        let mut distances = vec![W::infinity(); n];
        let mut overflowed = Vec::new();
        let mut stats = SolveStats::default();
        let mut frontier = BTreeSet::new();

        distances[source] = W::zero();
        frontier.insert((W::zero(), source));
        stats.pushes += 1;

        while let Some((dist_u, u)) = frontier.pop_first() {
            stats.pops += 1;

            // Eager removal keeps the set free of outdated entries; checked regardless
            if dist_u > distances[u] {
                stats.stale_skipped += 1;
                continue;
            }

            for (v, weight) in graph.neighbors(u)? {
                let Some(candidate) = distances[u].checked_sum(weight) else {
                    overflowed.push(v);
                    continue;
                };
                if candidate < distances[v] {
                    if !distances[v].is_infinite() {
                        frontier.remove(&(distances[v], v));
                    }
                    distances[v] = candidate;
                    if let Some(predecessors) = predecessors.as_deref_mut() {
                        predecessors[v] = Some(u);
                    }
                    stats.relaxations += 1;
                    stats.pushes += 1;
                    frontier.insert((candidate, v));

                    if stats.relaxations == relaxation_limit + 1 {
                        check_non_negative(graph)?;
                    }
                }
            }
        }

        check_overflowed(&distances, &overflowed)?;

        debug!(
            "set dijkstra from {}: {} vertices, {} pops, {} relaxations",
            source, n, stats.pops, stats.relaxations
        );

        Ok(DistanceTable::new(source, distances, stats))
    }
}

impl<W, G> ShortestPathSolver<W, G> for SetDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (ordered set)"
    }

    fn solve_distances(&self, graph: &G, source: usize) -> Result<DistanceTable<W>> {
        self.run(graph, source, None)
    }

    fn solve_with_paths(&self, graph: &G, source: usize) -> Result<(DistanceTable<W>, PredecessorTable)> {
        let mut predecessors: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let distances = self.run(graph, source, Some(predecessors.as_mut_slice()))?;
        Ok((distances, PredecessorTable::new(source, predecessors)))
    }
}
