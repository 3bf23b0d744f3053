use log::debug;

use crate::algorithm::traits::{check_non_negative, check_overflowed};
use crate::algorithm::{
    DistanceTable, PredecessorTable, Relaxation, ShortestPathSolver, SolveEvent, SolveStats,
};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm over a binary heap.
///
/// Improved distances are pushed as new heap entries instead of updating
/// the old ones in place; outdated entries are dropped when popped.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    validate_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// When enabled, every solve first rejects graphs holding a negative weight.
    ///
    /// Without validation, negative weights give unspecified distances. A solve
    /// still terminates: once it has made more relaxations than the graph has
    /// edges, which cannot happen with non-negative weights, it fails with
    /// [`crate::Error::NegativeWeight`].
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Solves with predecessor tracking and reports every settled vertex and
    /// every distance update to `on_event`
    pub fn solve_traced<W, G, F>(
        &self,
        graph: &G,
        source: usize,
        on_event: F,
    ) -> Result<(DistanceTable<W>, PredecessorTable)>
    where
        W: Weight,
        G: Graph<W>,
        F: FnMut(SolveEvent<W>),
    {
        let mut predecessors: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let distances = self.run(graph, source, Some(predecessors.as_mut_slice()), on_event)?;
        Ok((distances, PredecessorTable::new(source, predecessors)))
    }

    fn run<W, G, F>(
        &self,
        graph: &G,
        source: usize,
        mut predecessors: Option<&mut [Option<usize>]>,
        mut on_event: F,
    ) -> Result<DistanceTable<W>>
    where
        W: Weight,
        G: Graph<W>,
        F: FnMut(SolveEvent<W>),
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

        distances[source] = W::zero();

        let mut frontier = Frontier::with_capacity(n);
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            stats.pops += 1;

            // A shorter distance to u was recorded after this entry was queued
            if dist_u > distances[u] {
                stats.stale_skipped += 1;
                continue;
            }
            on_event(SolveEvent::Settled { vertex: u, distance: dist_u });

            for (v, weight) in graph.neighbors(u)? {
                let Some(candidate) = distances[u].checked_sum(weight) else {
                    overflowed.push(v);
                    continue;
                };
                if candidate < distances[v] {
                    let previous = distances[v];
                    distances[v] = candidate;
                    if let Some(predecessors) = predecessors.as_deref_mut() {
                        predecessors[v] = Some(u);
                    }
                    on_event(SolveEvent::Relaxed(Relaxation {
                        vertex: v,
                        previous: (!previous.is_infinite()).then_some(previous),
                        distance: candidate,
                        via: u,
                    }));
                    stats.relaxations += 1;
                    frontier.push(v, candidate);

                    if stats.relaxations == relaxation_limit + 1 {
                        check_non_negative(graph)?;
                    }
                }
            }
        }

        check_overflowed(&distances, &overflowed)?;

        stats.pushes = frontier.pushes();
        debug!(
            "dijkstra from {}: {} vertices, {} pops ({} stale), {} relaxations",
            source, n, stats.pops, stats.stale_skipped, stats.relaxations
        );

        Ok(DistanceTable::new(source, distances, stats))
    }
}

impl<W, G> ShortestPathSolver<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve_distances(&self, graph: &G, source: usize) -> Result<DistanceTable<W>> {
        self.run(graph, source, None, |_| {})
    }

    fn solve_with_paths(&self, graph: &G, source: usize) -> Result<(DistanceTable<W>, PredecessorTable)> {
        self.solve_traced(graph, source, |_| {})
    }
}
