use std::fmt::Debug;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Counters collected during one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Entries taken out of the frontier
    pub pops: usize,
    /// Popped entries discarded because a shorter distance was already known
    pub stale_skipped: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Entries put into the frontier, the source included
    pub pushes: usize,
}

/// One successful relaxation, as reported to a tracing callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxation<W> {
    pub vertex: usize,
    /// Distance before the update, `None` if the vertex was unreached
    pub previous: Option<W>,
    pub distance: W,
    pub via: usize,
}

/// Step of a traced solve, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveEvent<W> {
    /// `vertex` left the frontier with an up-to-date distance, which is now final
    Settled { vertex: usize, distance: W },
    Relaxed(Relaxation<W>),
}

/// Fails with [`Error::DistanceOverflow`] for the first vertex of `overflowed`
/// still unreached after the solve: every path to it overflowed the weight type.
pub(crate) fn check_overflowed<W: Weight>(distances: &[W], overflowed: &[usize]) -> Result<()> {
    match overflowed.iter().find(|&&v| distances[v].is_infinite()) {
        Some(&vertex) => Err(Error::DistanceOverflow { vertex }),
        None => Ok(()),
    }
}

/// Shortest distances from a single source.
///
/// Unreachable vertices hold [`Weight::infinity`] internally and are
/// reported as `None` by [`DistanceTable::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable<W>
where
    W: Weight,
{
    source: usize,
    values: Vec<W>,
    stats: SolveStats,
}

impl<W> DistanceTable<W>
where
    W: Weight,
{
    pub(crate) fn new(source: usize, values: Vec<W>, stats: SolveStats) -> Self {
        DistanceTable { source, values, stats }
    }

    /// Vertex the distances are measured from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices covered, equal to the graph's vertex count
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Counters of the solve that produced this table
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Distance to `vertex`, `None` when unreachable or out of range
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.values.get(vertex).copied().filter(|d| !d.is_infinite())
    }

    /// True if some path leads from the source to `vertex`
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// The raw table, with the infinity sentinel for unreachable vertices
    pub fn raw(&self) -> &[W] {
        &self.values
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.values.iter().filter(|d| !d.is_infinite()).count()
    }

    /// Iterates `(vertex, distance)` in vertex order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<W>)> + '_ {
        (0..self.values.len()).map(move |v| (v, self.get(v)))
    }

    /// Distances in vertex order, `None` for unreachable vertices
    pub fn to_options(&self) -> Vec<Option<W>> {
        self.iter().map(|(_, d)| d).collect()
    }
}

/// Predecessor links of a shortest path tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorTable {
    source: usize,
    links: Vec<Option<usize>>,
}

impl PredecessorTable {
    pub(crate) fn new(source: usize, links: Vec<Option<usize>>) -> Self {
        PredecessorTable { source, links }
    }

    /// Root of the shortest path tree
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices covered, equal to the graph's vertex count
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Vertex preceding `vertex` on its shortest path; `None` for the source and unreached vertices
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.links.get(vertex).copied().flatten()
    }

    /// Path from the source to `target`, both included. Empty if `target` is unreachable.
    pub fn reconstruct_path(&self, target: usize) -> Result<Vec<usize>> {
        reconstruct_path(self, target)
    }
}

/// Walks predecessor links back from `target` and returns the path
/// source-first. Returns an empty path when the chain does not reach the source.
pub fn reconstruct_path(predecessors: &PredecessorTable, target: usize) -> Result<Vec<usize>> {
    if target >= predecessors.len() {
        return Err(Error::OutOfRange {
            vertex: target,
            vertex_count: predecessors.len(),
        });
    }

    let mut path = vec![target];
    let mut current = target;

    while current != predecessors.source {
        match predecessors.predecessor(current) {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => return Ok(Vec::new()),
        }

        // A walk longer than the vertex count means the links contain a cycle
        if path.len() > predecessors.len() {
            return Ok(Vec::new());
        }
    }

    path.reverse();
    Ok(path)
}

/// Total weight of a path, taking the cheapest edge between consecutive
/// vertices. `None` if some step has no edge in `graph` or the sum overflows.
pub fn path_weight<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Weight,
    G: Graph<W>,
{
    path.windows(2).try_fold(W::zero(), |total, step| {
        graph
            .edge_weight(step[0], step[1])
            .and_then(|weight| total.checked_sum(weight))
    })
}

/// Fails with [`Error::NegativeWeight`] on the first negative edge of `graph`
pub fn check_non_negative<W, G>(graph: &G) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    for from in 0..graph.vertex_count() {
        if let Some((to, _)) = graph.neighbors(from)?.find(|(_, weight)| weight.is_negative()) {
            return Err(Error::NegativeWeight { from, to });
        }
    }
    Ok(())
}

/// Trait for single-source shortest path solvers
pub trait ShortestPathSolver<W, G>: Debug
where
    W: Weight,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Shortest distances from `source` to every vertex of `graph`
    fn solve_distances(&self, graph: &G, source: usize) -> Result<DistanceTable<W>>;

    /// Shortest distances plus the predecessor links needed to rebuild paths
    fn solve_with_paths(&self, graph: &G, source: usize) -> Result<(DistanceTable<W>, PredecessorTable)>;
}
