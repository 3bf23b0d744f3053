//! Independent solves from several sources against one shared graph.
//!
//! The graph is only read, so the solves run in parallel on the rayon pool.
//! Each solve allocates its own tables and frontier.

use log::debug;
use rayon::prelude::*;

use crate::algorithm::{DistanceTable, PredecessorTable, ShortestPathSolver};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Distance tables for every vertex of `sources`, in the same order
pub fn solve_from_sources<W, G, S>(solver: &S, graph: &G, sources: &[usize]) -> Result<Vec<DistanceTable<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
    S: ShortestPathSolver<W, G> + Sync,
{
    for &source in sources {
        graph.check_vertex(source)?;
    }
    debug!("{}: solving from {} sources", solver.name(), sources.len());

    sources
        .par_iter()
        .map(|&source| solver.solve_distances(graph, source))
        .collect()
}

/// Like [`solve_from_sources`], keeping predecessor links for path reconstruction
pub fn solve_paths_from_sources<W, G, S>(
    solver: &S,
    graph: &G,
    sources: &[usize],
) -> Result<Vec<(DistanceTable<W>, PredecessorTable)>>
where
    W: Weight,
    G: Graph<W> + Sync,
    S: ShortestPathSolver<W, G> + Sync,
{
    for &source in sources {
        graph.check_vertex(source)?;
    }
    debug!("{}: solving paths from {} sources", solver.name(), sources.len());

    sources
        .par_iter()
        .map(|&source| solver.solve_with_paths(graph, source))
        .collect()
}
