use std::fmt::Debug;

use crate::graph::Weight;
use crate::{Error, Result};

/// Trait representing a weighted directed graph with vertices `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Iterator over the outgoing `(target, weight)` pairs of one vertex.
    /// Cloning it restarts the traversal from the current position.
    type Neighbors<'a>: Iterator<Item = (usize, W)> + Clone
    where
        Self: 'a;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of `vertex` in insertion order
    fn neighbors(&self, vertex: usize) -> Result<Self::Neighbors<'_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Fails with [`Error::OutOfRange`] unless `vertex` exists
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Returns true if there's at least one edge from `from` to `to`
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the smallest weight among the edges from `from` to `to`
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .ok()?
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
