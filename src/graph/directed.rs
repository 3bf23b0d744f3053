use std::slice;

use log::warn;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// A directed multigraph stored as one adjacency list per vertex
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: adjacency[u] = [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`DirectedGraph::new`], for vertex counts coming from signed input.
    /// Fails with [`Error::InvalidArgument`] when the count is negative.
    pub fn try_new(vertex_count: i64) -> Result<Self> {
        let count = usize::try_from(vertex_count).map_err(|_| {
            Error::InvalidArgument(format!("vertex count must be non-negative, got {}", vertex_count))
        })?;
        Ok(Self::new(count))
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Appends a directed edge `from -> to`.
    ///
    /// Parallel edges and self-loops are kept as given. Weights must be
    /// non-negative for solver results to be meaningful; a negative weight
    /// is stored anyway and only logged.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if weight.is_negative() {
            warn!("negative weight {} on edge {} -> {}", weight, from, to);
        }

        self.adjacency[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the first edge with a negative weight, if any
    pub fn find_negative_edge(&self) -> Option<(usize, usize, W)> {
        self.edges().find(|(_, _, weight)| weight.is_negative())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.find_negative_edge().is_none()
    }

    /// Iterates over every edge as `(from, to, weight)`, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    type Neighbors<'a> = Neighbors<'a, W> where Self: 'a;

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_, W>> {
        self.check_vertex(vertex)?;
        Ok(Neighbors {
            inner: self.adjacency[vertex].iter(),
        })
    }
}

/// Outgoing edges of a single vertex, see [`Graph::neighbors`]
#[derive(Debug, Clone)]
pub struct Neighbors<'a, W> {
    inner: slice::Iter<'a, (usize, W)>,
}

impl<'a, W: Copy> Iterator for Neighbors<'a, W> {
    type Item = (usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, W: Copy> ExactSizeIterator for Neighbors<'a, W> {}
