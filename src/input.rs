//! JSON graph descriptions.
//!
//! ```json
//! { "vertex_count": 3, "source": 0,
//!   "edges": [ { "from": 0, "to": 1, "weight": 4 }, { "from": 1, "to": 2, "weight": 1 } ] }
//! ```
//!
//! Indices are read as signed integers so that negative values surface as
//! [`Error::InvalidArgument`] / [`Error::OutOfRange`] instead of parse errors.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};

/// A single directed edge of a [`GraphSpec`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec<W> {
    pub from: i64,
    pub to: i64,
    pub weight: W,
}

/// Serializable description of a graph and, optionally, the source to solve from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec<W> {
    pub vertex_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<i64>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<EdgeSpec<W>>,
}

impl<W> GraphSpec<W>
where
    W: Weight + for<'de> Deserialize<'de>,
{
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("reading graph from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }

    /// Builds the described graph, rejecting negative counts and out-of-range endpoints
    pub fn build(&self) -> Result<DirectedGraph<W>> {
        let mut graph = DirectedGraph::try_new(self.vertex_count)?;
        for edge in &self.edges {
            let from = vertex_index(edge.from, &graph)?;
            let to = vertex_index(edge.to, &graph)?;
            graph.add_edge(from, to, edge.weight)?;
        }
        Ok(graph)
    }

    /// The source vertex, validated against `graph`; defaults to 0
    pub fn source_in(&self, graph: &DirectedGraph<W>) -> Result<usize> {
        vertex_index(self.source.unwrap_or(0), graph)
    }
}

impl GraphSpec<u64> {
    /// Six vertices, nine edges; distances from 0 are `[0, 4, 2, 9, 11, 14]`
    pub fn sample() -> Self {
        let edges = [
            (0, 1, 4),
            (0, 2, 2),
            (1, 2, 1),
            (1, 3, 5),
            (2, 3, 8),
            (2, 4, 10),
            (3, 4, 2),
            (3, 5, 6),
            (4, 5, 3),
        ];
        GraphSpec {
            vertex_count: 6,
            source: Some(0),
            edges: edges
                .iter()
                .map(|&(from, to, weight)| EdgeSpec { from, to, weight })
                .collect(),
        }
    }
}

fn vertex_index<W: Weight>(index: i64, graph: &DirectedGraph<W>) -> Result<usize> {
    match usize::try_from(index) {
        Ok(vertex) => {
            graph.check_vertex(vertex)?;
            Ok(vertex)
        }
        Err(_) => {
            warn!("negative vertex index {} in graph description", index);
            Err(Error::InvalidArgument(format!("vertex index must be non-negative, got {}", index)))
        }
    }
}
