//! Dijkstra SSSP - single-source shortest paths on weighted directed graphs
//!
//! A graph is built from explicit edges over vertices `0..V`, then handed
//! read-only to a solver which computes the shortest distance from one
//! source vertex to every other vertex, optionally keeping predecessor
//! links so that the path to each vertex can be reconstructed.
//!
//! Edge weights must be non-negative. This is a precondition of the
//! algorithm, not something it detects, unless weight validation is
//! switched on explicitly.

pub mod algorithm;
pub mod batch;
pub mod data_structures;
pub mod graph;
pub mod input;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, ordered_set::SetDijkstra, reconstruct_path, DistanceTable,
    PredecessorTable, ShortestPathSolver, SolveStats,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Distance to vertex {vertex} does not fit the weight type")]
    DistanceOverflow { vertex: usize },

    #[error("Negative edge weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph description: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
