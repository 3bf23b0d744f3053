pub mod traits;
pub mod directed;
pub mod generators;
pub mod weight;

pub use traits::Graph;
pub use directed::{DirectedGraph, Neighbors};
pub use weight::Weight;
