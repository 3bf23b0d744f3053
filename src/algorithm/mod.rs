pub mod traits;
pub mod dijkstra;
pub mod ordered_set;

pub use traits::{
    check_non_negative, path_weight, reconstruct_path, DistanceTable, PredecessorTable,
    Relaxation, ShortestPathSolver, SolveEvent, SolveStats,
};
