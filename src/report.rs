//! Human-readable shortest path reports, one line per vertex in index order.

use std::io::{self, Write};

use crate::algorithm::{DistanceTable, PredecessorTable};
use crate::graph::Weight;
use crate::Result;

const UNREACHABLE: &str = "unreachable";

/// Writes the distance from the table's source to every vertex
pub fn write_shortest_paths<W, O>(out: &mut O, distances: &DistanceTable<W>) -> Result<()>
where
    W: Weight,
    O: Write,
{
    writeln!(out, "Shortest distances from vertex {}:", distances.source())?;
    for (vertex, distance) in distances.iter() {
        match distance {
            Some(distance) => writeln!(out, "Vertex {}: {}", vertex, distance)?,
            None => writeln!(out, "Vertex {}: {}", vertex, UNREACHABLE)?,
        }
    }
    Ok(())
}

/// Same as [`write_shortest_paths`], followed by the path to each reachable vertex
pub fn write_paths<W, O>(out: &mut O, distances: &DistanceTable<W>, predecessors: &PredecessorTable) -> Result<()>
where
    W: Weight,
    O: Write,
{
    writeln!(out, "Shortest paths from vertex {}:", distances.source())?;
    for (vertex, distance) in distances.iter() {
        let Some(distance) = distance else {
            writeln!(out, "Vertex {}: {}", vertex, UNREACHABLE)?;
            continue;
        };

        let path = predecessors
            .reconstruct_path(vertex)?
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        writeln!(out, "Vertex {}: {} via {}", vertex, distance, path)?;
    }
    Ok(())
}

/// Prints the report of [`write_shortest_paths`] to stdout
pub fn print_shortest_paths<W: Weight>(distances: &DistanceTable<W>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_shortest_paths(&mut out, distances)
}

/// Renders the report of [`write_shortest_paths`] into a string
pub fn format_shortest_paths<W: Weight>(distances: &DistanceTable<W>) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_shortest_paths(&mut buffer, distances);
    String::from_utf8_lossy(&buffer).into_owned()
}
