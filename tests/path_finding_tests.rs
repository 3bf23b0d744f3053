use dijkstra_sssp::algorithm::path_weight;
use dijkstra_sssp::graph::generators::generate_grid;
use dijkstra_sssp::{reconstruct_path, Dijkstra, DirectedGraph, Error, Graph, SetDijkstra, ShortestPathSolver};

// Grid where every cell in column `wall_x` except the last row is cut off
fn create_walled_grid(width: usize, height: usize, wall_x: usize) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::new(width * height);
    let blocked = |x: usize, y: usize| x == wall_x && y + 1 < height;

    for y in 0..height {
        for x in 0..width {
            if blocked(x, y) {
                continue;
            }
            let vertex = y * width + x;
            let moves: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
            for (dx, dy) in moves {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !blocked(nx, ny) {
                    graph.add_edge(vertex, ny * width + nx, 1).unwrap();
                }
            }
        }
    }

    graph
}

fn assert_valid_path(graph: &DirectedGraph<u64>, path: &[usize], source: usize, target: usize, distance: u64) {
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    for step in path.windows(2) {
        assert!(graph.has_edge(step[0], step[1]), "Path should only use existing edges");
    }
    assert_eq!(path_weight(graph, path), Some(distance), "Path weight should equal the distance");
}

#[test]
fn test_sample_graph_paths() {
    let graph = DirectedGraph::from_edges(
        6,
        vec![
            (0, 1, 4u64),
            (0, 2, 2),
            (1, 2, 1),
            (1, 3, 5),
            (2, 3, 8),
            (2, 4, 10),
            (3, 4, 2),
            (3, 5, 6),
            (4, 5, 3),
        ],
    )
    .unwrap();

    let (distances, predecessors) = Dijkstra::new().solve_with_paths(&graph, 0).unwrap();

    assert_eq!(reconstruct_path(&predecessors, 0).unwrap(), vec![0]);
    assert_eq!(predecessors.reconstruct_path(3).unwrap(), vec![0, 1, 3]);
    assert_eq!(predecessors.reconstruct_path(5).unwrap(), vec![0, 1, 3, 4, 5]);
    assert_eq!(predecessors.predecessor(0), None);
    assert_eq!(predecessors.predecessor(2), Some(0));

    for v in 0..graph.vertex_count() {
        let path = predecessors.reconstruct_path(v).unwrap();
        assert_valid_path(&graph, &path, 0, v, distances.get(v).unwrap());
    }
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10, 1);
    let source = 0;
    let target = 99;

    for solver in [&Dijkstra::new() as &dyn ShortestPathSolver<u64, DirectedGraph<u64>>, &SetDijkstra::new()] {
        let (distances, predecessors) = solver.solve_with_paths(&graph, source).unwrap();
        assert_eq!(distances.get(target), Some(18), "{} should find a path", solver.name());

        let path = predecessors.reconstruct_path(target).unwrap();
        assert_eq!(path.len(), 19);
        assert_valid_path(&graph, &path, source, target, 18);
    }
}

#[test]
fn test_path_finding_with_obstacles() {
    let graph = create_walled_grid(10, 10, 5);
    let source = 0;
    let target = 9;

    let (distances, predecessors) = Dijkstra::new().solve_with_paths(&graph, source).unwrap();

    // Down to the last row, across, and back up
    assert_eq!(distances.get(target), Some(27));
    let path = predecessors.reconstruct_path(target).unwrap();
    assert_valid_path(&graph, &path, source, target, 27);
    assert!(path.contains(&95), "Path should pass the gap in the wall");
}

#[test]
fn test_unreachable_target_has_empty_path() {
    let mut graph = DirectedGraph::new(3);
    graph.add_edge(0, 1, 1u64).unwrap();
    graph.add_edge(2, 0, 1).unwrap();

    let (distances, predecessors) = SetDijkstra::new().solve_with_paths(&graph, 0).unwrap();

    assert_eq!(distances.get(2), None);
    assert_eq!(predecessors.predecessor(2), None);
    assert!(predecessors.reconstruct_path(2).unwrap().is_empty());
    assert_eq!(predecessors.reconstruct_path(1).unwrap(), vec![0, 1]);
}

#[test]
fn test_reconstruct_out_of_range_target() {
    let graph: DirectedGraph<u64> = DirectedGraph::new(2);
    let (_, predecessors) = Dijkstra::new().solve_with_paths(&graph, 1).unwrap();

    assert!(matches!(
        predecessors.reconstruct_path(2),
        Err(Error::OutOfRange { vertex: 2, vertex_count: 2 })
    ));
    assert_eq!(predecessors.reconstruct_path(1).unwrap(), vec![1]);
}

#[test]
fn test_zero_weight_cycle_paths_terminate() {
    let mut graph = DirectedGraph::new(3);
    graph.add_edge(0, 1, 0u64).unwrap();
    graph.add_edge(1, 2, 0).unwrap();
    graph.add_edge(2, 0, 0).unwrap();
    graph.add_edge(2, 1, 0).unwrap();

    let (distances, predecessors) = Dijkstra::new().solve_with_paths(&graph, 0).unwrap();

    assert_eq!(distances.raw(), &[0, 0, 0]);
    assert_eq!(predecessors.reconstruct_path(2).unwrap(), vec![0, 1, 2]);
}
