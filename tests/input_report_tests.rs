use dijkstra_sssp::input::GraphSpec;
use dijkstra_sssp::report::{format_shortest_paths, write_paths, write_shortest_paths};
use dijkstra_sssp::{Dijkstra, DirectedGraph, Error, Graph, ShortestPathSolver};
use ordered_float::OrderedFloat;

#[test]
fn test_sample_description() {
    let spec = GraphSpec::sample();
    let graph = spec.build().unwrap();
    let source = spec.source_in(&graph).unwrap();

    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 9);

    let distances = Dijkstra::new().solve_distances(&graph, source).unwrap();
    assert_eq!(distances.raw(), &[0, 4, 2, 9, 11, 14]);
}

#[test]
fn test_parse_json_description() {
    let json = r#"{
        "vertex_count": 3,
        "source": 1,
        "edges": [
            { "from": 1, "to": 2, "weight": 7 },
            { "from": 2, "to": 0, "weight": 3 }
        ]
    }"#;

    let spec: GraphSpec<u64> = GraphSpec::from_json(json).unwrap();
    let graph = spec.build().unwrap();
    let source = spec.source_in(&graph).unwrap();

    assert_eq!(source, 1);
    let distances = Dijkstra::new().solve_distances(&graph, source).unwrap();
    assert_eq!(distances.raw(), &[10, 0, 7]);
}

#[test]
fn test_description_defaults() {
    let spec: GraphSpec<OrderedFloat<f64>> = GraphSpec::from_json(r#"{ "vertex_count": 2 }"#).unwrap();
    let graph = spec.build().unwrap();

    assert_eq!(spec.source, None);
    assert_eq!(spec.source_in(&graph).unwrap(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_description_rejects_bad_input() {
    let negative_count: GraphSpec<u64> = GraphSpec::from_json(r#"{ "vertex_count": -2 }"#).unwrap();
    assert!(matches!(negative_count.build(), Err(Error::InvalidArgument(_))));

    let bad_edge: GraphSpec<u64> =
        GraphSpec::from_json(r#"{ "vertex_count": 2, "edges": [ { "from": 0, "to": 2, "weight": 1 } ] }"#).unwrap();
    assert!(matches!(bad_edge.build(), Err(Error::OutOfRange { vertex: 2, vertex_count: 2 })));

    let negative_vertex: GraphSpec<u64> =
        GraphSpec::from_json(r#"{ "vertex_count": 2, "edges": [ { "from": -1, "to": 0, "weight": 1 } ] }"#).unwrap();
    assert!(matches!(negative_vertex.build(), Err(Error::InvalidArgument(_))));

    let bad_source: GraphSpec<u64> = GraphSpec::from_json(r#"{ "vertex_count": 2, "source": 2 }"#).unwrap();
    let graph = bad_source.build().unwrap();
    assert!(matches!(bad_source.source_in(&graph), Err(Error::OutOfRange { vertex: 2, .. })));

    assert!(matches!(GraphSpec::<u64>::from_json("{ not json"), Err(Error::Parse(_))));
    assert!(matches!(
        GraphSpec::<u64>::from_path("/nonexistent/graph.json"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_description_serializes_back() {
    let spec = GraphSpec::sample();
    let json = serde_json::to_string(&spec).unwrap();
    let parsed: GraphSpec<u64> = GraphSpec::from_json(&json).unwrap();

    assert_eq!(parsed, spec);
}

#[test]
fn test_report_one_line_per_vertex() {
    let mut graph = DirectedGraph::new(4);
    graph.add_edge(0, 1, 4u64).unwrap();
    graph.add_edge(1, 2, 1).unwrap();

    let distances = Dijkstra::new().solve_distances(&graph, 0).unwrap();
    let report = format_shortest_paths(&distances);

    assert_eq!(
        report,
        "Shortest distances from vertex 0:\n\
         Vertex 0: 0\n\
         Vertex 1: 4\n\
         Vertex 2: 5\n\
         Vertex 3: unreachable\n"
    );

    let mut buffer = Vec::new();
    write_shortest_paths(&mut buffer, &distances).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), report);
}

#[test]
fn test_report_with_paths() {
    let mut graph = DirectedGraph::new(3);
    graph.add_edge(0, 1, 2u64).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    graph.add_edge(0, 2, 9).unwrap();

    let (distances, predecessors) = Dijkstra::new().solve_with_paths(&graph, 1).unwrap();
    let mut buffer = Vec::new();
    write_paths(&mut buffer, &distances, &predecessors).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "Shortest paths from vertex 1:\n\
         Vertex 0: unreachable\n\
         Vertex 1: 0 via 1\n\
         Vertex 2: 3 via 1 -> 2\n"
    );
}
