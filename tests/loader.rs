use dense_max_flow::loader::{load_graph, load_into, read_graph, write_graph};
use dense_max_flow::maximum_flow::graph::Graph;
use dense_max_flow::{ErrorKind, FlowError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dense-max-flow-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn capacities(graph: &Graph<i64>) -> HashMap<(String, String), i64> {
    graph
        .edges()
        .iter()
        .map(|e| ((graph.vertex_name(e.from).unwrap().to_string(), graph.vertex_name(e.to).unwrap().to_string()), e.weight))
        .collect()
}

#[test]
fn bundled_data() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/data_1.txt");
    let graph: Graph<i64> = load_graph(path).unwrap();
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.num_edges(), 5);
    assert_eq!(graph.maximum_flow("S", "T").unwrap(), 5);
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("dense-max-flow-does-not-exist.txt");
    let err = load_graph::<i64>(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, FlowError::Io { path: ref p, .. } if *p == path));
}

#[test]
fn failed_load_keeps_graph() {
    let good = scratch_file("good.txt", "S T 5\n");
    let bad = scratch_file("bad.txt", "X Y 1\nY Z\n");

    let mut graph = Graph::<i64>::new();
    load_into(&mut graph, &good).unwrap();
    let err = load_into(&mut graph, &bad).unwrap_err();

    assert!(matches!(err, FlowError::TokenCount { line: 2, found: 2 }));
    assert_eq!(graph.vertices(), &["S".to_string(), "T".to_string()]);
    assert_eq!(graph.vertex_index("X"), None);
    assert_eq!(graph.maximum_flow("S", "T").unwrap(), 5);

    fs::remove_file(good).unwrap();
    fs::remove_file(bad).unwrap();
}

#[test]
fn round_trip_through_file() {
    // T is mentioned first here, so indices change on the way back
    let original: Graph<i64> = read_graph("T A 4\nS A 3\nS B 2\nA B 1\nA T 2\nB T 3\n".as_bytes()).unwrap();
    let mut text = Vec::new();
    write_graph(&original, &mut text).unwrap();
    let path = scratch_file("round-trip.txt", std::str::from_utf8(&text).unwrap());

    let reloaded: Graph<i64> = load_graph(&path).unwrap();
    assert_eq!(capacities(&reloaded), capacities(&original));
    assert_eq!(reloaded.maximum_flow("S", "T").unwrap(), original.maximum_flow("S", "T").unwrap());

    fs::remove_file(path).unwrap();
}

#[test]
fn invalid_utf8_is_a_format_error() {
    let path = std::env::temp_dir().join(format!("dense-max-flow-{}-latin1.txt", std::process::id()));
    fs::write(&path, b"S T 5\nS \xff 3\n").unwrap();

    let err = load_graph::<i64>(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, FlowError::InvalidEncoding { line: 2 }));

    fs::remove_file(path).unwrap();
}
