//! End-to-end scenarios exercising the public API the way callers do.

use std::collections::HashMap;

use graphlink_core::{ComponentGraph, DisjointSet, Distance, GraphErrorCode, bfs};
use indexmap::IndexMap;

#[test]
fn disjoint_set_tracks_merged_groups() {
    let mut sets = DisjointSet::new(10);
    sets.union(1, 2).expect("union 1-2");
    sets.union(3, 4).expect("union 3-4");
    sets.union(2, 3).expect("union 2-3");

    assert!(sets.connected(1, 4).expect("in range"));
    assert!(!sets.connected(1, 5).expect("in range"));

    let groups = sets.groups();
    assert_eq!(groups.len(), 7);
    let merged = groups
        .values()
        .find(|members| members.len() > 1)
        .expect("one merged group");
    assert_eq!(merged, &vec![1, 2, 3, 4]);
}

#[test]
fn disjoint_set_handles_large_chains() {
    let size = 100_000;
    let mut sets = DisjointSet::new(size);
    for node in 1..size {
        sets.union(node, node - 1).expect("in range");
    }
    assert_eq!(sets.set_count(), 1);
    let groups = sets.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.values().next().map(Vec::len), Some(size));
}

#[test]
fn component_graph_reports_components() {
    let mut graph = ComponentGraph::new();
    graph.add_edge(0, 1);
    graph.add_edge(1, 2);
    graph.add_edge(3, 4);
    assert_eq!(graph.connected_components(), vec![vec![0, 1, 2], vec![3, 4]]);

    let mut looped = ComponentGraph::new();
    looped.add_edge(0, 0);
    assert_eq!(looped.connected_components(), vec![vec![0]]);
}

#[test]
fn component_graph_accepts_string_vertices() {
    let mut graph = ComponentGraph::new();
    graph.add_edge("kyiv".to_owned(), "lviv".to_owned());
    graph.add_edge("odesa".to_owned(), "odesa".to_owned());
    graph.add_edge("lviv".to_owned(), "dnipro".to_owned());

    assert_eq!(
        graph.connected_components(),
        vec![
            vec!["dnipro".to_owned(), "kyiv".to_owned(), "lviv".to_owned()],
            vec!["odesa".to_owned()],
        ]
    );
}

#[test]
fn bfs_reports_linear_and_disconnected_distances() {
    let linear: IndexMap<&str, Vec<&str>> = IndexMap::from([
        ("A", vec!["B"]),
        ("B", vec!["C"]),
        ("C", vec!["D"]),
        ("D", vec![]),
    ]);
    let distances = bfs(&linear, &"A").expect("bfs must succeed");
    let hops: Vec<(&str, Option<usize>)> = distances
        .iter()
        .map(|(node, distance)| (*node, distance.hops()))
        .collect();
    assert_eq!(
        hops,
        vec![("A", Some(0)), ("B", Some(1)), ("C", Some(2)), ("D", Some(3))]
    );

    let split: IndexMap<&str, Vec<&str>> = IndexMap::from([
        ("A", vec!["B"]),
        ("B", vec![]),
        ("C", vec!["D"]),
        ("D", vec![]),
    ]);
    let distances = bfs(&split, &"A").expect("bfs must succeed");
    assert_eq!(distances.get(&"A"), Some(Distance::Reached(0)));
    assert_eq!(distances.get(&"B"), Some(Distance::Reached(1)));
    assert_eq!(distances.get(&"C"), Some(Distance::Unreachable));
    assert_eq!(distances.get(&"D"), Some(Distance::Unreachable));
}

#[test]
fn bfs_rejects_bad_input() {
    let empty: HashMap<&str, Vec<&str>> = HashMap::new();
    let err = bfs(&empty, &"A").expect_err("empty graph");
    assert_eq!(err.code(), GraphErrorCode::InvalidArgument);

    let partial: HashMap<&str, Vec<&str>> =
        HashMap::from([("A", vec!["B"]), ("B", vec!["C"])]);
    let err = bfs(&partial, &"Z").expect_err("missing start");
    assert_eq!(err.code(), GraphErrorCode::NotFound);
    assert_eq!(err.to_string(), "node \"Z\" is not present in the graph");
}
