#![allow(dead_code)]

use graph_paths::{DenseGraph, Graph, MutableGraph, SparseGraph};

/// Undirected edges of the classic six-vertex example graph
pub const EXAMPLE_EDGES: [(usize, usize, i32); 9] = [
    (0, 1, 7),
    (0, 2, 9),
    (0, 5, 14),
    (1, 2, 10),
    (1, 3, 15),
    (2, 3, 11),
    (2, 5, 2),
    (3, 4, 6),
    (4, 5, 9),
];

pub const EXAMPLE_DISTANCES: [Option<i32>; 6] =
    [Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)];

pub const EXAMPLE_PREDECESSORS: [Option<usize>; 6] = [None, Some(0), Some(0), Some(2), Some(5), Some(2)];

/// The example graph as a matrix with a zero diagonal
pub fn example_dense() -> DenseGraph<i32> {
    const N: Option<i32> = None;
    DenseGraph::from_matrix(vec![
        vec![Some(0), Some(7), Some(9), N, N, Some(14)],
        vec![Some(7), Some(0), Some(10), Some(15), N, N],
        vec![Some(9), Some(10), Some(0), Some(11), N, Some(2)],
        vec![N, Some(15), Some(11), Some(0), Some(6), N],
        vec![N, N, N, Some(6), Some(0), Some(9)],
        vec![Some(14), N, Some(2), N, Some(9), Some(0)],
    ])
    .unwrap()
}

/// The example graph as adjacency lists, both directions written explicitly
pub fn example_sparse() -> SparseGraph<i32> {
    let mut graph = SparseGraph::new(6).unwrap();
    for (a, b, weight) in EXAMPLE_EDGES {
        graph.add_undirected_edge(a, b, weight).unwrap();
    }
    graph
}

/// Variant of the example where 1-3 costs 14; every shortest path in it is unique
pub fn unique_paths_dense() -> DenseGraph<i32> {
    let mut graph = example_dense();
    graph.add_undirected_edge(1, 3, 14).unwrap();
    graph
}

/// Sums edge weights along a path, panicking on a missing edge
pub fn path_weight<G: Graph<u64>>(graph: &G, path: &[usize]) -> u64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edge(pair[0], pair[1])
                .unwrap()
                .unwrap_or_else(|| panic!("no edge {} -> {}", pair[0], pair[1]))
        })
        .sum()
}
