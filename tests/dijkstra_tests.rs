mod common;

use graph_paths::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use graph_paths::graph::generators::generate_random;
use graph_paths::{DenseGraph, Dijkstra, Error, Graph, MutableGraph, Selection, SparseGraph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{
    example_dense, example_sparse, path_weight, EXAMPLE_DISTANCES, EXAMPLE_PREDECESSORS,
};

fn assert_example_result(result: &ShortestPathResult<i32>) {
    assert_eq!(result.distances(), EXAMPLE_DISTANCES.to_vec());
    let predecessors: Vec<Option<usize>> = (0..6).map(|v| result.previous(v)).collect();
    assert_eq!(predecessors, EXAMPLE_PREDECESSORS.to_vec());
}

#[test]
fn test_dense_graph() {
    let result = Dijkstra::new().compute_shortest_paths(&example_dense(), 0).unwrap();
    assert_example_result(&result);
}

#[test]
fn test_sparse_graph() {
    let result = Dijkstra::new().compute_shortest_paths(&example_sparse(), 0).unwrap();
    assert_example_result(&result);
}

#[test]
fn test_forced_selection_modes_agree() {
    for selection in [Selection::Auto, Selection::LinearScan, Selection::Heap] {
        let dijkstra = Dijkstra::new().with_selection(selection);
        assert_eq!(dijkstra.selection(), selection);
        assert_example_result(&dijkstra.compute_shortest_paths(&example_dense(), 0).unwrap());
        assert_example_result(&dijkstra.compute_shortest_paths(&example_sparse(), 0).unwrap());
    }
}

#[test]
fn test_source_record() {
    let graph = example_sparse();
    for source in 0..graph.vertex_count() {
        let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.source(), source);
        assert_eq!(result[source].distance, Some(0));
        assert_eq!(result[source].previous, None);
        assert_eq!(result.len(), graph.vertex_count());
    }
}

#[test]
fn test_source_out_of_range() {
    let dijkstra = Dijkstra::new();
    let graph = example_dense();

    assert_eq!(
        dijkstra.compute_shortest_paths(&graph, 6),
        Err(Error::IndexOutOfRange { index: 6, len: 6 })
    );
    assert!(matches!(
        dijkstra.compute_shortest_paths(&example_sparse(), usize::MAX),
        Err(Error::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_path_reconstruction() {
    let result = Dijkstra::new().compute_shortest_paths(&example_dense(), 0).unwrap();

    assert_eq!(result.path(0, 4).unwrap(), vec![0, 2, 5, 4]);
    assert_eq!(result.path(0, 3).unwrap(), vec![0, 2, 3]);
    assert_eq!(result.path(0, 1).unwrap(), vec![0, 1]);
    for vertex in 0..6 {
        assert!(result.path(vertex, vertex).unwrap().is_empty());
    }

    let dijkstra = Dijkstra::new();
    let path = <Dijkstra as ShortestPathAlgorithm<i32, DenseGraph<i32>>>::get_path(
        &dijkstra, &result, 0, 5,
    );
    assert_eq!(path.unwrap(), vec![0, 2, 5]);
}

#[test]
fn test_path_must_start_at_source() {
    let result = Dijkstra::new().compute_shortest_paths(&example_dense(), 0).unwrap();
    assert!(matches!(result.path(1, 4), Err(Error::InvalidArgument(_))));
    assert!(matches!(result.path(0, 9), Err(Error::IndexOutOfRange { .. })));
}

#[test]
fn test_unreachable_vertices() {
    let mut graph = SparseGraph::new(4).unwrap();
    graph.add_edge(0, 1, 2u32).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    // 3 only has an outgoing edge
    graph.add_edge(3, 0, 1).unwrap();

    for selection in [Selection::LinearScan, Selection::Heap] {
        let result = Dijkstra::new()
            .with_selection(selection)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(result.distances(), vec![Some(0), Some(2), Some(5), None]);
        assert_eq!(result.previous(3), None);
        assert!(!result.is_reachable(3));
        assert_eq!(result.reachable_count(), 3);
        assert_eq!(result.path(0, 3), Err(Error::NoPathExists { from: 0, to: 3 }));
    }
}

#[test]
fn test_single_vertex_graph() {
    let dense: DenseGraph<u8> = DenseGraph::new(1).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&dense, 0).unwrap();
    assert_eq!(result.distances(), vec![Some(0)]);
    assert!(result.path(0, 0).unwrap().is_empty());
}

#[test]
fn test_absent_diagonal_is_ignored() {
    let mut graph = DenseGraph::new(3).unwrap();
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(1, 2, 5).unwrap();
    graph.add_edge(0, 2, 20).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances(), vec![Some(0), Some(5), Some(10)]);
    assert_eq!(result.path(0, 2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = SparseGraph::new(3).unwrap();
    graph.add_edge(0, 1, 0).unwrap();
    graph.add_edge(1, 2, 0).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances(), vec![Some(0), Some(0), Some(0)]);
    assert_eq!(result.path(0, 2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph = SparseGraph::new(3).unwrap();
    graph.add_edge(0, 1, 4).unwrap();
    graph.add_edge(1, 2, -1).unwrap();

    assert_eq!(
        Dijkstra::new().compute_shortest_paths(&graph, 0),
        Err(Error::NegativeWeight { from: 1, to: 2 })
    );
    let dense = DenseGraph::from(&graph);
    assert_eq!(
        Dijkstra::new().compute_shortest_paths(&dense, 0),
        Err(Error::NegativeWeight { from: 1, to: 2 })
    );
}

#[test]
fn test_distance_too_large_for_the_weight_type() {
    let mut graph = SparseGraph::new(3).unwrap();
    graph.add_edge(0, 1, 200u8).unwrap();
    graph.add_edge(1, 2, 100).unwrap();

    for selection in [Selection::LinearScan, Selection::Heap] {
        let dijkstra = Dijkstra::new().with_selection(selection);
        assert_eq!(
            dijkstra.compute_shortest_paths(&graph, 0),
            Err(Error::DistanceOverflow { from: 0, to: 2 })
        );
        assert_eq!(
            dijkstra.compute_shortest_paths(&DenseGraph::from(&graph), 0),
            Err(Error::DistanceOverflow { from: 0, to: 2 })
        );
    }
}

#[test]
fn test_overflowing_detour_is_ignored() {
    let mut graph = SparseGraph::new(4).unwrap();
    graph.add_edge(0, 1, 200u8).unwrap();
    graph.add_edge(1, 2, 100).unwrap();
    graph.add_edge(0, 2, 250).unwrap();
    graph.add_edge(1, 3, 55).unwrap();

    for selection in [Selection::LinearScan, Selection::Heap] {
        let result = Dijkstra::new()
            .with_selection(selection)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(result.distances(), vec![Some(0), Some(200), Some(250), Some(u8::MAX)]);
        assert_eq!(result.path(0, 2).unwrap(), vec![0, 2]);
        assert_eq!(result.path(0, 3).unwrap(), vec![0, 1, 3]);
    }
}

#[test]
fn test_float_weights() {
    let mut graph = SparseGraph::new(3).unwrap();
    graph.add_edge(0, 1, OrderedFloat(0.5)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(0.25)).unwrap();
    graph.add_edge(0, 2, OrderedFloat(1.0)).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(2), Some(OrderedFloat(0.75)));
    assert_eq!(result.previous(2), Some(1));
}

#[test]
fn test_trait_object_graph() {
    let graphs: Vec<Box<dyn Graph<i32>>> = vec![
        Box::new(example_dense()) as Box<dyn Graph<i32>>,
        Box::new(example_sparse()) as Box<dyn Graph<i32>>,
    ];
    for graph in &graphs {
        let result = Dijkstra::new().compute_shortest_paths(&**graph, 0).unwrap();
        assert_example_result(&result);
    }
}

#[test]
fn test_dense_and_sparse_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(17);
    for &(n, edge_factor) in &[(1, 0.0), (2, 1.0), (10, 1.5), (40, 3.0), (80, 0.8)] {
        let sparse = generate_random(&mut rng, n, edge_factor, 1..20).unwrap();
        let dense = DenseGraph::from(&sparse);

        for source in 0..n {
            let from_sparse = Dijkstra::new().compute_shortest_paths(&sparse, source).unwrap();
            let from_dense = Dijkstra::new().compute_shortest_paths(&dense, source).unwrap();
            assert_eq!(from_sparse.distances(), from_dense.distances());

            for result in [&from_sparse, &from_dense] {
                for target in 0..n {
                    match result.distance(target) {
                        Some(distance) if target == source => assert_eq!(distance, 0),
                        Some(distance) => {
                            let path = result.path(source, target).unwrap();
                            assert_eq!(path.first(), Some(&source));
                            assert_eq!(path.last(), Some(&target));
                            assert_eq!(path_weight(&sparse, &path), distance);
                        }
                        None => assert!(result.path(source, target).is_err()),
                    }
                }
            }
        }
    }
}

#[test]
fn test_result_is_serializable() {
    let result = Dijkstra::new().compute_shortest_paths(&example_sparse(), 0).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], 0);
    assert_eq!(json["records"][4]["distance"], 20);
    assert_eq!(json["records"][4]["previous"], 5);
    assert!(json["records"][0]["previous"].is_null());
}
