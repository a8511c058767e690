//! Graph Paths - shortest path computation over dense or sparse weighted graphs
//!
//! The crate answers two questions on a weighted directed graph with
//! non-negative (or absent) edge weights:
//!
//! * single-source shortest paths with [`Dijkstra`], which scans linearly over a
//!   dense store and switches to a binary-heap fringe over a sparse store;
//! * all-pairs shortest paths with [`FloydWarshall`], which keeps a next-hop
//!   matrix for path reconstruction.
//!
//! An absent edge weight (`None`) means "no edge" and behaves as positive
//! infinity in every distance comparison.
//!
//! ```
//! use graph_paths::{DenseGraph, Dijkstra, ShortestPathAlgorithm};
//!
//! let graph = DenseGraph::from_matrix(vec![
//!     vec![Some(0), Some(4), None],
//!     vec![None, Some(0), Some(1)],
//!     vec![Some(2), None, Some(0)],
//! ])
//! .unwrap();
//!
//! let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
//! assert_eq!(result.distance(2), Some(5));
//! assert_eq!(result.path(0, 2).unwrap(), vec![0, 1, 2]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, Selection},
    floyd_warshall::{AllPairsResult, FloydWarshall},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::{BinaryHeap, PriorityQueue};
pub use graph::{DenseGraph, Graph, MutableGraph, SparseGraph, Storage, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} is out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Collection is empty")]
    EmptyCollection,

    #[error("No path exists from {from} to {to}")]
    NoPathExists { from: usize, to: usize },

    #[error("Negative edge weight: from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Shortest distance from {from} to {to} does not fit in the weight type")]
    DistanceOverflow { from: usize, to: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
