pub mod dijkstra;
pub mod distance;
pub mod floyd_warshall;
pub mod traits;

pub use floyd_warshall::{AllPairsResult, DistanceMatrix, FloydWarshall, NextHopMatrix};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult, VertexRecord};
