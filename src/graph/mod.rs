pub mod dense;
pub mod generators;
pub mod sparse;
pub mod traits;

pub use dense::DenseGraph;
pub use sparse::SparseGraph;
pub use traits::{Graph, MutableGraph, Neighbors, Storage, Weight};
