use std::fmt::{self, Debug};

use num_traits::Zero;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Numeric edge weight.
///
/// Implemented for the primitive integers, `f32`/`f64` and their
/// `ordered_float::OrderedFloat` wrappers. Weights are always carried as
/// `Option<W>`, where `None` means "no edge".
pub trait Weight: Copy + Debug + PartialOrd + Zero {
    /// `self + other`, or `None` when the sum does not fit in the type
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

// Float sums saturate at infinity instead of failing
macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_weight!(f32, f64, OrderedFloat<f32>, OrderedFloat<f64>);

/// How a graph stores its edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Storage {
    /// Adjacency matrix: every pair is addressable, neighbor enumeration
    /// reports all other vertices
    Dense,
    /// Adjacency lists: only explicitly written edges exist
    Sparse,
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Storage::Dense => write!(f, "dense"),
            Storage::Sparse => write!(f, "sparse"),
        }
    }
}

/// Iterator over `(neighbor, weight)` pairs of one vertex
pub type Neighbors<'a, W> = Box<dyn Iterator<Item = (usize, Option<W>)> + 'a>;

/// Trait representing a fixed-size weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the storage strategy backing this graph
    fn storage(&self) -> Storage;

    /// Returns the number of edges carrying a present weight
    fn edge_count(&self) -> usize;

    /// Gets the weight of the edge `from -> to`, `None` when there is no edge
    fn edge(&self, from: usize, to: usize) -> Result<Option<W>>;

    /// Looks the edge up in the store.
    ///
    /// The outer `Option` says whether the store holds an entry for the pair at
    /// all; the inner one is the stored weight. A dense store always holds an
    /// entry, even when its weight is absent.
    fn try_get_edge(&self, from: usize, to: usize) -> Result<Option<Option<W>>>;

    /// Returns the candidate neighbors of a vertex with their weights.
    ///
    /// Callers must check the weight: a dense store yields every other vertex
    /// whether or not an edge exists.
    fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_, W>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there is an edge with a present weight between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        matches!(self.edge(from, to), Ok(Some(_)))
    }

    /// Fails with [`Error::IndexOutOfRange`] unless `vertex` exists
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: vertex,
                len: self.vertex_count(),
            })
        }
    }
}

/// Trait for writing edges of a graph. The vertex set never changes.
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Writes the weight of `from -> to`; `None` marks the edge absent
    fn set_edge(&mut self, from: usize, to: usize, weight: Option<W>) -> Result<()>;

    /// Removes an edge, returning whether a present weight was removed
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool>;

    /// Adds a directed edge, overwriting any existing weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.set_edge(from, to, Some(weight))
    }

    /// Adds the edge in both directions
    fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }
}

/// Validates a requested vertex count
pub(crate) fn check_vertex_count(vertex_count: usize) -> Result<()> {
    if vertex_count == 0 {
        return Err(Error::InvalidArgument(
            "vertex count must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
