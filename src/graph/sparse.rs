use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::data_structures::Matrix;
use crate::graph::dense::DenseGraph;
use crate::graph::traits::{check_vertex_count, Graph, MutableGraph, Neighbors, Storage, Weight};
use crate::{Error, Result};

type AdjacencyLists<W> = Vec<Vec<(usize, Option<W>)>>;

/// A directed graph using adjacency lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparseGraph<W> {
    /// Outgoing edges for each vertex in insertion order: [(target_vertex, weight)]
    adjacency: AdjacencyLists<W>,
}

impl<'de, W> Deserialize<'de> for SparseGraph<W>
where
    W: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Unchecked<T> {
            adjacency: AdjacencyLists<T>,
        }

        let unchecked = Unchecked::deserialize(deserializer)?;
        SparseGraph::from_adjacency(unchecked.adjacency).map_err(D::Error::custom)
    }
}

impl<W> SparseGraph<W> {
    /// Creates a graph from outgoing adjacency lists, `adjacency[from] = [(to, weight)]`.
    ///
    /// Fails when there are no vertices, a target is out of range, or a list
    /// names the same target twice.
    pub fn from_adjacency(adjacency: Vec<Vec<(usize, Option<W>)>>) -> Result<Self> {
        let n = adjacency.len();
        check_vertex_count(n)?;
        for (from, edges) in adjacency.iter().enumerate() {
            for (position, (to, _)) in edges.iter().enumerate() {
                if *to >= n {
                    return Err(Error::IndexOutOfRange { index: *to, len: n });
                }
                if edges[..position].iter().any(|(target, _)| target == to) {
                    return Err(Error::InvalidArgument(format!(
                        "duplicate edge {} -> {}",
                        from, to
                    )));
                }
            }
        }
        Ok(SparseGraph { adjacency })
    }
}

impl<W> SparseGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        check_vertex_count(vertex_count)?;
        Ok(SparseGraph {
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    /// Creates a graph from a square weight matrix, `matrix[from][to]`.
    /// Only present weights become edges.
    pub fn from_matrix(matrix: Vec<Vec<Option<W>>>) -> Result<Self> {
        let weights = Matrix::from_rows(matrix)?;
        Ok(Self::from_weights(&weights))
    }

    /// Outgoing adjacency lists, indexed by vertex
    pub fn adjacency(&self) -> &[Vec<(usize, Option<W>)>] {
        &self.adjacency
    }

    /// Number of entries in the adjacency list of `vertex`
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    fn from_weights(weights: &Matrix<Option<W>>) -> Self {
        let adjacency = weights
            .rows()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, weight)| weight.is_some())
                    .map(|(to, &weight)| (to, weight))
                    .collect::<Vec<_>>()
            })
            .collect();
        SparseGraph { adjacency }
    }

    fn find(&self, from: usize, to: usize) -> Result<Option<Option<W>>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.adjacency[from]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|&(_, weight)| weight))
    }
}

impl<W> Graph<W> for SparseGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn storage(&self) -> Storage {
        Storage::Sparse
    }

    fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|edges| edges.iter().filter(|(_, weight)| weight.is_some()).count())
            .sum()
    }

    fn edge(&self, from: usize, to: usize) -> Result<Option<W>> {
        Ok(self.find(from, to)?.flatten())
    }

    fn try_get_edge(&self, from: usize, to: usize) -> Result<Option<Option<W>>> {
        self.find(from, to)
    }

    fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_, W>> {
        self.check_vertex(vertex)?;
        Ok(Box::new(self.adjacency[vertex].iter().copied()))
    }
}

impl<W> MutableGraph<W> for SparseGraph<W>
where
    W: Weight,
{
    fn set_edge(&mut self, from: usize, to: usize, weight: Option<W>) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        // Check if edge already exists and update it if it does
        let outgoing = &mut self.adjacency[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let outgoing = &mut self.adjacency[from];
        match outgoing.iter().position(|(target, _)| *target == to) {
            // keep insertion order of the remaining neighbors
            Some(index) => Ok(outgoing.remove(index).1.is_some()),
            None => Ok(false),
        }
    }
}

impl<W> From<&DenseGraph<W>> for SparseGraph<W>
where
    W: Weight,
{
    fn from(dense: &DenseGraph<W>) -> Self {
        Self::from_weights(dense.weights())
    }
}
