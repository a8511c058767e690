use serde::{Deserialize, Serialize};

use crate::data_structures::Matrix;
use crate::graph::sparse::SparseGraph;
use crate::graph::traits::{check_vertex_count, Graph, MutableGraph, Neighbors, Storage, Weight};
use crate::Result;

/// A directed graph stored as an adjacency matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseGraph<W> {
    /// `weights[(from, to)]`, `None` where there is no edge
    weights: Matrix<Option<W>>,
}

impl<W> DenseGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        check_vertex_count(vertex_count)?;
        Ok(DenseGraph {
            weights: Matrix::new(vertex_count, None),
        })
    }

    /// Creates a graph from a square weight matrix, `matrix[from][to]`
    pub fn from_matrix(matrix: Vec<Vec<Option<W>>>) -> Result<Self> {
        Ok(DenseGraph {
            weights: Matrix::from_rows(matrix)?,
        })
    }

    /// Read-only view of the backing matrix
    pub fn weights(&self) -> &Matrix<Option<W>> {
        &self.weights
    }

    fn cell(&self, from: usize, to: usize) -> Result<Option<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.weights[(from, to)])
    }
}

impl<W> Graph<W> for DenseGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.weights.size()
    }

    fn storage(&self) -> Storage {
        Storage::Dense
    }

    fn edge_count(&self) -> usize {
        self.weights.iter().filter(|weight| weight.is_some()).count()
    }

    fn edge(&self, from: usize, to: usize) -> Result<Option<W>> {
        self.cell(from, to)
    }

    fn try_get_edge(&self, from: usize, to: usize) -> Result<Option<Option<W>>> {
        self.cell(from, to).map(Some)
    }

    fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_, W>> {
        self.check_vertex(vertex)?;
        let row = self.weights.row(vertex).unwrap_or_default();
        Ok(Box::new(
            row.iter()
                .copied()
                .enumerate()
                .filter(move |&(to, _)| to != vertex),
        ))
    }
}

impl<W> MutableGraph<W> for DenseGraph<W>
where
    W: Weight,
{
    fn set_edge(&mut self, from: usize, to: usize, weight: Option<W>) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.weights[(from, to)] = weight;
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.weights[(from, to)].take().is_some())
    }
}

impl<W> From<&SparseGraph<W>> for DenseGraph<W>
where
    W: Weight,
{
    fn from(sparse: &SparseGraph<W>) -> Self {
        let n = sparse.vertex_count();
        let mut weights = Matrix::new(n, None);
        for (from, list) in sparse.adjacency().iter().enumerate() {
            for &(to, weight) in list {
                weights[(from, to)] = weight;
            }
        }
        DenseGraph { weights }
    }
}
