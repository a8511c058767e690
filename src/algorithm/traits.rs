use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Shortest path state of one vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord<W> {
    /// Distance from the source, `None` if the vertex is unreachable
    pub distance: Option<W>,

    /// Predecessor on the shortest path, `None` for the source and unreachable vertices
    pub previous: Option<usize>,
}

impl<W> VertexRecord<W> {
    /// Creates a record from a distance and a predecessor
    pub fn new(distance: Option<W>, previous: Option<usize>) -> Self {
        VertexRecord { distance, previous }
    }
}

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    /// Source vertex ID
    source: usize,

    /// One record per vertex, indexed by vertex
    records: Vec<VertexRecord<W>>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    pub(crate) fn new(source: usize, records: Vec<VertexRecord<W>>) -> Self {
        ShortestPathResult { source, records }
    }

    /// Vertex the distances are measured from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices covered by the result
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the result covers no vertices
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-vertex records, indexed by vertex
    pub fn records(&self) -> &[VertexRecord<W>] {
        &self.records
    }

    /// Distance from the source to `vertex`, `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.records.get(vertex).and_then(|record| record.distance)
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn previous(&self, vertex: usize) -> Option<usize> {
        self.records.get(vertex).and_then(|record| record.previous)
    }

    /// Distances of all vertices, indexed by vertex
    pub fn distances(&self) -> Vec<Option<W>> {
        self.records.iter().map(|record| record.distance).collect()
    }

    /// True if `vertex` has a finite distance from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.records.iter().filter(|record| record.distance.is_some()).count()
    }

    /// Reconstructs the shortest path `from -> to` as a vertex sequence
    /// starting at `from` and ending at `to`.
    ///
    /// Returns an empty path when `from == to`. `from` must be the source the
    /// result was computed for, and `to` must be reachable from it, otherwise
    /// [`Error::InvalidArgument`] or [`Error::NoPathExists`] is returned.
    pub fn path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            return Ok(Vec::new());
        }
        if from != self.source {
            return Err(Error::InvalidArgument(format!(
                "path must start at source {}, got {}",
                self.source, from
            )));
        }
        if self.records[to].distance.is_none() {
            return Err(Error::NoPathExists { from, to });
        }

        let mut path = Vec::new();
        let mut current = Some(to);
        while let Some(vertex) = current {
            // A chain longer than the vertex count can only come from a cycle
            if path.len() == self.records.len() {
                return Err(Error::NoPathExists { from, to });
            }
            path.push(vertex);
            current = self
                .records
                .get(vertex)
                .ok_or(Error::IndexOutOfRange {
                    index: vertex,
                    len: self.records.len(),
                })?
                .previous;
        }

        if path.last() != Some(&from) {
            return Err(Error::NoPathExists { from, to });
        }
        path.reverse();
        Ok(path)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.records.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: vertex,
                len: self.records.len(),
            })
        }
    }
}

impl<W> Index<usize> for ShortestPathResult<W> {
    type Output = VertexRecord<W>;

    fn index(&self, vertex: usize) -> &VertexRecord<W> {
        &self.records[vertex]
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path `from -> to` out of a computed result
    fn get_path(&self, result: &ShortestPathResult<W>, from: usize, to: usize) -> Result<Vec<usize>> {
        result.path(from, to)
    }
}
