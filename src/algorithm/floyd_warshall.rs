use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::distance;
use crate::data_structures::Matrix;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// `distances[(i, j)]` is the shortest distance from `i` to `j`, `None` if unreachable
pub type DistanceMatrix<W> = Matrix<Option<W>>;

/// For every pair `(i, j)`, the vertex to step to first when travelling from
/// `i` to `j`, `None` where `j` is unreachable from `i`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHopMatrix {
    next: Matrix<Option<usize>>,
}

impl NextHopMatrix {
    /// Number of vertices the matrix covers
    pub fn vertex_count(&self) -> usize {
        self.next.size()
    }

    /// First vertex after `from` on the way to `to`, `None` if there is no
    /// path or either index is out of range
    pub fn next_hop(&self, from: usize, to: usize) -> Option<usize> {
        self.next.get(from, to).copied().flatten()
    }

    /// Walks the next hops from `from` until `to`, returning every visited
    /// vertex: `from` first, `to` last. Empty when `from == to`.
    ///
    /// Fails with [`Error::NoPathExists`] when a hop is missing or the walk
    /// does not arrive within `vertex_count` steps.
    pub fn path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        let n = self.vertex_count();
        for vertex in [from, to] {
            if vertex >= n {
                return Err(Error::IndexOutOfRange { index: vertex, len: n });
            }
        }

        let mut path = Vec::new();
        if from == to {
            return Ok(path);
        }

        let mut current = from;
        while current != to {
            if path.len() == n {
                return Err(Error::NoPathExists { from, to });
            }
            path.push(current);
            current = self
                .next_hop(current, to)
                .ok_or(Error::NoPathExists { from, to })?;
        }
        path.push(to);
        Ok(path)
    }
}

/// Shortest distances and next hops between every pair of vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairsResult<W> {
    distances: DistanceMatrix<W>,
    next: NextHopMatrix,
}

impl<W> AllPairsResult<W>
where
    W: Weight,
{
    /// Number of vertices the result covers
    pub fn vertex_count(&self) -> usize {
        self.distances.size()
    }

    /// Shortest distance from `from` to `to`, `None` if unreachable or out of range
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.distances.get(from, to).copied().flatten()
    }

    /// Distances from `from` to every vertex
    pub fn row(&self, from: usize) -> Option<&[Option<W>]> {
        self.distances.row(from)
    }

    /// First vertex after `from` on the shortest path to `to`
    pub fn next_hop(&self, from: usize, to: usize) -> Option<usize> {
        self.next.next_hop(from, to)
    }

    /// The full distance matrix
    pub fn distances(&self) -> &DistanceMatrix<W> {
        &self.distances
    }

    /// The next-hop matrix used for path reconstruction
    pub fn next(&self) -> &NextHopMatrix {
        &self.next
    }

    /// Reconstructs the shortest path `from -> to`, failing with
    /// [`Error::NoPathExists`] when `to` is unreachable from `from`
    pub fn path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        self.next.path(from, to)
    }
}

/// Floyd-Warshall all-pairs shortest paths, O(V^3) time and O(V^2) space
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall {
    zero_diagonal: bool,
}

impl FloydWarshall {
    /// Creates an instance that reads the diagonal from the graph
    pub fn new() -> Self {
        FloydWarshall::default()
    }

    /// Seed `distance[i][i]` with zero instead of reading the diagonal from the graph
    pub fn with_zero_diagonal(mut self, zero_diagonal: bool) -> Self {
        self.zero_diagonal = zero_diagonal;
        self
    }

    /// Computes shortest distances and next hops between all pairs of vertices.
    ///
    /// Every pair is read through [`Graph::edge`], which suits a dense store;
    /// a sparse store gives the same answer at the cost of a list lookup per pair.
    pub fn compute<W, G>(&self, graph: &G) -> Result<AllPairsResult<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        let n = graph.vertex_count();
        debug!("Floyd-Warshall over {} {} vertices", n, graph.storage());

        let mut dist: DistanceMatrix<W> = Matrix::new(n, None);
        let mut next: Matrix<Option<usize>> = Matrix::new(n, None);
        // Pairs offered a candidate distance too large for `W`
        let mut overflowed = Matrix::new(n, false);
        for i in 0..n {
            for j in 0..n {
                dist[(i, j)] = graph.edge(i, j)?;
                next[(i, j)] = dist[(i, j)].map(|_| j);
            }
            if self.zero_diagonal {
                dist[(i, i)] = Some(W::zero());
                next[(i, i)] = Some(i);
            }
        }

        for k in 0..n {
            trace!("Floyd-Warshall phase {}", k);
            for i in 0..n {
                let dist_ik = dist[(i, k)];
                if dist_ik.is_none() {
                    continue;
                }
                for j in 0..n {
                    let Ok(candidate) = distance::add(dist_ik, dist[(k, j)]) else {
                        overflowed[(i, j)] = true;
                        continue;
                    };
                    if distance::is_shorter(&candidate, &dist[(i, j)]) {
                        dist[(i, j)] = candidate;
                        next[(i, j)] = next[(i, k)];
                    }
                }
            }
        }

        for i in 0..n {
            for j in 0..n {
                if overflowed[(i, j)] && dist[(i, j)].is_none() {
                    return Err(Error::DistanceOverflow { from: i, to: j });
                }
            }
        }

        let reachable = dist.iter().filter(|d| d.is_some()).count();
        debug!("Floyd-Warshall found {} reachable pairs", reachable);

        Ok(AllPairsResult {
            distances: dist,
            next: NextHopMatrix { next },
        })
    }
}
