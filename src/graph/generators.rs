use std::ops::Range;

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::graph::{MutableGraph, SparseGraph};
use crate::{Error, Result};

/// Generates a random directed graph with roughly `edge_factor * vertex_count`
/// edges and integer weights drawn from `weights`.
///
/// Self-loops are skipped and a repeated pair keeps its latest weight, so the
/// final edge count can be slightly lower than requested.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    vertex_count: usize,
    edge_factor: f64,
    weights: Range<u64>,
) -> Result<SparseGraph<u64>> {
    if weights.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "weight range {:?} is empty",
            weights
        )));
    }
    if !edge_factor.is_finite() || edge_factor < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "edge factor must be a non-negative number, got {}",
            edge_factor
        )));
    }

    let mut graph = SparseGraph::new(vertex_count)?;
    let num_edges = (edge_factor * vertex_count as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(weights.clone()))?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid where every cell is connected to its
/// eight surrounding cells. Cardinal moves cost 1.0, diagonal moves 1.4.
///
/// Vertex `y * width + x` is the cell at column `x`, row `y`.
pub fn generate_grid(width: usize, height: usize) -> Result<SparseGraph<OrderedFloat<f64>>> {
    let mut graph = SparseGraph::new(width * height)?;

    // (dx, dy, cost): N, E, S, W, then NE, SE, SW, NW
    let directions = [
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost))?;
                }
            }
        }
    }

    Ok(graph)
}
