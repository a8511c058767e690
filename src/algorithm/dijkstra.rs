use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::distance;
use crate::algorithm::traits::VertexRecord;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeap;
use crate::graph::{Graph, Storage, Weight};
use crate::{Error, Result};

/// How Dijkstra picks the next vertex to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Heap over sparse graphs, linear scan over dense ones
    #[default]
    Auto,
    /// Scan every unsettled vertex, O(V^2) overall
    LinearScan,
    /// Pop the closest vertex from a binary heap, tolerating stale entries
    Heap,
}

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    selection: Selection,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set how the next vertex to settle is selected
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// The configured selection mode
    pub fn selection(&self) -> Selection {
        self.selection
    }

    fn uses_heap(&self, storage: Storage) -> bool {
        match self.selection {
            Selection::Auto => storage == Storage::Sparse,
            Selection::LinearScan => false,
            Selection::Heap => true,
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        graph.check_vertex(source)?;

        let n = graph.vertex_count();
        let use_heap = self.uses_heap(graph.storage());
        debug!(
            "Dijkstra from {} over {} {} vertices ({})",
            source,
            n,
            graph.storage(),
            if use_heap { "heap" } else { "linear scan" }
        );

        let mut search = Search::new(n, source);
        if use_heap {
            search.run_heap(graph, source)?;
        } else {
            search.run_linear_scan(graph)?;
        }

        if let Some(to) = search.first_overflowed() {
            return Err(Error::DistanceOverflow { from: source, to });
        }

        let result = ShortestPathResult::new(source, search.records);
        debug!("Reached {} of {} vertices", result.reachable_count(), n);
        Ok(result)
    }
}

/// Working state of one run
struct Search<W> {
    records: Vec<VertexRecord<W>>,
    settled: Vec<bool>,
    /// Vertices offered a candidate distance too large for `W`
    overflowed: Vec<bool>,
}

impl<W> Search<W>
where
    W: Weight,
{
    fn new(n: usize, source: usize) -> Self {
        let mut records = vec![VertexRecord::new(None, None); n];
        records[source].distance = Some(W::zero());
        Search {
            records,
            settled: vec![false; n],
            overflowed: vec![false; n],
        }
    }

    /// A vertex left unreached only because its distance overflowed `W`
    fn first_overflowed(&self) -> Option<usize> {
        (0..self.records.len())
            .find(|&v| self.overflowed[v] && self.records[v].distance.is_none())
    }

    fn run_linear_scan<G>(&mut self, graph: &G) -> Result<()>
    where
        G: Graph<W> + ?Sized,
    {
        while let Some(closest) = self.closest_unsettled() {
            self.settled[closest] = true;
            self.relax(graph, closest, |_, _| {})?;
        }
        Ok(())
    }

    fn run_heap<G>(&mut self, graph: &G, source: usize) -> Result<()>
    where
        G: Graph<W> + ?Sized,
    {
        // Smallest distance at the root
        let mut queue = BinaryHeap::with_comparer(|a: &(usize, W), b: &(usize, W)| {
            distance::compare(&Some(b.1), &Some(a.1))
        });
        queue.push((source, W::zero()));

        let mut pops = 0usize;
        let mut stale = 0usize;
        while !queue.is_empty() {
            let (u, _) = queue.pop()?;
            pops += 1;

            // A shorter entry for u was popped earlier
            if self.settled[u] {
                stale += 1;
                continue;
            }
            self.settled[u] = true;
            self.relax(graph, u, |v, dist_v| queue.push((v, dist_v)))?;
        }

        debug!("Heap popped {} entries, {} of them stale", pops, stale);
        Ok(())
    }

    /// Unsettled vertex with the smallest finite distance; ties go to the lowest index
    fn closest_unsettled(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (v, record) in self.records.iter().enumerate() {
            if self.settled[v] || record.distance.is_none() {
                continue;
            }
            match best {
                Some(b) if !distance::is_shorter(&record.distance, &self.records[b].distance) => {}
                _ => best = Some(v),
            }
        }
        best
    }

    /// Relaxes every present edge out of `u` toward an unsettled vertex,
    /// reporting each improved vertex and its new distance to `improved`
    fn relax<G, F>(&mut self, graph: &G, u: usize, mut improved: F) -> Result<()>
    where
        G: Graph<W> + ?Sized,
        F: FnMut(usize, W),
    {
        let dist_u = self.records[u].distance;
        for (v, weight) in graph.neighbors(u)? {
            if self.settled[v] {
                continue;
            }
            let Some(weight) = weight else {
                continue;
            };
            if weight < W::zero() {
                return Err(Error::NegativeWeight { from: u, to: v });
            }

            let Ok(candidate) = distance::add(dist_u, Some(weight)) else {
                trace!("Distance overflow on {} -> {}", u, v);
                self.overflowed[v] = true;
                continue;
            };
            if distance::is_shorter(&candidate, &self.records[v].distance) {
                trace!("Relaxed {} -> {}: {:?}", u, v, candidate);
                self.records[v] = VertexRecord::new(candidate, Some(u));
                if let Some(dist_v) = candidate {
                    improved(v, dist_v);
                }
            }
        }
        Ok(())
    }
}
