use std::env;
use std::fs;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use graph_paths::algorithm::ShortestPathAlgorithm;
use graph_paths::graph::generators::generate_random;
use graph_paths::{DenseGraph, Dijkstra, FloydWarshall, Graph, Selection, SparseGraph};

/// Configuration for the benchmark run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Vertex counts to benchmark
    pub sizes: Vec<usize>,
    /// Average number of edges per vertex
    pub edge_factor: f64,
    /// Edge weights are drawn from `min_weight..max_weight`
    pub min_weight: u64,
    pub max_weight: u64,
    pub seed: u64,
    /// Floyd-Warshall only runs on graphs up to this many vertices
    pub apsp_max_vertices: usize,
    /// Print the summary as JSON instead of a table
    pub json_summary: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1_000, 2_000, 5_000],
            edge_factor: 4.0,
            min_weight: 1,
            max_weight: 100,
            seed: 42,
            apsp_max_vertices: 500,
            json_summary: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct Measurement {
    vertices: usize,
    edges: usize,
    linear_scan_ms: f64,
    heap_ms: f64,
    floyd_warshall_ms: Option<f64>,
    reachable: usize,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn load_config() -> Result<BenchmarkConfig, Box<dyn std::error::Error>> {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let config = serde_json::from_str(&text)?;
            info!("Loaded configuration from {}", path);
            Ok(config)
        }
        None => Ok(BenchmarkConfig::default()),
    }
}

fn measure(
    config: &BenchmarkConfig,
    sparse: &SparseGraph<u64>,
) -> Result<Measurement, Box<dyn std::error::Error>> {
    let dense = DenseGraph::from(sparse);
    let source = 0;

    let linear = Dijkstra::new().with_selection(Selection::LinearScan);
    let start = Instant::now();
    let linear_result = linear.compute_shortest_paths(&dense, source)?;
    let linear_scan = start.elapsed();

    let heap = Dijkstra::new().with_selection(Selection::Heap);
    let start = Instant::now();
    let heap_result = heap.compute_shortest_paths(sparse, source)?;
    let heap_time = start.elapsed();

    if linear_result.distances() != heap_result.distances() {
        warn!(
            "Distance mismatch between linear scan and heap on {} vertices",
            sparse.vertex_count()
        );
    }

    let floyd_warshall_ms = if sparse.vertex_count() <= config.apsp_max_vertices {
        let start = Instant::now();
        FloydWarshall::new().with_zero_diagonal(true).compute(&dense)?;
        Some(millis(start.elapsed()))
    } else {
        None
    };

    Ok(Measurement {
        vertices: sparse.vertex_count(),
        edges: sparse.edge_count(),
        linear_scan_ms: millis(linear_scan),
        heap_ms: millis(heap_time),
        floyd_warshall_ms,
        reachable: heap_result.reachable_count(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = load_config()?;
    info!("Benchmark configuration: {:?}", config);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::new();

    for &size in &config.sizes {
        info!("Generating random graph with {} vertices", size);
        let graph = generate_random(
            &mut rng,
            size,
            config.edge_factor,
            config.min_weight..config.max_weight,
        )?;
        results.push(measure(&config, &graph)?);
    }

    if config.json_summary {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!(
        "{:<10} | {:<10} | {:<15} | {:<10} | {:<15} | {:<10}",
        "Vertices", "Edges", "Linear (ms)", "Heap (ms)", "Floyd (ms)", "Reachable"
    );
    println!("{}", "-".repeat(84));
    for m in &results {
        let floyd = m
            .floyd_warshall_ms
            .map(|ms| format!("{:.2}", ms))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} | {:<10} | {:<15.2} | {:<10.2} | {:<15} | {:<10}",
            m.vertices, m.edges, m.linear_scan_ms, m.heap_ms, floyd, m.reachable
        );
    }

    Ok(())
}
