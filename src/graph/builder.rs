//! Graph construction from edge sources and random generation
//!
//! Builders are the only place where input is validated. Once a
//! [`DenseGraph`] leaves this module it is symmetric, has no self-loops and
//! only references vertices inside its dimension.

use crate::error::{TriangleError, TriangleResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use tricount_algorithms::{DenseGraph, NodeId};

/// Build a graph from pairs of vertex ids, consumed until exhausted.
///
/// Both directed entries are set per pair. Ids outside `0..vertex_count`
/// are rejected with [`TriangleError::MalformedInput`]. Self-loops are
/// dropped and duplicate pairs are idempotent.
pub fn build_from_edge_source<I>(vertex_count: usize, edges: I) -> TriangleResult<DenseGraph>
where
    I: IntoIterator<Item = (NodeId, NodeId)>,
{
    let start = Instant::now();
    let mut graph = DenseGraph::empty(vertex_count);
    let mut self_loops = 0usize;

    for (position, (u, v)) in edges.into_iter().enumerate() {
        for id in [u, v] {
            if id >= vertex_count {
                return Err(TriangleError::MalformedInput(format!(
                    "edge #{} ({}, {}) references vertex {} outside 0..{}",
                    position, u, v, id, vertex_count
                )));
            }
        }
        if u == v {
            self_loops += 1;
            continue;
        }
        graph.insert_edge(u, v);
    }

    if self_loops > 0 {
        debug!("Dropped {} self-loop pairs", self_loops);
    }
    report("Edge source", &graph, start);
    Ok(graph)
}

/// Parse a textual edge list: whitespace-separated integer pairs, one or more
/// per line. Lines starting with `#` or `%` are comments.
pub fn read_edge_list<R: BufRead>(reader: R) -> TriangleResult<Vec<(NodeId, NodeId)>> {
    let mut edges = Vec::new();
    let mut pending: Option<(NodeId, usize)> = None;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            let id: NodeId = token.parse().map_err(|_| {
                TriangleError::MalformedInput(format!(
                    "line {}: '{}' is not a vertex id",
                    line_no, token
                ))
            })?;
            match pending.take() {
                Some((u, _)) => edges.push((u, id)),
                None => pending = Some((id, line_no)),
            }
        }
    }

    if let Some((u, line_no)) = pending {
        return Err(TriangleError::MalformedInput(format!(
            "line {}: vertex {} has no partner before end of input",
            line_no, u
        )));
    }

    Ok(edges)
}

/// Load an edge-list file into a graph with `vertex_count` vertices
pub fn load_edge_list_file<P: AsRef<Path>>(vertex_count: usize, path: P) -> TriangleResult<DenseGraph> {
    let path = path.as_ref();
    info!("Reading edge list from {:?}", path);
    let file = File::open(path)?;
    let edges = read_edge_list(BufReader::new(file))?;
    build_from_edge_source(vertex_count, edges)
}

/// Synthesize a random graph where every pair `i < j` is an edge with
/// probability `density`, using one independent draw per pair.
///
/// The generator is owned by the caller; seed it for reproducible graphs.
pub fn build_random_dense<R: Rng + ?Sized>(
    vertex_count: usize,
    density: f64,
    rng: &mut R,
) -> TriangleResult<DenseGraph> {
    if !density.is_finite() || !(0.0..=1.0).contains(&density) {
        return Err(TriangleError::InvalidArgument(format!(
            "density must be within [0, 1], got {}",
            density
        )));
    }

    let start = Instant::now();
    let mut graph = DenseGraph::empty(vertex_count);
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            let r: f64 = rng.gen();
            if r < density {
                graph.insert_edge(i, j);
            }
        }
    }

    report("Random dense", &graph, start);
    Ok(graph)
}

/// [`build_random_dense`] with a `StdRng` seeded from `seed`
pub fn build_random_dense_seeded(vertex_count: usize, density: f64, seed: u64) -> TriangleResult<DenseGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    build_random_dense(vertex_count, density, &mut rng)
}

fn report(kind: &str, graph: &DenseGraph, start: Instant) {
    info!(
        "{} graph built in {} ms: {} nodes, {} edges, density {:.5}",
        kind,
        start.elapsed().as_millis(),
        graph.node_count(),
        graph.edge_count(),
        graph.density()
    );
}
