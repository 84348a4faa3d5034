//! Triangle counting over dense adjacency matrices
//!
//! Three strategies, each with a sequential and a parallel form:
//!
//! - node-triple: every `i < j < k` is checked once, O(n³), no correction
//! - edge-intersection: every edge `(i, j)` adds its common-neighbor count,
//!   O(E·n); each triangle is seen once per edge, so the sum is divided by 3
//! - cache-assisted: as edge-intersection, but the count comes from an
//!   [`IntersectionTable`], O(E) after the precomputation
//!
//! The edge-list variant visits only existing edges instead of scanning all
//! `n²/2` pairs.
//!
//! Parallel forms run on the current rayon pool. The outer loop is split
//! into one task per index so that idle workers steal the expensive rows;
//! partial sums are reduced per worker and merged at the join.

use super::common::{DenseGraph, NodeId};
use super::intersection::{common_neighbor_count, IntersectionTable};
use rayon::prelude::*;

/// Counting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Enumerate all vertex triples
    NodeTriple,
    /// Intersect neighbor rows for every edge
    #[default]
    EdgeIntersection,
    /// Look up precomputed intersections for every edge
    CacheAssistedEdgeIntersection,
    /// Intersect neighbor rows for every edge of an explicit edge list
    EdgeList,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::NodeTriple,
        Strategy::EdgeIntersection,
        Strategy::CacheAssistedEdgeIntersection,
        Strategy::EdgeList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::NodeTriple => "node_triple",
            Strategy::EdgeIntersection => "edge_intersection",
            Strategy::CacheAssistedEdgeIntersection => "cache_assisted_edge_intersection",
            Strategy::EdgeList => "edge_list",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Triangles with smallest vertex `i`
#[inline]
fn node_triples_from(graph: &DenseGraph, i: NodeId) -> u64 {
    let n = graph.node_count();
    let mut count = 0;
    for j in (i + 1)..n {
        if !graph.has_edge(i, j) {
            continue;
        }
        for k in (j + 1)..n {
            if graph.has_edge(j, k) && graph.has_edge(k, i) {
                count += 1;
            }
        }
    }
    count
}

/// Sum of common-neighbor counts over edges `(i, j)` with `j > i`
#[inline]
fn edge_intersections_from(graph: &DenseGraph, i: NodeId) -> u64 {
    let n = graph.node_count();
    let row_i = graph.row(i);
    ((i + 1)..n)
        .filter(|&j| graph.has_edge(i, j))
        .map(|j| common_neighbor_count(row_i, graph.row(j), i, j) as u64)
        .sum()
}

#[inline]
fn cached_intersections_from(graph: &DenseGraph, table: &IntersectionTable, i: NodeId) -> u64 {
    let n = graph.node_count();
    ((i + 1)..n)
        .filter(|&j| graph.has_edge(i, j))
        .map(|j| table.get(i, j) as u64)
        .sum()
}

/// Node-triple enumeration, sequential
pub fn count_triangles_node_seq(graph: &DenseGraph) -> u64 {
    (0..graph.node_count())
        .map(|i| node_triples_from(graph, i))
        .sum()
}

/// Node-triple enumeration, parallel over the smallest vertex
pub fn count_triangles_node_par(graph: &DenseGraph) -> u64 {
    (0..graph.node_count())
        .into_par_iter()
        .with_max_len(1)
        .map(|i| node_triples_from(graph, i))
        .sum()
}

/// Edge-centric neighbor intersection, sequential
pub fn count_triangles_edge_seq(graph: &DenseGraph) -> u64 {
    let raw: u64 = (0..graph.node_count())
        .map(|i| edge_intersections_from(graph, i))
        .sum();
    raw / 3
}

/// Edge-centric neighbor intersection, parallel over the first endpoint
pub fn count_triangles_edge_par(graph: &DenseGraph) -> u64 {
    let raw: u64 = (0..graph.node_count())
        .into_par_iter()
        .with_max_len(1)
        .map(|i| edge_intersections_from(graph, i))
        .sum();
    raw / 3
}

/// Edge-centric counting with precomputed intersections, sequential.
///
/// The table must have been built from `graph`; this is not checked here.
pub fn count_triangles_cached_seq(graph: &DenseGraph, table: &IntersectionTable) -> u64 {
    let raw: u64 = (0..graph.node_count())
        .map(|i| cached_intersections_from(graph, table, i))
        .sum();
    raw / 3
}

/// Edge-centric counting with precomputed intersections, parallel
pub fn count_triangles_cached_par(graph: &DenseGraph, table: &IntersectionTable) -> u64 {
    let raw: u64 = (0..graph.node_count())
        .into_par_iter()
        .with_max_len(1)
        .map(|i| cached_intersections_from(graph, table, i))
        .sum();
    raw / 3
}

/// Neighbor intersection over an explicit edge list, sequential.
///
/// Each undirected edge must appear once. Skips the O(n²) pair scan.
pub fn count_triangles_edge_list_seq(graph: &DenseGraph, edges: &[(NodeId, NodeId)]) -> u64 {
    let raw: u64 = edges
        .iter()
        .map(|&(x, y)| common_neighbor_count(graph.row(x), graph.row(y), x, y) as u64)
        .sum();
    raw / 3
}

/// Neighbor intersection over an explicit edge list, parallel over edges
pub fn count_triangles_edge_list_par(graph: &DenseGraph, edges: &[(NodeId, NodeId)]) -> u64 {
    let raw: u64 = edges
        .par_iter()
        .map(|&(x, y)| common_neighbor_count(graph.row(x), graph.row(y), x, y) as u64)
        .sum();
    raw / 3
}
