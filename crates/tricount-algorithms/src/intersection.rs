//! Neighbor intersection primitives
//!
//! The oracle counts the common neighbors of two vertices; the table
//! precomputes it for every pair so repeated counting passes only look it up.

use super::common::{DenseGraph, NodeId};
use ndarray::{Array2, ArrayView1, Zip};
use rayon::prelude::*;

/// Count indices `i` where both rows are set, excluding `a` and `b` themselves.
///
/// O(n) in the row length. Each common neighbor closes one triangle with the
/// pair `(a, b)`.
#[inline]
pub fn common_neighbor_count(
    row_a: ArrayView1<'_, bool>,
    row_b: ArrayView1<'_, bool>,
    a: NodeId,
    b: NodeId,
) -> u32 {
    let mut count = 0;
    Zip::indexed(&row_a).and(&row_b).for_each(|i, &in_a, &in_b| {
        if in_a && in_b && i != a && i != b {
            count += 1;
        }
    });
    count
}

/// Precomputed common-neighbor counts for every vertex pair.
///
/// `get(i, j) == get(j, i)` and the diagonal is zero. The table keeps a copy
/// of the adjacency it was built from so callers can reject a stale table in
/// O(n²), the cost of a single counting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionTable {
    counts: Array2<u32>,
    source: Array2<bool>,
    source_edge_count: usize,
}

impl IntersectionTable {
    /// Evaluate the oracle once per unordered pair `i < j`.
    ///
    /// Rows are distributed over the current rayon pool, one row per task,
    /// since early rows hold more pairs than late ones. Cost is O(n³).
    pub fn precompute(graph: &DenseGraph) -> Self {
        let n = graph.node_count();

        let upper: Vec<Vec<u32>> = (0..n)
            .into_par_iter()
            .with_max_len(1)
            .map(|i| {
                let row_i = graph.row(i);
                ((i + 1)..n)
                    .map(|j| common_neighbor_count(row_i, graph.row(j), i, j))
                    .collect()
            })
            .collect();

        let mut counts = Array2::zeros((n, n));
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, count) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                counts[[i, j]] = count;
                counts[[j, i]] = count;
            }
        }

        Self {
            counts,
            source: graph.matrix().clone(),
            source_edge_count: graph.edge_count(),
        }
    }

    /// Common-neighbor count of `i` and `j`
    #[inline]
    pub fn get(&self, i: NodeId, j: NodeId) -> u32 {
        self.counts[[i, j]]
    }

    /// Dimension of the table
    pub fn node_count(&self) -> usize {
        self.counts.nrows()
    }

    /// Edge count of the graph the table was derived from
    pub fn source_edge_count(&self) -> usize {
        self.source_edge_count
    }

    /// Whether this table was derived from a graph with exactly this adjacency
    pub fn matches(&self, graph: &DenseGraph) -> bool {
        self.source_edge_count == graph.edge_count() && self.source == *graph.matrix()
    }

    /// Check `get(i, j) == get(j, i)` for every pair
    pub fn is_symmetric(&self) -> bool {
        self.counts == self.counts.t()
    }

    /// Raw count matrix
    pub fn counts(&self) -> &Array2<u32> {
        &self.counts
    }
}
