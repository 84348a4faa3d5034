//! Shared graph representation for the counting kernels
//!
//! Provides a read-only, dense adjacency matrix over vertex ids `0..n`.

use ndarray::{Array2, ArrayView1};

/// Vertex identifier (dense index)
pub type NodeId = usize;

/// An ordered list of undirected edges, each stored once as `(x, y)` with `x < y`.
pub type EdgeList = Vec<(NodeId, NodeId)>;

/// A dense, symmetric adjacency matrix of an undirected graph.
///
/// `adjacency[[i, j]] == adjacency[[j, i]]` for every pair and the diagonal is
/// never set. The edge list is kept alongside the matrix so edge-driven
/// counters never rescan all pairs. Immutable once built; every counter
/// borrows it.
#[derive(Debug, Clone)]
pub struct DenseGraph {
    adjacency: Array2<bool>,
    edges: EdgeList,
}

impl DenseGraph {
    /// Create a graph with `node_count` vertices and no edges
    pub fn empty(node_count: usize) -> Self {
        Self {
            adjacency: Array2::from_elem((node_count, node_count), false),
            edges: Vec::new(),
        }
    }

    /// Create a graph from a square matrix.
    ///
    /// Returns `None` if the matrix is not square. An entry set on either
    /// side of the diagonal becomes an undirected edge; the diagonal is cleared.
    pub fn from_matrix(matrix: Array2<bool>) -> Option<Self> {
        let n = matrix.nrows();
        if matrix.ncols() != n {
            return None;
        }
        let mut graph = Self::empty(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if matrix[[i, j]] || matrix[[j, i]] {
                    graph.insert_edge(i, j);
                }
            }
        }
        Some(graph)
    }

    /// Create a graph from a list of pairs. Pairs must be in range; self-loops are skipped.
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = Self::empty(node_count);
        for &(u, v) in edges {
            graph.insert_edge(u, v);
        }
        graph
    }

    /// Set both directed entries for `(u, v)`.
    ///
    /// Returns `true` when the edge was not present before. Only builders call
    /// this; a finished graph is never mutated.
    pub fn insert_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if u == v || self.adjacency[[u, v]] {
            return false;
        }
        self.adjacency[[u, v]] = true;
        self.adjacency[[v, u]] = true;
        self.edges.push((u.min(v), u.max(v)));
        true
    }

    /// Number of vertices
    pub fn node_count(&self) -> usize {
        self.adjacency.nrows()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Maximum number of undirected edges, `n(n-1)/2`
    pub fn max_edges(&self) -> usize {
        let n = self.node_count();
        n * n.saturating_sub(1) / 2
    }

    /// Ratio of existing edges to the maximum possible edges
    pub fn density(&self) -> f64 {
        match self.max_edges() {
            0 => 0.0,
            max => self.edge_count() as f64 / max as f64,
        }
    }

    /// Whether `u` and `v` are adjacent
    #[inline]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency[[u, v]]
    }

    /// Adjacency row of a vertex
    #[inline]
    pub fn row(&self, idx: NodeId) -> ArrayView1<'_, bool> {
        self.adjacency.row(idx)
    }

    /// Number of neighbors of a vertex
    pub fn degree(&self, idx: NodeId) -> usize {
        self.row(idx).iter().filter(|&&b| b).count()
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &Array2<bool> {
        &self.adjacency
    }

    /// All edges as `(x, y)` with `x < y`, in insertion order
    pub fn edge_list(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Check `adj[i][j] == adj[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        self.adjacency == self.adjacency.t()
    }
}

// Two graphs are equal when their adjacency matches, whatever the insertion order.
impl PartialEq for DenseGraph {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl Eq for DenseGraph {}
