//! Tricount
//!
//! A triangle counting engine for undirected graphs stored as dense
//! adjacency matrices.
//!
//! # Architecture
//!
//! - `tricount-algorithms`: validation-free kernels (node-triple,
//!   edge-intersection, cache-assisted and edge-list counting, each
//!   sequential and rayon-parallel)
//! - [`graph`]: builders that read edge sources or generate random graphs
//!   and reject malformed input
//! - [`algo`]: request validation, worker pool sizing, strategy dispatch and
//!   timed trials
//! - [`config`]: serializable engine settings
//!
//! ## Example Usage
//!
//! ```rust
//! use tricount::{build_from_edge_source, count_triangles, precompute_all, Strategy};
//!
//! // Triangle 0-1-2 with a tail 2-3
//! let graph = build_from_edge_source(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
//!
//! assert_eq!(count_triangles(&graph, Strategy::NodeTriple, 1, None).unwrap(), 1);
//! assert_eq!(count_triangles(&graph, Strategy::EdgeIntersection, 4, None).unwrap(), 1);
//!
//! // Precompute once, reuse for every cache-assisted pass
//! let table = precompute_all(&graph);
//! let count = count_triangles(&graph, Strategy::CacheAssistedEdgeIntersection, 2, Some(&table)).unwrap();
//! assert_eq!(count, 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod graph;

// Re-export main types for convenience
pub use algo::{
    common_neighbor_count, count_triangles, precompute_all, precompute_all_with_threads,
    run_sweep, run_trials, SweepRow, TrialReport, TriangleCounter,
};
pub use config::EngineConfig;
pub use error::{TriangleError, TriangleResult};
pub use graph::{
    build_from_edge_source, build_random_dense, build_random_dense_seeded, load_edge_list_file,
    read_edge_list,
};
pub use tricount_algorithms::{DenseGraph, EdgeList, IntersectionTable, NodeId, Strategy};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
