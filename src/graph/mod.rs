//! Graph construction
//!
//! Builds the dense adjacency matrix consumed by the counters, either from an
//! edge source (pairs or a text edge list) or by random generation at a
//! target density.

pub mod builder;

pub use builder::{
    build_from_edge_source, build_random_dense, build_random_dense_seeded, load_edge_list_file,
    read_edge_list,
};
pub use tricount_algorithms::{DenseGraph, EdgeList, NodeId};
