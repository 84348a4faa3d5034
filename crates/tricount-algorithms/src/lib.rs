pub mod common;
pub mod intersection;
pub mod topology;

pub use common::{DenseGraph, EdgeList, NodeId};
pub use intersection::{common_neighbor_count, IntersectionTable};
pub use topology::{
    count_triangles_cached_par, count_triangles_cached_seq,
    count_triangles_edge_list_par, count_triangles_edge_list_seq, count_triangles_edge_par,
    count_triangles_edge_seq, count_triangles_node_par, count_triangles_node_seq, Strategy,
};
