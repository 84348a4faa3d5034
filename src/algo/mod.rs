//! Triangle counting module
//!
//! Kernels live in the `tricount-algorithms` crate. This module is the
//! integration layer: it validates requests, sizes the worker pool and
//! routes each strategy to its sequential or parallel kernel.

pub mod trials;

use crate::error::{TriangleError, TriangleResult};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::Instant;
use tracing::{debug, info};
use tricount_algorithms::{
    count_triangles_cached_par, count_triangles_cached_seq, count_triangles_edge_list_par,
    count_triangles_edge_list_seq, count_triangles_edge_par, count_triangles_edge_seq,
    count_triangles_node_par, count_triangles_node_seq, DenseGraph, IntersectionTable, Strategy,
};

pub use trials::{run_sweep, run_trials, SweepRow, TrialReport};
pub use tricount_algorithms::common_neighbor_count;

fn build_pool(threads: usize) -> TriangleResult<ThreadPool> {
    check_threads(threads)?;
    debug!("Starting worker pool with {} threads", threads);
    Ok(ThreadPoolBuilder::new().num_threads(threads).build()?)
}

fn check_threads(threads: usize) -> TriangleResult<()> {
    if threads == 0 {
        return Err(TriangleError::InvalidArgument(
            "thread count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Precompute the intersection table on the global rayon pool
pub fn precompute_all(graph: &DenseGraph) -> IntersectionTable {
    let start = Instant::now();
    let table = IntersectionTable::precompute(graph);
    info!(
        "All intersection computation: {} ms ({} nodes)",
        start.elapsed().as_millis(),
        graph.node_count()
    );
    table
}

/// Precompute the intersection table on a pool of `threads` workers
pub fn precompute_all_with_threads(graph: &DenseGraph, threads: usize) -> TriangleResult<IntersectionTable> {
    let pool = build_pool(threads)?;
    Ok(pool.install(|| precompute_all(graph)))
}

fn checked_table<'t>(
    graph: &DenseGraph,
    table: Option<&'t IntersectionTable>,
) -> TriangleResult<&'t IntersectionTable> {
    let table = table.ok_or_else(|| {
        TriangleError::Precondition(
            "cache-assisted counting requires a precomputed intersection table".to_string(),
        )
    })?;
    if !table.matches(graph) {
        return Err(TriangleError::Precondition(format!(
            "intersection table ({} nodes, {} edges) was not built from this graph ({} nodes, {} edges)",
            table.node_count(),
            table.source_edge_count(),
            graph.node_count(),
            graph.edge_count()
        )));
    }
    Ok(table)
}

/// Route `strategy` to its kernel: sequential without a pool, parallel on `pool`
fn dispatch(
    graph: &DenseGraph,
    strategy: Strategy,
    table: Option<&IntersectionTable>,
    pool: Option<&ThreadPool>,
) -> TriangleResult<u64> {
    let count = match (strategy, pool) {
        (Strategy::NodeTriple, Some(pool)) => pool.install(|| count_triangles_node_par(graph)),
        (Strategy::NodeTriple, None) => count_triangles_node_seq(graph),
        (Strategy::EdgeIntersection, Some(pool)) => pool.install(|| count_triangles_edge_par(graph)),
        (Strategy::EdgeIntersection, None) => count_triangles_edge_seq(graph),
        (Strategy::CacheAssistedEdgeIntersection, pool) => {
            let table = checked_table(graph, table)?;
            match pool {
                Some(pool) => pool.install(|| count_triangles_cached_par(graph, table)),
                None => count_triangles_cached_seq(graph, table),
            }
        }
        (Strategy::EdgeList, Some(pool)) => {
            pool.install(|| count_triangles_edge_list_par(graph, graph.edge_list()))
        }
        (Strategy::EdgeList, None) => count_triangles_edge_list_seq(graph, graph.edge_list()),
    };
    Ok(count)
}

/// Count the triangles of `graph`.
///
/// `threads == 1` runs the sequential kernel, `threads > 1` the parallel one
/// on a dedicated pool of that size. `table` is required for
/// [`Strategy::CacheAssistedEdgeIntersection`] and ignored otherwise.
/// Repeated calls should go through [`TriangleCounter`], which keeps its pool.
pub fn count_triangles(
    graph: &DenseGraph,
    strategy: Strategy,
    threads: usize,
    table: Option<&IntersectionTable>,
) -> TriangleResult<u64> {
    check_threads(threads)?;
    debug!("Counting triangles: strategy={}, threads={}", strategy, threads);

    if strategy == Strategy::CacheAssistedEdgeIntersection {
        checked_table(graph, table)?;
    }
    let pool = if threads > 1 { Some(build_pool(threads)?) } else { None };
    dispatch(graph, strategy, table, pool.as_ref())
}

/// Counter bound to one graph.
///
/// Builds the intersection table on first cache-assisted use and keeps its
/// worker pool between calls; the pool is only rebuilt when the requested
/// thread count changes.
pub struct TriangleCounter<'g> {
    graph: &'g DenseGraph,
    table: Option<IntersectionTable>,
    pool: Option<ThreadPool>,
}

impl<'g> TriangleCounter<'g> {
    pub fn new(graph: &'g DenseGraph) -> Self {
        Self {
            graph,
            table: None,
            pool: None,
        }
    }

    /// Reuse a table computed elsewhere. Rejected if it does not match the graph.
    pub fn with_table(graph: &'g DenseGraph, table: IntersectionTable) -> TriangleResult<Self> {
        checked_table(graph, Some(&table))?;
        Ok(Self {
            graph,
            table: Some(table),
            pool: None,
        })
    }

    pub fn graph(&self) -> &DenseGraph {
        self.graph
    }

    /// Make sure the owned pool has exactly `threads` workers
    fn ensure_pool(&mut self, threads: usize) -> TriangleResult<&ThreadPool> {
        check_threads(threads)?;
        let stale = self
            .pool
            .as_ref()
            .map_or(true, |pool| pool.current_num_threads() != threads);
        if stale {
            self.pool = Some(build_pool(threads)?);
        }
        self.pool
            .as_ref()
            .ok_or_else(|| TriangleError::InvalidArgument("worker pool unavailable".to_string()))
    }

    /// Size of the pool currently held, if any
    pub fn pool_threads(&self) -> Option<usize> {
        self.pool.as_ref().map(ThreadPool::current_num_threads)
    }

    /// The intersection table, computing it with `threads` workers if missing
    pub fn table(&mut self, threads: usize) -> TriangleResult<&IntersectionTable> {
        if self.table.is_none() {
            let graph = self.graph;
            let table = self.ensure_pool(threads)?.install(|| precompute_all(graph));
            self.table = Some(table);
        }
        self.table
            .as_ref()
            .ok_or_else(|| TriangleError::Precondition("intersection table unavailable".to_string()))
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Set up everything `count` needs for this strategy and thread count,
    /// so that a following `count` only runs the counting pass.
    pub fn prepare(&mut self, strategy: Strategy, threads: usize) -> TriangleResult<()> {
        self.ensure_pool(threads)?;
        if strategy == Strategy::CacheAssistedEdgeIntersection {
            self.table(threads)?;
        }
        Ok(())
    }

    pub fn count(&mut self, strategy: Strategy, threads: usize) -> TriangleResult<u64> {
        self.prepare(strategy, threads)?;
        debug!("Counting triangles: strategy={}, threads={}", strategy, threads);
        let pool = if threads > 1 { self.pool.as_ref() } else { None };
        dispatch(self.graph, strategy, self.table.as_ref(), pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kite() -> DenseGraph {
        DenseGraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)])
    }

    #[test]
    fn test_dispatch_all_strategies() {
        let graph = kite();
        let table = precompute_all(&graph);
        for strategy in Strategy::ALL {
            for threads in [1, 2, 4] {
                let count = count_triangles(&graph, strategy, threads, Some(&table)).unwrap();
                assert_eq!(count, 1, "{} with {} threads", strategy, threads);
            }
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = count_triangles(&kite(), Strategy::NodeTriple, 0, None).unwrap_err();
        assert!(matches!(err, TriangleError::InvalidArgument(_)));

        let err = precompute_all_with_threads(&kite(), 0).unwrap_err();
        assert!(matches!(err, TriangleError::InvalidArgument(_)));

        let graph = kite();
        let mut counter = TriangleCounter::new(&graph);
        let err = counter.count(Strategy::EdgeList, 0).unwrap_err();
        assert!(matches!(err, TriangleError::InvalidArgument(_)));
    }

    #[test]
    fn test_cache_assisted_requires_table() {
        let err = count_triangles(&kite(), Strategy::CacheAssistedEdgeIntersection, 1, None).unwrap_err();
        assert!(matches!(err, TriangleError::Precondition(_)));
    }

    #[test]
    fn test_mismatched_table_rejected() {
        let graph = kite();
        let other = DenseGraph::from_edges(5, &[(0, 1)]);
        let table = precompute_all(&other);

        let err = count_triangles(&graph, Strategy::CacheAssistedEdgeIntersection, 2, Some(&table))
            .unwrap_err();
        assert!(matches!(err, TriangleError::Precondition(_)));
        assert!(TriangleCounter::with_table(&graph, table).is_err());
    }

    #[test]
    fn test_table_from_same_sized_graph_rejected() {
        // Triangle 0-1-2 plus edge 3-4, and the path 0-1-2-3-4: both 5 nodes, 4 edges
        let graph = DenseGraph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (3, 4)]);
        let path = DenseGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let stale = precompute_all(&path);

        for threads in [1, 3] {
            let err = count_triangles(&graph, Strategy::CacheAssistedEdgeIntersection, threads, Some(&stale))
                .unwrap_err();
            assert!(matches!(err, TriangleError::Precondition(_)));
        }
        assert!(TriangleCounter::with_table(&graph, stale).is_err());

        let fresh = precompute_all(&graph);
        let count = count_triangles(&graph, Strategy::CacheAssistedEdgeIntersection, 1, Some(&fresh)).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_counter_builds_table_once() {
        let graph = kite();
        let mut counter = TriangleCounter::new(&graph);
        assert_eq!(counter.count(Strategy::EdgeIntersection, 1).unwrap(), 1);
        assert!(!counter.has_table());

        assert_eq!(counter.count(Strategy::CacheAssistedEdgeIntersection, 2).unwrap(), 1);
        assert!(counter.has_table());
        assert_eq!(counter.count(Strategy::CacheAssistedEdgeIntersection, 1).unwrap(), 1);
    }

    #[test]
    fn test_counter_keeps_pool_until_thread_count_changes() {
        let graph = kite();
        let mut counter = TriangleCounter::new(&graph);
        assert_eq!(counter.pool_threads(), None);

        counter.count(Strategy::NodeTriple, 3).unwrap();
        assert_eq!(counter.pool_threads(), Some(3));
        counter.count(Strategy::EdgeList, 3).unwrap();
        assert_eq!(counter.pool_threads(), Some(3));

        counter.count(Strategy::EdgeIntersection, 2).unwrap();
        assert_eq!(counter.pool_threads(), Some(2));
    }

    #[test]
    fn test_edge_list_strategy_uses_cached_edges() {
        let graph = kite();
        assert_eq!(graph.edge_list().len(), graph.edge_count());
        let mut counter = TriangleCounter::new(&graph);
        for threads in [1, 2] {
            assert_eq!(counter.count(Strategy::EdgeList, threads).unwrap(), 1);
        }
    }
}
