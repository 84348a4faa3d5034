//! Timed repetitions of a counting run
//!
//! Pool startup and the intersection table, when needed, are handled before
//! the first trial so that only the counting pass is timed.

use super::TriangleCounter;
use crate::config::EngineConfig;
use crate::error::TriangleResult;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;
use tricount_algorithms::{DenseGraph, Strategy};

/// Result of one timed counting pass
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub trial: usize,
    pub threads: usize,
    pub strategy: Strategy,
    pub triangles: u64,
    pub elapsed: Duration,
}

impl TrialReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// All trials for one thread count: one row of the threads × trials matrix
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub threads: usize,
    pub strategy: Strategy,
    pub triangles: u64,
    pub trials: Vec<TrialReport>,
}

impl SweepRow {
    /// Mean elapsed time over the row's trials
    pub fn mean_ms(&self) -> f64 {
        if self.trials.is_empty() {
            return 0.0;
        }
        self.trials.iter().map(TrialReport::elapsed_ms).sum::<f64>() / self.trials.len() as f64
    }
}

fn timed_passes(
    counter: &mut TriangleCounter<'_>,
    strategy: Strategy,
    threads: usize,
    trials: usize,
) -> TriangleResult<Vec<TrialReport>> {
    counter.prepare(strategy, threads)?;

    let mut reports = Vec::with_capacity(trials);
    for trial in 1..=trials {
        let start = Instant::now();
        let triangles = counter.count(strategy, threads)?;
        let elapsed = start.elapsed();

        info!(
            "threads={} trial={} strategy={} triangles={} elapsed={} ms",
            threads,
            trial,
            strategy,
            triangles,
            elapsed.as_millis()
        );
        reports.push(TrialReport {
            trial,
            threads,
            strategy,
            triangles,
            elapsed,
        });
    }
    Ok(reports)
}

/// Run `config.trials` counting passes over `graph` with `config.threads` workers
pub fn run_trials(graph: &DenseGraph, config: &EngineConfig) -> TriangleResult<Vec<TrialReport>> {
    config.validate()?;
    let mut counter = TriangleCounter::new(graph);
    timed_passes(&mut counter, config.strategy, config.threads, config.trials)
}

/// Run `config.trials` passes for every thread count in `config.thread_counts()`.
///
/// The intersection table is built once and shared by every row.
pub fn run_sweep(graph: &DenseGraph, config: &EngineConfig) -> TriangleResult<Vec<SweepRow>> {
    config.validate()?;
    let mut counter = TriangleCounter::new(graph);

    let thread_counts = config.thread_counts();
    let mut rows = Vec::with_capacity(thread_counts.len());
    for threads in thread_counts {
        let trials = timed_passes(&mut counter, config.strategy, threads, config.trials)?;
        let triangles = trials.last().map_or(0, |t| t.triangles);
        rows.push(SweepRow {
            threads,
            strategy: config.strategy,
            triangles,
            trials,
        });
    }
    Ok(rows)
}
