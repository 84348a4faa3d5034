//! Engine configuration

use crate::error::{TriangleError, TriangleResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tricount_algorithms::Strategy;

/// Settings for a counting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Worker count; 1 selects the sequential kernels
    pub threads: usize,
    /// Counting strategy
    pub strategy: Strategy,
    /// Timed repetitions per run
    pub trials: usize,
    /// Seed for random graph generation (None = from entropy)
    pub seed: Option<u64>,
    /// Sweep thread counts `1..=n` instead of running `threads` only
    pub sweep_max_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            strategy: Strategy::EdgeIntersection,
            trials: 2,
            seed: None,
            sweep_max_threads: None,
        }
    }
}

impl EngineConfig {
    /// Load a JSON config; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> TriangleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TriangleResult<()> {
        if self.threads == 0 {
            return Err(TriangleError::InvalidArgument(
                "threads must be at least 1".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(TriangleError::InvalidArgument(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.sweep_max_threads == Some(0) {
            return Err(TriangleError::InvalidArgument(
                "sweep_max_threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Thread counts a run covers: `1..=sweep_max_threads`, or just `threads`
    pub fn thread_counts(&self) -> Vec<usize> {
        match self.sweep_max_threads {
            Some(max) => (1..=max).collect(),
            None => vec![self.threads],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.threads >= 1);
        assert_eq!(config.trials, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"threads": 3, "strategy": "node_triple"}}"#).unwrap();

        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.threads, 3);
        assert_eq!(config.strategy, Strategy::NodeTriple);
        assert_eq!(config.trials, 2);
        assert_eq!(config.seed, None);
        assert_eq!(config.thread_counts(), vec![3]);
    }

    #[test]
    fn test_sweep_thread_counts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sweep_max_threads": 4}}"#).unwrap();
        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.thread_counts(), vec![1, 2, 3, 4]);

        let config = EngineConfig {
            sweep_max_threads: Some(0),
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(TriangleError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"threads": 0}}"#).unwrap();
        let err = EngineConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, TriangleError::InvalidArgument(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"strategy": "bogus"}}"#).unwrap();
        let err = EngineConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, TriangleError::Config(_)));
    }
}
