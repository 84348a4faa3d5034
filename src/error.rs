//! Error types for the triangle counting engine

use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// The counting kernels themselves never fail; every variant here is raised
/// while building a graph or validating a request.
#[derive(Error, Debug)]
pub enum TriangleError {
    /// Edge source references an unknown vertex or is truncated/garbled
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Cache-assisted counting without a table built from the same graph
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Thread count or density outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error while reading an edge source or config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type TriangleResult<T> = Result<T, TriangleError>;
