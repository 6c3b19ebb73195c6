use serde::Serialize;
use thiserror::Error;

/// Failures surfaced at the engine boundary.
///
/// Every operation validates its preconditions before touching anything a
/// caller can observe, so an `Err` never leaves a structure half-mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A value that the outer parsing layer should have rejected reached
    /// the engine anyway (non-finite weight, ragged matrix, unknown
    /// algorithm name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A start or source node is absent from the graph.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// Bellman-Ford found a cycle of negative total weight reachable from
    /// the source; shortest distances are unbounded below.
    #[error("negative-weight cycle reachable from source")]
    NegativeCycleDetected,

    /// The operation is not defined for this input class.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Non-fatal conditions attached to a run that still produced a result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineWarning {
    /// Dijkstra ran over a graph with a negative edge weight; the reported
    /// distances carry no correctness guarantee.
    #[error("negative edge weight present: shortest distances are not guaranteed")]
    NegativeWeightUnsupported,
}
