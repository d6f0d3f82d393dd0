//! Error types for the adjacency-graph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the adjacency-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The handle was not created by this graph.
    #[error("Vertex {0} not found")]
    UnknownVertex(VertexId),

    /// No path connects the two vertices.
    #[error("No path from {from} to {to}")]
    Unreachable { from: VertexId, to: VertexId },

    /// A vertex label given on the command line does not exist.
    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),

    /// An edge argument could not be parsed as `A:B`.
    #[error("Invalid edge spec (expected A:B): {0}")]
    InvalidEdgeSpec(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
